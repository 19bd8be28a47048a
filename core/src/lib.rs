//! Word definitions backed by a hosted chat model.
//!
//! A word is rendered into a fixed prompt, sent to the model once, and the
//! reply is parsed into categories and a description.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod llm;
pub mod parse;
pub mod prompt;

pub use config::Settings;
pub use dictionary::Definer;
pub use error::DefineError;
pub use llm::{Brain, Completer};
pub use parse::DefinitionResult;
