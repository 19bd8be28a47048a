use serde::{Deserialize, Serialize};

// Input: the word to define
#[derive(Debug, Deserialize)]
pub struct DefineRequest {
    pub word: String,
}

// Output: what we send back on success (re-exported from core so the shape stays in one place)
pub use wordbook_core::DefinitionResult as DefineResponse;

// Output: what we send back on any failure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
