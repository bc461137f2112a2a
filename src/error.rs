/// Settings that cannot produce a card. The UI keeps its start control disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("no vowel pattern selected")]
    NoVowelPattern,
    #[error("no syllable type selected")]
    NoSyllableType,
}

/// Error type for the key-value persistence seam.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
