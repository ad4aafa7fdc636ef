/// Why a single PubChem lookup produced nothing. Callers collapse every
/// variant into "no data"; the distinction only reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("PubChem unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("PubChem answered with HTTP {0}")]
    Status(u16),
    #[error("PubChem answered with malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("PubChem response has no {0}")]
    MissingField(&'static str),
}

impl LookupError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, LookupError::Transport(_))
    }
}
