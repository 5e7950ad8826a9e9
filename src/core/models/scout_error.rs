use thiserror::Error;

/// Failures a scout cycle can surface to the user.
///
/// Kept `Clone + PartialEq` so it can travel inside UI messages. Upstream
/// payloads that are missing expected fields are an explicit
/// `MalformedResponse`, never silently defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoutError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for ScoutError {
    fn from(error: reqwest::Error) -> Self {
        ScoutError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(error: serde_json::Error) -> Self {
        ScoutError::MalformedResponse(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let error = ScoutError::MalformedResponse("missing field `results`".to_string());
        assert_eq!(
            error.to_string(),
            "malformed response: missing field `results`"
        );
    }

    #[test]
    fn test_serde_errors_map_to_malformed_response() {
        let parse_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: ScoutError = parse_error.into();

        assert!(matches!(error, ScoutError::MalformedResponse(_)));
    }
}
