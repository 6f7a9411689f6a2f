pub type PlayheadResult<T> = Result<T, PlayheadError>;

#[derive(thiserror::Error, Debug)]
pub enum PlayheadError {
    /// Invalid configuration or input data (bad fps, degenerate
    /// interpolation domain, malformed timeline).
    #[error("validation error: {0}")]
    Validation(String),

    /// A node could not be evaluated at the requested time.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Timeline JSON could not be read or written.
    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlayheadError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            PlayheadError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            PlayheadError::evaluation("x")
                .to_string()
                .contains("evaluation error:")
        );
        assert!(
            PlayheadError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = PlayheadError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
