use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    /// The addressed record does not exist; carries nothing beyond the kind.
    #[error("blog not found")]
    NotFound,
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_a_bare_kind() {
        assert_eq!(ServiceError::NotFound.to_string(), "blog not found");
        assert_eq!(ServiceError::validation("x"), ServiceError::Validation("x".into()));
    }
}
