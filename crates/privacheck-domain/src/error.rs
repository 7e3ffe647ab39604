use privacheck_types::{Status, Weighting};

/// Contract violations. None of these are recoverable: the caller passed a value the
/// engine refuses to guess about.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("unknown weighting policy: {0} (expected priority|risk)")]
    UnknownWeighting(String),

    #[error("unknown status '{status}' on check {check_id} (expected pass|warn|fail)")]
    UnknownStatus { check_id: String, status: String },
}

pub fn parse_weighting(v: &str) -> Result<Weighting, EngineError> {
    match v {
        "priority" => Ok(Weighting::Priority),
        "risk" => Ok(Weighting::Risk),
        other => Err(EngineError::UnknownWeighting(other.to_string())),
    }
}

/// Parse a serialized status. `check_id` is only used for the error message.
pub fn parse_status(check_id: &str, v: &str) -> Result<Status, EngineError> {
    match v {
        "pass" => Ok(Status::Pass),
        "warn" => Ok(Status::Warn),
        "fail" => Ok(Status::Fail),
        other => Err(EngineError::UnknownStatus {
            check_id: check_id.to_string(),
            status: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighting_names_round_trip() {
        for w in [Weighting::Priority, Weighting::Risk] {
            assert_eq!(parse_weighting(w.as_str()), Ok(w));
        }
    }

    #[test]
    fn unknown_weighting_is_an_error() {
        let err = parse_weighting("severity").unwrap_err();
        assert_eq!(err, EngineError::UnknownWeighting("severity".to_string()));
        assert!(err.to_string().contains("expected priority|risk"));
    }

    #[test]
    fn unknown_status_names_the_check() {
        let err = parse_status("cookie-policy", "skip").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown status 'skip' on check cookie-policy (expected pass|warn|fail)"
        );
        assert_eq!(parse_status("x", "warn"), Ok(Status::Warn));
    }
}
