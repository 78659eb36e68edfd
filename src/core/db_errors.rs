//! Classification of errors raised by the schedule creation function.
//!
//! The function rejects a domain-rule violation by raising SQLSTATE
//! `P0001` with a message tagged `SCHEDULE_CONFLICT`. Everything else
//! coming back from that call is an unexpected database failure.

pub const BUSINESS_RULE_CODE: &str = "P0001";
pub const SCHEDULE_CONFLICT_TAG: &str = "SCHEDULE_CONFLICT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcedureError {
    /// Domain rejection from the function, message passed through verbatim.
    BusinessRule(String),
    /// Any other failure during the call.
    Database(String),
}

pub fn classify_code_message(code: Option<&str>, message: &str) -> ProcedureError {
    if code == Some(BUSINESS_RULE_CODE) && message.contains(SCHEDULE_CONFLICT_TAG) {
        ProcedureError::BusinessRule(message.to_string())
    } else {
        ProcedureError::Database(message.to_string())
    }
}

pub fn classify_sqlx_error(err: &sqlx::Error) -> ProcedureError {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.to_string());
            classify_code_message(code.as_deref(), db_err.message())
        }
        other => ProcedureError::Database(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_code_message, ProcedureError};

    #[test]
    fn test_classify_conflict_code_with_tag() {
        let res = classify_code_message(
            Some("P0001"),
            "SCHEDULE_CONFLICT: group 1 already has a lesson on 2025-03-03 at position 2",
        );
        assert_eq!(
            res,
            ProcedureError::BusinessRule(
                "SCHEDULE_CONFLICT: group 1 already has a lesson on 2025-03-03 at position 2"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_classify_conflict_code_without_tag() {
        let res = classify_code_message(Some("P0001"), "some other raise");
        assert_eq!(res, ProcedureError::Database("some other raise".to_string()));
    }

    #[test]
    fn test_classify_other_code() {
        let res = classify_code_message(
            Some("23503"),
            "insert or update on table \"schedule_item\" violates foreign key constraint",
        );
        assert!(matches!(res, ProcedureError::Database(_)));
    }

    #[test]
    fn test_classify_no_code() {
        let res = classify_code_message(None, "SCHEDULE_CONFLICT: tag without code");
        assert!(matches!(res, ProcedureError::Database(_)));
    }
}
