//! Settlement outcomes of the batch creation call

use crate::models::{ImportResource, ImportStatus};

/// Number of leading characters removed from a rejection reason
///
/// Rejection reasons start with an `"Error NNN: "` prefix (see
/// [`rejection_reason`]); the row message replaces it with a plain `"Error: "`.
/// This is a fixed trim, not a parse: a reason in any other format loses its
/// first eleven characters all the same.
pub const REJECTION_PREFIX_LEN: usize = 11;

/// Outcome of creating one resource
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    Fulfilled(ImportResource),
    Rejected(String),
}

impl Settlement {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Settlement::Fulfilled(_))
    }
}

/// Format a rejection reason as `"Error NNN: message"`
///
/// `code` is the HTTP status returned by the API server, or 0 when the request
/// never got a response. It is zero-padded to three digits so the prefix is
/// always [`REJECTION_PREFIX_LEN`] characters long.
pub fn rejection_reason(code: u16, message: &str) -> String {
    format!("Error {:03}: {}", code, message)
}

/// Map a settlement outcome to the status shown for its row
pub fn status_from_settlement(settlement: Settlement) -> ImportStatus {
    match settlement {
        Settlement::Fulfilled(result) => ImportStatus::Created { result },
        Settlement::Rejected(reason) => {
            let detail: String = reason.chars().skip(REJECTION_PREFIX_LEN).collect();
            ImportStatus::Failed {
                message: format!("Error: {}", detail),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    #[test]
    fn test_fulfilled_maps_to_created() {
        let resource = ImportResource::new("v1", "Namespace", ObjectMeta::default());
        let status = status_from_settlement(Settlement::Fulfilled(resource.clone()));
        assert_eq!(status, ImportStatus::Created { result: resource });
        assert_eq!(status.message(), "Created");
    }

    #[test]
    fn test_rejected_strips_prefix() {
        let status = status_from_settlement(Settlement::Rejected("Error 409: boom".to_string()));
        assert!(status.error());
        assert_eq!(status.message(), "Error: boom");
    }

    #[test]
    fn test_rejection_reason_prefix_length() {
        for code in [0, 7, 404, 500] {
            let reason = rejection_reason(code, "detail");
            let status = status_from_settlement(Settlement::Rejected(reason));
            assert_eq!(status.message(), "Error: detail");
        }
    }

    #[test]
    fn test_short_reason_yields_empty_detail() {
        let status = status_from_settlement(Settlement::Rejected("oops".to_string()));
        assert_eq!(status.message(), "Error: ");
    }

    #[test]
    fn test_trim_counts_characters() {
        let status =
            status_from_settlement(Settlement::Rejected("Érror 409: naïve".to_string()));
        assert_eq!(status.message(), "Error: naïve");
    }
}
