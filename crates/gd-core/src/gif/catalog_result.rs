use serde::{Deserialize, Serialize};

/// Uniform envelope returned by every catalog operation.
///
/// Transport problems never surface as `Err`; they end up here with
/// `succeeded == false` and an `error_message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResult<T> {
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> CatalogResult<T> {
    pub fn success(payload: T) -> Self {
        Self {
            succeeded: true,
            payload: Some(payload),
            error_message: None,
        }
    }

    /// Success without a payload. Callers that need data treat this as a failure.
    pub fn success_empty() -> Self {
        Self {
            succeeded: true,
            payload: None,
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            payload: None,
            error_message: Some(message.into()),
        }
    }

    /// The payload, only when the call succeeded and carried one.
    pub fn accepted(self) -> Option<T> {
        if self.succeeded {
            self.payload
        } else {
            None
        }
    }

    /// Failure text, falling back to `default` when the catalog gave none.
    pub fn message_or(&self, default: &str) -> String {
        self.error_message
            .clone()
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_requires_success_and_payload() {
        assert_eq!(CatalogResult::success(3).accepted(), Some(3));
        assert_eq!(CatalogResult::<i32>::success_empty().accepted(), None);
        assert_eq!(CatalogResult::<i32>::failure("boom").accepted(), None);

        let odd = CatalogResult {
            succeeded: false,
            payload: Some(1),
            error_message: None,
        };
        assert_eq!(odd.accepted(), None);
    }

    #[test]
    fn message_or_prefers_catalog_text() {
        assert_eq!(CatalogResult::<()>::failure("down").message_or("x"), "down");
        assert_eq!(CatalogResult::<()>::success_empty().message_or("x"), "x");
    }
}
