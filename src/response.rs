use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Error code carried by every failure envelope.
pub const API_ERROR_CODE: &str = "API_ERROR";

/// The three read-only resources exposed by the Orchestra public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    PipelineRuns,
    TaskRuns,
    Operations,
}

impl Resource {
    /// Path suffix under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::PipelineRuns => "api/engine/public/pipeline_runs",
            Self::TaskRuns => "api/engine/public/task_runs",
            Self::Operations => "api/engine/public/operations",
        }
    }

    /// Key naming this resource in the failure envelope.
    pub fn key(self) -> &'static str {
        match self {
            Self::PipelineRuns => "pipeline_runs",
            Self::TaskRuns => "task_runs",
            Self::Operations => "operations",
        }
    }
}

/// Offset-style pagination passed through to the API unchanged.
///
/// No bounds are enforced; whatever the caller supplies goes out on the
/// wire verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 100,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    pub(crate) fn query(self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// Outcome of one API operation.
///
/// Operations never return `Err`: transport failures, non-success
/// statuses and undecodable bodies are all normalized into the
/// `Failure` variant at the operation boundary. Callers inspect the
/// variant (or the `error_code` key after [`ApiResponse::into_value`])
/// instead of handling errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The decoded JSON body, exactly as the API returned it.
    Success(Value),
    /// Uniform failure envelope; the originating status code is not
    /// preserved.
    Failure { message: String, resource: Resource },
}

impl ApiResponse {
    pub(crate) fn failure(resource: Resource, message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
            resource,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The success body, if any.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Success(body) => Some(body),
            Self::Failure { .. } => None,
        }
    }

    /// Convert into the wire-compatible mapping.
    ///
    /// Success yields the body unmodified; failure yields
    /// `{"error": .., "error_code": "API_ERROR", "<resource>": []}`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Success(body) => body,
            Self::Failure { message, resource } => {
                let mut map = Map::new();
                map.insert("error".to_owned(), Value::String(message));
                map.insert(
                    "error_code".to_owned(),
                    Value::String(API_ERROR_CODE.to_owned()),
                );
                map.insert(resource.key().to_owned(), Value::Array(Vec::new()));
                Value::Object(map)
            }
        }
    }
}

impl Serialize for ApiResponse {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Success(body) => body.serialize(serializer),
            Self::Failure { message, resource } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("error", message)?;
                map.serialize_entry("error_code", API_ERROR_CODE)?;
                map.serialize_entry(resource.key(), &[(); 0])?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 100);
    }

    #[test]
    fn test_pagination_query_passthrough() {
        let query = Pagination::new(2, 50).query();
        assert_eq!(query[0], ("page", "2".to_string()));
        assert_eq!(query[1], ("per_page", "50".to_string()));
    }

    #[test]
    fn test_success_into_value_is_verbatim() {
        let body = json!({"pipeline_runs": [{"id": 1}]});
        let response = ApiResponse::Success(body.clone());
        assert!(response.is_success());
        assert_eq!(response.into_value(), body);
    }

    #[test]
    fn test_failure_envelope_shape() {
        let response = ApiResponse::failure(Resource::TaskRuns, "connection refused");
        let value = response.into_value();
        assert_eq!(value["error"], "connection refused");
        assert_eq!(value["error_code"], "API_ERROR");
        assert_eq!(value["task_runs"], json!([]));
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_serialize_matches_into_value() {
        let response = ApiResponse::failure(Resource::Operations, "timed out");
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(serialized, response.into_value());
    }

    #[test]
    fn test_resource_paths_and_keys() {
        assert_eq!(
            Resource::PipelineRuns.path(),
            "api/engine/public/pipeline_runs"
        );
        assert_eq!(Resource::TaskRuns.key(), "task_runs");
        assert_eq!(Resource::Operations.key(), "operations");
    }
}
