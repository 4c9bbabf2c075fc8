use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,
    ConfigInvalidValue,

    ValidationInvalidArgument,

    RewritePartialFailure,

    InternalIoError,
    InternalDecodeError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::RewritePartialFailure => "rewrite.partial_failure",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalDecodeError => "internal.decode_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalDecodeErrorDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialFailureDetails {
    pub failed: usize,
    pub files: Vec<String>,
    pub updated: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let details = to_details(ConfigInvalidJsonDetails {
            path: path.into(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            details,
        )
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
    }

    /// A keep-going run finished but some files could not be rewritten.
    /// `updated` lists the files that were rewritten before the run ended.
    pub fn rewrite_partial_failure(files: Vec<String>, updated: Vec<String>) -> Self {
        let failed = files.len();
        let details = to_details(PartialFailureDetails {
            failed,
            files,
            updated,
        });

        Self::new(
            ErrorCode::RewritePartialFailure,
            format!("{} file(s) could not be rewritten", failed),
            details,
        )
        .with_hint("Re-run without --keep-going to stop at the first failure")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_decode(path: impl Into<String>, error: impl Into<String>) -> Self {
        let details = to_details(InternalDecodeErrorDetails {
            path: path.into(),
            error: error.into(),
        });

        Self::new(
            ErrorCode::InternalDecodeError,
            "File is not valid UTF-8",
            details,
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": error.into(),
            "context": context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dotted_and_stable() {
        assert_eq!(ErrorCode::InternalIoError.as_str(), "internal.io_error");
        assert_eq!(ErrorCode::InternalDecodeError.as_str(), "internal.decode_error");
        assert_eq!(
            ErrorCode::RewritePartialFailure.as_str(),
            "rewrite.partial_failure"
        );
    }

    #[test]
    fn internal_io_carries_context() {
        let err = Error::internal_io("denied", Some("write a.txt".to_string()));
        assert_eq!(err.code, ErrorCode::InternalIoError);
        assert_eq!(err.details["error"], "denied");
        assert_eq!(err.details["context"], "write a.txt");
    }

    #[test]
    fn internal_io_omits_missing_context() {
        let err = Error::internal_io("denied", None);
        assert!(err.details.get("context").is_none());
    }

    #[test]
    fn partial_failure_lists_files_and_hints() {
        let err = Error::rewrite_partial_failure(
            vec!["a.txt".to_string(), "b.py".to_string()],
            vec!["c.cpp".to_string()],
        );
        assert_eq!(err.details["failed"], 2);
        assert_eq!(err.details["files"][1], "b.py");
        assert_eq!(err.details["updated"], serde_json::json!(["c.cpp"]));
        assert_eq!(err.hints.len(), 1);
        assert!(err.message.starts_with("2 file(s)"));
    }

    #[test]
    fn display_uses_message() {
        let err = Error::internal_decode("x.txt", "invalid utf-8 sequence");
        assert_eq!(err.to_string(), "File is not valid UTF-8");
    }
}
