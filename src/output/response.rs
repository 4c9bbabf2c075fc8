//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use recase::error::Hint;
use recase::{Error, ErrorCode, Result};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn write_payload(mut handle: impl Write, payload: &str, target: &str) -> Result<()> {
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some(format!("write {}", target)),
        ));
    }
    Ok(())
}

/// Success envelopes go to stdout.
pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    let payload = CliResponse::success(data).to_json()?;
    write_payload(io::stdout().lock(), &payload, "stdout")
}

/// Error envelopes go to stderr so stdout only ever carries results.
pub fn print_error(err: &Error) -> Result<()> {
    let payload = CliResponse::<()>::from_error(err).to_json()?;
    write_payload(io::stderr().lock(), &payload, "stderr")
}

/// A one-line notice, e.g. `Updated: ./a.py`.
pub fn print_notice(line: &str, to_stderr: bool) -> Result<()> {
    if to_stderr {
        write_payload(io::stderr().lock(), line, "stderr")
    } else {
        write_payload(io::stdout().lock(), line, "stdout")
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::RewritePartialFailure => 3,

        ErrorCode::InternalIoError
        | ErrorCode::InternalDecodeError
        | ErrorCode::InternalJsonError => 1,
    }
}
