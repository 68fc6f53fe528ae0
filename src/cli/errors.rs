//! Error display formatting for the CLI.

use crate::constants;
use crate::error::{status_hint, Error};

/// Prints an error message, either as JSON or user-friendly format.
pub fn print_error_with_json(error: &Error, json_format: bool) {
    if !json_format {
        print_error(error);
        return;
    }
    let json_error = error.to_json();
    let Ok(json_output) = serde_json::to_string_pretty(&json_error) else {
        print_error(error);
        return;
    };
    eprintln!("{json_output}");
}

/// Prints a user-friendly error message with a hint where one applies.
pub fn print_error(error: &Error) {
    match error {
        Error::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => {
                eprintln!(
                    "File Not Found\n{io_err}\n\nHint: {}",
                    constants::ERR_FILE_NOT_FOUND
                );
            }
            std::io::ErrorKind::PermissionDenied => {
                eprintln!(
                    "Permission Denied\n{io_err}\n\nHint: {}",
                    constants::ERR_PERMISSION
                );
            }
            _ => eprintln!("File System Error\n{io_err}"),
        },
        Error::Network(req_err) => {
            if req_err.is_connect() {
                eprintln!(
                    "Connection Error\n{req_err}\n\nHint: {}",
                    constants::ERR_CONNECTION
                );
                return;
            }
            if req_err.is_timeout() {
                eprintln!(
                    "Timeout Error\n{req_err}\n\nHint: {}",
                    constants::ERR_TIMEOUT
                );
                return;
            }
            eprintln!("Network Error\n{req_err}");
        }
        Error::Http { status, .. } => {
            let title = match status.as_u16() {
                401 => "Authentication Error",
                403 => "Permission Error",
                404 => "Not Found Error",
                429 => "Rate Limited",
                500..=599 => "Server Error",
                _ => "HTTP Error",
            };
            match status_hint(*status) {
                Some(hint) => eprintln!("{title}\n{error}\n\nHint: {hint}"),
                None => eprintln!("{title}\n{error}"),
            }
        }
        Error::NotAuthenticated | Error::TokenRefresh { .. } => {
            eprintln!(
                "Authentication Error\n{error}\n\nHint: {}",
                constants::ERR_LOGIN_AGAIN
            );
        }
        Error::Yaml(yaml_err) => {
            eprintln!(
                "YAML Parsing Error\n{yaml_err}\n\nHint: {}",
                constants::ERR_YAML_SYNTAX
            );
        }
        Error::Json(json_err) => {
            eprintln!(
                "JSON Parsing Error\n{json_err}\n\nHint: {}",
                constants::ERR_JSON_SYNTAX
            );
        }
        Error::Config(msg) => eprintln!("Configuration Error\n{msg}"),
        Error::InvalidInput(msg) => eprintln!("Invalid Input\n{msg}"),
        Error::HomeDirectoryNotFound => {
            eprintln!("Configuration Error\n{error}\n\nHint: {}", constants::ERR_HOME_DIR);
        }
    }
}
