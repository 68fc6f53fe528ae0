//! Interactive prompts for `recotem login`.

pub mod io;

use crate::error::Error;
use io::{InputOutput, TerminalIo};

/// Longest accepted answer.
const MAX_INPUT_LENGTH: usize = 1024;

/// Username and password for a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Fill in whichever of `username` and `password` were not given as flags.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or an answer is invalid.
pub fn login_credentials(
    username: Option<String>,
    password: Option<String>,
) -> Result<LoginCredentials, Error> {
    login_credentials_with_io(username, password, &TerminalIo)
}

/// [`login_credentials`] against an arbitrary terminal.
///
/// # Errors
///
/// Returns an error if `io` fails or an answer is invalid.
pub fn login_credentials_with_io<T: InputOutput>(
    username: Option<String>,
    password: Option<String>,
    io: &T,
) -> Result<LoginCredentials, Error> {
    let username = match username {
        Some(username) => username,
        None => prompt_with_io("Username: ", io, false)?,
    };
    let password = match password {
        Some(password) => password,
        None => prompt_with_io("Password: ", io, true)?,
    };
    Ok(LoginCredentials { username, password })
}

fn prompt_with_io<T: InputOutput>(prompt: &str, io: &T, secret: bool) -> Result<String, Error> {
    io.print(prompt)?;
    io.flush()?;

    let input = if secret {
        io.read_secret()?
    } else {
        io.read_line()?
    };
    // Only the line terminator is stripped; passwords may carry spaces.
    let input = input.trim_end_matches(['\r', '\n']);

    if input.len() > MAX_INPUT_LENGTH {
        return Err(Error::InvalidInput(format!(
            "input too long: {} characters (maximum: {MAX_INPUT_LENGTH})",
            input.len()
        )));
    }
    if input.chars().any(|c| c.is_control() && c != '\t') {
        return Err(Error::InvalidInput(
            "input contains control characters".to_string(),
        ));
    }
    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::io::MockInputOutput;
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_prompts_for_missing_fields() {
        let mut io = MockInputOutput::new();
        io.expect_print()
            .with(eq("Username: "))
            .times(1)
            .returning(|_| Ok(()));
        io.expect_print()
            .with(eq("Password: "))
            .times(1)
            .returning(|_| Ok(()));
        io.expect_flush().times(2).returning(|| Ok(()));
        io.expect_read_line()
            .times(1)
            .returning(|| Ok("alice\n".to_string()));
        io.expect_read_secret()
            .times(1)
            .returning(|| Ok("s3cret pass\r\n".to_string()));

        let creds = login_credentials_with_io(None, None, &io).unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "s3cret pass");
    }

    #[test]
    fn test_flags_skip_prompts() {
        let io = MockInputOutput::new();
        let creds =
            login_credentials_with_io(Some("bob".to_string()), Some("pw".to_string()), &io)
                .unwrap();
        assert_eq!(
            creds,
            LoginCredentials {
                username: "bob".to_string(),
                password: "pw".to_string(),
            }
        );
    }

    #[test]
    fn test_password_is_read_without_echo() {
        let mut io = MockInputOutput::new();
        io.expect_print().returning(|_| Ok(()));
        io.expect_flush().returning(|| Ok(()));
        io.expect_read_line().never();
        io.expect_read_secret()
            .times(1)
            .returning(|| Ok("pw\n".to_string()));

        let creds = login_credentials_with_io(Some("carol".to_string()), None, &io).unwrap();
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn test_secret_without_line_terminator() {
        let mut io = MockInputOutput::new();
        io.expect_print().returning(|_| Ok(()));
        io.expect_flush().returning(|| Ok(()));
        io.expect_read_secret()
            .times(1)
            .returning(|| Ok(" pass word ".to_string()));

        let creds = login_credentials_with_io(Some("dave".to_string()), None, &io).unwrap();
        assert_eq!(creds.password, " pass word ");
    }

    #[test]
    fn test_rejects_control_characters() {
        let mut io = MockInputOutput::new();
        io.expect_print().returning(|_| Ok(()));
        io.expect_flush().returning(|| Ok(()));
        io.expect_read_line()
            .returning(|| Ok("al\u{7}ice\n".to_string()));

        let err = login_credentials_with_io(None, Some("pw".to_string()), &io).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
