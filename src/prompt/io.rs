use crate::error::Error;
use std::io::{BufRead, IsTerminal, Write};

/// Terminal access used by the login prompts, mockable in tests.
#[cfg_attr(test, mockall::automock)]
pub trait InputOutput {
    fn print(&self, text: &str) -> Result<(), Error>;

    fn flush(&self) -> Result<(), Error>;

    /// Read one line with echo.
    fn read_line(&self) -> Result<String, Error>;

    /// Read one line with terminal echo turned off when stdin is a TTY.
    fn read_secret(&self) -> Result<String, Error>;
}

/// stdin/stdout implementation.
pub struct TerminalIo;

impl InputOutput for TerminalIo {
    fn print(&self, text: &str) -> Result<(), Error> {
        print!("{text}");
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stdout().flush().map_err(Error::Io)
    }

    fn read_line(&self) -> Result<String, Error> {
        read_stdin_line()
    }

    fn read_secret(&self) -> Result<String, Error> {
        read_line_without_echo()
    }
}

fn read_stdin_line() -> Result<String, Error> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Piped input has no echo to hide and is read as a plain line.
fn read_line_without_echo() -> Result<String, Error> {
    if !std::io::stdin().is_terminal() {
        return read_stdin_line();
    }
    Ok(rpassword::read_password()?)
}
