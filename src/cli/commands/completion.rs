use crate::cli::Cli;
use clap::{Args, CommandFactory};
use clap_complete::Shell;

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` to `out`.
pub fn write_completion(shell: Shell, out: &mut dyn std::io::Write) {
    clap_complete::generate(shell, &mut Cli::command(), "recotem", out);
}

pub fn completion(args: &CompletionArgs) {
    write_completion(args.shell, &mut std::io::stdout());
}

/// `recotem version` output.
#[must_use]
pub fn version_text() -> String {
    format!(
        "recotem version {}\n  target: {}-{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}
