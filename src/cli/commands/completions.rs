//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, PowerShell,
//! and elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::RespiraError;

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the shell name is unknown or the generated script
/// is not valid UTF-8.
pub fn completions(shell: &str) -> Result<String, RespiraError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        RespiraError::NotFound(format!(
            "shell '{shell}' (expected bash, zsh, fish, powershell, or elvish)"
        ))
    })?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "respira", &mut buf);
    String::from_utf8(buf).map_err(|e| RespiraError::Config(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
