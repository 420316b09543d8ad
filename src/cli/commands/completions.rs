//! Shell completions command.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::SmarttimeError;

/// Generate a completion script for the named shell.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown shell name.
pub fn completions(shell: &str) -> Result<String, SmarttimeError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        SmarttimeError::InvalidInput(format!(
            "unknown shell '{shell}' (expected bash, zsh, fish, powershell, or elvish)"
        ))
    })?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "smarttime", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| SmarttimeError::InvalidInput(format!("UTF-8 error: {e}")))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_from_str() {
        assert_eq!(shell_from_str("bash"), Some(Shell::Bash));
        assert_eq!(shell_from_str("pwsh"), Some(Shell::PowerShell));
        assert_eq!(shell_from_str("unknown"), None);
    }

    #[test]
    fn test_generate_bash_completions() {
        let script = completions("bash").unwrap();
        assert!(script.contains("smarttime"));
        assert!(script.contains("complete"));
    }

    #[test]
    fn test_unknown_shell_is_an_error() {
        assert!(matches!(
            completions("tcsh"),
            Err(SmarttimeError::InvalidInput(_))
        ));
    }
}
