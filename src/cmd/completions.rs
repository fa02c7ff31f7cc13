//! Completions command implementation
//!
//! Handles the `dom-slim completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// dom-slim completions bash > /etc/bash_completion.d/dom-slim
///
/// # Zsh
/// dom-slim completions zsh > ~/.zfunc/_dom-slim
///
/// # Fish
/// dom-slim completions fish > ~/.config/fish/completions/dom-slim.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    // Re-create the command skeleton here since Cli lives in main.rs.
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("dom-slim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("DOM structure analyzer and bloat remediation advisor")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("scan").about("Scan HTML files for structural health"))
        .subcommand(Command::new("plan").about("Generate a prioritized remediation plan"))
        .subcommand(Command::new("tree").about("Show a depth-limited DOM tree"))
        .subcommand(Command::new("compare").about("Compare two scans"))
        .subcommand(Command::new("init").about("Initialize dom-slim configuration"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "dom-slim".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use clap_complete::Shell;

    #[test]
    fn test_cmd_completions_all_shells_supported() {
        // Verify all major shells are available; if this compiles, the
        // clap_complete surface we rely on is intact.
        let _bash = Shell::Bash;
        let _zsh = Shell::Zsh;
        let _fish = Shell::Fish;
        let _powershell = Shell::PowerShell;
    }
}
