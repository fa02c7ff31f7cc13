use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use dom_slim::cmd;
use dom_slim::config::ThresholdOverrides;
use std::process;

/// DOM structure analyzer
///
/// dom-slim scans the HTML of a page and reports on its structural health:
/// a node/depth census, a 0-100 performance score, and a prioritized list
/// of remediation steps, including page-builder-specific fixes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Threshold overrides shared by the scoring commands
#[derive(Args, Clone, Copy, Default)]
struct ThresholdFlags {
    /// Node count scoring full node points (overrides config)
    #[arg(long, value_name = "N")]
    node_good: Option<u64>,

    /// Node count triggering the steep penalty (overrides config)
    #[arg(long, value_name = "N")]
    node_warning: Option<u64>,

    /// Depth scoring full depth points (overrides config)
    #[arg(long, value_name = "N")]
    depth_good: Option<u32>,

    /// Depth triggering the steep penalty (overrides config)
    #[arg(long, value_name = "N")]
    depth_warning: Option<u32>,
}

impl From<ThresholdFlags> for ThresholdOverrides {
    fn from(flags: ThresholdFlags) -> Self {
        ThresholdOverrides {
            nodes_good: flags.node_good,
            nodes_warning: flags.node_warning,
            depth_good: flags.depth_good,
            depth_warning: flags.depth_warning,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scan HTML files for structural health
    Scan {
        /// HTML files to scan
        #[arg(value_name = "FILE", required = true, num_args = 1..)]
        files: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        thresholds: ThresholdFlags,
    },

    /// Generate a prioritized remediation plan for a page
    Plan {
        /// HTML file to plan fixes for
        #[arg(value_name = "FILE")]
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        thresholds: ThresholdFlags,
    },

    /// Show a depth-limited DOM tree with structural smells flagged
    Tree {
        /// HTML file to inspect
        #[arg(value_name = "FILE")]
        file: String,

        /// Depth limit below <body>
        #[arg(short, long, default_value_t = 5)]
        depth: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two scans (before/after a remediation)
    Compare {
        /// Before file
        before: String,

        /// After file
        after: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        thresholds: ThresholdFlags,
    },

    /// Initialize dom-slim configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Scan {
            files,
            json,
            thresholds,
        }) => cmd::cmd_scan(files, *json, (*thresholds).into()),
        Some(Commands::Plan {
            file,
            json,
            thresholds,
        }) => cmd::cmd_plan(file, *json, (*thresholds).into()),
        Some(Commands::Tree { file, depth, json }) => cmd::cmd_tree(file, *depth, *json),
        Some(Commands::Compare {
            before,
            after,
            json,
            thresholds,
        }) => cmd::cmd_compare(before, after, *json, (*thresholds).into()),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("dom-slim v{}", env!("CARGO_PKG_VERSION"));
            println!("DOM structure analyzer\n");
            println!("Usage: dom-slim <COMMAND>\n");
            println!("Commands:");
            println!("  scan     Scan HTML files for structural health");
            println!("  plan     Generate a prioritized remediation plan");
            println!("  tree     Show a depth-limited DOM tree");
            println!("  compare  Compare two scans");
            println!("  init     Initialize dom-slim configuration");
            println!("\nRun 'dom-slim <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use dom_slim::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }
}
