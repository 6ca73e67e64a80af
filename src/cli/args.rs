use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "respira")]
#[command(about = "A terminal breathing exercise coach")]
#[command(long_about = "respira - guided breathing exercises in your terminal

Pick a technique, follow the phase-by-phase countdown, and track your
cycles. Ships with a small catalog of techniques; add your own in
~/.respira/config.yaml or improvise one with --pattern.

QUICK START:
  respira list                      Show available techniques
  respira start                     Run the first technique on stdout
  respira start 'Four Directions'   Run a technique by name
  respira start --pattern 4-7-8-0 --cycles 4   Run an ad-hoc pattern
  respira tui                       Full-screen guided session

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  respira <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available breathing techniques
    ///
    /// Shows every technique in the catalog: the built-in set plus any
    /// user techniques from ~/.respira/config.yaml. The number shown is
    /// what `show` and `start` accept.
    ///
    /// # Examples
    ///
    ///   respira list              List all techniques
    ///   respira l                 Short alias
    ///   respira list -o json      Output as JSON for scripting
    #[command(alias = "l")]
    List,

    /// Show one technique in detail
    ///
    /// Accepts the catalog number shown by `list` or a case-insensitive
    /// name match. Displays the pattern, cycle count, and the per-phase
    /// instructions.
    ///
    /// # Examples
    ///
    ///   respira show 1
    ///   respira show 'vagal awakening'
    Show {
        /// Technique number (from `list`) or name
        technique: String,
    },

    /// Run a guided session on stdout
    ///
    /// Prints each phase instruction and a one-second countdown, then the
    /// completion summary. With --output json, emits one JSON event per
    /// line instead. Press Ctrl+C to abort. Interactive pause/resume lives
    /// in `respira tui`.
    ///
    /// # Examples
    ///
    ///   respira start                     First catalog technique
    ///   respira start 'Breathing Matrix'  By name
    ///   respira start 2                   By catalog number
    ///   respira start --pattern 4-7-8-0 --cycles 4
    #[command(alias = "s")]
    Start {
        /// Technique number (from `list`) or name
        technique: Option<String>,

        /// Ad-hoc phase pattern: inhale-hold-exhale-pause seconds, e.g. 4-7-8-0
        #[arg(long, short = 'p', conflicts_with = "technique")]
        pattern: Option<String>,

        /// Cycle count for an ad-hoc pattern
        #[arg(long, short = 'c', default_value = "4")]
        cycles: u32,

        /// Display name for an ad-hoc pattern
        #[arg(long, short = 'n', default_value = "Custom")]
        name: String,
    },

    /// Full-screen interactive session
    ///
    /// Technique selection, live countdown, pause/resume, and completion
    /// statistics in a terminal UI.
    ///
    /// Keys: j/k navigate, Enter select, Space start/pause, r reset,
    /// t change technique, n new session, q quit.
    Tui,

    /// Generate shell completions
    ///
    /// Writes a completion script for the given shell to stdout.
    ///
    /// # Examples
    ///
    ///   respira completions zsh > ~/.zsh/completions/_respira
    ///   source <(respira completions bash)
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_list_alias() {
        let cli = parse(&["respira", "l"]);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_default_output_is_pretty() {
        let cli = parse(&["respira", "list"]);
        assert_eq!(cli.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_global_output_flag() {
        let cli = parse(&["respira", "list", "--output", "json"]);
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_show_takes_technique() {
        let cli = parse(&["respira", "show", "vagal awakening"]);
        if let Commands::Show { technique } = cli.command {
            assert_eq!(technique, "vagal awakening");
        } else {
            panic!("expected show command");
        }
    }

    #[test]
    fn test_start_with_pattern() {
        let cli = parse(&["respira", "start", "--pattern", "4-7-8-0", "--cycles", "6"]);
        if let Commands::Start { technique, pattern, cycles, .. } = cli.command {
            assert!(technique.is_none());
            assert_eq!(pattern.as_deref(), Some("4-7-8-0"));
            assert_eq!(cycles, 6);
        } else {
            panic!("expected start command");
        }
    }

    #[test]
    fn test_start_pattern_conflicts_with_technique() {
        assert!(Cli::try_parse_from(["respira", "start", "1", "--pattern", "4-7-8-0"]).is_err());
    }

    #[test]
    fn test_completions_requires_shell() {
        assert!(Cli::try_parse_from(["respira", "completions"]).is_err());
        let cli = parse(&["respira", "completions", "zsh"]);
        assert!(matches!(cli.command, Commands::Completions { .. }));
    }
}
