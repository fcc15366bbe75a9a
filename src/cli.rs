use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "churn-risk")]
#[command(about = "Heuristic churn-risk scoring for game players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./churn.toml when present)
    #[arg(long, global = true, env = "CHURN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output (overrides config)
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print predictions for the built-in example players (the default)
    Examples,

    /// Score a single player
    Score {
        /// Logins in the last week (clamped to 0-14)
        #[arg(long, allow_negative_numbers = true)]
        logins: i64,

        /// Average daily playtime in minutes (clamped to 0-600)
        #[arg(long, allow_negative_numbers = true)]
        playtime: i64,

        /// Levels gained in the last 7 days (clamped to 0-100)
        #[arg(long, allow_negative_numbers = true)]
        levels: i64,

        /// Character class, e.g. Warrior, Rogue
        #[arg(long = "class", default_value = "")]
        class: String,

        /// Print the full score breakdown instead of the result record
        #[arg(long)]
        explain: bool,
    },

    /// Score JSON-lines player records from a file or stdin
    Batch {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,
    },

    /// List the class groups that adjust the score
    Classes,

    /// Write the effective config to churn.toml
    InitConfig {
        /// Target directory (current directory when omitted)
        dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_examples() {
        let cli = Cli::try_parse_from(["churn-risk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_with_negative_values() {
        let cli = Cli::try_parse_from([
            "churn-risk", "score", "--logins", "-5", "--playtime", "90", "--levels", "4", "--class", "Warrior",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Score { logins, playtime, levels, class, explain }) => {
                assert_eq!((logins, playtime, levels), (-5, 90, 4));
                assert_eq!(class, "Warrior");
                assert!(!explain);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn class_is_optional() {
        let cli = Cli::try_parse_from(["churn-risk", "score", "--logins", "1", "--playtime", "1", "--levels", "1"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Score { ref class, .. }) if class.is_empty()));
    }

    #[test]
    fn init_config_takes_optional_dir() {
        let cli = Cli::try_parse_from(["churn-risk", "init-config", "/tmp/churn"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::InitConfig { dir: Some(ref d) }) if d == &PathBuf::from("/tmp/churn")));

        let cli = Cli::try_parse_from(["churn-risk", "init-config"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::InitConfig { dir: None })));
    }

    #[test]
    fn batch_reads_stdin_without_path() {
        let cli = Cli::try_parse_from(["churn-risk", "batch", "--pretty"]).unwrap();
        assert!(cli.pretty);
        assert!(matches!(cli.command, Some(Commands::Batch { input: None })));
    }
}
