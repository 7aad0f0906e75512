// CLI argument parsing structures

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "portal-indexer")]
#[command(about = "Builds the topic and search indexes for a markdown documentation portal")]
#[command(version)]
pub struct Cli {
    /// Defaults to `index` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scan the content root and write the topic and search indexes
    Index,
    /// Search the published index by title or keywords
    Search {
        /// Search query
        query: String,
        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print a topic document
    Get {
        /// Topic slug (directory name)
        slug: String,
        /// Category slug, e.g. runbook; the overview when omitted
        category: Option<String>,
    },
    /// Show a topic's entry in the published index
    Topic {
        /// Topic slug (directory name)
        slug: String,
    },
    /// Show index statistics and artifact digests
    Status {
        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Index)
    }
}

pub fn get_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_log_level() {
        assert_eq!(get_log_level(true), "debug");
        assert_eq!(get_log_level(false), "info");
    }

    #[test]
    fn test_no_arguments_runs_index() {
        let cli = Cli::parse_from(["portal-indexer"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.command_or_default(), Commands::Index);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["portal-indexer", "-v", "--config", "kb.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some("kb.toml".to_string()));

        let cli = Cli::parse_from(["portal-indexer", "search", "dns", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_commands_enum_parsing() {
        let test_cases = vec![
            (vec!["portal-indexer", "index"], "index"),
            (vec!["portal-indexer", "search", "query"], "search"),
            (vec!["portal-indexer", "get", "dns"], "get"),
            (vec!["portal-indexer", "topic", "dns"], "topic"),
            (vec!["portal-indexer", "status"], "status"),
        ];

        for (args, expected_cmd) in test_cases {
            let cli = Cli::parse_from(args);
            match (&cli.command, expected_cmd) {
                (Some(Commands::Index), "index") => {}
                (Some(Commands::Search { .. }), "search") => {}
                (Some(Commands::Get { .. }), "get") => {}
                (Some(Commands::Topic { .. }), "topic") => {}
                (Some(Commands::Status { .. }), "status") => {}
                _ => panic!("Unexpected command type for {expected_cmd}"),
            }
        }
    }

    #[test]
    fn test_command_arguments() {
        let cli = Cli::parse_from(["portal-indexer", "search", "payments", "--limit", "5"]);
        assert_eq!(
            cli.command,
            Some(Commands::Search {
                query: "payments".to_string(),
                limit: Some(5),
            })
        );

        let cli = Cli::parse_from(["portal-indexer", "get", "dns", "runbook"]);
        assert_eq!(
            cli.command,
            Some(Commands::Get {
                slug: "dns".to_string(),
                category: Some("runbook".to_string()),
            })
        );

        let cli = Cli::parse_from(["portal-indexer", "status"]);
        assert_eq!(
            cli.command,
            Some(Commands::Status {
                format: "text".to_string()
            })
        );
    }

    #[test]
    fn test_help_content() {
        use clap::CommandFactory;

        let mut command = Cli::command();
        let help_output = command.render_help().to_string();

        assert!(help_output.contains("documentation portal"));
        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Commands:"));
        assert!(help_output.contains("Options:"));
    }
}
