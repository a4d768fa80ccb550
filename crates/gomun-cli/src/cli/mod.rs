use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `gomun` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gomun",
    version,
    about = "GOMUN - match companies with freelance experts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use gomun_core::Role;
    use pretty_assertions::assert_eq;

    use super::subcommands::{AuthCommands, ExpertCommands, NotificationCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["gomun", "--format", "table", "--verbose", "routes"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Routes));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["gomun", "options", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Options));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["gomun", "--format", "xml", "routes"]).is_err());
    }

    #[test]
    fn login_parses_role() {
        let cli = Cli::try_parse_from([
            "gomun",
            "auth",
            "login",
            "--role",
            "Company",
            "--email",
            "hr@risewave.kr",
            "--password",
            "pw",
        ])
        .expect("cli should parse");

        let Commands::Auth {
            action: AuthCommands::Login(args),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(args.role, Role::Company);
        assert_eq!(args.email, "hr@risewave.kr");
    }

    #[test]
    fn login_rejects_unknown_role() {
        let parsed = Cli::try_parse_from([
            "gomun", "auth", "login", "--role", "admin", "--email", "a@b.kr", "--password", "pw",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn experts_list_offline_flag() {
        let cli = Cli::try_parse_from(["gomun", "experts", "list", "--offline"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Experts {
                action: ExpertCommands::List { offline: true, .. }
            }
        ));
    }

    #[test]
    fn notifications_mark_defaults_to_read() {
        let cli = Cli::try_parse_from(["gomun", "notifications", "mark", "n-1"])
            .expect("cli should parse");
        let Commands::Notifications {
            action: NotificationCommands::Mark { id, unread },
        } = cli.command
        else {
            panic!("expected notifications mark");
        };
        assert_eq!(id, "n-1");
        assert!(!unread);
    }

    #[test]
    fn navigate_takes_a_path() {
        let cli = Cli::try_parse_from(["gomun", "navigate", "/requests/3?tab=info"])
            .expect("cli should parse");
        let Commands::Navigate(args) = cli.command else {
            panic!("expected navigate");
        };
        assert_eq!(args.path, "/requests/3?tab=info");
    }
}
