use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sessionlog
#[derive(Parser, Debug)]
#[command(
    name = "sessionlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Session log: record completed work/break sessions, show stats, export or clear them",
    long_about = None
)]
pub struct Cli {
    /// Override the settings file (useful for tests or multiple profiles)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override database path
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the settings file and the database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a completed session
    Add {
        /// Session length in seconds (must be > 0)
        #[arg(long = "duration", short = 'd')]
        duration: u64,

        /// Session kind: work, short-break, long-break or any custom label
        #[arg(long = "kind", short = 'k', default_value = "work")]
        kind: String,

        /// End of the session (RFC 3339, "YYYY-MM-DD HH:MM" or epoch ms); defaults to now
        #[arg(long = "at")]
        at: Option<String>,

        /// Extra pass-through field, repeatable (key=value; value parsed as JSON when possible)
        #[arg(long = "meta", value_name = "KEY=VALUE")]
        meta: Vec<String>,
    },

    /// Render the session log panel (badge, stats, recent sessions)
    Show,

    /// Expand the session log panel
    Expand,

    /// Collapse the session log panel
    Collapse,

    /// Enable or disable session logging
    Toggle,

    /// Export the full session log
    Export {
        /// Export format: json, csv
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "json")]
        format: ExportFormat,

        /// Output file or directory (default: session-log-YYYY-MM-DD.<ext> in the current directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Print the artifact to stdout instead of writing a file
        #[arg(long, conflicts_with = "file")]
        stdout: bool,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// Erase every logged session (asks for confirmation)
    Clear {
        /// Do not ask, assume yes
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Print the internal diagnostics log
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
