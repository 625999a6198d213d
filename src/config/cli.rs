use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "scope-registry")]
#[command(about = "Resolve OAuth scopes for Google services and document them")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List known services in presentation order
    Services {
        /// Only services available to individual accounts
        #[arg(long)]
        user: bool,

        /// Print a single comma-separated line
        #[arg(long, conflicts_with = "json")]
        csv: bool,

        /// Print service metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the scopes required by the given services, space separated
    Scopes {
        #[arg(required = true, value_delimiter = ',')]
        services: Vec<String>,

        /// Include the identity scopes (openid, email, userinfo.email)
        #[arg(long)]
        manage: bool,
    },

    /// Print the markdown services table
    Docs,

    /// Print the authorization URL for a client configuration
    AuthUrl {
        /// Path to TOML configuration file
        #[arg(short, long, default_value = "scope-registry.toml")]
        config: PathBuf,

        #[arg(long, default_value = "state")]
        state: String,
    },

    /// Extract code and state from an OAuth redirect URL
    Callback { url: String },
}
