use crate::config::{IdMode, StoreSettings};
use crate::storage::DocumentFormat;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A GraphQL API for books, authors and notes backed by a flat-file document store"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookshelf.toml by default)
    #[arg(long, global = true, env = "BOOKSHELF_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new bookshelf project in the current directory
    Init {
        /// Data directory, relative to the project root
        #[arg(long, default_value_t = StoreSettings::default().path)]
        path: String,

        /// How document IDs are generated
        #[arg(long, value_enum, default_value = "random")]
        id_mode: IdModeArg,

        /// Length of generated IDs
        #[arg(long, default_value_t = StoreSettings::default().id_length)]
        id_length: usize,

        /// Encoding for new documents
        #[arg(long, value_enum, default_value = "yaml")]
        format: FormatArg,
    },

    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IdModeArg {
    Random,
    Sequential,
}

impl From<IdModeArg> for IdMode {
    fn from(arg: IdModeArg) -> Self {
        match arg {
            IdModeArg::Random => IdMode::Random,
            IdModeArg::Sequential => IdMode::Sequential,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Yaml,
    Toml,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => DocumentFormat::Yaml,
            FormatArg::Toml => DocumentFormat::Toml,
        }
    }
}
