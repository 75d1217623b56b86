use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Report a user's GitHub activity for one day.
    Fetch(FetchArgs),
    /// Print the JSON Schema of the report.
    Schema,
}

/// Arguments for `ghday fetch`.
#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    /// Day to report on, as DD-MM-YYYY.
    #[arg(short, long)]
    pub date: String,

    /// GitHub login to report on (defaults to `github.user` from config).
    #[arg(short, long)]
    pub user: Option<String>,
}
