pub mod fetch;
pub mod schema;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Fetch(args) => {
            let config = crate::bootstrap::load_config(flags)?;
            fetch::handle(args, flags, &config).await
        }
        Commands::Schema => schema::handle(flags),
    }
}
