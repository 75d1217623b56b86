use anyhow::Context;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ghday_config::GhdayConfig> {
    let config = ghday_config::GhdayConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load ghday configuration")?;

    if !config.github.has_token() {
        tracing::warn!(
            "no GitHub token configured (GITHUB_TOKEN or GHDAY_GITHUB__TOKEN); unauthenticated requests are heavily rate limited"
        );
    }

    Ok(config)
}
