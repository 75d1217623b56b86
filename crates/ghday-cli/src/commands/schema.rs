use ghday_core::Report;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `ghday schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schemars::schema_for!(Report), flags.format)
}
