use gomun_seed::FormOptions;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `gomun options`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&FormOptions::ALL, flags.format)
}
