use gomun_core::CoreError;
use gomun_seed::CompanyCatalog;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompanyCommands;
use crate::output::output;

/// Handle `gomun companies`.
pub fn handle(action: &CompanyCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = CompanyCatalog::seeded();
    match action {
        CompanyCommands::List { region: None } => output(&catalog.list(), flags.format),
        CompanyCommands::List {
            region: Some(region),
        } => {
            let companies: Vec<_> = catalog.in_region(region).collect();
            output(&companies, flags.format)
        }
        CompanyCommands::Get { id } => {
            let company = catalog.get(*id).ok_or_else(|| CoreError::NotFound {
                entity_type: "company".into(),
                id: id.to_string(),
            })?;
            output(company, flags.format)
        }
    }
}
