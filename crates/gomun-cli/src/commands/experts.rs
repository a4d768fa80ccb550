use anyhow::Context;
use gomun_core::CoreError;
use gomun_core::entities::Expert;
use gomun_seed::{ExpertRepository, InMemoryExpertRepository, sync_remote_experts};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExpertCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gomun experts`.
pub async fn handle(
    action: &ExpertCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ExpertCommands::List {
            offline,
            region,
            keyword,
        } => {
            let repo = load_directory(ctx, *offline).await?;
            let experts = filter(repo.list(), region.as_deref(), keyword.as_deref());
            output(&experts, flags.format)
        }
        ExpertCommands::Get { id, offline } => {
            let repo = load_directory(ctx, *offline).await?;
            let expert = repo.get(*id).ok_or_else(|| CoreError::NotFound {
                entity_type: "expert".into(),
                id: id.to_string(),
            })?;
            output(&expert, flags.format)
        }
    }
}

/// The built-in directory, merged with the live one when a backend is set.
async fn load_directory(
    ctx: &AppContext,
    offline: bool,
) -> anyhow::Result<InMemoryExpertRepository> {
    let mut repo = InMemoryExpertRepository::seeded();
    if offline {
        return Ok(repo);
    }
    if !ctx.has_api() {
        tracing::warn!("no backend configured; listing built-in experts only");
        return Ok(repo);
    }

    let remote = ctx
        .api()?
        .fetch_experts()
        .await
        .context("failed to fetch experts")?;
    let merged = sync_remote_experts(&mut repo, remote);
    tracing::debug!(count = merged.len(), "merged live experts");
    Ok(repo)
}

fn filter(experts: Vec<Expert>, region: Option<&str>, keyword: Option<&str>) -> Vec<Expert> {
    experts
        .into_iter()
        .filter(|expert| region.is_none_or(|region| expert.region == region))
        .filter(|expert| keyword.is_none_or(|keyword| expert.keywords.iter().any(|k| k == keyword)))
        .collect()
}
