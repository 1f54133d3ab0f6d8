use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use templated_texts::composer::{ConsoleComposer, MessageComposer};
use templated_texts::config::Settings;
use templated_texts::contact::GroupId;
use templated_texts::directory::{contacts_or_empty, ContactDirectory, MemoryDirectory};
use templated_texts::dispatch::SendPass;
use templated_texts::template::preview;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Load configuration
    let settings = Settings::new()?;
    tracing::info!("Configuration loaded");

    // Build the contact directory
    let directory = match &settings.directory.contacts_file {
        Some(path) => MemoryDirectory::from_json_file(path)
            .with_context(|| format!("Failed to load contacts from {}", path))?,
        None => MemoryDirectory::with_sample_data(),
    };
    tracing::info!(groups = directory.group_count(), "Contact directory ready");

    // Resolve the group to send to
    let group_id = match &settings.draft.group_id {
        Some(id) => GroupId::new(id.clone()),
        None => {
            let groups = directory.groups().await?;
            let first = groups.first().context("Directory has no groups")?;
            tracing::info!(group = %first.id, name = %first.name, "No group configured, using first");
            first.id.clone()
        }
    };

    let contacts = contacts_or_empty(&directory, &group_id).await;
    tracing::info!(
        group = %group_id,
        contacts = contacts.len(),
        preview = %preview(&settings.draft.template, &contacts),
        "Starting send pass"
    );

    // Wire up the composer
    let composer: Arc<dyn MessageComposer> = match settings.composer.kind.as_str() {
        "console" => Arc::new(ConsoleComposer::with_delay(settings.composer.delay_ms)),
        other => anyhow::bail!("Unknown composer kind: {}", other),
    };

    // Run the pass
    let mut pass = SendPass::new(settings.draft.template.clone(), contacts, composer);
    let report = pass.run().await;

    tracing::info!(
        sent = report.sent,
        cancelled = report.cancelled,
        failed = report.failed,
        errors = report.errors,
        skipped = report.skipped,
        total = report.total,
        "Send pass finished"
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
