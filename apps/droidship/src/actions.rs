//! Action dispatch: asset moves and gradle/adb invocations.

use std::path::Path;

use anyhow::Context;
use droidship_asset_sync::{AssetCategory, CategorySummary, SHADERS, sync_categories};
use droidship_process::{CommandOutput, log_output, run_in_dir};

use crate::cli::Action;
use crate::config::Config;

/// Runs `action` against the project at `root`.
pub async fn dispatch(action: Action, root: &Path, config: &Config) -> anyhow::Result<()> {
    match action {
        Action::Build => build(root, config).await,
        Action::Run => install_and_launch(root, config).await,
        Action::MoveAssets | Action::MoveShaders => move_assets(action, root, config),
    }
}

/// Categories an action copies, in sync order.
pub fn selected_categories(action: Action, categories: &[AssetCategory]) -> Vec<&AssetCategory> {
    match action {
        Action::MoveAssets => categories.iter().collect(),
        Action::MoveShaders => categories.iter().filter(|c| c.name == SHADERS).collect(),
        Action::Build | Action::Run => Vec::new(),
    }
}

fn move_assets(action: Action, root: &Path, config: &Config) -> anyhow::Result<()> {
    let selected = selected_categories(action, &config.categories);
    anyhow::ensure!(
        !selected.is_empty(),
        "no asset categories configured for {action:?}"
    );

    let summaries = sync_categories(root, selected).context("asset sync failed")?;
    log_summary(&summaries);
    Ok(())
}

fn log_summary(summaries: &[CategorySummary]) {
    let (mut copied, mut replaced, mut missing) = (0, 0, 0);
    for summary in summaries {
        match summary.report {
            Some(report) => {
                copied += report.copied;
                replaced += report.replaced;
            }
            None => missing += 1,
        }
    }
    tracing::info!(copied, replaced, missing_sources = missing, "files copied successfully");
}

async fn build(root: &Path, config: &Config) -> anyhow::Result<()> {
    tracing::info!("Android build running, please wait");
    let android_dir = config.android_dir(root);
    run_checked(&config.gradle_command, &android_dir).await?;
    tracing::info!("Android build finished");
    Ok(())
}

async fn install_and_launch(root: &Path, config: &Config) -> anyhow::Result<()> {
    let apk = config.apk_path(root);
    let install = format!("{} install \"{}\"", config.adb, apk.display());
    run_checked(&install, root)
        .await
        .context("APK install failed, not launching")?;

    let launch = format!("{} shell am start -n {}", config.adb, config.component());
    run_checked(&launch, root).await?;
    tracing::info!(component = %config.component(), "application launched");
    Ok(())
}

async fn run_checked(command: &str, dir: &Path) -> anyhow::Result<CommandOutput> {
    let output = run_in_dir(command, dir).await?;
    log_output(&output);
    Ok(output.into_result()?)
}
