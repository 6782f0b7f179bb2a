//! CLI command implementations

use crate::output::{format_catalog, format_report, OutputFormat, RunReport};
use crate::script::{parse_step, Step};
use clipdeck_core::{Catalog, Player, PlayerConfig, RecordingSurface};
use std::path::Path;
use tracing::{info, warn};
use url::Url;

/// Validate a catalog file and list its entries
pub fn catalog(path: &Path, format: &str) -> anyhow::Result<()> {
    info!(path = %path.display(), "Loading catalog");

    let catalog = Catalog::from_path(path)?;
    println!("{}", format_catalog(catalog.entries(), OutputFormat::from(format)));
    Ok(())
}

/// Replay a scripted session against a recording surface
pub fn run(
    catalog_path: Option<&Path>,
    config_path: Option<&Path>,
    base_url: &str,
    steps: &[String],
    reject_fullscreen: bool,
    format: &str,
) -> anyhow::Result<()> {
    let catalog = match catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::sample(&Url::parse(base_url)?)?,
    };
    let config = match config_path {
        Some(path) => PlayerConfig::from_path(path)?,
        None => PlayerConfig::default(),
    };

    // Parse everything up front so a typo fails before anything runs
    let parsed = steps
        .iter()
        .map(|s| parse_step(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let surface = if reject_fullscreen {
        RecordingSurface::rejecting_fullscreen()
    } else {
        RecordingSurface::new()
    };
    let surface = surface.with_autoplay(config.autoplay);

    let mut player = Player::new(catalog, config, surface)?;
    player.mount();

    let mut rejected_steps = Vec::new();
    for (raw, step) in steps.iter().zip(parsed) {
        match step {
            Step::Action(action) => {
                if let Err(e) = player.dispatch(action) {
                    warn!(step = %raw, error = %e, code = e.error_code(), "Step rejected");
                    rejected_steps.push(format!("{}: {}", raw, e));
                }
            }
            Step::Drop { payload, target } => {
                if !player.drop_payload(&payload, target) {
                    rejected_steps.push(format!("{}: drop ignored", raw));
                }
            }
        }
    }

    let report = RunReport {
        snapshot: player.snapshot(),
        calls: player.surface().calls().to_vec(),
        rejected_steps,
    };
    println!(
        "{}",
        format_report(&report, player.playlist().entries(), OutputFormat::from(format))
    );
    Ok(())
}
