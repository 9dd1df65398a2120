//! Command handlers for zenithctl

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use zenith_common::card;
use zenith_common::config::ZenithConfig;
use zenith_common::image_gen::{self, BackendImageGenerator, HttpPoolFetcher};
use zenith_common::pipeline::ZenithPipeline;
use zenith_common::principles::{self, Category, PrincipleItem};
use zenith_common::verdict::VerdictResult;

use crate::display;

pub fn principles(category: Option<Category>, json: bool) -> Result<()> {
    let items = principles::filter(category);
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        display::print_catalog(&items, category);
    }
    Ok(())
}

pub fn show(id: u32) -> Result<()> {
    match PrincipleItem::find(id) {
        Some(p) => display::print_principle(p),
        None => display::print_no_match(id),
    }
    Ok(())
}

pub fn report() -> Result<()> {
    display::print_report();
    Ok(())
}

/// One-shot audit. Empty scenarios never reach the pipeline.
pub fn audit(scenario: &str, json: bool) -> Result<()> {
    let scenario = scenario.trim();
    if scenario.is_empty() {
        println!("{}", "Nothing to audit: scenario is empty.".yellow());
        return Ok(());
    }

    let config = ZenithConfig::load()?;
    let pipeline = ZenithPipeline::new(&config)?;
    let result = run_with_spinner(&pipeline, scenario);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display::print_verdict(&result);
    }
    Ok(())
}

/// Evaluate with a spinner so long upstream calls stay visibly alive.
pub fn run_with_spinner(pipeline: &ZenithPipeline, scenario: &str) -> VerdictResult {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("RUNNING HEURISTICS...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = pipeline.evaluate(scenario);

    spinner.finish_and_clear();
    result
}

/// Export the share card: resolve a visual (generated or archive),
/// rasterize at 2x, write `ZENITH_PRINCIPLE_<id>.png` into `out`.
pub fn share(id: u32, out: &Path, offline: bool) -> Result<()> {
    let Some(principle) = PrincipleItem::find(id) else {
        display::print_no_match(id);
        return Ok(());
    };

    let mut config = ZenithConfig::load()?;
    if offline {
        // Forces the generator down the archive path.
        config.api_key = None;
    }

    let generator = BackendImageGenerator::new(&config)?;
    let fetcher = HttpPoolFetcher::new(config.timeout_secs)?;
    let mut rng = rand::thread_rng();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("GENERATING VISUALS...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let visual =
        image_gen::resolve_card_image(&generator, &fetcher, principle, &mut rng)
            .context("could not resolve a card visual")?;

    spinner.finish_and_clear();
    tracing::debug!("card visual resolved ({} bytes)", visual.bytes.len());

    if visual.from_fallback_pool {
        println!("{}", "ARCHIVE VISUALS LOADED".yellow());
    } else {
        println!("{}", "VISUAL GENERATOR ACTIVE".green());
    }

    // Rasterization failure surfaces once; no automatic retry.
    let png = card::rasterize(&visual.bytes).context("card export failed")?;

    std::fs::create_dir_all(out)
        .with_context(|| format!("could not create {}", out.display()))?;
    let path = out.join(card::export_filename(principle));
    std::fs::write(&path, png).with_context(|| format!("could not write {}", path.display()))?;

    println!("Exported {}", path.display().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use zenith_common::transport::{FakeTransport, TransportError};

    #[test]
    fn spinner_wrapper_passes_the_pipeline_result_through() {
        let pipeline = ZenithPipeline::with_transports(
            vec![Box::new(FakeTransport::always_err(
                "sdk",
                TransportError::EmptyResponse,
            ))],
            Duration::ZERO,
        );
        let result = run_with_spinner(&pipeline, "scenario");
        assert_eq!(result, VerdictResult::offline_fallback());
    }
}
