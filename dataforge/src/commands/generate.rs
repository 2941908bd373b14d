// dataforge/src/commands/generate.rs
//
// USE CASE: Generate the domain datasets.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::{Table, presets::UTF8_FULL};
use dataforge_core::application::{RunReport, run_generation};
use dataforge_core::infrastructure::config::load_run_config;
use tracing::debug;

pub async fn execute(
    project_dir: PathBuf,
    seed: Option<u64>,
    out_dir: Option<PathBuf>,
    domains: Vec<String>,
) -> anyhow::Result<()> {
    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let mut config = load_run_config(&project_dir)
        .with_context(|| format!("Failed to load run configuration from {:?}", project_dir))?;

    // B. CLI overrides win over file and env
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(out_dir) = out_dir {
        config.out_dir = out_dir;
    }
    // A relative out_dir is anchored to the project, not the cwd.
    if config.out_dir.is_relative() {
        config.out_dir = project_dir.join(&config.out_dir);
    }

    debug!(seed = config.seed, out_dir = ?config.out_dir, "Effective configuration");

    let only = if domains.is_empty() {
        None
    } else {
        Some(domains)
    };

    // C. Run the Generation (Application Layer)
    let result = run_generation(&config, only.as_deref()).await;

    match result {
        Ok(report) => {
            print_report(&report);
            if !report.success {
                eprintln!("\n❌ FAILURE. {} domains failed.", report.failed().len());
                std::process::exit(1);
            }
            println!("\n✨ SUCCESS! Datasets written to {:?}", report.out_dir);
        }
        Err(e) => {
            eprintln!("\n💥 CRITICAL GENERATION ERROR: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Domain", "Rows", "Columns", "Bytes", "Time (s)", "Status",
    ]);

    for domain in &report.reports {
        let status = match &domain.error {
            None => "✅ ok".to_string(),
            Some(e) => format!("❌ {}", e),
        };
        table.add_row(vec![
            domain.title.clone(),
            domain.rows.to_string(),
            domain.columns.to_string(),
            domain.bytes.to_string(),
            format!("{:.2}", domain.duration_secs),
            status,
        ]);
    }

    println!("{table}");
}
