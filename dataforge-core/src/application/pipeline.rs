// dataforge-core/src/application/pipeline.rs

use std::path::{Path, PathBuf};
use std::time::Instant;

use futures::StreamExt;
use tracing::instrument;

use crate::application::registry::DatasetRegistry;
use crate::domain::dataset::Dataset;
use crate::domain::error::DomainError;
use crate::domain::generators::{DomainGenerator, GeneratorContext};
use crate::error::DataforgeError;
use crate::infrastructure::config::RunConfig;
use crate::infrastructure::csv::write_dataset;

// Bounded concurrency for the generation fan-out. The generators are
// CPU-bound, so more than a handful buys nothing.
const MAX_CONCURRENT_DOMAINS: usize = 4;

/// Outcome of one domain inside a run. An `error` leaves the numeric
/// fields at zero; the run keeps going for the other domains.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct DomainReport {
    pub domain: String,
    pub title: String,
    pub output_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub bytes: u64,
    pub duration_secs: f64,
    pub error: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RunReport {
    pub success: bool,
    pub seed: u64,
    pub out_dir: PathBuf,
    pub reports: Vec<DomainReport>,
    pub duration_secs: f64,
}

impl RunReport {
    pub fn total_rows(&self) -> usize {
        self.reports.iter().map(|r| r.rows).sum()
    }

    pub fn failed(&self) -> Vec<&DomainReport> {
        self.reports.iter().filter(|r| r.error.is_some()).collect()
    }
}

/// Generates every selected domain under `config.out_dir`, in parallel,
/// and writes a `run_summary.json` next to the data. One failing domain
/// never blocks the others; `success` reflects the whole batch.
#[instrument(skip(config, only), fields(seed = config.seed))]
pub async fn run_generation(
    config: &RunConfig,
    only: Option<&[String]>,
) -> Result<RunReport, DataforgeError> {
    println!("🚀 Starting Dataset Generation...");
    let start_time = Instant::now();

    // 1. SETUP (validate first, touch the filesystem second)
    config.validate()?;
    let ctx = config.generator_context()?;
    let out_dir = config.out_dir.clone();
    if !out_dir.exists() {
        std::fs::create_dir_all(&out_dir)?;
    }

    // 2. SELECTION (Domain registry, fixed order)
    // Row counts come from the config alone; the registry only names the
    // domains.
    let generators = DatasetRegistry::standard().select(only)?;
    let mut plan = Vec::with_capacity(generators.len());
    for generator in generators {
        let rows = config
            .rows
            .for_domain(generator.tag())
            .ok_or_else(|| DomainError::UnknownDomain(generator.tag().to_string()))?;
        plan.push((generator, rows as usize));
    }
    println!(
        "📝 Execution Plan: {} domains, seed {}",
        plan.len(),
        config.seed
    );

    // 3. PARALLEL FAN-OUT
    // Each domain owns its seeded stream, so ordering is irrelevant to
    // the output; only the report order has to stay stable.
    println!("🟢 Generating Domains...");
    let tasks = plan.into_iter().enumerate().map(|(index, (generator, rows))| {
        let out_dir = out_dir.clone();
        async move {
            let report = generate_domain(generator, rows, &ctx, &out_dir).await;
            (index, report)
        }
    });

    let mut indexed: Vec<(usize, DomainReport)> = futures::stream::iter(tasks)
        .buffer_unordered(MAX_CONCURRENT_DOMAINS)
        .collect()
        .await;
    indexed.sort_by_key(|(index, _)| *index);

    let reports: Vec<DomainReport> = indexed.into_iter().map(|(_, report)| report).collect();
    for report in &reports {
        match &report.error {
            None => println!(
                "    ✅ {} — {} rows -> {:?} ({} bytes)",
                report.title, report.rows, report.output_path, report.bytes
            ),
            Some(e) => eprintln!("    ❌ {} failed: {}", report.title, e),
        }
    }

    // 4. FINALIZE
    let duration = start_time.elapsed();
    let report = RunReport {
        success: reports.iter().all(|r| r.error.is_none()),
        seed: config.seed,
        out_dir: out_dir.clone(),
        reports,
        duration_secs: duration.as_secs_f64(),
    };

    save_json(&out_dir.join("run_summary.json"), &report)?;

    println!(
        "✨ Done in {:.2}s. Generated {} rows across {} domains.",
        report.duration_secs,
        report.total_rows(),
        report.reports.len()
    );

    Ok(report)
}

/// Generate one domain and persist it. Sampling runs on the blocking
/// pool; the async side only does the fan-out bookkeeping.
async fn generate_domain(
    generator: Box<dyn DomainGenerator>,
    rows: usize,
    ctx: &GeneratorContext,
    out_dir: &Path,
) -> DomainReport {
    let tag = generator.tag();
    let title = generator.title();
    let output_path = out_dir.join(generator.output_file());
    let start = Instant::now();

    let outcome = build_and_write(generator, rows, *ctx, &output_path).await;

    let mut report = DomainReport {
        domain: tag.to_string(),
        title: title.to_string(),
        output_path,
        rows: 0,
        columns: 0,
        bytes: 0,
        duration_secs: start.elapsed().as_secs_f64(),
        error: None,
    };

    match outcome {
        Ok((dataset, bytes)) => {
            report.rows = dataset.row_count();
            report.columns = dataset.column_count();
            report.bytes = bytes;
        }
        Err(e) => report.error = Some(e.to_string()),
    }

    report
}

async fn build_and_write(
    generator: Box<dyn DomainGenerator>,
    rows: usize,
    ctx: GeneratorContext,
    output_path: &Path,
) -> Result<(Dataset, u64), DataforgeError> {
    let dataset = tokio::task::spawn_blocking(move || generator.generate(rows, &ctx))
        .await
        .map_err(|e| DataforgeError::InternalError(format!("Generation task aborted: {e}")))??;

    let bytes = write_dataset(output_path, &dataset)?;
    Ok((dataset, bytes))
}

fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), DataforgeError> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| DataforgeError::InternalError(format!("Serialization: {}", e)))?;
    crate::infrastructure::fs::atomic_write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::RunConfig;

    fn test_config(out_dir: &Path) -> RunConfig {
        let mut config = RunConfig::default();
        config.seed = 7;
        config.out_dir = out_dir.to_path_buf();
        config.rows.sales = 40;
        config.rows.hr = 10;
        config.rows.finance = 10;
        config.rows.operations = 10;
        config.rows.supply_chain = 10;
        config.rows.fraud = 20;
        config.rows.public_impact = 10;
        config
    }

    #[tokio::test]
    async fn test_run_generation_writes_all_domains() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let report = run_generation(&config, None).await.unwrap();

        assert!(report.success);
        assert_eq!(report.reports.len(), 7);
        assert_eq!(report.total_rows(), 110);
        for domain in &report.reports {
            assert!(domain.error.is_none(), "{} failed", domain.domain);
            assert!(domain.output_path.exists(), "{:?} missing", domain.output_path);
            assert!(domain.bytes > 0);
        }
        assert!(dir.path().join("run_summary.json").exists());
    }

    #[tokio::test]
    async fn test_run_generation_is_reproducible() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();

        run_generation(&test_config(dir_a.path()), None).await.unwrap();
        run_generation(&test_config(dir_b.path()), None).await.unwrap();

        let csv_a = std::fs::read_to_string(dir_a.path().join("sales/sales_data.csv")).unwrap();
        let csv_b = std::fs::read_to_string(dir_b.path().join("sales/sales_data.csv")).unwrap();
        assert_eq!(csv_a, csv_b);
    }

    #[tokio::test]
    async fn test_domain_selection() {
        let dir = tempfile::tempdir().unwrap();
        let only = vec!["hr".to_string()];

        let report = run_generation(&test_config(dir.path()), Some(&only))
            .await
            .unwrap();

        assert_eq!(report.reports.len(), 1);
        assert_eq!(report.reports[0].domain, "hr");
        assert!(dir.path().join("hr/hr_data.csv").exists());
        assert!(!dir.path().join("sales").exists());
    }

    #[tokio::test]
    async fn test_unknown_domain_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let only = vec!["marketing".to_string()];

        let err = run_generation(&test_config(dir.path()), Some(&only)).await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn test_seed_changes_the_files() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let mut config_b = test_config(dir_b.path());
        config_b.seed = 8;

        run_generation(&test_config(dir_a.path()), None).await.unwrap();
        run_generation(&config_b, None).await.unwrap();

        let csv_a = std::fs::read_to_string(dir_a.path().join("fraud/fraud_data.csv")).unwrap();
        let csv_b = std::fs::read_to_string(dir_b.path().join("fraud/fraud_data.csv")).unwrap();
        assert_ne!(csv_a, csv_b);
    }
}
