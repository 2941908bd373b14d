// dataforge-core/src/infrastructure/config.rs
//
// The run configuration surface: root seed, date windows, per-domain
// row counts and the output directory. Loaded from YAML when a config
// file is present, otherwise built from defaults; a couple of
// environment overrides allow CI to retarget a run without editing
// files. Validation is fail-fast and happens before any sampling.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::domain::dates::DateWindow;
use crate::domain::error::DomainError;
use crate::domain::generators::GeneratorContext;
use crate::error::DataforgeError;
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["dataforge.yaml", "dataforge_conf.yaml"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Main reporting window shared by all domains.
    #[serde(default = "default_window")]
    pub window: DateWindow,

    /// HR hires over a longer horizon than the reporting window.
    #[serde(default = "default_hire_start")]
    pub hire_window_start: NaiveDate,

    #[serde(default)]
    pub rows: RowCounts,

    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

/// Per-domain row counts. Kept signed so a negative value in the YAML
/// is caught by validation instead of wrapping silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RowCounts {
    pub sales: i64,
    pub hr: i64,
    pub finance: i64,
    pub operations: i64,
    pub supply_chain: i64,
    pub fraud: i64,
    pub public_impact: i64,
}

impl Default for RowCounts {
    fn default() -> Self {
        Self {
            sales: 5000,
            hr: 1500,
            finance: 2000,
            operations: 3000,
            supply_chain: 2500,
            fraud: 4000,
            public_impact: 1500,
        }
    }
}

impl RowCounts {
    pub fn for_domain(&self, tag: &str) -> Option<i64> {
        match tag {
            "sales" => Some(self.sales),
            "hr" => Some(self.hr),
            "finance" => Some(self.finance),
            "operations" => Some(self.operations),
            "supply_chain" => Some(self.supply_chain),
            "fraud" => Some(self.fraud),
            "public_impact" => Some(self.public_impact),
            _ => None,
        }
    }

    fn all(&self) -> [(&'static str, i64); 7] {
        [
            ("sales", self.sales),
            ("hr", self.hr),
            ("finance", self.finance),
            ("operations", self.operations),
            ("supply_chain", self.supply_chain),
            ("fraud", self.fraud),
            ("public_impact", self.public_impact),
        ]
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            window: default_window(),
            hire_window_start: default_hire_start(),
            rows: RowCounts::default(),
            out_dir: default_out_dir(),
        }
    }
}

impl RunConfig {
    /// Fail-fast validation: positive row counts, ordered windows.
    pub fn validate(&self) -> Result<(), DataforgeError> {
        for (domain, count) in self.rows.all() {
            if count <= 0 {
                return Err(DomainError::InvalidRowCount {
                    domain: domain.to_string(),
                    count,
                }
                .into());
            }
        }
        self.window.validate().map_err(DataforgeError::Domain)?;
        self.hire_window().map_err(DataforgeError::Domain)?;
        Ok(())
    }

    pub fn hire_window(&self) -> Result<DateWindow, DomainError> {
        DateWindow::new(self.hire_window_start, self.window.end)
    }

    pub fn generator_context(&self) -> Result<GeneratorContext, DomainError> {
        Ok(GeneratorContext {
            seed: self.seed,
            window: self.window,
            hire_window: self.hire_window()?,
        })
    }
}

fn default_seed() -> u64 {
    42
}

fn default_window() -> DateWindow {
    DateWindow {
        start: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default(),
        end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
    }
}

fn default_hire_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or_default()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("data")
}

// --- LOADER ---

/// Loads the run config from the project directory, falling back to
/// defaults when no config file exists.
#[instrument(skip(project_dir))]
pub fn load_run_config(project_dir: &Path) -> Result<RunConfig, InfrastructureError> {
    let mut config = match find_config(project_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading run configuration");
            let content = fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&content)?
        }
        None => {
            info!("No run configuration file found, using defaults");
            RunConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

fn apply_env_overrides(config: &mut RunConfig) {
    // Layering pattern: DATAFORGE_SEED=7 dataforge generate ...
    if let Ok(val) = std::env::var("DATAFORGE_SEED") {
        match val.parse::<u64>() {
            Ok(seed) => {
                info!(old = config.seed, new = seed, "Overriding seed via ENV");
                config.seed = seed;
            }
            Err(_) => warn!(value = %val, "Ignoring non-numeric DATAFORGE_SEED"),
        }
    }
    if let Ok(val) = std::env::var("DATAFORGE_OUT_DIR") {
        info!(old = ?config.out_dir, new = %val, "Overriding output directory via ENV");
        config.out_dir = PathBuf::from(val);
    }
}
