use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Abstraction for managing an isolated project directory.
struct ForgeTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl ForgeTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        Ok(Self { _tmp: tmp, root })
    }

    /// Writes a dataforge.yaml with tiny row counts so tests stay fast.
    fn with_config(self, seed: u64) -> Result<Self> {
        let config = format!(
            r#"seed: {seed}
window:
  start: 2022-01-01
  end: 2022-12-31
rows:
  sales: 30
  hr: 10
  finance: 10
  operations: 10
  supply_chain: 10
  fraud: 20
  public_impact: 10
"#
        );
        std::fs::write(self.root.join("dataforge.yaml"), config)?;
        Ok(self)
    }

    fn dataforge(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dataforge"));
        cmd.current_dir(&self.root);
        cmd.env_remove("DATAFORGE_SEED");
        cmd.env_remove("DATAFORGE_OUT_DIR");
        cmd
    }
}

fn first_column(csv: &str, index: usize) -> Vec<String> {
    csv.lines()
        .skip(1)
        .map(|line| line.split(',').nth(index).unwrap_or_default().to_string())
        .collect()
}

fn read_csv(root: &Path, rel: &str) -> Result<String> {
    Ok(std::fs::read_to_string(root.join(rel))?)
}

#[test]
fn test_generate_writes_every_domain() -> Result<()> {
    let env = ForgeTestEnv::new()?.with_config(42)?;

    env.dataforge()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS"));

    for rel in [
        "data/sales/sales_data.csv",
        "data/hr/hr_data.csv",
        "data/finance/finance_data.csv",
        "data/healthcare/operations_data.csv",
        "data/supply_chain/supply_chain_data.csv",
        "data/fraud/fraud_data.csv",
        "data/public_impact/public_impact_data.csv",
        "data/run_summary.json",
    ] {
        assert!(env.root.join(rel).exists(), "missing {rel}");
    }

    // 30 configured sales rows + header line
    let sales = read_csv(&env.root, "data/sales/sales_data.csv")?;
    assert_eq!(sales.lines().count(), 31);
    assert!(sales.starts_with("transaction_id,"));
    assert_eq!(first_column(&sales, 0)[0], "TXN-000001");

    Ok(())
}

#[test]
fn test_generate_is_reproducible_across_processes() -> Result<()> {
    let env_a = ForgeTestEnv::new()?.with_config(42)?;
    let env_b = ForgeTestEnv::new()?.with_config(42)?;

    env_a.dataforge().arg("generate").assert().success();
    env_b.dataforge().arg("generate").assert().success();

    for rel in [
        "data/sales/sales_data.csv",
        "data/fraud/fraud_data.csv",
        "data/public_impact/public_impact_data.csv",
    ] {
        assert_eq!(
            read_csv(&env_a.root, rel)?,
            read_csv(&env_b.root, rel)?,
            "{rel} differs between identical runs"
        );
    }

    Ok(())
}

#[test]
fn test_seed_flag_overrides_config() -> Result<()> {
    let env_a = ForgeTestEnv::new()?.with_config(42)?;
    let env_b = ForgeTestEnv::new()?.with_config(42)?;

    env_a.dataforge().arg("generate").assert().success();
    env_b
        .dataforge()
        .args(["generate", "--seed", "99"])
        .assert()
        .success();

    assert_ne!(
        read_csv(&env_a.root, "data/sales/sales_data.csv")?,
        read_csv(&env_b.root, "data/sales/sales_data.csv")?
    );

    Ok(())
}

#[test]
fn test_env_seed_override() -> Result<()> {
    let env_a = ForgeTestEnv::new()?.with_config(42)?;
    let env_b = ForgeTestEnv::new()?.with_config(42)?;

    env_a.dataforge().arg("generate").assert().success();
    env_b
        .dataforge()
        .arg("generate")
        .env("DATAFORGE_SEED", "7")
        .assert()
        .success();

    assert_ne!(
        read_csv(&env_a.root, "data/fraud/fraud_data.csv")?,
        read_csv(&env_b.root, "data/fraud/fraud_data.csv")?
    );

    Ok(())
}

#[test]
fn test_domain_selection_only_writes_requested() -> Result<()> {
    let env = ForgeTestEnv::new()?.with_config(42)?;

    env.dataforge()
        .args(["generate", "-d", "hr"])
        .assert()
        .success();

    assert!(env.root.join("data/hr/hr_data.csv").exists());
    assert!(!env.root.join("data/sales").exists());

    Ok(())
}

#[test]
fn test_unknown_domain_fails_with_hint() -> Result<()> {
    let env = ForgeTestEnv::new()?.with_config(42)?;

    env.dataforge()
        .args(["generate", "-d", "marketing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown domain"));

    Ok(())
}

#[test]
fn test_invalid_row_count_fails() -> Result<()> {
    let env = ForgeTestEnv::new()?;
    std::fs::write(
        env.root.join("dataforge.yaml"),
        "seed: 42\nrows:\n  sales: 0\n",
    )?;

    env.dataforge()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid row count"));

    Ok(())
}

#[test]
fn test_generate_runs_without_config_file() -> Result<()> {
    // No dataforge.yaml at all: defaults kick in. Keep it to one small
    // domain so the defaults (thousands of rows) stay cheap.
    let env = ForgeTestEnv::new()?;

    env.dataforge()
        .args(["generate", "-d", "hr"])
        .assert()
        .success();

    let hr = read_csv(&env.root, "data/hr/hr_data.csv")?;
    // 1500 default rows + header
    assert_eq!(hr.lines().count(), 1501);

    Ok(())
}

#[test]
fn test_list_shows_all_domains() -> Result<()> {
    let env = ForgeTestEnv::new()?;

    env.dataforge()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("supply_chain"))
        .stdout(predicate::str::contains("public_impact"))
        .stdout(predicate::str::contains("sales/sales_data.csv"));

    Ok(())
}

#[test]
fn test_publish_rejects_missing_workbook() -> Result<()> {
    let env = ForgeTestEnv::new()?;

    env.dataforge()
        .args([
            "publish",
            "missing.twbx",
            "--server",
            "https://bi.example.com",
            "--token-name",
            "ci",
            "--token-value",
            "secret",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workbook not found"));

    Ok(())
}
