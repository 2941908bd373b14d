// dataforge/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dataforge")]
#[command(about = "Reproducible tabular fixture-data synthesizer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🎲 Generates the domain datasets (CSV files + run summary)
    Generate {
        /// Project directory (location of dataforge.yaml)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Root seed override (wins over config file and env)
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory override
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Generate only these domains (repeatable, ex: -d sales -d fraud)
        #[arg(long = "domain", short = 'd')]
        domains: Vec<String>,
    },

    /// 📋 Lists the available domains and their defaults
    List,

    /// 📤 Publishes a packaged workbook to a Tableau server
    Publish {
        /// Path to the .twbx workbook
        workbook: PathBuf,

        /// Server base URL (ex: https://bi.example.com)
        #[arg(long)]
        server: String,

        /// Personal access token name
        #[arg(long, env = "TABLEAU_TOKEN_NAME")]
        token_name: String,

        /// Personal access token secret
        #[arg(long, env = "TABLEAU_TOKEN_VALUE", hide_env_values = true)]
        token_value: String,

        /// Site content URL (empty = default site)
        #[arg(long)]
        site: Option<String>,

        /// Target project name (created when missing)
        #[arg(long, default_value = "Enterprise Analytics")]
        project: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_generate_defaults() -> Result<()> {
        let args = Cli::parse_from(["dataforge", "generate"]);
        match args.command {
            Commands::Generate {
                project_dir,
                seed,
                out_dir,
                domains,
            } => {
                assert_eq!(project_dir.to_string_lossy(), ".");
                assert_eq!(seed, None);
                assert_eq!(out_dir, None);
                assert!(domains.is_empty());
                Ok(())
            }
            _ => bail!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_parse_generate_overrides() -> Result<()> {
        let args = Cli::parse_from([
            "dataforge",
            "generate",
            "--seed",
            "123",
            "--out-dir",
            "/tmp/out",
            "-d",
            "sales",
            "-d",
            "fraud",
        ]);
        match args.command {
            Commands::Generate { seed, out_dir, domains, .. } => {
                assert_eq!(seed, Some(123));
                assert_eq!(out_dir, Some(PathBuf::from("/tmp/out")));
                assert_eq!(domains, vec!["sales".to_string(), "fraud".to_string()]);
                Ok(())
            }
            _ => bail!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_parse_publish() -> Result<()> {
        let args = Cli::parse_from([
            "dataforge",
            "publish",
            "dashboard.twbx",
            "--server",
            "https://bi.example.com",
            "--token-name",
            "ci",
            "--token-value",
            "s3cret",
        ]);
        match args.command {
            Commands::Publish {
                workbook,
                server,
                project,
                site,
                ..
            } => {
                assert_eq!(workbook, PathBuf::from("dashboard.twbx"));
                assert_eq!(server, "https://bi.example.com");
                assert_eq!(project, "Enterprise Analytics");
                assert_eq!(site, None);
                Ok(())
            }
            _ => bail!("Expected Publish command"),
        }
    }
}
