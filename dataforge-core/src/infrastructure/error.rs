// dataforge-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PublishError {
    #[error("Authentication failed: {0}")]
    #[diagnostic(
        code(dataforge::infra::publish::auth),
        help("Check the personal access token name/value and the site id.")
    )]
    Authentication(String),

    #[error("Project resolution failed: {0}")]
    #[diagnostic(code(dataforge::infra::publish::project))]
    ProjectResolution(String),

    #[error("Workbook upload failed: {0}")]
    #[diagnostic(
        code(dataforge::infra::publish::upload),
        help("Verify the workbook file exists and the server accepts its format.")
    )]
    Upload(String),

    #[error("HTTP transport error: {0}")]
    #[diagnostic(code(dataforge::infra::publish::transport))]
    Transport(#[from] reqwest::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- PUBLISHING (BI server) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Publish(#[from] PublishError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(dataforge::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CSV OUTPUT ---
    #[error("CSV Writing Error: {0}")]
    #[diagnostic(code(dataforge::infra::csv))]
    Csv(#[from] csv::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(dataforge::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),
}
