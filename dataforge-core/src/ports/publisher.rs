// dataforge-core/src/ports/publisher.rs

// The outward-facing contract for pushing a packaged workbook to a
// hosted BI server. The port takes an artifact path and a destination;
// it never reads or validates the generated tables.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::DataforgeError;

/// What to publish and where it should land.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// Packaged workbook artifact (e.g. a `.twbx` file).
    pub workbook_path: PathBuf,
    /// Target project; created on the server when missing.
    pub project_name: String,
    /// Site identifier; `None` means the server's default site.
    pub site_id: Option<String>,
}

/// The published artifact as reported back by the server.
#[derive(Debug, Clone)]
pub struct PublishedWorkbook {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[async_trait]
pub trait WorkbookPublisher: Send + Sync {
    async fn publish(&self, request: &PublishRequest)
        -> Result<PublishedWorkbook, DataforgeError>;
}
