// dataforge/src/commands/publish.rs
//
// USE CASE: Publish a packaged workbook through the publishing port.

use std::path::PathBuf;

use dataforge_core::infrastructure::tableau::TableauPublisher;
use dataforge_core::ports::publisher::{PublishRequest, WorkbookPublisher};

pub async fn execute(
    workbook: PathBuf,
    server: String,
    token_name: String,
    token_value: String,
    site: Option<String>,
    project: String,
) -> anyhow::Result<()> {
    if !workbook.exists() {
        anyhow::bail!(
            "❌ Workbook not found at: {:?}\n👉 Have you packaged the dashboard?",
            workbook
        );
    }

    println!("📤 Publishing {:?} to {}...", workbook, server);

    let publisher = TableauPublisher::new(server, token_name, token_value)?;
    let request = PublishRequest {
        workbook_path: workbook,
        project_name: project,
        site_id: site,
    };

    match publisher.publish(&request).await {
        Ok(published) => {
            println!("✨ Published '{}' (id {})", published.name, published.id);
            println!("   🔗 {}", published.url);
        }
        Err(e) => {
            eprintln!("❌ Publish failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
