// dataforge/src/commands/list.rs
//
// USE CASE: Show the available domains and their defaults.

use comfy_table::{Table, presets::UTF8_FULL};
use dataforge_core::application::DatasetRegistry;

pub fn execute() -> anyhow::Result<()> {
    let registry = DatasetRegistry::standard();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Tag", "Domain", "Default Rows", "Output File"]);

    for tag in registry.tags() {
        if let Some(generator) = registry.get(tag) {
            table.add_row(vec![
                generator.tag().to_string(),
                generator.title().to_string(),
                generator.default_rows().to_string(),
                generator.output_file().to_string(),
            ]);
        }
    }

    println!("{table}");
    Ok(())
}
