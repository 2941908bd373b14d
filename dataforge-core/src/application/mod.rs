// dataforge-core/src/application/mod.rs

pub mod pipeline;
pub mod registry;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use dataforge_core::application::{run_generation, ...}`
// without knowing the internal file layout.

pub use pipeline::{DomainReport, RunReport, run_generation};
pub use registry::DatasetRegistry;
