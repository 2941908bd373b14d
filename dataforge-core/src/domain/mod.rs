pub mod dataset;
pub mod dates;
pub mod dimensions;
pub mod error;
pub mod generators;
pub mod sampling;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use dataset::{ColumnSpec, Dataset, SemanticType, Value};
pub use dates::DateWindow;
pub use error::DomainError;
