pub mod publisher;

pub use publisher::{PublishRequest, PublishedWorkbook, WorkbookPublisher};
