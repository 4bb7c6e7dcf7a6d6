// Export modules for use in tests
pub mod catalog;
pub mod chrome;
pub mod engine;
pub mod error;
pub mod reader;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export the main reader surface
pub use catalog::{BookRecord, DocumentDescriptor, FileKind};
pub use error::ReaderError;
pub use reader::{ActiveSession, DocumentReader, RasterReader, ReflowReader};
