//src/model/mod.rs
pub mod catalog;
pub mod elements;

// Re-exports for cleaner imports
pub use catalog::{DataValidationError, ElementCatalog};
pub use elements::{Block, Category, ElementRecord};
