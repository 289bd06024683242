pub mod errors;
pub mod loader;
pub mod types;

pub use errors::SourceError;
pub use loader::{load, read_text};
pub use types::Document;
