//! Document source adapters.

mod file;
mod http;

pub use file::FileDocumentSource;
pub use http::{DEFAULT_USER_AGENT, HttpDocumentSource};
