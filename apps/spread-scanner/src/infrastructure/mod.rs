//! Infrastructure Layer
//!
//! Adapters for the document sources and the HTML table extractor.

pub mod html;
pub mod source;

pub use html::{ExtractError, RawChain, extract_chain_tables};
pub use source::{DEFAULT_USER_AGENT, FileDocumentSource, HttpDocumentSource};
