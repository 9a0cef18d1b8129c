//! Application Ports
//!
//! Driven ports: how the scanner reaches the outside world.

mod document_source_port;

pub use document_source_port::{DocumentSource, SourceError};
