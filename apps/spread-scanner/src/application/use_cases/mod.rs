//! Application Use Cases

mod scan;

pub use scan::{ScanReport, ScanUseCase};
