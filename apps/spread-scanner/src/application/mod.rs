//! Application Layer
//!
//! Orchestrates the domain behind driven ports.
//!
//! - `ports`: `DocumentSource`
//! - `use_cases`: `ScanUseCase`

pub mod ports;
pub mod use_cases;
