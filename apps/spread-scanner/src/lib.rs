// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::default_trait_access
    )
)]

//! Spread Scanner - Straddle/Strangle Combinatorics
//!
//! Pairs every call with every put of an option chain, computes the combined
//! premium, both break-even prices and the worst-case loss, and keeps the
//! pairs that fit the requested cost/floor/ceiling constraints.
//!
//! # Architecture
//!
//! - **Domain**: contracts, constraints, pair evaluation (pure, synchronous)
//! - **Normalizer**: raw table cells → contracts with a per-document report
//! - **Application**: `DocumentSource` port and the `ScanUseCase`
//! - **Infrastructure**: HTTP/file sources and HTML table extraction
//!
//! # Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use spread_scanner::domain::{Constraints, Contract, evaluate_spreads};
//!
//! let calls = [Contract::new(dec!(30), dec!(1), dec!(1.2))];
//! let puts = [Contract::new(dec!(25), dec!(0.8), dec!(1.0))];
//!
//! let eval = evaluate_spreads(&calls, &puts, &Constraints::unbounded(dec!(27.86)));
//! assert_eq!(eval.match_count, 1);
//! assert_eq!(eval.results[0].ceiling_breakeven, dec!(32));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - pair evaluation with no I/O.
pub mod domain;

/// Raw table normalization.
pub mod normalizer;

/// Application layer - ports and use cases.
pub mod application;

/// Infrastructure layer - adapters.
pub mod infrastructure;

/// Command-line surface.
pub mod cli;

/// Configuration loading.
pub mod config;

/// Error types.
pub mod error;

/// Report rendering.
pub mod report;

/// Tracing setup.
pub mod telemetry;

pub use application::ports::{DocumentSource, SourceError};
pub use application::use_cases::{ScanReport, ScanUseCase};
pub use domain::{
    Constraints, Contract, ContractSet, PriceLevel, SpreadEvaluation, SpreadEvaluator,
    SpreadResult, evaluate_spreads, format_price, leg_cost,
};
pub use error::{ErrorCode, ScanError};
pub use normalizer::{ColumnLabels, NormalizationReport, TableSchema, normalize};
