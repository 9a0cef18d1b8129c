//! Scan Use Case
//!
//! Fetch → extract tables → normalize → evaluate spreads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::DocumentSource;
use crate::domain::{Constraints, ContractSet, SpreadEvaluation, SpreadEvaluator};
use crate::error::ScanError;
use crate::infrastructure::extract_chain_tables;
use crate::normalizer::{ColumnLabels, NormalizationReport, normalize_chain};

/// Everything one scan produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Where the document came from.
    pub source: String,
    /// When the scan ran.
    pub scanned_at: DateTime<Utc>,
    /// Constraints that were applied.
    pub constraints: Constraints,
    /// Number of call contracts normalized.
    pub calls: usize,
    /// Number of put contracts normalized.
    pub puts: usize,
    /// Matching pairs and counts.
    pub evaluation: SpreadEvaluation,
    /// Rows dropped during normalization.
    pub normalization: NormalizationReport,
}

/// Use case for scanning one option chain document.
pub struct ScanUseCase<S>
where
    S: DocumentSource,
{
    source: S,
    labels: ColumnLabels,
}

impl<S> ScanUseCase<S>
where
    S: DocumentSource,
{
    /// Create a new ScanUseCase.
    pub const fn new(source: S, labels: ColumnLabels) -> Self {
        Self { source, labels }
    }

    /// Fetch and normalize the document without evaluating it.
    pub async fn load_contracts(&self) -> Result<(ContractSet, NormalizationReport), ScanError> {
        let html = self.source.fetch().await?;
        let raw = extract_chain_tables(&html)?;
        let (contracts, report) =
            normalize_chain(&raw.header, &raw.call_rows, &raw.put_rows, &self.labels)?;

        if !report.is_clean() {
            tracing::warn!(
                source = self.source.location(),
                rejected_rows = report.rejected_rows,
                "Some option chain rows could not be parsed"
            );
        }

        Ok((contracts, report))
    }

    /// Execute the use case.
    pub async fn execute(&self, constraints: Constraints) -> Result<ScanReport, ScanError> {
        let (contracts, normalization) = self.load_contracts().await?;
        let evaluation =
            SpreadEvaluator::new(constraints).evaluate(&contracts.calls, &contracts.puts);

        tracing::info!(
            source = self.source.location(),
            calls = contracts.calls.len(),
            puts = contracts.puts.len(),
            matches = evaluation.match_count,
            overflowed_pairs = evaluation.overflowed_pairs,
            "Scan complete"
        );

        Ok(ScanReport {
            source: self.source.location().to_string(),
            scanned_at: Utc::now(),
            constraints,
            calls: contracts.calls.len(),
            puts: contracts.puts.len(),
            evaluation,
            normalization,
        })
    }
}
