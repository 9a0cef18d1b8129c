//! Option chain HTML table extraction.
//!
//! The page carries two tables: calls first, puts second. The first row of
//! the calls table is the header for both.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Extraction errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Fewer than two tables in the document.
    #[error("Expected calls and puts tables, found {found} table(s)")]
    MissingTable {
        /// Number of tables present.
        found: usize,
    },

    /// Calls table has no header row.
    #[error("Calls table has no rows")]
    EmptyHeader,
}

/// Raw text cells of an option chain page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawChain {
    /// Column labels shared by both tables.
    pub header: Vec<String>,
    /// Body rows of the calls table.
    pub call_rows: Vec<Vec<String>>,
    /// Body rows of the puts table.
    pub put_rows: Vec<Vec<String>>,
}

struct Selectors {
    table: Selector,
    row: Selector,
    cell: Selector,
}

#[allow(clippy::expect_used)] // Selectors are compile-time constants
fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| Selectors {
        table: Selector::parse("table").expect("table selector is valid"),
        row: Selector::parse("tr").expect("tr selector is valid"),
        cell: Selector::parse("th, td").expect("cell selector is valid"),
    })
}

fn rows_of(table: ElementRef<'_>) -> Vec<Vec<String>> {
    let sel = selectors();
    table
        .select(&sel.row)
        .map(|tr| {
            tr.select(&sel.cell)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect()
        })
        .collect()
}

/// Extract the header, call rows and put rows from an option chain page.
pub fn extract_chain_tables(html: &str) -> Result<RawChain, ExtractError> {
    let document = Html::parse_document(html);
    let tables: Vec<ElementRef<'_>> = document.select(&selectors().table).collect();

    let [calls, puts, ..] = tables.as_slice() else {
        return Err(ExtractError::MissingTable {
            found: tables.len(),
        });
    };

    let mut call_rows = rows_of(*calls).into_iter();
    let header = call_rows.next().ok_or(ExtractError::EmptyHeader)?;
    let put_rows = rows_of(*puts).into_iter().skip(1).collect();

    let chain = RawChain {
        header,
        call_rows: call_rows.collect(),
        put_rows,
    };

    tracing::debug!(
        columns = chain.header.len(),
        call_rows = chain.call_rows.len(),
        put_rows = chain.put_rows.len(),
        "Extracted option chain tables"
    );

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r"
<html><body>
<table>
  <thead><tr><th>Contract Name</th><th>Strike</th><th>Bid</th><th>Ask</th></tr></thead>
  <tbody>
    <tr><td>UBER220121C00030000</td><td><a href='#'>30.00</a></td><td>1.00</td><td>1.20</td></tr>
    <tr><td>UBER220121C00035000</td><td>35.00</td><td> 0.40 </td><td>0.60</td></tr>
  </tbody>
</table>
<table>
  <thead><tr><th>Contract Name</th><th>Strike</th><th>Bid</th><th>Ask</th></tr></thead>
  <tbody>
    <tr><td>UBER220121P00025000</td><td>25.00</td><td>0.80</td><td>1.00</td></tr>
  </tbody>
</table>
</body></html>";

    #[test]
    fn extracts_header_and_rows() {
        let chain = extract_chain_tables(PAGE).unwrap();

        assert_eq!(chain.header, ["Contract Name", "Strike", "Bid", "Ask"]);
        assert_eq!(chain.call_rows.len(), 2);
        assert_eq!(
            chain.call_rows[0],
            ["UBER220121C00030000", "30.00", "1.00", "1.20"]
        );
        assert_eq!(chain.call_rows[1][2], "0.40");
        assert_eq!(
            chain.put_rows,
            vec![vec!["UBER220121P00025000", "25.00", "0.80", "1.00"]]
        );
    }

    #[test]
    fn single_table_is_an_error() {
        let err = extract_chain_tables("<table><tr><td>1</td></tr></table>").unwrap_err();
        assert_eq!(err, ExtractError::MissingTable { found: 1 });
    }

    #[test]
    fn no_tables_is_an_error() {
        let err = extract_chain_tables("<p>Please enable JavaScript</p>").unwrap_err();
        assert_eq!(err, ExtractError::MissingTable { found: 0 });
    }

    #[test]
    fn empty_calls_table_has_no_header() {
        let err = extract_chain_tables("<table></table><table></table>").unwrap_err();
        assert_eq!(err, ExtractError::EmptyHeader);
    }
}
