//! End-to-end scans against a saved option chain page.
//!
//! The fixture holds two calls with quotes, one call without quotes and two
//! puts. Leg mids: C25 = 7.35, C30 = 5.00, P20 = 2.10, P30 = 6.20.

use std::path::PathBuf;
use std::time::Duration;

use rust_decimal_macros::dec;
use spread_scanner::application::use_cases::ScanUseCase;
use spread_scanner::domain::{Constraints, ContractField};
use spread_scanner::infrastructure::{DEFAULT_USER_AGENT, FileDocumentSource, HttpDocumentSource};
use spread_scanner::normalizer::{ChainSide, ColumnLabels};
use spread_scanner::report::render_text;
use spread_scanner::{ErrorCode, ScanError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/uber_chain.html")
}

fn fixture() -> String {
    std::fs::read_to_string(fixture_path()).expect("fixture is readable")
}

async fn serve(body: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quote/UBER/options"))
        .and(query_param("date", "1642723200"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn http_use_case(server: &MockServer) -> ScanUseCase<HttpDocumentSource> {
    let url = format!("{}/quote/UBER/options?date=1642723200", server.uri());
    let source = HttpDocumentSource::new(url, DEFAULT_USER_AGENT, Duration::from_secs(5))
        .expect("valid source");
    ScanUseCase::new(source, ColumnLabels::default())
}

#[tokio::test]
async fn unbounded_scan_reports_every_pair() {
    let server = serve(fixture()).await;
    let report = http_use_case(&server)
        .execute(Constraints::unbounded(dec!(27.86)))
        .await
        .expect("scan succeeds");

    assert_eq!(report.calls, 2);
    assert_eq!(report.puts, 2);
    assert_eq!(report.evaluation.pairs_scanned, 4);
    assert_eq!(report.evaluation.match_count, 4);

    let pairs: Vec<_> = report
        .evaluation
        .results
        .iter()
        .map(|r| (r.call_strike, r.put_strike, r.cost, r.max_loss))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (dec!(25), dec!(20), dec!(9.45), dec!(9.45)),
            (dec!(25), dec!(30), dec!(13.55), dec!(8.55)),
            (dec!(30), dec!(20), dec!(7.10), dec!(7.10)),
            (dec!(30), dec!(30), dec!(11.20), dec!(11.20)),
        ]
    );
}

#[tokio::test]
async fn quoteless_row_is_reported_not_fatal() {
    let server = serve(fixture()).await;
    let report = http_use_case(&server)
        .execute(Constraints::unbounded(dec!(27.86)))
        .await
        .expect("scan succeeds");

    let norm = &report.normalization;
    assert_eq!(norm.accepted_rows, 4);
    assert_eq!(norm.rejected_rows, 1);
    let fields: Vec<_> = norm.rejections.iter().map(|r| (r.side, r.row, r.field)).collect();
    assert_eq!(
        fields,
        vec![
            (ChainSide::Calls, 2, ContractField::Bid),
            (ChainSide::Calls, 2, ContractField::Ask),
        ]
    );
}

#[tokio::test]
async fn max_cost_filters_expensive_pairs() {
    let server = serve(fixture()).await;
    let constraints = Constraints::builder(dec!(27.86))
        .max_cost(Some(dec!(10)))
        .build()
        .expect("valid constraints");

    let report = http_use_case(&server)
        .execute(constraints)
        .await
        .expect("scan succeeds");

    assert_eq!(report.evaluation.match_count, 2);
    assert!(report.evaluation.results.iter().all(|r| r.cost < dec!(10)));
}

#[tokio::test]
async fn max_cost_below_cheapest_pair_matches_nothing() {
    let server = serve(fixture()).await;
    let constraints = Constraints::builder(dec!(27.86))
        .max_cost(Some(dec!(7.10)))
        .build()
        .expect("valid constraints");

    let report = http_use_case(&server)
        .execute(constraints)
        .await
        .expect("scan succeeds");

    assert_eq!(report.evaluation.match_count, 0);
    assert!(report.evaluation.results.is_empty());
}

#[tokio::test]
async fn file_source_with_floor_and_ceiling() {
    let constraints = Constraints::builder(dec!(27.86))
        .ceiling(Some(dec!(38)))
        .floor(Some(dec!(12)))
        .build()
        .expect("valid constraints");

    let use_case =
        ScanUseCase::new(FileDocumentSource::new(fixture_path()), ColumnLabels::default());
    let report = use_case.execute(constraints).await.expect("scan succeeds");

    assert_eq!(report.evaluation.match_count, 1);
    let text = render_text(&report);
    assert_eq!(
        text,
        "\
Call: 30.00 Put: 20.00
Cost: 7.10
ITM Boundary: Low: 12.90 (-54%) High: 37.10 (33%)
Max Loss: 7.10

found 1 possible contracts that fit the criteria
"
    );
}

#[tokio::test]
async fn blocked_page_is_an_invalid_document() {
    let server = serve("<html><body>Please enable JavaScript</body></html>".into()).await;
    let err = http_use_case(&server)
        .execute(Constraints::unbounded(dec!(27.86)))
        .await
        .expect_err("no tables");

    assert!(matches!(err, ScanError::Extract(_)));
    assert_eq!(err.code(), ErrorCode::InvalidDocument);
}

#[tokio::test]
async fn server_error_is_source_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = http_use_case(&server)
        .execute(Constraints::unbounded(dec!(27.86)))
        .await
        .expect_err("503");
    assert_eq!(err.code(), ErrorCode::SourceUnavailable);
    assert_eq!(err.to_response().code, "SOURCE_UNAVAILABLE");
}
