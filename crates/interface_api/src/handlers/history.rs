//! Sample history handler
//!
//! Serves the static demo series the dashboard line chart plots. The data
//! is intentionally canned; real per-driver history would require the
//! persistence layer this system does not have.

use axum::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One point in the demo score/premium series
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub week_ending: NaiveDate,
    pub score: u8,
    pub premium: Decimal,
}

/// Returns four weeks of demo history, scores and premiums trending down
pub async fn sample_history() -> Json<Vec<HistoryEntry>> {
    let series = [
        (7, 48, dec!(1200)),
        (14, 45, dec!(1150)),
        (21, 42, dec!(1100)),
        (28, 38, dec!(1050)),
    ];

    Json(
        series
            .into_iter()
            .map(|(day, score, premium)| HistoryEntry {
                week_ending: NaiveDate::from_ymd_opt(2025, 6, day)
                    .expect("static demo date is valid"),
                score,
                premium,
            })
            .collect(),
    )
}
