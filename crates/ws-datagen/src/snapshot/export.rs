//! Report export.
//!
//! CSV reports carry their rows inline (base64); the other formats only
//! describe the report and where it would be downloaded from.

use std::fmt::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use orion_error::StructError;
use ws_core::error::{CoreReason, CoreResult};
use ws_core::model::{ExportedReport, ReportFormat, ReportPayload, ReportSummary, TimeRange};

use crate::constants::TOTAL_SPACES;
use crate::random::RandomSource;

const CSV_HEADER: &str = "timestamp,space_id,occupancy,efficiency";
const CSV_ROWS: usize = 10;

fn title_case(kind: &str) -> String {
    kind.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn csv_rows(now: DateTime<Utc>, rng: &mut dyn RandomSource) -> String {
    let stamp = now.to_rfc3339();
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for i in 0..CSV_ROWS {
        writeln!(
            csv,
            "{stamp},SPACE_{i},{},{}",
            rng.int_range(0, 99),
            rng.int_range(60, 99)
        )
        .ok();
    }
    csv
}

/// Build the export envelope for a `kind` report (e.g. `occupancy`).
///
/// Fails with a validation error when `kind` is blank or contains anything
/// other than ASCII letters, digits, `_` and `-`, since it ends up in the
/// file name.
pub fn build_export(
    kind: &str,
    range: TimeRange,
    format: ReportFormat,
    now: DateTime<Utc>,
    rng: &mut dyn RandomSource,
) -> CoreResult<ExportedReport> {
    let kind = kind.trim();
    if kind.is_empty()
        || !kind
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StructError::from(CoreReason::Validation)
            .with_detail(format!("invalid report kind {kind:?}")));
    }

    let stamp = now.format("%Y%m%d_%H%M%S");
    let filename = format!("{kind}_report_{stamp}.{}", format.extension());

    let payload = match format {
        ReportFormat::Csv => {
            let csv = csv_rows(now, rng);
            ReportPayload::Inline {
                size: csv.len(),
                data: STANDARD.encode(csv.as_bytes()),
            }
        }
        ReportFormat::Pdf | ReportFormat::Excel => ReportPayload::Download {
            title: format!("{} Report", title_case(kind)),
            download_url: format!(
                "/api/reports/download/{kind}_{stamp}.{}",
                format.extension()
            ),
            summary: ReportSummary {
                total_spaces: TOTAL_SPACES,
                avg_utilization: 73.2,
                efficiency_score: 85.7,
                cost_savings: 240_000.0,
            },
        },
    };

    Ok(ExportedReport {
        filename,
        file_type: format,
        time_range: range,
        payload,
    })
}
