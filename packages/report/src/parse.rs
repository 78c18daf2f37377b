//! Incident line classification.
//!
//! A detail line looks like:
//!
//! ```text
//! 41 00002025R010238 BURGLARY-BLDG06/01/2025 6XX KEEN DR
//! ```
//!
//! District code, case number, then the incident type, date, and address as
//! one run of text. The layout concatenates the incident type and date with
//! no delimiter, so the date pattern is the only dependable anchor.
//! Classification drops the first two fields, searches the remainder for the
//! first date match, and splits around it. Anything that fails a step is a
//! [`SkipReason`], not an error: noise lines are expected in this format.

use blotter_models::{IncidentRecord, LineOutcome, SkipReason};
use regex::Regex;

/// Strict numeric date: 1–2 digit month, 1–2 digit day, 4-digit year.
const DATE_PATTERN: &str = r"\d{1,2}/\d{1,2}/\d{4}";

/// Compiled form of [`DATE_PATTERN`]; shared with week-number derivation.
pub(crate) fn date_regex() -> Regex {
    Regex::new(DATE_PATTERN).unwrap_or_else(|_| unreachable!())
}

/// Classifies one raw line from a district block.
///
/// Steps, in order:
/// 1. Trim, split on single spaces, and drop the first two fields (district
///    code and case number), rejoining the rest with single spaces.
/// 2. Fewer than two whitespace-separated fields remaining →
///    [`SkipReason::TooShort`].
/// 3. No date substring → [`SkipReason::NoDate`].
/// 4. Otherwise split at the first date match: text before it is the
///    incident, text after it the location (empty when the line ends at the
///    date).
#[must_use]
pub fn classify_line(line: &str) -> LineOutcome {
    let fields: Vec<&str> = line.trim().split(' ').collect();
    let cleaned = fields.get(2..).map_or_else(String::new, |rest| rest.join(" "));
    let cleaned = cleaned.trim();

    if cleaned.split_whitespace().count() < 2 {
        return LineOutcome::Skipped(SkipReason::TooShort);
    }

    let Some(found) = date_regex().find(cleaned) else {
        return LineOutcome::Skipped(SkipReason::NoDate);
    };

    LineOutcome::Parsed(IncidentRecord {
        date: found.as_str().to_owned(),
        incident: cleaned[..found.start()].trim().to_owned(),
        location: cleaned[found.end()..].trim().to_owned(),
    })
}

/// Parses a district block into records, keeping source order.
///
/// Skipped lines are logged at debug level with their reason and otherwise
/// dropped; the block never fails as a whole.
#[must_use]
pub fn parse_block(lines: &[&str]) -> Vec<IncidentRecord> {
    let mut records = Vec::new();

    for line in lines {
        match classify_line(line) {
            LineOutcome::Parsed(record) => records.push(record),
            LineOutcome::Skipped(reason) => {
                log::debug!("skipping line ({reason}): {line}");
            }
        }
    }

    records
}
