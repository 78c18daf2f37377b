//! Report assembly: per-district parsing and week-number derivation.
//!
//! Districts are independent of one another: each requested identifier is
//! segmented and parsed on its own, and the assembled report lists them in
//! request order. The week number is derived once per run from the full
//! text, not per district.

use blotter_models::{DistrictReport, WeeklyReport};
use chrono::{Datelike as _, NaiveDate, Utc};

use crate::{parse, segment};

/// Parses incident records for every requested district.
///
/// Every requested identifier ends up as a key in the result, in request
/// order, even when its header never appears in the text (empty list, not
/// an absent key).
#[must_use]
pub fn parse_districts(text: &str, districts: &[u32]) -> DistrictReport {
    let lines: Vec<&str> = text.lines().collect();
    let mut report = DistrictReport::new();

    for &district in districts {
        let block = segment::district_block(&lines, district);
        let records = parse::parse_block(block);
        log::info!("district {district}: {} incidents", records.len());
        report.insert(district.to_string(), records);
    }

    report
}

/// Derives the report's ISO week number from the extracted text.
///
/// Takes the first date-pattern match anywhere in the text and parses it as
/// `MM/DD/YYYY`. Falls back to the current date's ISO week when the text
/// contains no parseable date at all, so re-running on identical input
/// always yields the same week while a dateless blob still gets a sensible
/// filename.
#[must_use]
pub fn week_number(text: &str) -> u32 {
    parse::date_regex()
        .find(text)
        .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%m/%d/%Y").ok())
        .map_or_else(
            || Utc::now().date_naive().iso_week().week(),
            |date| date.iso_week().week(),
        )
}

/// Runs the full text-to-report pipeline: segmentation, parsing, and week
/// derivation.
#[must_use]
pub fn assemble(text: &str, districts: &[u32]) -> WeeklyReport {
    WeeklyReport::new(week_number(text), parse_districts(text, districts))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "\
GARLAND POLICE DEPARTMENT
SELECTED INCIDENT REPORT
DISTRICT 42
42 00002025R010301 ASSAULT-FV06/02/2025 2XX OAK ST
42 NOTE SEE ATTACHED SUPPLEMENT
42 00002025R010305 BURGLARY-VEH06/03/2025 7XX WALNUT ST
DISTRICT 43
43 00002025R010400 THEFT-SHOPLIFT06/04/2025 1XX LAVON DR
";

    #[test]
    fn end_to_end_counts_only_parseable_lines() {
        let report = parse_districts(TEXT, &[42]);

        assert_eq!(report.len(), 1);
        assert_eq!(report.get("42").map(<[_]>::len), Some(2));
    }

    #[test]
    fn every_requested_district_is_present() {
        let report = parse_districts(TEXT, &[42, 43, 99]);

        assert_eq!(report.get("99"), Some(&[] as &[_]));
        let order: Vec<&str> = report.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["42", "43", "99"]);
    }

    #[test]
    fn week_number_comes_from_first_date_in_text() {
        // 06/02/2025 is a Monday in ISO week 23.
        assert_eq!(week_number(TEXT), 23);
    }

    #[test]
    fn week_number_is_idempotent() {
        assert_eq!(week_number(TEXT), week_number(TEXT));
    }

    #[test]
    fn week_number_falls_back_to_current_week_without_a_date() {
        let expected = Utc::now().date_naive().iso_week().week();
        assert_eq!(week_number("no dates here"), expected);
    }

    #[test]
    fn unparseable_first_date_falls_back_to_current_week() {
        // Matches the pattern but is not a calendar date.
        let expected = Utc::now().date_naive().iso_week().week();
        assert_eq!(week_number("13/45/2025"), expected);
    }

    #[test]
    fn assemble_bundles_week_and_districts() {
        let report = assemble(TEXT, &[42, 43]);

        assert_eq!(report.week_number, 23);
        assert_eq!(report.districts.total_incidents(), 3);
    }
}
