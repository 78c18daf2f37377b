//! Plain-text rendering of a weekly report.
//!
//! Produces the human-readable summary used as the notification body: a
//! title line, then one section per district in request order.

use std::fmt::Write as _;

use blotter_models::WeeklyReport;

/// Formats the report as plain text.
///
/// ```text
/// Garland TX Police Activity Report - Week 23
///
/// District 42 (2 incidents):
///   - 06/02/2025: ASSAULT-FV @ 2XX OAK ST
///   - 06/03/2025: BURGLARY-VEH @ 7XX WALNUT ST
///
/// District 43 (0 incidents):
///   No incidents reported.
/// ```
#[must_use]
pub fn format_report(report: &WeeklyReport, title: &str) -> String {
    let mut out = String::new();
    writeln!(out, "{title} - Week {}", report.week_number).unwrap();

    for (district, records) in report.districts.iter() {
        writeln!(out).unwrap();
        writeln!(out, "District {district} ({} incidents):", records.len()).unwrap();

        if records.is_empty() {
            writeln!(out, "  No incidents reported.").unwrap();
        }
        for record in records {
            writeln!(
                out,
                "  - {}: {} @ {}",
                record.date, record.incident, record.location
            )
            .unwrap();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use blotter_models::{DistrictReport, IncidentRecord};

    use super::*;

    #[test]
    fn renders_incidents_and_empty_districts() {
        let mut districts = DistrictReport::new();
        districts.insert(
            "42",
            vec![IncidentRecord {
                date: "06/02/2025".to_owned(),
                incident: "ASSAULT-FV".to_owned(),
                location: "2XX OAK ST".to_owned(),
            }],
        );
        districts.insert("43", vec![]);

        let text = format_report(&WeeklyReport::new(23, districts), "Garland TX Police Activity Report");

        assert_eq!(
            text,
            "Garland TX Police Activity Report - Week 23\n\
             \n\
             District 42 (1 incidents):\n\
             \x20 - 06/02/2025: ASSAULT-FV @ 2XX OAK ST\n\
             \n\
             District 43 (0 incidents):\n\
             \x20 No incidents reported.\n"
        );
    }
}
