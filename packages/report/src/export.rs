//! JSON export of the per-district incident lists.
//!
//! The persisted artifact is the district map itself: district identifiers
//! as keys, in request order, each holding an ordered array of
//! `{date, incident, location}` objects, written with stable pretty
//! indentation so the file stays diffable and readable.

use std::fs;
use std::path::{Path, PathBuf};

use blotter_models::WeeklyReport;

use crate::ReportError;

/// Writes the report to `<export_dir>/districts_incidents_week_<n>.json`,
/// creating the directory if needed, and returns the path written.
///
/// # Errors
///
/// Returns [`ReportError`] if the directory cannot be created, the report
/// cannot be serialized, or the file cannot be written.
pub fn export_report(report: &WeeklyReport, export_dir: &Path) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(export_dir)?;

    let path = export_dir.join(format!(
        "districts_incidents_week_{}.json",
        report.week_number
    ));
    let json = serde_json::to_string_pretty(&report.districts)?;
    fs::write(&path, json)?;

    log::info!("district incidents exported to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use blotter_models::{DistrictReport, IncidentRecord};

    use super::*;

    #[test]
    fn writes_week_stamped_file_that_round_trips() {
        let mut districts = DistrictReport::new();
        districts.insert(
            "41",
            vec![IncidentRecord {
                date: "06/01/2025".to_owned(),
                incident: "BURGLARY-BLDG".to_owned(),
                location: "6XX KEEN DR".to_owned(),
            }],
        );
        districts.insert("42", vec![]);
        let report = WeeklyReport::new(23, districts);

        let dir = tempfile::tempdir().unwrap();
        let path = export_report(&report, dir.path()).unwrap();

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("districts_incidents_week_23.json")
        );

        let parsed: DistrictReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, report.districts);
    }

    #[test]
    fn creates_missing_export_directory() {
        let report = WeeklyReport::new(1, DistrictReport::new());

        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exported-incidents");
        let path = export_report(&report, &nested).unwrap();

        assert!(path.exists());
    }
}
