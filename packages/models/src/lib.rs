#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident record and weekly report types shared across the blotter
//! pipeline.
//!
//! The persisted report artifact is a JSON object whose keys are district
//! identifiers in *request order*, so [`DistrictReport`] preserves insertion
//! order and serializes accordingly. [`LineOutcome`] is the classification
//! result for a single raw report line, letting callers (and tests) see why
//! a line was skipped instead of only observing final counts.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single incident parsed out of a district block.
///
/// `date` always matches the strict `MM/DD/YYYY` pattern that anchored the
/// split; `incident` is the text before the date, `location` the text after
/// it (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Incident date as it appeared in the source text (e.g. `06/01/2025`).
    pub date: String,
    /// Free-text incident description (e.g. `BURGLARY-BLDG`).
    pub incident: String,
    /// Free-text address fragment (e.g. `6XX KEEN DR`), empty when the
    /// source line ended at the date.
    pub location: String,
}

/// Classification of a single raw line within a district block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line yielded an incident record.
    Parsed(IncidentRecord),
    /// The line is noise and carries the reason it was rejected.
    Skipped(SkipReason),
}

impl LineOutcome {
    /// Returns the parsed record, discarding skip information.
    #[must_use]
    pub fn into_record(self) -> Option<IncidentRecord> {
        match self {
            Self::Parsed(record) => Some(record),
            Self::Skipped(_) => None,
        }
    }
}

/// Why a raw line was rejected by the incident parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than two fields remained after dropping the district code and
    /// case number (blank line or continuation artifact).
    TooShort,
    /// No `MM/DD/YYYY` substring was found, so there is no anchor to split
    /// the incident description from the location.
    NoDate,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort => write!(f, "fewer than two fields after the case number"),
            Self::NoDate => write!(f, "no date pattern in line"),
        }
    }
}

/// Ordered mapping from district identifier to the incidents parsed for it.
///
/// Every requested district is present, even with an empty list: a district
/// whose marker never appeared in the source is indistinguishable from one
/// with zero incidents, and the report format keeps it that way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistrictReport {
    entries: Vec<(String, Vec<IncidentRecord>)>,
}

impl DistrictReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a district's incident list, keeping insertion order.
    ///
    /// Districts are inserted once per run, in request order; inserting the
    /// same identifier twice replaces the earlier list in place.
    pub fn insert(&mut self, district: impl Into<String>, records: Vec<IncidentRecord>) {
        let district = district.into();
        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| *id == district) {
            entry.1 = records;
        } else {
            self.entries.push((district, records));
        }
    }

    /// Returns the incident list for a district, if present.
    #[must_use]
    pub fn get(&self, district: &str) -> Option<&[IncidentRecord]> {
        self.entries
            .iter()
            .find(|(id, _)| id == district)
            .map(|(_, records)| records.as_slice())
    }

    /// Iterates districts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IncidentRecord])> {
        self.entries
            .iter()
            .map(|(id, records)| (id.as_str(), records.as_slice()))
    }

    /// Number of districts in the report.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report contains no districts at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total incident count across all districts.
    #[must_use]
    pub fn total_incidents(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }
}

impl<'a> IntoIterator for &'a DistrictReport {
    type Item = &'a (String, Vec<IncidentRecord>);
    type IntoIter = std::slice::Iter<'a, (String, Vec<IncidentRecord>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// serde_json's Map re-sorts keys; the persisted artifact's key order is
// contractual, so the map is serialized by hand from the ordered entries.
impl Serialize for DistrictReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (district, records) in &self.entries {
            map.serialize_entry(district, records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DistrictReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = DistrictReport;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of district identifiers to incident lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut report = DistrictReport::new();
                while let Some((district, records)) =
                    access.next_entry::<String, Vec<IncidentRecord>>()?
                {
                    report.insert(district, records);
                }
                Ok(report)
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}

/// The assembled output of one pipeline run.
///
/// Constructed fresh from the current week's text, never mutated afterwards;
/// serialized once and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyReport {
    /// ISO week number (1–53) derived from the report text.
    pub week_number: u32,
    /// Per-district incident lists in request order.
    pub districts: DistrictReport,
}

impl WeeklyReport {
    /// Bundles the parsed districts with the derived week number.
    #[must_use]
    pub const fn new(week_number: u32, districts: DistrictReport) -> Self {
        Self {
            week_number,
            districts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, incident: &str, location: &str) -> IncidentRecord {
        IncidentRecord {
            date: date.to_owned(),
            incident: incident.to_owned(),
            location: location.to_owned(),
        }
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut report = DistrictReport::new();
        report.insert("44", vec![]);
        report.insert("41", vec![record("06/01/2025", "BURGLARY-BLDG", "6XX KEEN DR")]);
        report.insert("42", vec![]);

        let order: Vec<&str> = report.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["44", "41", "42"]);
    }

    #[test]
    fn insert_replaces_existing_district() {
        let mut report = DistrictReport::new();
        report.insert("41", vec![]);
        report.insert("41", vec![record("06/01/2025", "THEFT", "1XX MAIN ST")]);

        assert_eq!(report.len(), 1);
        assert_eq!(report.get("41").map(<[IncidentRecord]>::len), Some(1));
    }

    #[test]
    fn serialized_key_order_matches_insertion_order() {
        let mut report = DistrictReport::new();
        report.insert("52", vec![]);
        report.insert("41", vec![]);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.find("\"52\"").unwrap() < json.find("\"41\"").unwrap());
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let mut report = DistrictReport::new();
        report.insert(
            "41",
            vec![
                record("06/01/2025", "BURGLARY-BLDG", "6XX KEEN DR"),
                record("06/02/2025", "THEFT-ALL OTHER", ""),
            ],
        );
        report.insert("42", vec![]);

        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: DistrictReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn into_record_drops_skips() {
        let outcome = LineOutcome::Skipped(SkipReason::NoDate);
        assert_eq!(outcome.into_record(), None);

        let outcome = LineOutcome::Parsed(record("06/01/2025", "ASSAULT", "2XX OAK AVE"));
        assert!(outcome.into_record().is_some());
    }
}
