use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// Row- and table-level problems in the source CSV.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("row {row}: 'class' must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: u8 },
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Raw CSV row, named after the source file's headers. Extra columns are
/// ignored by `csv`'s serde deserializer.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

/// Load the launch records from a CSV file.
///
/// Called exactly once at startup; any error here is fatal for the process.
/// Required columns: `Launch Site`, `Payload Mass (kg)`, `class` (0/1),
/// `Booster Version Category`.
pub fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let outcome = Outcome::from_class(raw.class).ok_or(SchemaError::InvalidClass {
            row: row_no,
            value: raw.class,
        })?;

        records.push(LaunchRecord {
            launch_site: raw.launch_site,
            payload_mass: raw.payload_mass,
            outcome,
            booster_category: raw.booster_category,
        });
    }

    LaunchDataset::from_records(records)
        .ok_or(SchemaError::Empty)
        .context("building dataset")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    const HEADER: &str = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n";

    #[test]
    fn loads_well_formed_csv() {
        let path = write_temp_csv(
            "launchboard_loader_ok.csv",
            &format!(
                "{HEADER}1,CCAFS LC-40,0,2500.0,v1.0\n2,VAFB SLC-4E,1,9600.0,FT\n"
            ),
        );

        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.sites, vec!["CCAFS LC-40".to_string(), "VAFB SLC-4E".to_string()]);
        assert_eq!(ds.min_payload, 2500.0);
        assert_eq!(ds.max_payload, 9600.0);
        assert_eq!(ds.records[1].outcome, Outcome::Success);
        assert_eq!(ds.records[0].booster_category, "v1.0");
    }

    #[test]
    fn rejects_class_out_of_range() {
        let path = write_temp_csv(
            "launchboard_loader_badclass.csv",
            &format!("{HEADER}1,CCAFS LC-40,3,2500.0,v1.0\n"),
        );
        let err = load_csv(&path).unwrap_err();
        assert!(err.to_string().contains("'class' must be 0 or 1"));
    }

    #[test]
    fn rejects_empty_table() {
        let path = write_temp_csv("launchboard_loader_empty.csv", HEADER);
        let err = load_csv(&path).unwrap_err();
        assert!(format!("{err:#}").contains("no rows"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_csv(Path::new("definitely_not_here.csv")).is_err());
    }
}
