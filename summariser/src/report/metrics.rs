use std::io::{Read, Write};
use std::path::Path;

use serde::Deserialize;

use crate::error::ReportError;

/// One row of the flow's `metrics.csv`.
///
/// Values are kept as written so they print exactly as the flow reported them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetricRow {
    #[serde(rename = "Metric")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl MetricRow {
    pub fn new(name: &str, value: &str) -> Self {
        MetricRow {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether this metric counts violations or errors.
    pub fn is_violation(&self) -> bool {
        self.name.contains("violation") || self.name.contains("error")
    }

    /// The value as a count, if it is a non-negative integer.
    ///
    /// The flow writes negative values for checks that did not run.
    pub fn count(&self) -> Option<u64> {
        self.value.trim().parse::<u64>().ok()
    }
}

/// Reads `Metric,Value` rows from CSV.
pub struct MetricsReader;

impl MetricsReader {
    pub fn read<R>(reader: R) -> Result<Vec<MetricRow>, ReportError>
    where
        R: Read,
    {
        let mut reader = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    pub fn read_from_file<P>(path: P) -> Result<Vec<MetricRow>, ReportError>
    where
        P: AsRef<Path>,
    {
        let file = std::fs::File::open(path)?;
        Self::read(file)
    }
}

/// Write the rows that report violations or errors.
pub fn write_summary<W>(rows: &[MetricRow], mut writer: W) -> std::io::Result<()>
where
    W: Write,
{
    for row in rows.iter().filter(|row| row.is_violation()) {
        write_row(&mut writer, &row.name, &row.value)?;
    }
    Ok(())
}

/// Write every row.
pub fn write_full_summary<W>(rows: &[MetricRow], mut writer: W) -> std::io::Result<()>
where
    W: Write,
{
    for row in rows {
        write_row(&mut writer, &row.name, &row.value)?;
    }
    Ok(())
}

/// Total of all violation and error counts.
pub fn violation_total(rows: &[MetricRow]) -> u64 {
    rows.iter()
        .filter(|row| row.is_violation())
        .filter_map(MetricRow::count)
        .sum()
}

/// Value the flow writes as its status once every step has finished.
pub const FLOW_COMPLETED: &str = "Flow_completed";

/// The flow status recorded in the metrics, if the flow version writes one.
pub fn flow_status(rows: &[MetricRow]) -> Option<&str> {
    rows.iter()
        .find(|row| row.name.contains("flow_status"))
        .map(|row| row.value.trim())
}

pub(crate) fn write_row<W>(mut writer: W, name: &str, value: &str) -> std::io::Result<()>
where
    W: Write,
{
    writeln!(writer, "{name:>70} : {value:>20}")
}
