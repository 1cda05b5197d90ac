use std::io::{Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::ReportError;
use crate::report::metrics::write_row;

/// Write the `design` section of the synthesis statistics as name/value rows.
///
/// Nested keys are joined with `.`, for example `num_cells_by_type.sky130_fd_sc_hd__buf_2`.
pub fn write_synthesis_stats<R, W>(reader: R, source: &Path, mut writer: W) -> Result<(), ReportError>
where
    R: Read,
    W: Write,
{
    let stats: Value = serde_json::from_reader(reader)?;
    let design = stats
        .get("design")
        .ok_or_else(|| ReportError::MissingDesign(source.to_path_buf()))?;

    let mut rows = Vec::new();
    flatten("", design, &mut rows);
    for (name, value) in rows {
        write_row(&mut writer, &name, &value)?;
    }

    Ok(())
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    let key = |name: &str| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        }
    };

    match value {
        Value::Object(map) => {
            for (name, value) in map {
                flatten(&key(name), value, rows);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten(&key(&index.to_string()), value, rows);
            }
        }
        Value::String(s) => rows.push((prefix.to_string(), s.clone())),
        other => rows.push((prefix.to_string(), other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_should_flatten_design_section() {
        let stats = r#"{
            "creator": "Yosys",
            "modules": { "\\top": { "num_cells": 9 } },
            "design": {
                "num_wires": 12,
                "num_cells": 9,
                "num_cells_by_type": {
                    "sky130_fd_sc_hd__and2_1": 4,
                    "sky130_fd_sc_hd__dfxtp_1": 5
                },
                "area": 87.58
            }
        }"#;

        let mut out = Vec::new();
        write_synthesis_stats(stats.as_bytes(), Path::new("stat.json"), &mut out).unwrap();

        let expected = [
            ("num_wires", "12"),
            ("num_cells", "9"),
            ("num_cells_by_type.sky130_fd_sc_hd__and2_1", "4"),
            ("num_cells_by_type.sky130_fd_sc_hd__dfxtp_1", "5"),
            ("area", "87.58"),
        ]
        .iter()
        .map(|(name, value)| format!("{name:>70} : {value:>20}\n"))
        .collect::<String>();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_should_fail_without_design_section() {
        let result = write_synthesis_stats(
            r#"{"modules": {}}"#.as_bytes(),
            Path::new("stat.json"),
            std::io::sink(),
        );
        assert!(matches!(result, Err(ReportError::MissingDesign(path)) if path == Path::new("stat.json")));
    }
}
