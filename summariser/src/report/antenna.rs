use std::fmt;
use std::io::{BufRead, BufReader, Read, Write};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ReportError;

const ANTENNA_REPORT_INFO: &str =
    "for more info on antenna reports see https://www.zerotoasiccourse.com/terminology/antenna-report/";

/// Which antenna ratio was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntennaKind {
    /// Partial area ratio
    Par,
    /// Cumulative area ratio
    Car,
}

impl FromStr for AntennaKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAR" => Ok(AntennaKind::Par),
            "CAR" => Ok(AntennaKind::Car),
            _ => Err("Unknown antenna ratio kind"),
        }
    }
}

impl fmt::Display for AntennaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AntennaKind::Par => write!(f, "PAR"),
            AntennaKind::Car => write!(f, "CAR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    WorthFixing,
    CanIgnore,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::WorthFixing => write!(f, "worth fixing"),
            Severity::CanIgnore => write!(f, "can ignore"),
        }
    }
}

/// A ratio-exceeded line from the antenna checker log.
#[derive(Debug, Clone, PartialEq)]
pub struct AntennaViolation {
    pub kind: AntennaKind,
    pub violation: f64,
    pub ratio: f64,
}

impl AntennaViolation {
    /// Parse a log line such as `  PAR: 12.50* Ratio: 2.00`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let captures = violation_regex().captures(line)?;
        Some(AntennaViolation {
            kind: captures[1].parse().ok()?,
            violation: captures[2].parse().ok()?,
            ratio: captures[3].parse().ok()?,
        })
    }

    /// Violations more than twice the allowed ratio are worth fixing.
    pub fn severity(&self) -> Severity {
        if self.violation > self.ratio * 2.0 {
            Severity::WorthFixing
        } else {
            Severity::CanIgnore
        }
    }
}

fn violation_regex() -> &'static Regex {
    static VIOLATION: OnceLock<Regex> = OnceLock::new();
    VIOLATION.get_or_init(|| {
        Regex::new(r"^\s*(PAR|CAR):\s+(\d+\.\d+)\*\s+Ratio:\s+(\d+\.\d+)")
            .expect("antenna violation regex is valid")
    })
}

/// Write each violation found in the antenna log with its severity.
///
/// Returns the number of violations found.
pub fn write_antenna_report<R, W>(reader: R, mut writer: W) -> Result<usize, ReportError>
where
    R: Read,
    W: Write,
{
    let mut violations = 0;
    for line in BufReader::new(reader).lines() {
        let line = line?;
        if let Some(violation) = AntennaViolation::parse_line(&line) {
            violations += 1;
            writeln!(writer, "{} : {}", line.trim(), violation.severity())?;
        }
    }

    if violations == 0 {
        writeln!(writer, "no antenna violations found")?;
    } else {
        writeln!(writer, "{ANTENNA_REPORT_INFO}")?;
    }

    Ok(violations)
}
