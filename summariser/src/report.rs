//! Renderers for the text artifacts of a run.

pub mod antenna;
pub mod drc;
pub mod metrics;
pub mod synthesis;

pub use antenna::{write_antenna_report, AntennaKind, AntennaViolation, Severity};
pub use drc::write_drc_report;
pub use metrics::{
    flow_status, violation_total, write_full_summary, write_summary, MetricRow, MetricsReader,
    FLOW_COMPLETED,
};
pub use synthesis::write_synthesis_stats;
