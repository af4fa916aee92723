//! CLI output formatting and JSON export.

use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use pisweep_core::options::Dispatch;
use pisweep_orchestration::analysis::SweepSummary;
use pisweep_orchestration::interfaces::TrialOutcome;

/// Significant digits used for every number in the report.
pub const REPORT_PRECISION: usize = 6;

/// Format a float in `%g` style with `precision` significant digits.
///
/// Fixed notation is used for decimal exponents in `-4..precision`,
/// scientific notation (`1.5e-05`) otherwise; trailing zeros are dropped.
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.into();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.into();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let significant = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= significant {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(significant - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Format an estimate for the report.
#[must_use]
pub fn format_estimate(estimate: f64) -> String {
    format_general(estimate, REPORT_PRECISION)
}

/// Format a duration as seconds for the report.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format_general(d.as_secs_f64(), REPORT_PRECISION)
}

/// Machine-readable record of a whole sweep.
#[derive(Debug, Serialize)]
pub struct SweepReport<'a> {
    pub intervals: u64,
    pub dispatch: Dispatch,
    pub clamp_last_range: bool,
    pub trials: &'a [TrialOutcome],
    pub summary: Option<SweepSummary>,
}

/// Write a sweep report to a file as pretty JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, report: &SweepReport<'_>) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_general_fixed() {
        assert_eq!(format_general(std::f64::consts::PI, 6), "3.14159");
        assert_eq!(format_general(4.0, 6), "4");
        assert_eq!(format_general(7.2, 6), "7.2");
        assert_eq!(format_general(0.001_234_56, 6), "0.00123456");
        assert_eq!(format_general(0.000_123, 6), "0.000123");
        assert_eq!(format_general(123_456.7, 6), "123457");
        assert_eq!(format_general(-2.5, 6), "-2.5");
    }

    #[test]
    fn format_general_scientific() {
        assert_eq!(format_general(1.5e-5, 6), "1.5e-05");
        assert_eq!(format_general(1_234_567.0, 6), "1.23457e+06");
        assert_eq!(format_general(9_999_999.0, 6), "1e+07");
        assert_eq!(format_general(2.0e-10, 6), "2e-10");
        assert_eq!(format_general(1.0e100, 6), "1e+100");
    }

    #[test]
    fn format_general_rounding_carries() {
        assert_eq!(format_general(0.099_999_999_9, 6), "0.1");
        assert_eq!(format_general(3.141_592_653_589_793, 3), "3.14");
    }

    #[test]
    fn format_general_special_values() {
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(f64::NAN, 6), "nan");
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 6), "-inf");
    }

    #[test]
    fn format_seconds_small_durations() {
        assert_eq!(format_seconds(Duration::from_micros(1500)), "0.0015");
        assert_eq!(format_seconds(Duration::from_micros(12)), "1.2e-05");
        assert_eq!(format_seconds(Duration::from_secs(2)), "2");
    }

    #[test]
    fn write_report_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sweep.json");
        let trials = vec![TrialOutcome {
            workers: 1,
            estimate: 4.0,
            elapsed: Duration::from_millis(3),
        }];
        let report = SweepReport {
            intervals: 1,
            dispatch: Dispatch::Threads,
            clamp_last_range: false,
            trials: &trials,
            summary: None,
        };
        write_to_file(&path, &report).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["intervals"], 1);
        assert_eq!(json["dispatch"], "threads");
        assert_eq!(json["trials"][0]["workers"], 1);
        assert_eq!(json["trials"][0]["estimate"], 4.0);
        assert!(json["summary"].is_null());
    }
}
