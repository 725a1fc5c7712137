//! Summary output for completed packing runs.
//!
//! The pretty format mirrors the classic embed-tool report: one labeled line
//! per figure, sizes shown in both MB and KB. The JSON format carries the
//! same figures for machine consumption.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use embedfs_codegen::PackStats;
use serde::Serialize;

/// Summary format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colorized, aligned lines for terminals
    #[default]
    Pretty,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = embedfs_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(embedfs_core::Error::InvalidArgument {
                message: format!("invalid output format: '{s}' (expected: pretty or json)"),
            }),
        }
    }
}

/// Flat view of one run's figures, shaped for serialization.
#[derive(Debug, Serialize)]
struct Summary {
    files_total: u64,
    dirs_total: u64,
    bytes_total: u64,
    bytes_embedded: u64,
    read_bandwidth_mbps: Option<f64>,
    encode_bandwidth_mbps: Option<f64>,
    savings_megabytes: f64,
    savings_percent: Option<f64>,
    elapsed_us: u64,
}

impl From<&PackStats> for Summary {
    fn from(stats: &PackStats) -> Self {
        Self {
            files_total: stats.files_total,
            dirs_total: stats.dirs_total,
            bytes_total: stats.bytes_total,
            bytes_embedded: stats.bytes_embedded,
            read_bandwidth_mbps: stats.read_bandwidth_mbps(),
            encode_bandwidth_mbps: stats.encode_bandwidth_mbps(),
            savings_megabytes: stats.savings_megabytes(),
            savings_percent: stats.savings_percent(),
            elapsed_us: stats.elapsed_us,
        }
    }
}

/// Renders the post-run summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_summary(stats: &PackStats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&Summary::from(stats))?),
        OutputFormat::Pretty => Ok(render_pretty(stats)),
    }
}

fn render_pretty(stats: &PackStats) -> String {
    let mut out = String::new();
    line(&mut out, "Files Total:", &stats.files_total.to_string());
    line(
        &mut out,
        "Files Total Size:",
        &size_pair(stats.total_megabytes()),
    );
    line(
        &mut out,
        "Embedded Total Size:",
        &size_pair(stats.embedded_megabytes()),
    );
    line(&mut out, "Read Bandwidth:", &rate(stats.read_bandwidth_mbps()));
    line(
        &mut out,
        "Encode Bandwidth:",
        &rate(stats.encode_bandwidth_mbps()),
    );
    line(
        &mut out,
        "Compression Savings:",
        &size_pair(stats.savings_megabytes()),
    );
    line(
        &mut out,
        "Compression Ratio:",
        &stats
            .savings_percent()
            .map_or_else(|| "-".to_string(), |pct| format!("{pct:.2} %")),
    );
    line(&mut out, "Took:", &format!("{:?}", stats.elapsed()));
    out.pop();
    out
}

// Pad before colorizing so the escape codes do not skew the alignment.
fn line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{} {}\n", format!("{label:<22}").bold(), value.cyan()));
}

fn size_pair(megabytes: f64) -> String {
    format!("{megabytes:.2} MB {:.2} KB", megabytes * 1024.0)
}

fn rate(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |mbps| format!("{mbps:.2} MB/s"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> PackStats {
        PackStats {
            files_total: 3,
            dirs_total: 1,
            bytes_total: 2 * 1024 * 1024,
            bytes_embedded: 1024 * 1024,
            elapsed_us: 500_000,
        }
    }

    #[test]
    fn test_output_format_round_trip() {
        assert_eq!("pretty".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Pretty.to_string(), "pretty");
        assert_eq!(OutputFormat::default(), OutputFormat::Pretty);
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        assert!("xml".parse::<OutputFormat>().is_err());
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_pretty_summary_carries_report_labels() {
        let rendered = render_summary(&sample_stats(), OutputFormat::Pretty).unwrap();
        for label in [
            "Files Total:",
            "Files Total Size:",
            "Embedded Total Size:",
            "Read Bandwidth:",
            "Encode Bandwidth:",
            "Compression Savings:",
            "Compression Ratio:",
            "Took:",
        ] {
            assert!(rendered.contains(label), "missing label {label}");
        }
        assert!(rendered.contains("MB"));
        assert!(rendered.contains("KB"));
    }

    #[test]
    fn test_pretty_summary_formats_figures() {
        let rendered = render_summary(&sample_stats(), OutputFormat::Pretty).unwrap();
        assert!(rendered.contains("2.00 MB"));
        assert!(rendered.contains("4.00 MB/s"));
        assert!(rendered.contains("50.00 %"));
        assert!(rendered.contains("500ms"));
    }

    #[test]
    fn test_json_summary_round_trips() {
        let rendered = render_summary(&sample_stats(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["files_total"], 3);
        assert_eq!(value["bytes_total"], 2 * 1024 * 1024);
        assert_eq!(value["savings_percent"], 50.0);
        assert_eq!(value["elapsed_us"], 500_000);
    }

    #[test]
    fn test_json_summary_nulls_rates_without_elapsed() {
        let stats = PackStats {
            elapsed_us: 0,
            ..sample_stats()
        };
        let rendered = render_summary(&stats, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert!(value["read_bandwidth_mbps"].is_null());
        assert!(value["encode_bandwidth_mbps"].is_null());
    }

    #[test]
    fn test_pretty_summary_dashes_rates_without_elapsed() {
        let stats = PackStats {
            elapsed_us: 0,
            ..sample_stats()
        };
        let rendered = render_summary(&stats, OutputFormat::Pretty).unwrap();
        assert!(rendered.contains('-'));
    }
}
