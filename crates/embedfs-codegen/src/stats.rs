//! Statistics accumulated over one packing run.
//!
//! These totals are observational: they feed the operator-facing summary
//! report and never influence the generated artifact itself.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Totals for a completed packing run.
///
/// # Serialization
///
/// Serializes to flat JSON suitable for machine-readable reports:
///
/// ```json
/// {
///   "files_total": 12,
///   "dirs_total": 3,
///   "bytes_total": 1048576,
///   "bytes_embedded": 262144,
///   "elapsed_us": 8500
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use embedfs_codegen::PackStats;
///
/// let stats = PackStats {
///     files_total: 4,
///     dirs_total: 1,
///     bytes_total: 2 * 1024 * 1024,
///     bytes_embedded: 1024 * 1024,
///     elapsed_us: 1_000_000,
/// };
///
/// assert_eq!(stats.total_megabytes(), 2.0);
/// assert_eq!(stats.read_bandwidth_mbps(), Some(2.0));
/// assert_eq!(stats.savings_percent(), Some(50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackStats {
    /// Number of regular files embedded.
    pub files_total: u64,

    /// Number of directories recorded.
    pub dirs_total: u64,

    /// Cumulative pre-compression size of embedded files, in bytes.
    pub bytes_total: u64,

    /// Cumulative size of the encoded payload tokens, in bytes.
    pub bytes_embedded: u64,

    /// Wall-clock duration of the run, in microseconds.
    pub elapsed_us: u64,
}

impl PackStats {
    /// Creates zeroed statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_total: 0,
            dirs_total: 0,
            bytes_total: 0,
            bytes_embedded: 0,
            elapsed_us: 0,
        }
    }

    /// Returns the run duration.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_us)
    }

    /// Pre-compression total in megabytes.
    #[must_use]
    pub fn total_megabytes(&self) -> f64 {
        self.bytes_total as f64 / BYTES_PER_MB
    }

    /// Encoded payload total in megabytes.
    #[must_use]
    pub fn embedded_megabytes(&self) -> f64 {
        self.bytes_embedded as f64 / BYTES_PER_MB
    }

    /// Source-read throughput in MB/s.
    ///
    /// Returns `None` when no time was measured.
    #[must_use]
    pub fn read_bandwidth_mbps(&self) -> Option<f64> {
        let secs = self.elapsed().as_secs_f64();
        if secs == 0.0 {
            return None;
        }
        Some(self.total_megabytes() / secs)
    }

    /// Encoded-output throughput in MB/s.
    ///
    /// Returns `None` when no time was measured.
    #[must_use]
    pub fn encode_bandwidth_mbps(&self) -> Option<f64> {
        let secs = self.elapsed().as_secs_f64();
        if secs == 0.0 {
            return None;
        }
        Some(self.embedded_megabytes() / secs)
    }

    /// Megabytes saved by compression.
    ///
    /// Negative when the encoded form is larger than the input, which
    /// happens for small or already-compressed files.
    #[must_use]
    pub fn savings_megabytes(&self) -> f64 {
        self.total_megabytes() - self.embedded_megabytes()
    }

    /// Compression savings as a percentage of the input size.
    ///
    /// Returns `None` when nothing was embedded.
    #[must_use]
    pub fn savings_percent(&self) -> Option<f64> {
        if self.bytes_total == 0 {
            return None;
        }
        Some(self.savings_megabytes() / self.total_megabytes() * 100.0)
    }
}

impl Default for PackStats {
    fn default() -> Self {
        Self::new()
    }
}
