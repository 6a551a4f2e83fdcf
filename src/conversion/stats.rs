//! Statistics and result descriptors for conversion runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result descriptor for one or more conversion runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Input INF size in bytes
    pub input_size_bytes: u64,
    /// Output JSON/JSONC size in bytes
    pub output_size_bytes: u64,
    /// Number of active sections converted
    pub section_count: usize,
    /// Number of active entries converted
    pub entry_count: usize,
    /// Number of commented-out entries carried through
    pub inactive_entry_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of files processed
    pub file_count: usize,
    /// Throughput (input bytes processed per second)
    pub throughput_bytes_per_sec: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            output_size_bytes: 0,
            section_count: 0,
            entry_count: 0,
            inactive_entry_count: 0,
            processing_time_ms: 0,
            file_count: 0,
            throughput_bytes_per_sec: 0.0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build statistics for a single conversion
    pub fn for_conversion(
        input_size: u64,
        output_size: u64,
        section_count: usize,
        entry_count: usize,
        inactive_entry_count: usize,
        elapsed: Duration,
    ) -> Self {
        let processing_time_ms = elapsed.as_millis() as u64;
        let throughput = if elapsed.as_secs_f32() > 0.0 {
            input_size as f32 / elapsed.as_secs_f32()
        } else {
            0.0
        };

        Self {
            input_size_bytes: input_size,
            output_size_bytes: output_size,
            section_count,
            entry_count,
            inactive_entry_count,
            processing_time_ms,
            file_count: 1,
            throughput_bytes_per_sec: throughput,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Fold another run's statistics into this aggregate
    pub fn merge(&mut self, other: &ConversionStatistics) {
        self.input_size_bytes += other.input_size_bytes;
        self.output_size_bytes += other.output_size_bytes;
        self.section_count += other.section_count;
        self.entry_count += other.entry_count;
        self.inactive_entry_count += other.inactive_entry_count;
        self.processing_time_ms += other.processing_time_ms;
        self.file_count += other.file_count;

        let total_secs = self.processing_time_ms as f32 / 1000.0;
        self.throughput_bytes_per_sec = if total_secs > 0.0 {
            self.input_size_bytes as f32 / total_secs
        } else {
            0.0
        };
        self.collected_at = chrono::Utc::now();
    }
}
