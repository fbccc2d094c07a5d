//! Size reporting for compression runs.
//!
//! The codec itself never prints; this is the thin observable layer the
//! tool wraps around it: original size, container size, and the space
//! saved (which can be negative for small or high-entropy inputs, since
//! the code table travels in the container).

/// Byte counts for one compression run.
#[derive(Debug, Clone, Copy)]
pub struct SizeReport {
    /// Size of the original content in bytes
    pub original_bytes: u64,

    /// Size of the produced container in bytes
    pub container_bytes: u64,
}

impl SizeReport {
    /// Fraction of the original size saved, in percent.
    ///
    /// Negative when the container is larger than the input.
    pub fn space_saved_pct(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            (1.0 - self.container_bytes as f64 / self.original_bytes as f64) * 100.0
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Compression Summary ===");
        println!("Original size:   {} bytes", self.original_bytes);
        println!("Compressed size: {} bytes", self.container_bytes);
        println!("Space saved:     {:.2}%", self.space_saved_pct());
        if self.container_bytes > self.original_bytes {
            println!("(table overhead exceeded savings for this input)");
        }
    }
}
