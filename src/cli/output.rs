//! Human-readable run report
//!
//! The report goes to stdout, one line per processed file followed by a
//! summary block. Diagnostics go through `tracing` to stderr instead.
//!
//! ```text
//! 🎮 Updating games with video system...
//!
//! ✅ Updated: resta_magica_game.dart
//! ⏭️  Unchanged: rima_magica_game.dart
//! ❌ Missing: sistema_solar_game.dart
//!
//! 📊 Summary:
//!   ✅ Updated: 1
//!   ⏭️  Unchanged: 1
//!   ❌ Errors: 1 (1 missing)
//!   📁 Total: 3
//! ```

use crate::driver::Summary;
use crate::processor::{FileRecord, Outcome};

pub const BANNER: &str = "🎮 Updating games with video system...";

/// Formats report lines for a retrofit run
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn banner(&self) -> String {
        format!("{}\n", BANNER)
    }

    pub fn file_line(&self, record: &FileRecord, outcome: &Outcome) -> String {
        let name = &record.filename;
        match outcome {
            Outcome::Updated => format!("✅ Updated: {}", name),
            Outcome::Unchanged => format!("⏭️  Unchanged: {}", name),
            Outcome::Missing => format!("❌ Missing: {}", name),
            Outcome::Error(message) => format!("❌ Error in {}: {}", name, message),
        }
    }

    pub fn summary(&self, summary: &Summary) -> String {
        let mut output = String::from("\n📊 Summary:\n");
        output.push_str(&format!("  ✅ Updated: {}\n", summary.updated));
        output.push_str(&format!("  ⏭️  Unchanged: {}\n", summary.unchanged));
        if summary.missing > 0 {
            output.push_str(&format!(
                "  ❌ Errors: {} ({} missing)\n",
                summary.failed(),
                summary.missing
            ));
        } else {
            output.push_str(&format!("  ❌ Errors: {}\n", summary.failed()));
        }
        output.push_str(&format!("  📁 Total: {}", summary.total()));
        output
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
