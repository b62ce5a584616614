//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ClassificationStats, LinkKind, SkipReason};

/// Logs accepted-link and skipped-tag counters at info level.
pub fn print_classification_statistics(stats: &ClassificationStats) {
    let total_accepted = stats.total_accepted();
    let total_skipped = stats.total_skipped();

    info!("Link Counts ({} total):", total_accepted);
    for kind in LinkKind::iter() {
        let count = stats.get_accepted_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }

    if total_skipped > 0 {
        info!("Skipped Tags ({} total):", total_skipped);
        for reason in SkipReason::iter() {
            let count = stats.get_skipped_count(reason);
            if count > 0 {
                info!("   {}: {}", reason.as_str(), count);
            }
        }
    }
}
