use super::DocumentBuilder;
use crate::dependency_report::domain::{DependencyEntry, DependencyMap};
use crate::dependency_report::policies::SummaryOrder;

/// Number of dependency names listed per file before eliding the rest
pub const MAX_LISTED_DEPENDENCIES: usize = 3;

/// SummaryBuilder service producing the human-readable dependency summary
///
/// The output is meant for people, not for parsing. Building it never fails.
pub struct SummaryBuilder;

impl SummaryBuilder {
    /// Builds the plain-text summary for a dependency map
    ///
    /// # Arguments
    /// * `map` - The dependency map to summarize
    /// * `target_label` - Label of the analyzed target, used in the header
    /// * `order` - Whether files appear in map order or sorted like the document
    pub fn build(map: &DependencyMap, target_label: &str, order: SummaryOrder) -> String {
        let mut output = String::new();
        output.push_str(&format!("Dependency analysis for: {}\n\n", target_label));

        if map.is_empty() {
            output.push_str(&format!(
                "No dependencies found for {}.\n",
                target_label
            ));
            return output;
        }

        output.push_str("Results:\n");
        output.push_str(&format!("- Files analyzed: {}\n", map.len()));
        output.push_str(&format!(
            "- Total dependencies: {}\n\n",
            map.total_dependency_count()
        ));

        for entry in Self::ordered_entries(map, order) {
            Self::render_entry(&mut output, entry);
        }

        output
    }

    fn ordered_entries(map: &DependencyMap, order: SummaryOrder) -> Vec<&DependencyEntry> {
        let mut entries: Vec<&DependencyEntry> = map.entries().iter().collect();
        if order == SummaryOrder::Sorted {
            entries.sort_by(|a, b| {
                DocumentBuilder::compare_paths(a.file().display_path(), b.file().display_path())
            });
        }
        entries
    }

    fn render_entry(output: &mut String, entry: &DependencyEntry) {
        let count = entry.dependency_count();
        output.push_str(&format!(
            "{}: {} {}\n",
            entry.file().short_name(),
            count,
            if count == 1 { "dependency" } else { "dependencies" }
        ));

        for dependency in entry.dependencies().iter().take(MAX_LISTED_DEPENDENCIES) {
            output.push_str(&format!("  - {}\n", dependency.short_name()));
        }

        if count > MAX_LISTED_DEPENDENCIES {
            output.push_str(&format!(
                "  ... and {} more\n",
                count - MAX_LISTED_DEPENDENCIES
            ));
        }
    }
}
