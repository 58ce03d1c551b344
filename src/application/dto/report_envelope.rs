use serde::{Deserialize, Serialize};

/// ReportEnvelope - the JSON payload returned to tool callers
///
/// Field order is part of the output contract and follows declaration order.
/// The envelope travels as a JSON string; callers parse it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    pub target_file: String,
    /// Sum of all dependency-set sizes across all analyzed files
    pub dependencies_count: usize,
    /// Number of files (map keys) analyzed. The index-backed provider keys
    /// the target even when it has no dependencies, plus every reachable file
    /// that has at least one; reachable leaf files are not counted.
    pub files_analyzed: usize,
    /// Intended side-channel path. Not a guarantee that the file exists.
    pub output_file: String,
    pub dependencies_summary: String,
    pub dependencies_xml: String,
}

impl ReportEnvelope {
    pub fn new(
        target_file: String,
        dependencies_count: usize,
        files_analyzed: usize,
        output_file: String,
        dependencies_summary: String,
        dependencies_xml: String,
    ) -> Self {
        Self {
            target_file,
            dependencies_count,
            files_analyzed,
            output_file,
            dependencies_summary,
            dependencies_xml,
        }
    }

    /// Serializes the envelope as pretty-printed JSON
    ///
    /// String fields are escaped by serde_json (backslash, quote, newline,
    /// carriage return, tab and remaining control characters).
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("Failed to serialize envelope: {}", e) })
                .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> ReportEnvelope {
        ReportEnvelope::new(
            "src/A.kt".to_string(),
            2,
            1,
            "/tmp/dep-report/dependencies.xml".to_string(),
            "A.kt: 2 dependencies\n\t- B.kt".to_string(),
            "<root isBackward=\"false\"/>".to_string(),
        )
    }

    #[test]
    fn test_to_json_fields_round_trip() {
        let json = sample().to_json();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["target_file"], "src/A.kt");
        assert_eq!(value["dependencies_count"], 2);
        assert_eq!(value["files_analyzed"], 1);
        assert_eq!(value["output_file"], "/tmp/dep-report/dependencies.xml");
        assert_eq!(
            value["dependencies_summary"],
            "A.kt: 2 dependencies\n\t- B.kt"
        );
        assert_eq!(value["dependencies_xml"], "<root isBackward=\"false\"/>");
    }

    #[test]
    fn test_to_json_key_order_is_fixed() {
        let json = sample().to_json();
        let keys = [
            "\"target_file\"",
            "\"dependencies_count\"",
            "\"files_analyzed\"",
            "\"output_file\"",
            "\"dependencies_summary\"",
            "\"dependencies_xml\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_to_json_escapes_special_characters() {
        let mut envelope = sample();
        envelope.target_file = "C:\\proj\\\"odd\"\r\n".to_string();
        let json = envelope.to_json();

        assert!(json.contains(r#""target_file": "C:\\proj\\\"odd\"\r\n""#));
        assert!(json.contains(r#"\t- B.kt"#));
        assert!(json.contains(r#"isBackward=\"false\""#));

        let parsed: ReportEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, envelope);
    }
}
