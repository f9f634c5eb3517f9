/**
 * Mock Report Parser
 *
 * Classifies an upload from keywords in its original filename and emits a
 * canned parse result. There is no OCR and no content inspection; this is a
 * stand-in for a real medical-report parser behind the same interface.
 */

use serde_json::{json, Value};

/// Report classification stored alongside the parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Blood,
    Xray,
    Other,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Blood => "blood",
            ReportKind::Xray => "xray",
            ReportKind::Other => "other",
        }
    }
}

/// Produce the mock parse result for an uploaded file.
pub fn parse_report(original_filename: &str) -> (ReportKind, Value) {
    let name = original_filename.to_lowercase();

    if name.contains("cbc") || name.contains("blood") {
        return (
            ReportKind::Blood,
            json!({
                "summary": "Detected blood report.",
                "values": {
                    "hemoglobin": "13.2 g/dL",
                    "wbc": "6,700 /µL",
                    "platelets": "220,000 /µL"
                },
                "flags": ["Hemoglobin slightly low"]
            }),
        );
    }

    if name.contains("xray") {
        return (
            ReportKind::Xray,
            json!({
                "summary": "Detected X-ray image.",
                "findings": "Lungs appear normal. No obvious issues.",
                "confidence": "Mock 82%"
            }),
        );
    }

    (
        ReportKind::Other,
        json!({
            "summary": "Unrecognized report type. Basic storage only."
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_keywords() {
        let (kind, parsed) = parse_report("CBC_results_march.pdf");
        assert_eq!(kind, ReportKind::Blood);
        assert_eq!(parsed["summary"], "Detected blood report.");
        assert!(parsed["values"]["hemoglobin"].is_string());

        let (kind, _) = parse_report("blood-panel.png");
        assert_eq!(kind, ReportKind::Blood);
    }

    #[test]
    fn test_xray_keyword() {
        let (kind, parsed) = parse_report("chest_xray_2026.jpg");
        assert_eq!(kind, ReportKind::Xray);
        assert!(parsed["findings"].as_str().unwrap().contains("Lungs"));
    }

    #[test]
    fn test_unrecognized_filename() {
        let (kind, parsed) = parse_report("prescription.pdf");
        assert_eq!(kind, ReportKind::Other);
        assert_eq!(parsed["summary"], "Unrecognized report type. Basic storage only.");
        assert!(parsed.get("values").is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(parse_report("Blood.PDF").0, ReportKind::Blood);
        assert_eq!(parse_report("XRAY.png").0, ReportKind::Xray);
    }
}
