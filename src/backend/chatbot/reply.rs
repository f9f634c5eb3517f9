/**
 * Chatbot Reply Selection
 *
 * A keyword-matching string selector, not a language model: the first
 * matching rule wins. Swappable for a real assistant later without touching
 * the handlers or the message log.
 */

/// Pick a canned reply for a user message.
pub fn reply_for(message: &str) -> &'static str {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return "Please type something.";
    }
    let lower = trimmed.to_lowercase();

    if lower.contains("fever") || lower.contains("temperature") {
        return "Fever can be caused by infections or inflammation. Monitor temperature, rest, and consult if >38.5°C or prolonged.";
    }
    if lower.contains("pain") {
        return "For pain, please describe location and severity. If severe or sudden, seek immediate care.";
    }
    if lower.contains("blood") || lower.contains("cbc") || lower.contains("report") {
        return "Upload your report on the Reports page if you want me to analyze values.";
    }

    "Thanks — I noted that. I can help summarize reports, suggest next steps, or point you to nearby facilities."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert_eq!(reply_for(""), "Please type something.");
        assert_eq!(reply_for("   "), "Please type something.");
    }

    #[test]
    fn test_fever_keywords() {
        assert!(reply_for("I have a fever").contains("Fever"));
        assert!(reply_for("My Temperature is high").contains("Fever"));
    }

    #[test]
    fn test_pain_keyword() {
        assert!(reply_for("chest PAIN since morning").contains("location and severity"));
    }

    #[test]
    fn test_report_keywords() {
        assert!(reply_for("can you read my CBC?").contains("Reports page"));
        assert!(reply_for("blood work came back").contains("Reports page"));
        assert!(reply_for("I got a new report").contains("Reports page"));
    }

    #[test]
    fn test_first_match_wins() {
        // "fever" rule precedes the "report" rule
        assert!(reply_for("fever noted in my report").contains("Fever"));
    }

    #[test]
    fn test_fallback() {
        assert!(reply_for("hello there").starts_with("Thanks"));
    }
}
