//! Property tests for the default secret patterns

use proptest::prelude::*;
use repolens_secrets::infrastructure::detectors::RegexDetector;

proptest! {
    #[test]
    fn aws_key_assignment_always_matches(key in "[A-Z0-9]{20}", spaces in " {0,3}", quote in "['\"]") {
        let detector = RegexDetector::with_default_rules();
        let line = format!("AWS_ACCESS_KEY_ID{spaces}={spaces}{quote}{key}{quote}");

        let hits = detector.detect_line(&line, 1);
        prop_assert_eq!(hits.len(), 1);
        prop_assert_eq!(hits[0].id.as_str(), "aws-access-key");
    }

    #[test]
    fn short_api_keys_never_match(value in "[a-zA-Z0-9]{0,19}") {
        let detector = RegexDetector::with_default_rules();
        let line = format!("api_key = \"{value}\"");

        prop_assert!(detector.detect_line(&line, 1).is_empty());
    }

    #[test]
    fn lines_without_keywords_never_match(line in "[a-z0-9 =\"'.:]{0,80}") {
        let detector = RegexDetector::with_default_rules();
        prop_assume!(!line.contains("api_key"));

        prop_assert!(detector.detect_line(&line, 1).is_empty());
    }
}
