//! Framework and staleness heuristics
//!
//! The JavaScript rules look at exact package names over the whole merged
//! dependency map; the Python rules look at substrings of one requirement at
//! a time. The asymmetry is intentional.

/// `next` wins over `react`; anything else leaves the framework unchanged
pub fn javascript_framework<'a, I>(names: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut has_react = false;
    for name in names {
        match name {
            "next" => return Some("Next.js"),
            "react" => has_react = true,
            _ => {}
        }
    }
    has_react.then_some("React")
}

const PYTHON_FRAMEWORKS: &[(&str, &str)] = &[
    ("fastapi", "FastAPI"),
    ("django", "Django"),
    ("flask", "Flask"),
];

/// First framework whose key occurs in the requirement name, case-insensitively
pub fn python_framework(requirement_name: &str) -> Option<&'static str> {
    let lowered = requirement_name.to_ascii_lowercase();
    PYTHON_FRAMEWORKS
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|(_, label)| *label)
}

/// Only React 16 is flagged: the declared version with `^` and `~` removed
/// must start with `16`.
pub fn is_flagged_stale(name: &str, version: &str) -> bool {
    if name != "react" {
        return false;
    }
    let stripped: String = version.chars().filter(|c| *c != '^' && *c != '~').collect();
    stripped.starts_with("16")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_beats_react_regardless_of_order() {
        assert_eq!(javascript_framework(["react", "next"]), Some("Next.js"));
        assert_eq!(javascript_framework(["react", "react-dom"]), Some("React"));
        assert_eq!(javascript_framework(["express"]), None);
        assert_eq!(javascript_framework(["@next/font"]), None);
    }

    #[test]
    fn test_python_framework_is_substring_match() {
        assert_eq!(python_framework("FastAPI"), Some("FastAPI"));
        assert_eq!(python_framework("djangorestframework"), Some("Django"));
        assert_eq!(python_framework("Flask-Login"), Some("Flask"));
        assert_eq!(python_framework("requests"), None);
    }

    #[test]
    fn test_python_framework_prefers_table_order() {
        assert_eq!(python_framework("fastapi-django-bridge"), Some("FastAPI"));
    }

    #[test]
    fn test_stale_rule() {
        assert!(is_flagged_stale("react", "^16.2.0"));
        assert!(is_flagged_stale("react", "~16.14.0"));
        assert!(is_flagged_stale("react", "16"));
        assert!(!is_flagged_stale("react", "^18.0.0"));
        assert!(!is_flagged_stale("react", ">=16.0.0"));
        assert!(!is_flagged_stale("react-dom", "^16.2.0"));
    }
}
