//! Run-task synthesis

use repolens_core::domain::EnvironmentProfile;

/// Placeholder first step; the real clone URL is not substituted
pub const CLONE_PLACEHOLDER: &str = "git clone <repo>";

/// Ordered shell steps to get the project running, derived from the language
/// label alone.
pub fn synthesize_tasks(environment: &EnvironmentProfile) -> Vec<String> {
    let mut tasks = vec![CLONE_PLACEHOLDER.to_string()];

    let steps: &[&str] = if environment.is_javascript() {
        &["npm install", "npm run dev"]
    } else if environment.is_python() {
        &[
            "python -m venv venv",
            "source venv/bin/activate",
            "pip install -r requirements.txt",
        ]
    } else {
        &[]
    };
    tasks.extend(steps.iter().map(|s| s.to_string()));

    tasks
}
