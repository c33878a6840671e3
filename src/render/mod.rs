//! Render module - Serializing a [`DiffReport`] for people and machines.

use crate::diff::DiffReport;
use thiserror::Error;

/// OutputFormat selects how a report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON object keyed by section name.
    #[default]
    Json,
    /// The same structure as YAML.
    Yaml,
    /// One line per difference, grouped by section.
    Text,
}

/// RenderError is returned when a report cannot be serialized.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize report as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Renders `report` in the given format.
pub fn render(report: &DiffReport, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

/// Renders a human readable summary of `report`.
pub fn render_text(report: &DiffReport) -> String {
    report.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_manifests;
    use crate::manifest::from_json;
    use crate::sections::SectionSelector;
    use pretty_assertions::assert_eq;

    fn report() -> DiffReport {
        let old = from_json(
            r#"{"dependencies": {"a": "1.0.0", "b": "2.0.0"}, "devDependencies": {"jest": "^29.0.0"}}"#,
        )
        .unwrap();
        let new = from_json(
            r#"{"dependencies": {"b": "2.0.0", "c": "3.0.0"}, "devDependencies": {"jest": "^30.0.0"}}"#,
        )
        .unwrap();
        diff_manifests(&old, &new, SectionSelector::All).unwrap()
    }

    #[test]
    fn test_render_text() {
        let expected = "\
dependencies:
  + c 3.0.0
  - a 1.0.0

devDependencies:
  ~ jest ^29.0.0 -> ^30.0.0

peerDependencies:
  (no changes)

1 added, 1 removed, 1 changed
";
        assert_eq!(render(&report(), OutputFormat::Text).unwrap(), expected);
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&report(), OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dependencies": [
                    {"package": "c", "old": null, "new": "3.0.0"},
                    {"package": "a", "old": "1.0.0", "new": null}
                ],
                "devDependencies": [
                    {"package": "jest", "old": "^29.0.0", "new": "^30.0.0"}
                ],
                "peerDependencies": []
            })
        );
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render(&report(), OutputFormat::Yaml).unwrap();
        assert!(yaml.starts_with("dependencies:\n"));
        assert!(yaml.contains("package: jest"));
        assert!(yaml.contains("peerDependencies: []"));
    }

    #[test]
    fn test_render_empty_report() {
        assert_eq!(render_text(&DiffReport::new()), "");
        assert_eq!(render(&DiffReport::new(), OutputFormat::Json).unwrap(), "{}");
    }
}
