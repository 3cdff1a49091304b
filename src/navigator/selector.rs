use serde::Deserialize;
use std::fmt;

/// A configuration-supplied selector descriptor
///
/// Extractors receive these from the orchestrator instead of hard-coding one
/// page family's markup. In TOML a selector is written as a one-key table,
/// e.g. `{ class = "statistics" }` or `{ path = "body > table" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorSpec {
    /// Match elements by tag name
    Tag(String),

    /// Match elements carrying the given class
    Class(String),

    /// Match elements by a CSS path; only meaningful at document level
    Path(String),
}

impl SelectorSpec {
    /// Tag-name selector
    pub fn tag(name: impl Into<String>) -> Self {
        SelectorSpec::Tag(name.into())
    }

    /// Class selector
    pub fn class(name: impl Into<String>) -> Self {
        SelectorSpec::Class(name.into())
    }

    /// CSS path selector
    pub fn path(expr: impl Into<String>) -> Self {
        SelectorSpec::Path(expr.into())
    }

    /// Renders the selector as a CSS expression
    pub fn to_css(&self) -> String {
        match self {
            SelectorSpec::Tag(tag) => tag.clone(),
            SelectorSpec::Class(class) => format!(".{}", class),
            SelectorSpec::Path(path) => path.clone(),
        }
    }
}

impl fmt::Display for SelectorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_css_tag() {
        assert_eq!(SelectorSpec::tag("tr").to_css(), "tr");
    }

    #[test]
    fn test_to_css_class() {
        assert_eq!(SelectorSpec::class("statistics").to_css(), ".statistics");
    }

    #[test]
    fn test_to_css_path() {
        assert_eq!(SelectorSpec::path("body > table").to_css(), "body > table");
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            sel: SelectorSpec,
        }

        let w: Wrapper = toml::from_str(r#"sel = { class = "statistics" }"#).unwrap();
        assert_eq!(w.sel, SelectorSpec::Class("statistics".to_string()));

        let w: Wrapper = toml::from_str(r#"sel = { path = "body > table" }"#).unwrap();
        assert_eq!(w.sel, SelectorSpec::Path("body > table".to_string()));

        let w: Wrapper = toml::from_str(r#"sel = { tag = "table" }"#).unwrap();
        assert_eq!(w.sel, SelectorSpec::Tag("table".to_string()));
    }
}
