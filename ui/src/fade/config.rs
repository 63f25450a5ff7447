//! Selector and class names the controller works with.

use serde::{Deserialize, Serialize};

use super::error::{FadeError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// First match is the element whose classes get toggled.
    pub navbar_selector: String,
    /// First match sets the scroll threshold.
    pub hero_selector: String,
    /// Any match anywhere on the page adds the navbar height to the threshold.
    pub fixed_top_selector: String,
    pub transparent_class: String,
    pub opaque_class: String,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            navbar_selector: ".navbar".into(),
            hero_selector: ".hero".into(),
            fixed_top_selector: ".has-navbar-fixed-top".into(),
            transparent_class: "navbar-transparent".into(),
            opaque_class: "navbar-opaque".into(),
        }
    }
}

impl FadeConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| FadeError::ConfigParse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("navbar_selector", &self.navbar_selector),
            ("hero_selector", &self.hero_selector),
            ("fixed_top_selector", &self.fixed_top_selector),
            ("transparent_class", &self.transparent_class),
            ("opaque_class", &self.opaque_class),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(FadeError::Config(format!("`{name}` must not be empty")));
            }
        }
        for (name, class) in [
            ("transparent_class", &self.transparent_class),
            ("opaque_class", &self.opaque_class),
        ] {
            if class.chars().any(char::is_whitespace) {
                return Err(FadeError::Config(format!(
                    "`{name}` must be a single class name, got `{class}`"
                )));
            }
        }
        if self.transparent_class == self.opaque_class {
            return Err(FadeError::Config(
                "`transparent_class` and `opaque_class` must differ".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_markup() {
        let config = FadeConfig::default();
        assert_eq!(config.navbar_selector, ".navbar");
        assert_eq!(config.hero_selector, ".hero");
        assert_eq!(config.fixed_top_selector, ".has-navbar-fixed-top");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = FadeConfig::from_json(r#"{ "hero_selector": ".banner" }"#).unwrap();
        assert_eq!(config.hero_selector, ".banner");
        assert_eq!(config.navbar_selector, ".navbar");
        assert_eq!(config.opaque_class, "navbar-opaque");
    }

    #[test]
    fn rejects_identical_state_classes() {
        let err = FadeConfig::from_json(
            r#"{ "transparent_class": "same", "opaque_class": "same" }"#,
        )
        .unwrap_err();
        assert!(matches!(err, FadeError::Config(_)));
    }

    #[test]
    fn rejects_blank_selector() {
        let err = FadeConfig::from_json(r#"{ "navbar_selector": "  " }"#).unwrap_err();
        assert_eq!(
            err,
            FadeError::Config("`navbar_selector` must not be empty".into())
        );
    }

    #[test]
    fn rejects_multi_token_class() {
        let err = FadeConfig::from_json(r#"{ "opaque_class": "a b" }"#).unwrap_err();
        assert!(matches!(err, FadeError::Config(_)));
    }

    #[test]
    fn reports_malformed_json() {
        let err = FadeConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FadeError::ConfigParse(_)));
    }
}
