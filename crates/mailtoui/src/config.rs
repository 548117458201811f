//! Widget options
//!
//! Read once at start-up from the `data-options` attribute of the script
//! tag that loaded the widget, immutable afterwards.

use serde::Deserialize;

use crate::{ConfigError, UiHost};

/// Default namespacing prefix
pub const DEFAULT_LINK_CLASS: &str = "mailtoui";

/// Attribute carrying the JSON options blob
pub const OPTIONS_ATTRIBUTE: &str = "data-options";

/// Process-wide widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Class marking qualifying links; prefixes every class and id the
    /// widget emits
    pub link_class: String,

    /// Close the dialog when a client choice is activated
    pub auto_close: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            link_class: DEFAULT_LINK_CLASS.to_string(),
            auto_close: true,
        }
    }
}

impl Options {
    /// Parse a JSON payload. Unknown keys are ignored, missing keys keep
    /// their defaults.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        let mut options: Options = serde_json::from_value(value)?;

        let trimmed = options.link_class.trim();
        options.link_class = if trimmed.is_empty() {
            DEFAULT_LINK_CLASS.to_string()
        } else {
            trimmed.to_string()
        };
        Ok(options)
    }

    /// Options from an optional payload; never fails
    pub fn load(payload: Option<&str>) -> Self {
        let Some(payload) = payload.filter(|p| !p.trim().is_empty()) else {
            return Self::default();
        };
        match Self::parse(payload) {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!("Ignoring widget options: {}", e);
                Self::default()
            }
        }
    }

    /// Options from the last `<script>` element on the page
    pub fn from_script_tag<H: UiHost>(host: &H) -> Self {
        let payload = host
            .elements_by_tag("script")
            .last()
            .and_then(|&script| host.attribute(script, OPTIONS_ATTRIBUTE));
        Self::load(payload)
    }

    /// The link class with `suffix` appended
    pub fn prefix(&self, suffix: &str) -> String {
        format!("{}{}", self.link_class, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Page;
    use mailtoui_dom::ElementSpec;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.link_class, "mailtoui");
        assert!(options.auto_close);
        assert_eq!(options.prefix("-modal"), "mailtoui-modal");
    }

    #[test]
    fn test_parse_partial_and_unknown_keys() {
        let options = Options::parse(r#"{"autoClose": false, "theme": "dark"}"#).unwrap();
        assert_eq!(options.link_class, "mailtoui");
        assert!(!options.auto_close);

        let options = Options::parse(r#"{"linkClass": " mailme "}"#).unwrap();
        assert_eq!(options.link_class, "mailme");
        assert!(options.auto_close);
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(matches!(Options::parse("[\"x\", true]"), Err(ConfigError::NotAnObject)));
        assert!(matches!(Options::parse("{linkClass:"), Err(ConfigError::Json(_))));
        assert!(matches!(Options::parse(r#"{"autoClose": "yes"}"#), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_falls_back() {
        assert_eq!(Options::load(None), Options::default());
        assert_eq!(Options::load(Some("   ")), Options::default());
        assert_eq!(Options::load(Some("not json")), Options::default());
        assert_eq!(Options::load(Some(r#"{"linkClass": ""}"#)), Options::default());
    }

    #[test]
    fn test_from_last_script_tag() {
        let mut page = Page::new();
        page.append_to_head(&ElementSpec::new("script").attr(OPTIONS_ATTRIBUTE, r#"{"linkClass": "early"}"#));
        page.append_to_body(&ElementSpec::new("script").attr(OPTIONS_ATTRIBUTE, r#"{"linkClass": "late"}"#));

        assert_eq!(Options::from_script_tag(&page).link_class, "late");
    }

    #[test]
    fn test_from_script_tag_without_options() {
        let mut page = Page::new();
        page.append_to_body(&ElementSpec::new("script"));
        assert_eq!(Options::from_script_tag(&page), Options::default());
    }
}
