//! Raw option values as the host stores them.

use super::options::{PaginationConfig, DEFAULT_NUM_PAGES, DEFAULT_POST_TYPES};
use super::sanitize::sanitize_paging_type;
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// Snapshot of stored options, keyed by the host's option names.
///
/// Missing options are `None`. Numeric options accept numbers, numeric
/// strings and the empty string, since that is how form submissions end up
/// in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOptions {
    /// Supported content types
    #[serde(rename = "autopaging_post_types", default)]
    pub post_types: Option<Vec<String>>,

    /// Paging type (`pages` or `words`)
    #[serde(rename = "autopaging_paging_type", default)]
    pub paging_type: Option<String>,

    /// Number of pages to split into
    #[serde(
        rename = "autopaging_num_pages",
        default,
        deserialize_with = "lenient_int"
    )]
    pub num_pages: Option<i64>,

    /// Approximate words per page
    #[serde(
        rename = "autopaging_num_words",
        default,
        deserialize_with = "lenient_int"
    )]
    pub num_words: Option<i64>,
}

impl StoredOptions {
    /// Parse an options snapshot from JSON.
    ///
    /// # Example
    /// ```
    /// use autopaging::settings::StoredOptions;
    ///
    /// let options = StoredOptions::from_json_str(r#"{"autopaging_num_pages": "3"}"#)?;
    /// assert_eq!(options.resolve().num_pages(), 3);
    /// # Ok::<(), autopaging::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read an options snapshot from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Resolve stored values into a configuration, applying defaults.
    ///
    /// Negative numbers are taken as absolute values. A page count of zero
    /// falls back to the default; a word count of zero means unset.
    pub fn resolve(&self) -> PaginationConfig {
        let post_types = match &self.post_types {
            Some(types) => types.clone(),
            None => DEFAULT_POST_TYPES.iter().map(|t| t.to_string()).collect(),
        };

        let paging_type = self
            .paging_type
            .as_deref()
            .map(sanitize_paging_type)
            .unwrap_or_default();

        let num_pages = match self.num_pages.map(absint) {
            None | Some(0) => DEFAULT_NUM_PAGES,
            Some(n) => n,
        };

        let num_words = self.num_words.map(absint).unwrap_or(0);

        PaginationConfig::new()
            .with_post_types(post_types)
            .with_paging_type(paging_type)
            .with_num_pages(num_pages)
            .with_num_words(num_words)
    }
}

fn absint(value: i64) -> u32 {
    u32::try_from(value.unsigned_abs()).unwrap_or(u32::MAX)
}

fn lenient_int<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(Value::Bool(b)) => Some(i64::from(b)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::PagingType;

    #[test]
    fn test_resolve_empty() {
        let config = StoredOptions::default().resolve();
        assert_eq!(config, PaginationConfig::default());
    }

    #[test]
    fn test_resolve_values() {
        let options = StoredOptions::from_json_str(
            r#"{
                "autopaging_post_types": ["post", "page"],
                "autopaging_paging_type": "words",
                "autopaging_num_pages": 4,
                "autopaging_num_words": "350"
            }"#,
        )
        .unwrap();

        let config = options.resolve();
        assert!(config.allows("page"));
        assert_eq!(config.paging_type(), PagingType::Words);
        assert_eq!(config.num_pages(), 4);
        assert_eq!(config.num_words(), 350);
    }

    #[test]
    fn test_resolve_fallbacks() {
        let options = StoredOptions::from_json_str(
            r#"{
                "autopaging_paging_type": "sentences",
                "autopaging_num_pages": 0,
                "autopaging_num_words": ""
            }"#,
        )
        .unwrap();

        assert_eq!(options.num_words, None);
        let config = options.resolve();
        assert_eq!(config.paging_type(), PagingType::Pages);
        assert_eq!(config.num_pages(), 2);
        assert_eq!(config.num_words(), 0);
    }

    #[test]
    fn test_resolve_negative() {
        let options = StoredOptions {
            num_pages: Some(-3),
            num_words: Some(-120),
            ..Default::default()
        };
        let config = options.resolve();
        assert_eq!(config.num_pages(), 3);
        assert_eq!(config.num_words(), 120);
    }

    #[test]
    fn test_invalid_json() {
        assert!(StoredOptions::from_json_str("[1, 2]").is_err());
    }
}
