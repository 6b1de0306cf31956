//! Content items handed over by the host query pipeline.

use serde::{Deserialize, Serialize};

/// A single piece of content retrieved for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Host identifier, used for opt-out lookups
    pub id: u64,

    /// Content type tag (e.g. `post`, `page`)
    pub content_type: String,

    /// Markup body, mutated in place when paginated
    pub body: String,
}

impl ContentItem {
    /// Create a new content item.
    pub fn new(id: u64, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// Create a `post` item.
    pub fn post(id: u64, body: impl Into<String>) -> Self {
        Self::new(id, "post", body)
    }

    /// Check whether the item is of the given content type.
    pub fn is_type(&self, content_type: &str) -> bool {
        self.content_type == content_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_constructor() {
        let item = ContentItem::post(7, "body");
        assert_eq!(item.id, 7);
        assert!(item.is_type("post"));
        assert!(!item.is_type("page"));
    }

    #[test]
    fn test_item_json_shape() {
        let item = ContentItem::new(1, "page", "hi");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"content_type":"page","body":"hi"}"#);
    }
}
