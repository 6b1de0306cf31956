//! Block serialization back into comment-delimited markup.

use crate::model::Block;
use serde_json::{Map, Value};

/// Serialize a sequence of blocks.
pub fn serialize_blocks(blocks: &[Block]) -> String {
    blocks.iter().map(serialize_block).collect()
}

/// Serialize a single block, including its inner blocks.
pub fn serialize_block(block: &Block) -> String {
    let mut content = String::new();
    let mut inner_blocks = block.inner_blocks.iter();

    for chunk in &block.inner_content {
        match chunk {
            Some(html) => content.push_str(html),
            None => {
                if let Some(inner) = inner_blocks.next() {
                    content.push_str(&serialize_block(inner));
                }
            }
        }
    }

    match block.name() {
        Some(name) => delimited_content(name, &block.attrs, &content),
        None => content,
    }
}

/// Encode block attributes for use inside a delimiter comment.
///
/// Sequences that could end the comment or be read as markup are written as
/// unicode escapes.
pub fn serialize_attributes(attrs: &Map<String, Value>) -> String {
    Value::Object(attrs.clone())
        .to_string()
        .replace("--", "\\u002d\\u002d")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace("\\\"", "\\u0022")
}

fn delimited_content(name: &str, attrs: &Map<String, Value>, content: &str) -> String {
    let name = strip_core_namespace(name);
    let attrs = if attrs.is_empty() {
        String::new()
    } else {
        format!("{} ", serialize_attributes(attrs))
    };

    if content.is_empty() {
        format!("<!-- wp:{} {}/-->", name, attrs)
    } else {
        format!(
            "<!-- wp:{} {}-->{}<!-- /wp:{} -->",
            name, attrs, content, name
        )
    }
}

fn strip_core_namespace(name: &str) -> &str {
    name.strip_prefix("core/").unwrap_or(name)
}
