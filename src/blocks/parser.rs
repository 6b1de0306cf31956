//! Stack-based parser for comment-delimited block markup.

use crate::error::{Error, Result};
use crate::model::Block;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Namespace given to block names written without one.
const DEFAULT_NAMESPACE: &str = "core/";

/// Parse block markup into a sequence of top-level blocks.
///
/// HTML outside any delimiter becomes a freeform block, so concatenating the
/// serialized output reproduces the input for well-formed markup.
///
/// # Errors
///
/// Returns [`Error::BlockParse`] when a delimiter carries attributes that are
/// not a valid JSON object.
///
/// # Example
/// ```
/// use autopaging::blocks::parse_blocks;
///
/// let blocks = parse_blocks("<!-- wp:paragraph --><p>Hi</p><!-- /wp:paragraph -->")?;
/// assert_eq!(blocks[0].name(), Some("core/paragraph"));
/// assert_eq!(blocks[0].inner_html, "<p>Hi</p>");
/// # Ok::<(), autopaging::Error>(())
/// ```
pub fn parse_blocks(document: &str) -> Result<Vec<Block>> {
    let mut parser = BlockParser::new(document);
    while parser.proceed()? {}
    Ok(parser.output)
}

fn delimiter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"<!--\s+(?P<closer>/)?wp:(?P<namespace>[a-z][a-z0-9_-]*/)?(?P<name>[a-z][a-z0-9_-]*)\s+",
        )
        .expect("block delimiter pattern is valid")
    })
}

fn attrs_end_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\}\s+(?P<void>/)?-->").expect("attribute end pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Opener,
    Closer,
    Void,
}

#[derive(Debug)]
struct Token {
    kind: TokenKind,
    name: String,
    attrs: Map<String, Value>,
    start: usize,
    len: usize,
}

impl Token {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Find the next block delimiter at or after `from`.
fn next_token(document: &str, from: usize) -> Result<Option<Token>> {
    let mut search = from;

    while let Some(caps) = delimiter_regex().captures_at(document, search) {
        let Some(head) = caps.get(0) else { break };
        let start = head.start();
        let rest = &document[head.end()..];

        let (attrs_src, is_void, tail_len) = if rest.starts_with("/-->") {
            (None, true, 4)
        } else if rest.starts_with("-->") {
            (None, false, 3)
        } else if rest.starts_with('{') {
            match attrs_end_regex().captures(rest) {
                Some(end_caps) => match end_caps.get(0) {
                    Some(end) => (
                        Some(&rest[..end.start() + 1]),
                        end_caps.name("void").is_some(),
                        end.end(),
                    ),
                    None => break,
                },
                None => {
                    search = start + 1;
                    continue;
                }
            }
        } else {
            // Looked like a delimiter but isn't one; keep scanning.
            search = start + 1;
            continue;
        };

        let namespace = caps
            .name("namespace")
            .map_or(DEFAULT_NAMESPACE, |m| m.as_str());
        let name = caps.name("name").map_or("", |m| m.as_str());
        let is_closer = caps.name("closer").is_some();

        let attrs = match attrs_src {
            Some(src) => serde_json::from_str::<Map<String, Value>>(src).map_err(|e| {
                Error::BlockParse {
                    offset: start,
                    message: format!("invalid attributes for {}{}: {}", namespace, name, e),
                }
            })?,
            None => Map::new(),
        };

        // A void marker wins over a closer slash.
        let kind = if is_void {
            TokenKind::Void
        } else if is_closer {
            TokenKind::Closer
        } else {
            TokenKind::Opener
        };

        return Ok(Some(Token {
            kind,
            name: format!("{}{}", namespace, name),
            attrs,
            start,
            len: head.end() - start + tail_len,
        }));
    }

    Ok(None)
}

/// An open block waiting for its closer.
struct Frame {
    block: Block,
    token_start: usize,
    prev_offset: usize,
    leading_html_start: Option<usize>,
}

struct BlockParser<'a> {
    document: &'a str,
    offset: usize,
    output: Vec<Block>,
    stack: Vec<Frame>,
}

impl<'a> BlockParser<'a> {
    fn new(document: &'a str) -> Self {
        Self {
            document,
            offset: 0,
            output: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Consume one token. Returns `false` once the document is exhausted.
    fn proceed(&mut self) -> Result<bool> {
        let depth = self.stack.len();

        let Some(token) = next_token(self.document, self.offset)? else {
            if depth == 0 {
                self.add_freeform();
            } else {
                // Unclosed blocks are closed implicitly at end of input.
                while !self.stack.is_empty() {
                    self.add_block_from_stack(None);
                }
            }
            return Ok(false);
        };

        let leading_html_start = (token.start > self.offset).then_some(self.offset);

        match token.kind {
            TokenKind::Void => {
                let end = token.end();
                let start = token.start;
                let block = Block::new(token.name, token.attrs);
                if depth == 0 {
                    if let Some(html_start) = leading_html_start {
                        self.output
                            .push(Block::freeform(&self.document[html_start..start]));
                    }
                    self.output.push(block);
                } else {
                    self.add_inner_block(block, start, end);
                }
                self.offset = end;
            }
            TokenKind::Opener => {
                let end = token.end();
                self.stack.push(Frame {
                    block: Block::new(token.name, token.attrs),
                    token_start: token.start,
                    prev_offset: end,
                    leading_html_start,
                });
                self.offset = end;
            }
            TokenKind::Closer => {
                if depth == 0 {
                    // Stray closer: everything left is plain HTML.
                    log::debug!("Stray block closer at byte {}", token.start);
                    self.add_freeform();
                    return Ok(false);
                }

                if depth == 1 {
                    self.add_block_from_stack(Some(token.start));
                } else if let Some(mut top) = self.stack.pop() {
                    let html = &self.document[top.prev_offset..token.start];
                    top.block.push_html(html);
                    self.add_inner_block(top.block, top.token_start, token.end());
                }
                self.offset = token.end();
            }
        }

        Ok(true)
    }

    /// Emit the rest of the document as a freeform block.
    fn add_freeform(&mut self) {
        if self.offset < self.document.len() {
            self.output
                .push(Block::freeform(&self.document[self.offset..]));
        }
    }

    /// Attach a finished block to the innermost open block.
    ///
    /// `resume_at` is where the parent's own HTML continues after the child.
    fn add_inner_block(&mut self, block: Block, token_start: usize, resume_at: usize) {
        let document = self.document;
        let Some(parent) = self.stack.last_mut() else {
            self.output.push(block);
            return;
        };

        let html = &document[parent.prev_offset..token_start];
        if !html.is_empty() {
            parent.block.push_html(html);
        }
        parent.block.push_inner_block(block);
        parent.prev_offset = resume_at;
    }

    /// Close the innermost open block and emit it at top level.
    fn add_block_from_stack(&mut self, end_offset: Option<usize>) {
        let Some(mut top) = self.stack.pop() else {
            return;
        };

        let document = self.document;
        let html = match end_offset {
            Some(end) => &document[top.prev_offset..end],
            None => &document[top.prev_offset..],
        };
        if !html.is_empty() {
            top.block.push_html(html);
        }

        if let Some(html_start) = top.leading_html_start {
            self.output
                .push(Block::freeform(&document[html_start..top.token_start]));
        }
        self.output.push(top.block);
    }
}
