//! Directive block extraction.
//!
//! A block is an opening `::: docs.endpoint` marker line, a body of
//! arbitrary lines, and the nearest following `:::` closing line:
//!
//! ::: docs.endpoint
//! path: /users
//! http_method: GET
//! :::
//!
//! Blocks are matched non-greedily and non-overlapping, in document order.
//! Nesting is not supported.

use regex::Regex;

/// One matched directive span within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveBlock<'a> {
    /// Byte offset of the opening marker.
    pub start: usize,
    /// Byte offset one past the closing marker.
    pub end: usize,
    /// Text between the marker lines, without the surrounding newlines.
    pub body: &'a str,
}

pub struct BlockExtractor {
    block_re: Regex,
}

impl BlockExtractor {
    pub fn new() -> anyhow::Result<Self> {
        // Non-greedy body so each opening marker pairs with the nearest `:::`.
        let block_re = Regex::new(r"(?s)::: docs\.endpoint\n(.*?)\n:::")?;
        Ok(Self { block_re })
    }

    /// All directive blocks in `text`, in document order.
    pub fn blocks<'t>(&self, text: &'t str) -> impl Iterator<Item = DirectiveBlock<'t>> {
        self.block_re.captures_iter(text).map(|caps| {
            let whole = caps.get(0).unwrap();
            let body = caps.get(1).unwrap();
            DirectiveBlock {
                start: whole.start(),
                end: whole.end(),
                body: body.as_str(),
            }
        })
    }
}
