//! Directive pipeline: extract blocks, parse arguments, look up the
//! operation, render, and splice the results back into the document.
//!
//! Per-block failures are converted to inline error markers at this
//! boundary; they never abort the document or affect sibling blocks.

use crate::directive::{ArgumentParser, BlockExtractor, DirectiveError};
use crate::render::render_endpoint;
use crate::spec::ResolvedSpec;
use tracing::warn;

pub struct Pipeline<'s> {
    spec: &'s ResolvedSpec,
    extractor: BlockExtractor,
    parser: ArgumentParser,
}

impl<'s> Pipeline<'s> {
    pub fn new(spec: &'s ResolvedSpec) -> anyhow::Result<Self> {
        Ok(Self {
            spec,
            extractor: BlockExtractor::new()?,
            parser: ArgumentParser::new()?,
        })
    }

    /// Replace every directive block in `text` with its rendered fragment or
    /// an inline error marker. Bytes outside block spans pass through
    /// unchanged.
    pub fn render_document(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;

        for block in self.extractor.blocks(text) {
            out.push_str(&text[cursor..block.start]);
            match self.render_block(block.body) {
                Ok(fragment) => out.push_str(&fragment),
                Err(err) => {
                    warn!("docs.endpoint block failed: {err}");
                    out.push_str(&format!("**Error parsing docs.endpoint**: {err}"));
                }
            }
            cursor = block.end;
        }

        out.push_str(&text[cursor..]);
        out
    }

    fn render_block(&self, body: &str) -> Result<String, DirectiveError> {
        let args = self.parser.parse(body)?;

        // Method is lowercased before lookup; a directive without a method
        // takes the path's first operation and renders as ANY.
        let op = match args.http_method.as_deref() {
            Some(m) => self.spec.lookup(&args.path, &m.to_ascii_lowercase()),
            None => self.spec.any_operation(&args.path),
        }
        .ok_or_else(|| DirectiveError::Lookup {
            path: args.path.clone(),
            method: args
                .http_method
                .as_deref()
                .map(str::to_ascii_lowercase)
                .unwrap_or_else(|| "any".to_string()),
        })?;

        render_endpoint(&args, op)
    }
}
