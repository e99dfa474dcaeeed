//! Directive layer: block extraction and argument parsing for the
//! `docs.endpoint` tag.

pub mod args;
pub mod block;
pub mod error;

pub use args::{ArgumentParser, EndpointArguments};
pub use block::{BlockExtractor, DirectiveBlock};
pub use error::DirectiveError;
