//! Directive argument parsing.
//!
//! The body of a `docs.endpoint` block is a sequence of `key: value` lines.
//! `tips` is the only list-valued key: its value is given as continuation
//! lines indented by exactly four spaces.
//!
//! path: /users
//! http_method: GET
//! tips:
//!     prefer cursor pagination
//!     responses are cached for 60s
//!
//! Parsing is a two-state machine: `Scanning` for `key: value` lines, and
//! `CollectingTips` after a `tips` key line. Continuation lines collected in
//! `CollectingTips` always win over an inline `tips:` value.

use crate::directive::error::DirectiveError;
use regex::Regex;

/// Validated arguments of one endpoint directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointArguments {
    /// API path of the endpoint, as written in the OpenAPI document.
    pub path: String,
    pub http_method: Option<String>,
    pub endpoint_title: Option<String>,
    pub endpoint_icon: Option<String>,
    pub tips: Option<Vec<String>>,
}

/// Parser states: `CollectingTips` is entered by a `tips` key line and left
/// by the next key line. Lines that match neither pattern are ignored and
/// keep the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    CollectingTips,
}

/// Raw field values before validation. `tips` keeps the inline-string vs
/// collected-list distinction so validation can reject a non-list value.
#[derive(Debug, Default)]
struct RawFields {
    path: Option<String>,
    http_method: Option<String>,
    endpoint_title: Option<String>,
    endpoint_icon: Option<String>,
    tips: Option<TipsValue>,
}

#[derive(Debug)]
enum TipsValue {
    Inline(String),
    List(Vec<String>),
}

impl RawFields {
    fn set(&mut self, key: &str, value: &str) {
        match key {
            "path" => self.path = Some(value.to_string()),
            "http_method" => self.http_method = Some(value.to_string()),
            "endpoint_title" => self.endpoint_title = Some(value.to_string()),
            "endpoint_icon" => self.endpoint_icon = Some(value.to_string()),
            "tips" => self.tips = Some(TipsValue::Inline(value.to_string())),
            // Unknown keys are ignored.
            _ => {}
        }
    }

    fn validate(self) -> Result<EndpointArguments, DirectiveError> {
        let path = match self.path {
            Some(p) if !p.is_empty() => p,
            Some(_) => {
                return Err(DirectiveError::Validation {
                    field: "path",
                    reason: "must not be empty".to_string(),
                });
            }
            None => {
                return Err(DirectiveError::Validation {
                    field: "path",
                    reason: "field required".to_string(),
                });
            }
        };

        let tips = match self.tips {
            None => None,
            Some(TipsValue::List(list)) => Some(list),
            Some(TipsValue::Inline(_)) => {
                return Err(DirectiveError::Validation {
                    field: "tips",
                    reason: "expected an indented list of strings, not an inline value".to_string(),
                });
            }
        };

        Ok(EndpointArguments {
            path,
            http_method: self.http_method,
            endpoint_title: self.endpoint_title,
            endpoint_icon: self.endpoint_icon,
            tips,
        })
    }
}

pub struct ArgumentParser {
    key_re: Regex,
    continuation_re: Regex,
}

impl ArgumentParser {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            // Key is a bare identifier; the value may be empty.
            key_re: Regex::new(r"^\s*(\w+):\s*(.*)$")?,
            // Exactly four leading spaces, then non-empty content.
            continuation_re: Regex::new(r"^ {4}(.+)$")?,
        })
    }

    /// Parse one block body into validated arguments.
    ///
    /// A key line with a blank (or whitespace-only) value records nothing,
    /// except `tips:` which records an empty list. If at least one
    /// continuation line follows a `tips` key line, the collected list
    /// replaces whatever value `tips` held before.
    pub fn parse(&self, body: &str) -> Result<EndpointArguments, DirectiveError> {
        let mut fields = RawFields::default();
        let mut collected: Vec<String> = Vec::new();
        let mut state = State::Scanning;

        for line in body.lines() {
            if let Some(caps) = self.key_re.captures(line) {
                let key = caps.get(1).unwrap().as_str();
                let value = caps.get(2).unwrap().as_str().trim();

                state = if key == "tips" {
                    State::CollectingTips
                } else {
                    State::Scanning
                };

                if !value.is_empty() {
                    fields.set(key, value);
                } else if key == "tips" {
                    fields.tips = Some(TipsValue::List(Vec::new()));
                }
                continue;
            }

            if state == State::CollectingTips {
                if let Some(caps) = self.continuation_re.captures(line) {
                    collected.push(caps.get(1).unwrap().as_str().trim().to_string());
                }
            }
        }

        if !collected.is_empty() {
            fields.tips = Some(TipsValue::List(collected));
        }

        fields.validate()
    }
}
