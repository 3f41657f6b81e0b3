//! Command template resolution
//!
//! Templates contain `{{ .Path.To.Field }}` placeholders. The context is
//! serialized to a value tree and each placeholder walks that tree one
//! segment at a time. A placeholder that cannot be satisfied is an error;
//! the command is never run with a hole in it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::{BerthError, BerthResult};

/// Length of a full content hash as docker prints it
const FULL_SHA_LEN: usize = 64;
/// Length hashes are cut to for display
const SHORT_SHA_LEN: usize = 10;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*(.*?)\s*\}\}").expect("placeholder pattern is valid"));

/// Substitute every placeholder in `template` with the matching field of `context`
pub fn resolve<T: Serialize + ?Sized>(template: &str, context: &T) -> BerthResult<String> {
    let root = serde_json::to_value(context).map_err(|e| {
        BerthError::template(template, format!("context cannot be serialized: {}", e))
    })?;

    let mut resolved = String::with_capacity(template.len());
    let mut last = 0;

    for captures in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let literal = &template[last..whole.start()];
        check_literal(template, literal)?;
        resolved.push_str(literal);

        let expression = captures.get(1).map_or("", |m| m.as_str());
        let value = lookup(&root, expression).map_err(|msg| BerthError::template(template, msg))?;
        resolved.push_str(&value);
        last = whole.end();
    }

    let tail = &template[last..];
    check_literal(template, tail)?;
    resolved.push_str(tail);

    Ok(resolved)
}

/// Shorten every 64 character hex word to its first 10 characters
///
/// Used only for what the menu shows; the command that runs keeps the
/// full hashes.
pub fn with_short_sha(command: &str) -> String {
    command
        .split(' ')
        .map(|word| {
            if is_full_sha(word) {
                &word[..SHORT_SHA_LEN]
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_full_sha(word: &str) -> bool {
    word.len() == FULL_SHA_LEN && word.bytes().all(|b| b.is_ascii_hexdigit())
}

fn check_literal(template: &str, literal: &str) -> BerthResult<()> {
    if literal.contains("{{") {
        return Err(BerthError::template(template, "unterminated placeholder"));
    }
    Ok(())
}

fn lookup(root: &Value, expression: &str) -> Result<String, String> {
    let Some(path) = expression.strip_prefix('.') else {
        return Err(format!(
            "unsupported expression '{}', placeholders must start with '.'",
            expression
        ));
    };

    let mut current = root;
    let mut walked = String::new();
    for segment in path.split('.') {
        if segment.is_empty() {
            return Err(format!("malformed field path '{}'", expression));
        }
        walked.push('.');
        walked.push_str(segment);

        current = match current {
            Value::Object(fields) => fields
                .get(segment)
                .ok_or_else(|| format!("field '{}' does not exist on this context", walked))?,
            Value::Null => {
                return Err(format!(
                    "'{}' is not set for this context",
                    walked.rsplit_once('.').map_or("", |(parent, _)| parent)
                ));
            }
            _ => return Err(format!("'{}' has no fields", walked)),
        };
    }

    match current {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(format!("'{}' is not set for this context", walked)),
        Value::Array(_) | Value::Object(_) => {
            Err(format!("'{}' is not a single value", expression))
        }
    }
}

#[cfg(test)]
mod tests;
