//! # Log Line Classification
//!
//! The runtime writes transaction logs as free text following a handful of
//! informal conventions:
//!
//! ```text
//! Program <id> invoke [<depth>]
//! Program log: <text>
//! Program data: <base64>
//! Program return: <id> <base64>
//! Program <id> consumed <n> of <m> compute units
//! Program <id> success
//! Program <id> failed: <reason>
//! ```
//!
//! [`LogLine::parse`] recognises these shapes. Program ids are kept as opaque
//! tokens; they are compared textually and never validated as addresses.

use crate::lenient::skip_on_error;
use base64::{engine::general_purpose::STANDARD as BASE64, DecodeError, Engine};

pub const PROGRAM_DATA_PREFIX: &str = "Program data: ";
pub const PROGRAM_LOG_PREFIX: &str = "Program log: ";
pub const PROGRAM_RETURN_PREFIX: &str = "Program return: ";
const PROGRAM_PREFIX: &str = "Program ";

/// A single transaction log line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLine<'a> {
    Invoke {
        program_id: &'a str,
        /// Invocation depth as printed by the runtime, when present and numeric.
        depth: Option<u32>,
    },
    Success {
        program_id: &'a str,
    },
    Failed {
        program_id: &'a str,
        reason: &'a str,
    },
    Log(&'a str),
    /// Base64 payload of a `Program data:` line, not yet decoded.
    Data(&'a str),
    Return {
        program_id: &'a str,
        data: &'a str,
    },
    Consumed {
        program_id: &'a str,
        consumed: u64,
        budget: u64,
    },
    Other(&'a str),
}

impl<'a> LogLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        if let Some(text) = line.strip_prefix(PROGRAM_LOG_PREFIX) {
            return LogLine::Log(text);
        }
        if let Some(data) = line.strip_prefix(PROGRAM_DATA_PREFIX) {
            return LogLine::Data(data);
        }
        if let Some(rest) = line.strip_prefix(PROGRAM_RETURN_PREFIX) {
            return match rest.split_once(' ') {
                Some((program_id, data)) => LogLine::Return { program_id, data },
                None => LogLine::Other(line),
            };
        }

        let Some((program_id, tail)) = line
            .strip_prefix(PROGRAM_PREFIX)
            .and_then(|rest| rest.split_once(' '))
        else {
            return LogLine::Other(line);
        };
        // "Program log:", "Program data:" and friends are not program ids.
        if program_id.is_empty() || program_id.ends_with(':') {
            return LogLine::Other(line);
        }

        let tail = tail.trim_end();
        if tail == "invoke" || tail.starts_with("invoke ") {
            let depth = tail["invoke".len()..]
                .trim()
                .strip_prefix('[')
                .and_then(|d| d.strip_suffix(']'))
                .and_then(|d| d.parse().ok());
            return LogLine::Invoke { program_id, depth };
        }
        if tail == "success" {
            return LogLine::Success { program_id };
        }
        if let Some(reason) = tail.strip_prefix("failed") {
            let reason = reason.strip_prefix(':').unwrap_or(reason).trim();
            return LogLine::Failed { program_id, reason };
        }
        if let Some(usage) = tail.strip_prefix("consumed ") {
            if let Some((consumed, budget)) = parse_compute_usage(usage) {
                return LogLine::Consumed {
                    program_id,
                    consumed,
                    budget,
                };
            }
        }
        LogLine::Other(line)
    }

    /// The program that opened or closed a scope on this line, if any.
    pub fn program_id(&self) -> Option<&'a str> {
        match *self {
            LogLine::Invoke { program_id, .. }
            | LogLine::Success { program_id }
            | LogLine::Failed { program_id, .. }
            | LogLine::Return { program_id, .. }
            | LogLine::Consumed { program_id, .. } => Some(program_id),
            LogLine::Log(_) | LogLine::Data(_) | LogLine::Other(_) => None,
        }
    }

    /// Returns `true` for `success` and `failed` lines.
    pub fn closes_scope(&self) -> bool {
        matches!(self, LogLine::Success { .. } | LogLine::Failed { .. })
    }
}

/// Parses `"<n> of <m> compute units"`.
fn parse_compute_usage(usage: &str) -> Option<(u64, u64)> {
    let mut parts = usage.split_whitespace();
    let consumed = parts.next()?.parse().ok()?;
    if parts.next()? != "of" {
        return None;
    }
    let budget = parts.next()?.parse().ok()?;
    Some((consumed, budget))
}

/// Extracts the payload of a `Program data:` line, keeping decode failures visible.
///
/// Returns `Ok(None)` for lines that do not carry data and `Err` for data lines
/// whose payload is not valid base64.
pub fn try_parse_log_data(line: &str) -> Result<Option<Vec<u8>>, DecodeError> {
    match line.strip_prefix(PROGRAM_DATA_PREFIX) {
        Some(encoded) => BASE64.decode(encoded.trim()).map(Some),
        None => Ok(None),
    }
}

/// Extracts the payload of a `Program data:` line.
///
/// Lines without the prefix and lines with malformed base64 both yield `None`.
/// An empty payload is `Some(vec![])`.
pub fn parse_log_data(line: &str) -> Option<Vec<u8>> {
    skip_on_error("program data", try_parse_log_data(line)).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invoke_with_depth() {
        assert_eq!(
            LogLine::parse("Program 11111111111111111111111111111111 invoke [2]"),
            LogLine::Invoke {
                program_id: "11111111111111111111111111111111",
                depth: Some(2)
            }
        );
    }

    #[test]
    fn test_parse_failed_with_reason() {
        assert_eq!(
            LogLine::parse("Program Abc failed: custom program error: 0x1"),
            LogLine::Failed {
                program_id: "Abc",
                reason: "custom program error: 0x1"
            }
        );
    }

    #[test]
    fn test_parse_consumed() {
        assert_eq!(
            LogLine::parse("Program Abc consumed 1234 of 200000 compute units"),
            LogLine::Consumed {
                program_id: "Abc",
                consumed: 1234,
                budget: 200000
            }
        );
    }

    #[test]
    fn test_log_text_is_never_a_scope_marker() {
        let line = LogLine::parse("Program log: invoke");
        assert_eq!(line, LogLine::Log("invoke"));
        assert_eq!(line.program_id(), None);
        assert!(!LogLine::parse("Program log: success").closes_scope());
    }

    #[test]
    fn test_parse_return() {
        assert_eq!(
            LogLine::parse("Program return: Abc AQID"),
            LogLine::Return {
                program_id: "Abc",
                data: "AQID"
            }
        );
    }

    #[test]
    fn test_malformed_base64_is_an_error_only_in_try_variant() {
        assert!(try_parse_log_data("Program data: !!!not base64!!!").is_err());
        assert_eq!(parse_log_data("Program data: !!!not base64!!!"), None);
    }

    #[test]
    fn test_empty_payload_is_valid() {
        assert_eq!(parse_log_data("Program data: "), Some(vec![]));
    }
}
