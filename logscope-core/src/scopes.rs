//! # Invocation Scopes
//!
//! Every program invocation is framed by an `invoke` line and a closing
//! `success`/`failed` line, and invocations nest (CPI). Two views are offered:
//!
//! - [`filter_logs_by_program`] keeps the lines that occur inside any
//!   invocation of one program, nested foreign programs included.
//! - [`group_logs_by_program`] splits the stream into one [`ParsedLogEntry`]
//!   per invocation, emitted as each invocation closes.
//!
//! Both are lenient: unmatched framing lines never produce an error, only a
//! shorter result.

use crate::logs::LogLine;

/// The log lines belonging to a single program invocation, framing lines included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLogEntry {
    pub program_id: String,
    pub logs: Vec<String>,
}

impl ParsedLogEntry {
    /// Returns `true` if the invocation closed with a `failed` line.
    pub fn is_failed(&self) -> bool {
        self.logs
            .last()
            .is_some_and(|line| matches!(LogLine::parse(line), LogLine::Failed { .. }))
    }
}

/// Keeps the lines emitted while `program_id` is on the invocation stack.
///
/// Matching is purely textual on `"Program <id> invoke"`, `"Program <id> success"`
/// and `"Program <id> failed"`. Re-entrant invocations are tracked with a depth
/// counter so the outer scope stays open until its own closing line.
pub fn filter_logs_by_program<S: AsRef<str>>(logs: &[S], program_id: &str) -> Vec<String> {
    let invoke = format!("Program {} invoke", program_id);
    let success = format!("Program {} success", program_id);
    let failed = format!("Program {} failed", program_id);

    let mut depth: usize = 0;
    let mut in_scope = false;
    let mut filtered = Vec::new();

    for line in logs {
        let line = line.as_ref();
        if line.contains(&invoke) {
            depth += 1;
            in_scope = true;
        }
        if in_scope {
            filtered.push(line.to_string());
        }
        if line.contains(&success) || line.contains(&failed) {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                in_scope = false;
            }
        }
    }

    filtered
}

/// Splits a log stream into one entry per invocation, in the order invocations close.
///
/// Lines outside any invocation are dropped, as are invocations that never
/// close before the end of input.
pub fn group_logs_by_program<S: AsRef<str>>(logs: &[S]) -> Vec<ParsedLogEntry> {
    let mut stack: Vec<ParsedLogEntry> = Vec::new();
    let mut entries = Vec::new();

    for line in logs {
        let line = line.as_ref();
        let parsed = LogLine::parse(line);

        if let LogLine::Invoke { program_id, .. } = parsed {
            stack.push(ParsedLogEntry {
                program_id: program_id.to_string(),
                logs: vec![line.to_string()],
            });
            continue;
        }

        let Some(top) = stack.last_mut() else {
            continue;
        };
        top.logs.push(line.to_string());

        if parsed.closes_scope() {
            if let Some(entry) = stack.pop() {
                tracing::debug!(
                    program_id = %entry.program_id,
                    lines = entry.logs.len(),
                    "Closed invocation scope"
                );
                entries.push(entry);
            }
        }
    }

    if !stack.is_empty() {
        tracing::debug!(unclosed = stack.len(), "Dropping unclosed invocation scopes");
    }

    entries
}
