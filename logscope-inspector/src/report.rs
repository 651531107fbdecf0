//! Plain-text rendering of inspection results.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use logscope_core::{ExtractedEvent, ParsedLogEntry};
use solana_sdk::pubkey::Pubkey;

/// One header per scope followed by its indented lines, in closing order.
pub fn render_scopes(entries: &[ParsedLogEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let status = if entry.is_failed() { "failed" } else { "ok" };
            let header = format!(
                "#{} {} [{}] {} lines\n",
                index,
                entry.program_id,
                status,
                entry.logs.len()
            );
            let body: String = entry.logs.iter().map(|line| format!("    {}\n", line)).collect();
            header + &body
        })
        .collect()
}

pub fn render_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

/// `<name> <base64 payload>` per event.
pub fn render_events(events: &[ExtractedEvent<Vec<u8>>]) -> String {
    events
        .iter()
        .map(|event| format!("{} {}\n", event.name, BASE64.encode(&event.data)))
        .collect()
}

pub fn render_derived(address: &Pubkey, bump: u8) -> String {
    format!("{} bump={}\n", address, bump)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scopes_marks_failures() {
        let entries = vec![ParsedLogEntry {
            program_id: "A".to_string(),
            logs: vec!["Program A invoke [1]".to_string(), "Program A failed: x".to_string()],
        }];
        assert_eq!(
            render_scopes(&entries),
            "#0 A [failed] 2 lines\n    Program A invoke [1]\n    Program A failed: x\n"
        );
    }

    #[test]
    fn test_render_events() {
        let events = vec![ExtractedEvent {
            name: "TestEvent".to_string(),
            data: vec![1, 2, 3],
            raw: vec![],
        }];
        assert_eq!(render_events(&events), "TestEvent AQID\n");
    }
}
