//! Plain-text and markdown rendering of the history.

use dado_core::RollEntry;
use dado_core::formula::{format_modifier, format_rolls};

use crate::log::HistoryLog;

fn context_suffix(entry: &RollEntry) -> String {
    entry.context().map(|c| format!(" ({c})")).unwrap_or_default()
}

/// Render one entry as a plain-text line (no trailing newline).
pub fn entry_text(entry: &RollEntry) -> String {
    let time = entry.timestamp().format("%H:%M:%S");
    let label = match entry {
        RollEntry::Pool(_) => "Pool",
        RollEntry::Damage(_) => "Damage",
        RollEntry::Custom(_) => "Custom",
    };
    format!("[{time}] {label}{}: {entry}", context_suffix(entry))
}

/// Render one entry as a markdown list item (no trailing newline).
pub fn entry_markdown(entry: &RollEntry) -> String {
    let ctx = context_suffix(entry);
    match entry {
        RollEntry::Pool(r) => {
            let mut line = format!(
                "- **Pool**{ctx}: {} {} = **{}** net ({} success, {} cancel)",
                r.formula,
                format_rolls(&r.rolls),
                r.net_successes,
                r.successes,
                r.cancellations
            );
            if r.dice_modifier != 0 {
                line.push_str(&format!(" `{}d`", format_modifier(r.dice_modifier)));
            }
            line
        }
        RollEntry::Damage(r) => {
            let crit = if r.is_critical { " *critical*" } else { "" };
            format!(
                "- **Damage**{ctx}: {} {} = **{}**{crit}",
                r.formula,
                format_rolls(&r.rolls),
                r.final_result
            )
        }
        RollEntry::Custom(r) => match r.total {
            Some(total) => format!(
                "- **Custom**{ctx}: {} {} = **{total}**",
                r.formula,
                format_rolls(&r.rolls)
            ),
            None => format!("- **Custom**{ctx}: {} {}", r.formula, format_rolls(&r.rolls)),
        },
    }
}

impl HistoryLog {
    /// Export the history as plain text, most recent first.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Roll History\n============\n\n");
        for entry in self.get_all() {
            out.push_str(&entry_text(&entry));
            out.push('\n');
        }
        out
    }

    /// Export the history as markdown, most recent first.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Roll History\n\n");
        for entry in self.get_all() {
            out.push_str(&entry_markdown(&entry));
            out.push('\n');
        }
        out
    }
}
