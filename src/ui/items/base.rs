//! Shared card framing.

/// Width of the rule under a card heading.
pub const CARD_WIDTH: usize = 48;

/// Frame `body` lines under a heading.
pub fn card_container(title: &str, body: &[String]) -> String {
    let rule_len = CARD_WIDTH.saturating_sub(title.chars().count() + 4);
    let mut out = format!("── {} {}\n", title, "─".repeat(rule_len));
    for line in body {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Bracketed hint for the key that acts on a card.
pub fn render_action_indicator(label: &str) -> String {
    format!("[{label}]")
}
