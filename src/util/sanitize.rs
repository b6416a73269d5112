use regex::Regex;

// Post titles are untrusted text headed for the terminal: strip ANSI escape
// sequences and control characters, collapse whitespace, and cap the length
// so one title cannot wreck the card layout.
pub fn sanitize_for_terminal(s: &str) -> String {
    // CSI sequences (ESC[ ... cmd). Covers the common styling/movement codes.
    let re = Regex::new(r"\x1B\[[0-9;?]*[ -/]*[@-~]").ok();
    let no_ansi = match &re {
        Some(r) => r.replace_all(s, "").into_owned(),
        None => s.to_string(),
    };

    let cleaned: String = no_ansi
        .chars()
        .map(|ch| if ch == '\n' || ch == '\r' || ch == '\t' { ' ' } else { ch })
        .filter(|&ch| ch >= ' ' && ch != '\x7f')
        .collect();

    cleaned.trim().chars().take(200).collect()
}
