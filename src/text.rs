//! Social-handle cleanup for markdown interpolation.

/// Characters that change meaning when interpolated into Markdown.
const MARKDOWN_SIGNIFICANT: &[char] = &[
    '\\', '`', '*', '_', '[', ']', '(', ')', '#', '!', '<', '>',
];

/// Escape markdown-significant characters with a backslash.
pub fn escape_markdown(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if MARKDOWN_SIGNIFICANT.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Clean a social network username: drop one leading `@`, then escape
/// markdown-significant characters. An empty result is a valid "skip"
/// signal and stays empty.
pub fn clean_social_username(input: &str) -> String {
    let stripped = input.strip_prefix('@').unwrap_or(input);
    escape_markdown(stripped)
}
