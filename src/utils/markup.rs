// src/utils/markup.rs
use std::borrow::Cow;

/// Escapes text for interpolation into feed markup.
///
/// Author names and thread titles come straight off the wire, so they are
/// never placed into markup unescaped. Returns the input untouched when no
/// escaping is needed.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escapes `text` and wraps it in the one emphasis tag feed content is
/// allowed to carry.
pub fn emphasize(text: &str) -> String {
    format!("<em>{}</em>", escape_html(text))
}
