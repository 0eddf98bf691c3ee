//! HTML escaping for schema-controlled text.
//!
//! Every string that originates in the input document (title, names,
//! descriptions, enum values, patterns, type labels) must pass through
//! here before it is embedded in markup.

/// Escape the markup-significant characters. Quotes are included because
/// definition names land inside `id="…"` / `href="#…"` attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

// ------------------------------- Tests ------------------------------------ //
