//! HTML escaping for text content and attribute values.

/// Escape `&`, `<`, `>`, `"` and `'` so the result is inert both as element
/// content and inside a double- or single-quoted attribute value.
///
/// Not idempotent: escaping `&amp;` again yields `&amp;amp;`.
///
/// ```
/// use richdoc::util::html::escape_html;
///
/// assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#39;x&#39;&gt;");
/// ```
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + value.len() / 8);
    push_escaped(&mut escaped, value);
    escaped
}

/// Append the escaped form of `value` to `buffer`.
pub fn push_escaped(buffer: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => buffer.push_str("&amp;"),
            '<' => buffer.push_str("&lt;"),
            '>' => buffer.push_str("&gt;"),
            '"' => buffer.push_str("&quot;"),
            '\'' => buffer.push_str("&#39;"),
            _ => buffer.push(ch),
        }
    }
}
