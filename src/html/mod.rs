pub mod column;
pub mod html_builder;
pub mod table;
pub mod text;

pub use column::Column;
pub use html_builder::HtmlBuilder;
pub use table::TableBuilder;
pub use text::Text;

/// Escapes text for use inside element content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
