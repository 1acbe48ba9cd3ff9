use crate::html::escape;

/// A simple builder for constructing HTML fragments. Text arguments are escaped, `raw` is not.
#[derive(Debug, Default, Clone)]
pub struct HtmlBuilder {
    content: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    pub fn build(self) -> String {
        self.content
    }

    pub fn heading2(mut self, text: &str) -> Self {
        self.content.push_str("<h2>");
        self.content.push_str(&escape(text));
        self.content.push_str("</h2>");
        self
    }

    pub fn paragraph(mut self, text: &str, style: &str) -> Self {
        self.open_paragraph(style);
        self.content.push_str(&escape(text));
        self.content.push_str("</p>");
        self
    }

    /// Paragraph with a `<br>` between each line.
    pub fn paragraph_lines(mut self, lines: &[&str], style: &str) -> Self {
        self.open_paragraph(style);
        let escaped: Vec<String> = lines.iter().map(|line| escape(line)).collect();
        self.content.push_str(&escaped.join("<br>"));
        self.content.push_str("</p>");
        self
    }

    pub fn raw(mut self, html: &str) -> Self {
        self.content.push_str(html);
        self
    }

    fn open_paragraph(&mut self, style: &str) {
        self.content.push_str(r#"<p style=""#);
        self.content.push_str(&escape(style));
        self.content.push_str(r#"">"#);
    }
}
