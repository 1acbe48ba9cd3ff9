use crate::html::escape;

const CELL_STYLE: &str = "padding: 8px; border: 1px solid #ddd;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

pub struct Text {
    header: String,
    values: Vec<String>,
    align: Align,
    bold: bool,
}

impl Text {
    pub fn new(header: &str, values: Vec<String>) -> Self {
        Self {
            header: header.into(),
            values,
            align: Align::Left,
            bold: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn cell_style(&self) -> String {
        let mut style = CELL_STYLE.to_string();
        if self.align == Align::Center {
            style.push_str(" text-align: center;");
        }
        if self.bold {
            style.push_str(" font-weight: bold;");
        }
        style
    }
}

impl crate::html::Column for Text {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn format_header(&self) -> String {
        format!(r#"<th style="{}">{}</th>"#, CELL_STYLE, escape(&self.header))
    }

    fn format_cell(&self, row_index: usize) -> String {
        format!(
            r#"<td style="{}">{}</td>"#,
            self.cell_style(),
            escape(&self.values[row_index])
        )
    }
}

impl From<Text> for Box<dyn crate::html::Column> {
    fn from(t: Text) -> Self {
        Box::new(t)
    }
}
