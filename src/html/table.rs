use crate::html::{escape, Column};

const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse; margin-top: 10px;";
const HEADER_ROW_STYLE: &str = "background: #f0f0f0;";
const EMPTY_STYLE: &str = "color: #666;";

pub struct TableBuilder {
    columns: Vec<Box<dyn Column>>,
    row_count: Option<usize>,
    empty_message: Option<String>,
}

impl TableBuilder {
    pub(crate) fn new() -> Self {
        Self {
            columns: Vec::new(),
            row_count: None,
            empty_message: None,
        }
    }

    pub(crate) fn add_column(mut self, column: impl Into<Box<dyn Column>>) -> Self {
        let column = column.into();
        let column_len = column.len();

        match self.row_count {
            None => self.row_count = Some(column_len),
            Some(existing) if existing == column_len => {}
            Some(existing) => {
                panic!(
                    "column length mismatch: expected {} rows but received {}",
                    existing, column_len
                );
            }
        }

        self.columns.push(column);
        self
    }

    /// Rendered instead of the table when there are no rows.
    pub(crate) fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    pub(crate) fn build(self) -> String {
        let row_count = self.row_count.unwrap_or(0);
        if row_count == 0 {
            if let Some(message) = &self.empty_message {
                return format!(r#"<p style="{}">{}</p>"#, EMPTY_STYLE, escape(message));
            }
        }

        self.build_table_content(row_count)
    }

    fn build_table_content(&self, row_count: usize) -> String {
        let mut html = format!(r#"<table style="{}">"#, TABLE_STYLE);

        let header_cells: Vec<String> = self.columns.iter().map(|col| col.format_header()).collect();
        html.push_str(&format!(
            r#"<thead><tr style="{}">{}</tr></thead>"#,
            HEADER_ROW_STYLE,
            header_cells.concat()
        ));

        html.push_str("<tbody>");
        for row_index in 0..row_count {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|col| col.format_cell(row_index))
                .collect();
            html.push_str(&format!("<tr>{}</tr>", cells.concat()));
        }
        html.push_str("</tbody></table>");

        html
    }
}
