/// One table column: a header plus one rendered `<td>` per row.
pub trait Column {
    fn len(&self) -> usize;
    fn format_header(&self) -> String;
    fn format_cell(&self, row_index: usize) -> String;
}
