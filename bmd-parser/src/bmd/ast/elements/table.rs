//! Table element
//!
//!     Pipe tables. Each row is a run of `|cell` segments closed by `|` and a newline. A
//!     separator line made of dashes between pipes (`|---|----|`) ends the header: the rows
//!     seen before the first separator form the header section, everything after it the body.
//!     A table without a separator has only a body.
//!
//!         | Loi       | Nom dans R |
//!         |-----------|------------|
//!         | Binomiale | binom( )   |
//!
//!     Sections render as `<thead>`/`<tbody>`, header cells as `<th>` and body cells as `<td>`.
//!     Cell text is inline-transformed and kept with its surrounding spaces.
//!
//! Row striping
//!
//!     Rows carry `class="{header|body} {odd|even}"`. The odd/even alternation runs over all
//!     rows of one table, header rows included, starting at odd. It is tracked by a
//!     [`RowContext`] created for each table render and passed down to the rows, so renders of
//!     different tables (or documents) never affect each other.

use super::super::super::formats::html::{HtmlWriter, ToHtml};
use super::super::traits::AstNode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Body,
}

impl SectionKind {
    fn wrapper(self) -> &'static str {
        match self {
            SectionKind::Header => "thead",
            SectionKind::Body => "tbody",
        }
    }

    fn cell_tag(self) -> &'static str {
        match self {
            SectionKind::Header => "th",
            SectionKind::Body => "td",
        }
    }

    fn row_class(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Body => "body",
        }
    }
}

/// Rendering state of one table: the running row index and the section being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContext {
    rows_written: usize,
    section: SectionKind,
}

impl RowContext {
    pub fn new() -> Self {
        Self {
            rows_written: 0,
            section: SectionKind::Body,
        }
    }

    pub fn enter(&mut self, section: SectionKind) {
        self.section = section;
    }

    /// Parity class for the next row, advancing the counter.
    pub fn next_parity(&mut self) -> &'static str {
        self.rows_written += 1;
        if self.rows_written % 2 == 1 {
            "odd"
        } else {
            "even"
        }
    }

    pub fn section(&self) -> SectionKind {
        self.section
    }
}

impl Default for RowContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    /// Inline-rendered cell text.
    pub content: String,
}

impl TableCell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub line: usize,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells, line: 1 }
    }

    pub fn at(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    fn write_html_in(&self, out: &mut HtmlWriter, ctx: &mut RowContext) {
        let section = ctx.section();
        let parity = ctx.next_parity();
        out.at_line(self.line).write(&format!(
            "\t\t<tr class=\"{} {}\">\n",
            section.row_class(),
            parity
        ));
        let tag = section.cell_tag();
        for cell in &self.cells {
            out.write(&format!("\t\t\t<{tag}>{}</{tag}>\n", cell.content));
        }
        out.write("\t\t</tr>\n");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSection {
    pub kind: SectionKind,
    pub rows: Vec<TableRow>,
}

impl TableSection {
    pub fn new(kind: SectionKind, rows: Vec<TableRow>) -> Self {
        Self { kind, rows }
    }

    fn write_html_in(&self, out: &mut HtmlWriter, ctx: &mut RowContext) {
        ctx.enter(self.kind);
        let wrapper = self.kind.wrapper();
        if let Some(first) = self.rows.first() {
            out.at_line(first.line);
        }
        out.write(&format!("\t<{}>\n", wrapper));
        for row in &self.rows {
            row.write_html_in(out, ctx);
        }
        out.write(&format!("\t</{}>\n", wrapper));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub sections: Vec<TableSection>,
    pub line: usize,
}

impl Table {
    pub fn new(sections: Vec<TableSection>) -> Self {
        Self { sections, line: 1 }
    }

    pub fn at(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn header(&self) -> Option<&TableSection> {
        self.sections
            .iter()
            .find(|section| section.kind == SectionKind::Header)
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|section| section.rows.len()).sum()
    }
}

impl AstNode for Table {
    fn node_type(&self) -> &'static str {
        "Table"
    }

    fn display_label(&self) -> String {
        let columns = self
            .sections
            .first()
            .and_then(|section| section.rows.first())
            .map(|row| row.cells.len())
            .unwrap_or(0);
        format!("{} rows x {} columns", self.row_count(), columns)
    }

    fn line(&self) -> usize {
        self.line
    }
}

impl ToHtml for Table {
    fn write_html(&self, out: &mut HtmlWriter) {
        let mut ctx = RowContext::new();
        out.at_line(self.line).write("<table>\n");
        for section in &self.sections {
            section.write_html_in(out, &mut ctx);
        }
        out.write("</table>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> TableRow {
        TableRow::new(cells.iter().map(|c| TableCell::new(*c)).collect())
    }

    fn sample() -> Table {
        Table::new(vec![
            TableSection::new(SectionKind::Header, vec![row(&[" A ", " B "])]),
            TableSection::new(SectionKind::Body, vec![row(&[" 1 ", " 2 "]), row(&[" 3 ", " 4 "])]),
        ])
    }

    #[test]
    fn test_sections_and_cell_tags() {
        assert_eq!(
            sample().to_html(),
            concat!(
                "<table>\n",
                "\t<thead>\n",
                "\t\t<tr class=\"header odd\">\n",
                "\t\t\t<th> A </th>\n",
                "\t\t\t<th> B </th>\n",
                "\t\t</tr>\n",
                "\t</thead>\n",
                "\t<tbody>\n",
                "\t\t<tr class=\"body even\">\n",
                "\t\t\t<td> 1 </td>\n",
                "\t\t\t<td> 2 </td>\n",
                "\t\t</tr>\n",
                "\t\t<tr class=\"body odd\">\n",
                "\t\t\t<td> 3 </td>\n",
                "\t\t\t<td> 4 </td>\n",
                "\t\t</tr>\n",
                "\t</tbody>\n",
                "</table>\n",
            )
        );
    }

    #[test]
    fn test_striping_restarts_for_each_table() {
        let table = sample();
        let first = table.to_html();
        let second = table.to_html();
        assert_eq!(first, second);
        assert!(second.contains("<tr class=\"header odd\">"));
    }

    #[test]
    fn test_row_context_alternates() {
        let mut ctx = RowContext::new();
        assert_eq!(ctx.next_parity(), "odd");
        assert_eq!(ctx.next_parity(), "even");
        assert_eq!(ctx.next_parity(), "odd");
    }

    #[test]
    fn test_label_counts_rows_and_columns() {
        assert_eq!(sample().display_label(), "3 rows x 2 columns");
    }

    #[test]
    fn test_header_lookup() {
        assert_eq!(sample().header().map(|h| h.rows.len()), Some(1));
        let body_only = Table::new(vec![TableSection::new(SectionKind::Body, vec![row(&["x"])])]);
        assert!(body_only.header().is_none());
    }
}
