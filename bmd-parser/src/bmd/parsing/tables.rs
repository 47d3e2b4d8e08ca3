//! Table recognizers
//!
//!     Three nested levels:
//!
//!         table       separators and rows until neither matches
//!         row         one or more cells, then `|` and a newline
//!         cell        `|` and the text up to, not including, the next `|`
//!
//!     A row whose closing `|` is missing fails as a whole, leaving its text untouched. A
//!     separator line closes the rows seen so far into the header section the first time
//!     it follows rows; any other separator is skipped. A table needs at least one row.

use crate::bmd::ast::{Node, SectionKind, Table, TableCell, TableRow, TableSection};
use crate::bmd::inlines::transform_inlines;
use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\|-+)+\|\n").unwrap());

static CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|([^|\n]*)\|").unwrap());

static ROW_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|\n").unwrap());

pub fn table(src: &str, line: usize) -> Option<(Node, &str)> {
    let mut sections = Vec::new();
    let mut rows = Vec::new();
    let mut has_header = false;
    let mut rest = src;
    let mut current_line = line;

    loop {
        while let Some(m) = SEPARATOR.find(rest) {
            if !has_header && !rows.is_empty() {
                sections.push(TableSection::new(SectionKind::Header, std::mem::take(&mut rows)));
                has_header = true;
            }
            rest = &rest[m.end()..];
            current_line += 1;
        }
        match row(rest) {
            Some((cells, remaining)) => {
                rows.push(TableRow::new(cells).at(current_line));
                current_line += 1;
                rest = remaining;
            }
            None => break,
        }
    }

    if !rows.is_empty() {
        sections.push(TableSection::new(SectionKind::Body, rows));
    }
    if sections.is_empty() {
        return None;
    }
    Some((Node::Table(Table::new(sections).at(line)), rest))
}

/// One table row: its cells and the remainder after the closing `|` and newline.
pub fn row(src: &str) -> Option<(Vec<TableCell>, &str)> {
    let mut cells = Vec::new();
    let mut rest = src;
    while let Some((parsed, remaining)) = cell(rest) {
        cells.push(parsed);
        rest = remaining;
    }
    if cells.is_empty() {
        return None;
    }
    let end = ROW_END.find(rest)?;
    Some((cells, &rest[end.end()..]))
}

/// One cell. The closing `|` is left for the next cell or the row end.
pub fn cell(src: &str) -> Option<(TableCell, &str)> {
    let caps = CELL.captures(src)?;
    let consumed = caps[0].len() - 1;
    Some((TableCell::new(transform_inlines(&caps[1])), &src[consumed..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expect_table(node: Node) -> Table {
        match node {
            Node::Table(table) => table,
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_cells_keep_spaces() {
        let (cells, rest) = row("| a | *b* |\nnext\n").unwrap();
        let contents: Vec<_> = cells.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec![" a ", " <em>b</em> "]);
        assert_eq!(rest, "next\n");
    }

    #[test]
    fn test_row_without_closing_pipe_fails() {
        assert!(row("| a | b\n").is_none());
        assert!(row("no pipes\n").is_none());
    }

    #[test]
    fn test_header_and_body() {
        let src = "| A | B |\n|---|---|\n| 1 | 2 |\n";
        let (node, rest) = table(src, 7).unwrap();
        let table = expect_table(node);
        assert_eq!(table.sections.len(), 2);
        assert_eq!(table.sections[0].kind, SectionKind::Header);
        assert_eq!(table.sections[1].kind, SectionKind::Body);
        assert_eq!(table.sections[0].rows[0].line, 7);
        assert_eq!(table.sections[1].rows[0].line, 9);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_no_separator_means_body_only() {
        let (node, _) = table("| a |\n| b |\n", 1).unwrap();
        let table = expect_table(node);
        assert_eq!(table.sections.len(), 1);
        assert_eq!(table.sections[0].kind, SectionKind::Body);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_later_separators_are_skipped() {
        let src = "| h |\n|---|\n| 1 |\n|---|\n| 2 |\n";
        let (node, _) = table(src, 1).unwrap();
        let table = expect_table(node);
        assert_eq!(table.sections.len(), 2);
        assert_eq!(table.sections[1].rows.len(), 2);
        assert_eq!(table.sections[1].rows[1].line, 5);
    }

    #[test]
    fn test_separator_alone_is_not_a_table() {
        assert!(table("|---|\n", 1).is_none());
        assert!(table("text\n", 1).is_none());
    }
}
