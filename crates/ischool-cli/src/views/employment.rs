use ischool_core::sections::{EmploymentSection, PagedTable, TableKind};
use ischool_core::{Paginator, Table};

use super::{heading, status_block, truncate, ViewOptions};

pub fn render(employment: &EmploymentSection, opts: &ViewOptions) -> Vec<String> {
    let mut lines = heading("Employment Information", '=');
    for kind in [TableKind::Employment, TableKind::Coop] {
        lines.push(String::new());
        lines.extend(render_table(employment.table(kind), opts));
    }
    lines
}

fn loading_text(kind: TableKind) -> &'static str {
    match kind {
        TableKind::Employment => "Loading employment data...",
        TableKind::Coop => "Loading co-op data...",
    }
}

pub fn render_table(table: &PagedTable, opts: &ViewOptions) -> Vec<String> {
    let mut lines = heading(table.kind.title(), '-');

    match status_block(table.section.state(), loading_text(table.kind)) {
        Some(status) => lines.extend(status),
        None => lines.extend(grid(&table.headings(), table, opts)),
    }

    lines.push(pagination_line(&table.pager));
    lines
}

fn grid(headings: &[String], table: &PagedTable, opts: &ViewOptions) -> Vec<String> {
    if headings.is_empty() {
        return vec!["No records.".to_string()];
    }

    let rows: Vec<Vec<String>> = table.visible_rows().iter().map(Table::cells).collect();

    let mut widths: Vec<usize> = headings.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }
    let cap = (opts.width / headings.len()).max(8);
    for w in &mut widths {
        *w = (*w).min(cap);
    }

    let mut lines = vec![format_row(headings, &widths)];
    lines.push("-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines
}

/// Cells beyond the heading count are printed unpadded
fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| match widths.get(i) {
            Some(&w) => format!("{:<w$}", truncate(cell, w)),
            None => cell.clone(),
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// `Prev  Page N of M  Next`, with disabled controls struck out
pub fn pagination_line(pager: &Paginator) -> String {
    let prev = if pager.has_prev() { "Prev" } else { "~Prev~" };
    let next = if pager.has_next() { "Next" } else { "~Next~" };
    format!(
        "{prev}  Page {} of {}  {next}",
        pager.current_page(),
        pager.total_pages()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ischool_core::ErrorMode;
    use serde_json::{json, Value};

    fn rows(n: usize) -> Table {
        Table::new(
            (0..n)
                .map(|i| match json!({"employer": format!("Employer {i}"), "city": "Rochester"}) {
                    Value::Object(map) => map,
                    _ => unreachable!(),
                })
                .collect(),
        )
    }

    fn loaded(n: usize) -> EmploymentSection {
        let mut section = EmploymentSection::new(ErrorMode::Uniform);
        for kind in [TableKind::Employment, TableKind::Coop] {
            let table = section.table_mut(kind);
            let ticket = table.section.mount().unwrap();
            table.section.complete(ticket, Ok(rows(n)));
            table.pager.set_row_count(n);
        }
        section
    }

    #[test]
    fn test_pagination_line() {
        let mut pager = Paginator::default();
        pager.set_row_count(12);
        assert_eq!(pagination_line(&pager), "~Prev~  Page 1 of 3  Next");
        pager.set_page(3);
        assert_eq!(pagination_line(&pager), "Prev  Page 3 of 3  ~Next~");
    }

    #[test]
    fn test_empty_table_is_page_one_of_zero() {
        let section = loaded(0);
        let lines = render_table(&section.employment, &ViewOptions::default());
        assert!(lines.contains(&"No records.".to_string()));
        assert_eq!(lines.last().unwrap(), "~Prev~  Page 1 of 0  ~Next~");
    }

    #[test]
    fn test_only_current_page_rows_rendered() {
        let mut section = loaded(7);
        section.employment.pager.next();
        let text = render_table(&section.employment, &ViewOptions::default()).join("\n");
        assert!(text.contains("EMPLOYER"));
        assert!(text.contains("Employer 5"));
        assert!(text.contains("Employer 6"));
        assert!(!text.contains("Employer 4"));
    }

    #[test]
    fn test_loading_text_per_table() {
        let section = EmploymentSection::new(ErrorMode::Uniform);
        let text = render(&section, &ViewOptions::default()).join("\n");
        assert!(text.contains("Loading employment data..."));
        assert!(text.contains("Loading co-op data..."));
    }
}
