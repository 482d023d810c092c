//! Template rendering for CLI output using outstanding

use console::Style;
use medalstatlib::{ReportKind, ReportTable, TableSection};
use outstanding::{render_with_output, OutputMode, Theme};
use serde::Serialize;

/// Include template at compile time
pub const REPORT_TEMPLATE: &str = include_str!("../templates/report_table.jinja");

/// Column gap between padded cells
const GAP: &str = "  ";

/// Section data for template rendering (pre-formatted)
#[derive(Debug, Serialize)]
struct TemplateSection {
    heading: Option<String>,
    /// Pre-padded header line
    header: String,
    /// Separator line (dashes)
    separator: String,
    /// Pre-padded data lines
    rows: Vec<String>,
}

/// One rendered report within the template context
#[derive(Debug, Serialize)]
struct ReportContext {
    title: String,
    sections: Vec<TemplateSection>,
    notes: Vec<String>,
}

/// Data context for the report template
#[derive(Debug, Serialize)]
pub struct ReportsContext {
    reports: Vec<ReportContext>,
}

/// Create the theme with styles
pub fn create_theme() -> Theme {
    Theme::new()
        .add("title", Style::new().bold().underlined())
        .add("heading", Style::new().bold())
        .add("header", Style::new().bold())
        .add("note", Style::new().dim())
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Left-align the first column, right-align the rest.
fn pad_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let fill = width.saturating_sub(display_width(cell));
            if i == 0 {
                format!("{}{}", cell, " ".repeat(fill))
            } else {
                format!("{}{}", " ".repeat(fill), cell)
            }
        })
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

fn to_template_section(section: &TableSection) -> TemplateSection {
    let mut widths: Vec<usize> = section.headers.iter().map(|h| display_width(h)).collect();
    for row in &section.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let total_width = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    let rows = if section.rows.is_empty() {
        vec!["(no rows)".to_string()]
    } else {
        section
            .rows
            .iter()
            .map(|row| pad_line(row, &widths))
            .collect()
    };

    TemplateSection {
        heading: section.heading.clone(),
        header: pad_line(&section.headers, &widths),
        separator: "-".repeat(total_width),
        rows,
    }
}

/// Build the template context for a run of report tables
pub fn report_context(tables: &[ReportTable]) -> ReportsContext {
    ReportsContext {
        reports: tables
            .iter()
            .map(|table| ReportContext {
                title: table.title.clone(),
                sections: table.sections.iter().map(to_template_section).collect(),
                notes: table.notes.clone(),
            })
            .collect(),
    }
}

/// Render report tables outside the command dispatcher (the interactive menu)
pub fn render_reports(tables: &[ReportTable], output_mode: OutputMode) -> anyhow::Result<String> {
    let context = report_context(tables);
    render_with_output(REPORT_TEMPLATE, &context, &create_theme(), output_mode)
        .map_err(|e| anyhow::anyhow!("failed to render report: {e}"))
}

/// Table listing every report kind in menu order.
pub fn menu_table() -> ReportTable {
    let rows = ReportKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            vec![
                (i + 1).to_string(),
                kind.label().to_string(),
                kind.slug().to_string(),
            ]
        })
        .collect();

    ReportTable {
        title: "Available Reports".to_string(),
        sections: vec![TableSection {
            heading: None,
            headers: vec!["#".to_string(), "Report".to_string(), "Slug".to_string()],
            rows,
        }],
        notes: Vec::new(),
    }
}
