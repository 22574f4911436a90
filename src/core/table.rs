use crate::domain::model::StatsByLanguage;

const HEADERS: [&str; 4] = [
    "lang",
    "vacancies_found",
    "vacancies_processed",
    "average_salary",
];

/// Renders the per-language statistics as a bordered ASCII table with the
/// title embedded in the top border. Languages without statistics are
/// skipped; if nothing is left there is no table at all, not a header-only
/// one, and `None` is returned.
pub fn render_table(title: &str, rows: &StatsByLanguage) -> Option<String> {
    let mut grid: Vec<[String; 4]> = Vec::new();
    for (language, stats) in rows {
        if let Some(stats) = stats {
            grid.push([
                language.clone(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats.average_salary.to_string(),
            ]);
        }
    }
    if grid.is_empty() {
        return None;
    }

    let mut widths: [usize; 4] = [0; 4];
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = header.chars().count();
    }
    for row in &grid {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_row = HEADERS.map(String::from);
    let mut out = String::new();
    out.push_str(&title_border(title, &widths));
    out.push('\n');
    out.push_str(&format_row(&header_row, &widths));
    out.push('\n');
    out.push_str(&plain_border(&widths));
    out.push('\n');
    for row in &grid {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&plain_border(&widths));
    Some(out)
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<width$} |", cell, width = *width));
    }
    line
}

fn plain_border(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Top border with the title overlaid just after the leading corner,
/// truncated if it would spill past the table edge.
fn title_border(title: &str, widths: &[usize; 4]) -> String {
    let base = plain_border(widths);
    let base_len = base.chars().count();
    let title: String = title.chars().take(base_len.saturating_sub(2)).collect();

    let mut line = String::from("+");
    line.push_str(&title);
    line.extend(base.chars().skip(1 + title.chars().count()));
    line
}
