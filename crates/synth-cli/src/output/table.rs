#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Render an aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let cell = pad(&truncate_text(value, *width), *width);
                if options.color {
                    colorize_flag(&cell, value)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns one character at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

/// Color boolean-ish cells: green for on, dim for off.
fn colorize_flag(cell: &str, raw: &str) -> String {
    let code = match raw.to_ascii_lowercase().as_str() {
        "true" | "active" | "authenticated" | "bookmarked" => "32",
        "false" | "inactive" => "2",
        _ => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_mixed_widths() {
        let rows = vec![
            vec!["fw-1".to_string(), "Game Theory".to_string()],
            vec!["fw-12345".to_string(), "Post-Humanism".to_string()],
        ];
        let table = render_table(&["id", "name"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("Game"), lines[3].find("Post"));
    }

    #[test]
    fn truncates_to_max_width() {
        let rows = vec![vec!["idea-1".to_string(), "x".repeat(200)]];
        let table = render_table(
            &["id", "title"],
            &rows,
            TableOptions {
                max_width: Some(60),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 60));
        assert!(table.contains('…'));
    }

    #[test]
    fn colors_only_flag_cells() {
        let rows = vec![vec!["true".to_string(), "Systems".to_string()]];
        let table = render_table(
            &["active", "name"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[32mtrue"));
        assert!(!table.contains("\u{1b}[32mSystems"));
    }
}
