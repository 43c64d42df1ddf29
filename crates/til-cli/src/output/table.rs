//! Plain aligned tables for `--format table`.

const MIN_COLUMN_WIDTH: usize = 5;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`, shrinking the widest columns first when the
/// table would overflow `options.max_width`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().copied(), &widths, false);
    let rule_len = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);

    let mut lines = vec![header_line, "-".repeat(rule_len)];
    for row in rows {
        let cells = (0..widths.len()).map(|index| row.get(index).map_or("-", String::as_str));
        lines.push(join_cells(cells, &widths, options.color));
    }
    lines.join("\n")
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], color: bool) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let text = truncate(cell, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            if color {
                format!("{}{pad}", paint(&text))
            } else {
                format!("{text}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(GAP);
    line.trim_end().to_string()
}

fn shrink_to(widths: &mut [usize], max_width: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN_WIDTH)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

/// ANSI color for outcome words (post writes, smoke checks).
fn paint(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "pass" | "created" | "true" => "32",
        "warn" | "skipped" | "overwritten" => "33",
        "fail" | "cancelled" | "false" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["site_index".into(), "pass".into()],
            vec!["posts_dir".into(), "warn".into()],
        ]
    }

    #[test]
    fn aligns_columns() {
        let out = render_table(&["name", "status"], &rows(), TableOptions::default());
        assert_eq!(
            out,
            "name        status\n------------------\nsite_index  pass\nposts_dir   warn"
        );
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let long = vec![vec!["x".repeat(40), "ok".into()]];
        let out = render_table(
            &["title", "state"],
            &long,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        let row = out.lines().nth(2).expect("data row");
        assert!(row.chars().count() <= 20, "{row}");
        assert!(row.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let out = render_table(&["a", "b"], &[vec!["1".into()]], TableOptions::default());
        assert!(out.ends_with("1  -"));
    }

    #[test]
    fn color_wraps_known_outcomes_only() {
        assert_eq!(paint("pass"), "\u{1b}[32mpass\u{1b}[0m");
        assert_eq!(paint("Skipped"), "\u{1b}[33mSkipped\u{1b}[0m");
        assert_eq!(paint("hello"), "hello");
    }
}
