use crate::workflow::dashboard::DashboardView;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table of string rows.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
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
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.trim_end().chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let cell = truncate(cell, *width);
                let padded = pad(&cell, *width, is_numeric(&cell));
                if options.color {
                    colorize_class(&padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Totals line followed by one row per couple.
#[must_use]
pub fn render_dashboard(view: &DashboardView, options: TableOptions) -> String {
    let stats = &view.stats;
    let summary = format!(
        "Doctor {}: {} couples, {} divorced, {} married, {} without prediction",
        view.doctor_id, stats.total, stats.divorced, stats.married, stats.no_prediction
    );
    if view.couples.is_empty() {
        return format!("{summary}\n(no couples yet)");
    }

    let headers = ["id", "couple", "probability", "prediction", "history", "assess"];
    let rows = view
        .couples
        .iter()
        .map(|line| {
            vec![
                line.couple_id.to_string(),
                line.couple.clone(),
                line.probability.clone(),
                line.prediction.clone(),
                line.history.clone(),
                line.assess.clone(),
            ]
        })
        .collect::<Vec<_>>();
    format!("{summary}\n\n{}", render_rows(&headers, &rows, options))
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
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

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed != "-"
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.' | '%'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Red for divorced, green for married. Padding is kept outside the escape.
fn colorize_class(cell: &str) -> String {
    let code = match cell.trim() {
        "Divorced" => "31",
        "Married" => "32",
        _ => return cell.to_string(),
    };
    let label = cell.trim_end();
    let fill = &cell[label.len()..];
    format!("\u{1b}[{code}m{label}\u{1b}[0m{fill}")
}
