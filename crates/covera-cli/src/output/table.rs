//! Fixed-column text tables for `--format table`.

use covera_core::enums::{FrameworkStatus, FreshnessTier};
use covera_core::responses::UNKNOWN_CONFIDENCE;
use covera_core::validation::Severity;

const GAP: &str = "  ";

/// Render `rows` under `headers`, one line per row.
///
/// Columns whose cells are all numbers (or `-`) are right-aligned. With
/// `color`, freshness labels, framework statuses and severities are painted.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], color: bool) -> String {
    let widths = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .fold(header.len(), usize::max)
        })
        .collect::<Vec<_>>();
    let numeric = (0..headers.len())
        .map(|column| {
            !rows.is_empty()
                && rows
                    .iter()
                    .filter_map(|row| row.get(column))
                    .all(|cell| cell == "-" || cell.parse::<f64>().is_ok())
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header = headers
        .iter()
        .zip(&widths)
        .map(|(name, width)| format!("{name:<width$}"))
        .collect::<Vec<_>>()
        .join(GAP);
    lines.push(header.trim_end().to_string());
    lines.push("=".repeat(widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1)));

    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let cell = row.get(column).map_or("-", String::as_str);
                let padded = if numeric[column] {
                    format!("{cell:>width$}")
                } else {
                    format!("{cell:<width$}")
                };
                match paint(cell).filter(|_| color) {
                    Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
                    None => padded,
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(GAP).trim_end().to_string());
    }

    lines.join("\n")
}

/// ANSI colour for cells that carry a known status.
fn paint(cell: &str) -> Option<&'static str> {
    const GREEN: &str = "32";
    const YELLOW: &str = "33";
    const RED: &str = "31";

    let tiers = [
        (FreshnessTier::Fresh, GREEN),
        (FreshnessTier::Aging, YELLOW),
        (FreshnessTier::Stale, YELLOW),
        (FreshnessTier::Expired, RED),
    ];
    if let Some((_, code)) = tiers.iter().find(|(tier, _)| tier.label() == cell) {
        return Some(code);
    }

    let statuses = [
        (FrameworkStatus::Active, GREEN),
        (FrameworkStatus::Applicable, YELLOW),
        (FrameworkStatus::NoGuidance, RED),
    ];
    if let Some((_, code)) = statuses.iter().find(|(status, _)| status.as_str() == cell) {
        return Some(code);
    }

    if cell == Severity::Error.as_str() || cell == UNKNOWN_CONFIDENCE {
        Some(RED)
    } else if cell == Severity::Warning.as_str() {
        Some(YELLOW)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["iso-42001".into(), "45".into(), "applicable".into()],
            vec!["owasp-llm-top10".into(), "74".into(), "active".into()],
        ]
    }

    #[test]
    fn columns_align_and_numbers_right_align() {
        let table = render(&["id", "coverage", "status"], &rows(), false);
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id               coverage  status");
        assert!(lines[1].chars().all(|c| c == '='));
        assert_eq!(lines[2], "iso-42001              45  applicable");
        assert_eq!(lines[3], "owasp-llm-top10        74  active");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render(&["id", "total"], &[vec!["cis-controls".into()]], false);
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with('-')));
    }

    #[test]
    fn status_cells_are_painted_when_enabled() {
        let table = render(&["status"], &[vec!["Fresh - high confidence".into()]], true);
        assert!(table.contains("\u{1b}[32mFresh - high confidence"));

        let plain = render(&["status"], &[vec!["Fresh - high confidence".into()]], false);
        assert!(!plain.contains('\u{1b}'));
    }

    #[test]
    fn paint_knows_domain_labels_only() {
        assert_eq!(paint("Expired - review required"), Some("31"));
        assert_eq!(paint("no-guidance"), Some("31"));
        assert_eq!(paint("warning"), Some("33"));
        assert_eq!(paint("mitre-atlas"), None);
    }
}
