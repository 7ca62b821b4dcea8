//! Bordered text tables
//!
//! Pure layout: turns a title and lines into framed rows. A line that is
//! exactly `"-"` becomes a horizontal rule.

const PADDING: usize = 1;
const SEPARATOR: &str = "-";
const EMPTY: &str = "Empty!";

/// Content of one table before framing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingPlan {
    pub title: String,
    pub lines: Vec<String>,
}

impl DrawingPlan {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edges {
    Left,
    Both,
    None,
}

impl Edges {
    fn left(self) -> bool {
        matches!(self, Edges::Left | Edges::Both)
    }

    fn right(self) -> bool {
        matches!(self, Edges::Both)
    }
}

fn width_of(line: &str) -> usize {
    line.chars().count()
}

/// Widest line plus padding on both sides
fn text_width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| width_of(line) + 2 * PADDING)
        .max()
        .unwrap_or(2 * PADDING)
}

fn rule(width: usize, edges: Edges) -> String {
    let mut out = String::with_capacity(width + 2);
    if edges.left() {
        out.push('+');
    }
    out.push_str(&"-".repeat(width));
    if edges.right() {
        out.push('+');
    }
    out
}

fn row(width: usize, line: &str, edges: Edges) -> String {
    if line == SEPARATOR {
        return rule(width, edges);
    }

    let fill = width.saturating_sub(width_of(line) + 2 * PADDING);
    let mut out = String::with_capacity(width + 2);
    if edges.left() {
        out.push('|');
    }
    out.push_str(&" ".repeat(PADDING));
    out.push_str(line);
    out.push_str(&" ".repeat(fill + PADDING));
    if edges.right() {
        out.push('|');
    }
    out
}

/// Frame a table: top rule, title, rule, lines, bottom rule
pub fn plan_table(title: &str, lines: &[String]) -> Vec<String> {
    let mut body = Vec::with_capacity(lines.len() + 2);
    body.push(title.to_string());
    body.push(SEPARATOR.to_string());
    if lines.is_empty() {
        body.push(EMPTY.to_string());
    } else {
        body.extend(lines.iter().cloned());
    }

    let width = text_width(&body);
    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(rule(width, Edges::Both));
    out.extend(body.iter().map(|line| row(width, line, Edges::Both)));
    out.push(rule(width, Edges::Both));
    out
}

/// Place tables side by side as columns of a single plan
///
/// Shorter tables are padded with blank rows. Every column after the first
/// gets a left border; the outer frame comes from [`plan_table`].
pub fn merge_plans(title: &str, plans: &[DrawingPlan]) -> DrawingPlan {
    let height = plans.iter().map(|plan| plan.lines.len()).max().unwrap_or(0);
    let mut rows = vec![String::new(); height];

    for (index, plan) in plans.iter().enumerate() {
        let width = text_width(&plan.lines);
        let edges = if index == 0 { Edges::None } else { Edges::Left };

        for (i, out) in rows.iter_mut().enumerate() {
            let line = plan.lines.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&row(width, line, edges));
        }
    }

    DrawingPlan::new(title, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plan_table_layout() {
        let table = plan_table("Money", &lines(&["P 5.000"]));
        assert_eq!(
            table,
            vec![
                "+---------+",
                "| Money   |",
                "+---------+",
                "| P 5.000 |",
                "+---------+",
            ]
        );
    }

    #[test]
    fn test_empty_table() {
        let table = plan_table("Inventory", &[]);
        assert_eq!(table[3], "| Empty!    |");
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_rows_share_width() {
        let table = plan_table("Pokemon stats", &lines(&["Onyx Lv5", "-", "Lif 31/31"]));
        let width = table[0].chars().count();
        assert!(table.iter().all(|row| row.chars().count() == width));
        assert_eq!(table[4], table[0]);
    }

    #[test]
    fn test_merge_side_by_side() {
        let a = DrawingPlan::new("a", lines(&["ab", "-", "c"]));
        let b = DrawingPlan::new("b", lines(&["xyz"]));
        let merged = merge_plans("both", &[a, b]);
        assert_eq!(merged.title, "both");
        assert_eq!(merged.lines, vec![" ab | xyz ", "----|     ", " c  |     "]);
    }

    #[test]
    fn test_merged_table_is_rectangular() {
        let a = DrawingPlan::new("a", lines(&["Pikachu Lv5", "-", "Typ Thunder"]));
        let b = DrawingPlan::new("b", lines(&["Onyx Lv3", "-", "Typ Rock", "-", "Lif 20/20"]));
        let merged = merge_plans("Battling pokemons", &[a, b]);
        let table = plan_table(&merged.title, &merged.lines);
        let width = table[0].chars().count();
        assert!(table.iter().all(|row| row.chars().count() == width));
    }
}
