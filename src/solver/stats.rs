use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over one solve call.
///
/// These are observability only; they never influence the search.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search nodes entered, including the root.
    pub nodes_visited: u64,
    /// Branches abandoned after a contradiction or exhausted subtree.
    pub backtracks: u64,
    /// Individual candidates removed by propagation.
    pub prunings: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Prunings"),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            nodes_visited: 12,
            backtracks: 3,
            prunings: 40,
        };
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("Nodes visited"));
        assert!(rendered.contains("12"));
        assert!(rendered.contains("Backtracks"));
        assert!(rendered.contains("40"));
    }
}
