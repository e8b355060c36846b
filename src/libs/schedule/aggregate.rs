use super::{blocks, schedule, ResolveConfig};
use crate::libs::interval::Interval;

/// The resolved state of one group.
#[derive(Debug, Clone)]
pub struct GroupSummary<'a, K, T> {
    pub key: K,
    /// Total weight of the selection
    pub weight: i128,
    /// Number of selected intervals
    pub count: usize,
    /// Number of blocks the group was split into
    pub blocks: usize,
    /// Selected intervals, block after block; empty in diagnostics mode
    pub selected: Vec<&'a T>,
}

/// Schedules groups block by block and accumulates the results.
pub struct Aggregator<'a, K, T> {
    diagnostics: bool,
    groups: Vec<GroupSummary<'a, K, T>>,
}

impl<'a, K, T> Aggregator<'a, K, T>
where
    K: std::fmt::Display,
    T: Interval,
{
    pub fn new(config: &ResolveConfig) -> Self {
        Self {
            diagnostics: config.diagnostics,
            groups: vec![],
        }
    }

    /// Solves one group; `items` must be sorted by start.
    pub fn add_group(&mut self, key: K, items: &'a [T]) -> &GroupSummary<'a, K, T> {
        let mut summary = GroupSummary {
            key,
            weight: 0,
            count: 0,
            blocks: 0,
            selected: vec![],
        };

        for block in blocks(items) {
            let sel = schedule(block);
            summary.weight += sel.weight;
            summary.count += sel.len();
            summary.blocks += 1;
            if !self.diagnostics {
                summary.selected.extend(sel.items);
            }
        }

        tracing::debug!(
            group = %summary.key,
            intervals = items.len(),
            blocks = summary.blocks,
            weight = %summary.weight,
            selected = summary.count,
            "resolved group"
        );

        self.groups.push(summary);
        &self.groups[self.groups.len() - 1]
    }

    pub fn groups(&self) -> &[GroupSummary<'a, K, T>] {
        &self.groups
    }

    /// Selected intervals of every group, group after group.
    pub fn selected(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.groups.iter().flat_map(|g| g.selected.iter().copied())
    }

    pub fn total_weight(&self) -> i128 {
        self.groups.iter().map(|g| g.weight).sum()
    }

    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}
