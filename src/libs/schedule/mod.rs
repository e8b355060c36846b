//! Weighted interval scheduling over grouped genomic features.
//!
//! # Pipeline
//!
//! 1. [`group`] partitions records by [`GroupKey`](crate::libs::interval::GroupKey) and
//!    orders each group by start.
//! 2. [`block`] cuts a group into runs that no interval spans, so each run can be solved
//!    on its own.
//! 3. [`engine`] solves one run with the classic `O(n log n)` dynamic programme.
//! 4. [`aggregate`] sums the runs of each group and keeps the chosen records.
//!
//! Groups never interact; the result of a group is the concatenation of the results of
//! its blocks.

pub mod aggregate;
pub mod block;
pub mod engine;
pub mod error;
pub mod group;

pub use aggregate::{Aggregator, GroupSummary};
pub use block::{blocks, Blocks};
pub use engine::{schedule, Selection};
pub use error::ResolveError;
pub use group::group_by;

use indexmap::IndexMap;
use std::fmt::Display;

use crate::libs::interval::Interval;

/// Run-wide switches, passed explicitly to the grouper and the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveConfig {
    /// Input is already ordered by start within each group; verify instead of sorting
    pub presorted: bool,
    /// Keep only per-group totals, not the selected records
    pub diagnostics: bool,
}

/// Solves every group in `groups`, in their map order.
pub fn resolve<'a, K, T>(
    groups: &'a IndexMap<K, Vec<T>>,
    config: &ResolveConfig,
) -> Aggregator<'a, K, T>
where
    K: Clone + Display,
    T: Interval,
{
    let mut aggregator = Aggregator::new(config);
    for (key, items) in groups {
        aggregator.add_group(key.clone(), items);
    }

    tracing::info!(
        groups = aggregator.groups().len(),
        weight = %aggregator.total_weight(),
        selected = aggregator.total_count(),
        "resolved overlaps"
    );

    aggregator
}
