use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt::Display;
use std::hash::Hash;

use super::ResolveError;
use crate::libs::interval::Interval;

/// Partitions `items` by `key_of` and orders every group by start.
///
/// Groups appear in the order their first member was seen. Within a group the sort is
/// stable, so intervals with equal starts keep their input order. With `presorted`,
/// groups are checked rather than sorted, and the first decreasing start is reported.
///
/// ```
/// # use gor::libs::interval::Span;
/// # use gor::libs::schedule::group_by;
/// let items = vec![
///     ("b", Span::new(5, 9, 1)),
///     ("a", Span::new(7, 8, 1)),
///     ("b", Span::new(1, 3, 1)),
/// ];
/// let groups = group_by(items, |(k, _)| *k, false).unwrap();
/// let keys: Vec<_> = groups.keys().copied().collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(groups["b"][0].1.start, 1);
/// ```
pub fn group_by<T, K, F>(
    items: impl IntoIterator<Item = T>,
    key_of: F,
    presorted: bool,
) -> Result<IndexMap<K, Vec<T>>, ResolveError>
where
    T: Interval,
    K: Hash + Eq + Display,
    F: Fn(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key_of(&item)).or_default().push(item);
    }

    for (key, group) in groups.iter_mut() {
        if presorted {
            if let Some((prev, next)) = group
                .iter()
                .tuple_windows()
                .find(|(prev, next)| next.start() < prev.start())
            {
                return Err(ResolveError::Unsorted {
                    group: key.to_string(),
                    prev: prev.start(),
                    start: next.start(),
                });
            }
        } else {
            group.sort_by_key(|item| item.start());
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::interval::Span;

    fn tagged(raw: &[(&'static str, u64, u64, i64)]) -> Vec<(&'static str, Span)> {
        raw.iter()
            .map(|&(k, s, f, w)| (k, Span::new(s, f, w)))
            .collect()
    }

    #[test]
    fn test_stable_sort() {
        let items = tagged(&[
            ("x", 5, 6, 1),
            ("x", 2, 9, 2),
            ("x", 2, 3, 3),
            ("x", 1, 1, 4),
        ]);
        let groups = group_by(items, |(k, _)| *k, false).unwrap();
        let weights: Vec<i64> = groups["x"].iter().map(|(_, s)| s.weight).collect();
        assert_eq!(weights, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_presorted_kept() {
        let items = tagged(&[("x", 1, 5, 1), ("y", 9, 9, 1), ("x", 1, 2, 2), ("x", 4, 4, 3)]);
        let groups = group_by(items, |(k, _)| *k, true).unwrap();
        assert_eq!(groups.len(), 2);
        let weights: Vec<i64> = groups["x"].iter().map(|(_, s)| s.weight).collect();
        assert_eq!(weights, vec![1, 2, 3]);
    }

    #[test]
    fn test_presorted_violation() {
        // Unsorted across groups is fine, unsorted within one is not
        let items = tagged(&[("x", 10, 15, 1), ("y", 1, 2, 1), ("x", 3, 4, 1)]);
        let err = group_by(items, |(k, _)| *k, true).unwrap_err();
        match err {
            ResolveError::Unsorted { group, prev, start } => {
                assert_eq!(group, "x");
                assert_eq!(prev, 10);
                assert_eq!(start, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty() {
        let items: Vec<(&str, Span)> = vec![];
        let groups = group_by(items, |(k, _)| *k, false).unwrap();
        assert!(groups.is_empty());
    }
}
