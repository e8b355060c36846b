use crate::libs::interval::Interval;

/// The optimal non-overlapping subset of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a, T> {
    /// Sum of the weights of `items`, wide enough that no sum of `i64` scores overflows
    pub weight: i128,
    /// Chosen intervals by increasing finish
    pub items: Vec<&'a T>,
}

impl<T> Selection<'_, T> {
    pub fn empty() -> Self {
        Self {
            weight: 0,
            items: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A partial solution: chosen intervals, their total weight and the last finish.
///
/// Chosen intervals live in a shared arena as a linked list ending at `last`, so
/// extending a sequence never copies the intervals it already holds.
#[derive(Debug, Clone, Copy)]
struct Sequence {
    weight: i128,
    finish: u64,
    last: Option<usize>,
}

impl Sequence {
    fn empty() -> Self {
        Self {
            weight: 0,
            finish: 0,
            last: None,
        }
    }
}

struct Link {
    item: usize,
    prev: Option<usize>,
}

/// DP table `S[0..=n]` plus the arena its sequences point into.
struct Table {
    seqs: Vec<Sequence>,
    links: Vec<Link>,
}

impl Table {
    fn with_capacity(n: usize) -> Self {
        let mut seqs = Vec::with_capacity(n + 1);
        seqs.push(Sequence::empty());
        Self {
            seqs,
            links: Vec::with_capacity(n),
        }
    }

    /// `S[base]` followed by the `item`-th interval.
    fn extend<T: Interval>(&mut self, base: usize, item: usize, iv: &T) -> Sequence {
        let base = self.seqs[base];
        self.links.push(Link {
            item,
            prev: base.last,
        });
        Sequence {
            weight: base.weight + i128::from(iv.weight()),
            finish: iv.finish(),
            last: Some(self.links.len() - 1),
        }
    }

    /// Indices of the intervals held by `seq`, by increasing finish.
    fn chosen(&self, seq: &Sequence) -> Vec<usize> {
        let mut chosen = vec![];
        let mut cur = seq.last;
        while let Some(idx) = cur {
            chosen.push(self.links[idx].item);
            cur = self.links[idx].prev;
        }
        chosen.reverse();
        chosen
    }
}

/// Selects the maximum-weight subset of pairwise non-overlapping intervals of `block`.
///
/// Intervals are closed, so two intervals sharing an endpoint overlap. Each interval `i`
/// (by increasing finish) either extends the best sequence among the intervals finishing
/// strictly before its start, or is skipped. The interval is taken only when that makes
/// the total strictly larger, so among equal-weight alternatives the one built from
/// earlier-finishing intervals is kept, and intervals of weight zero or less are never
/// chosen.
///
/// Runs in `O(n log n)`. Intervals must satisfy `start <= finish`.
///
/// ```
/// # use gor::libs::interval::Span;
/// # use gor::libs::schedule::schedule;
/// let block = [
///     Span::new(1, 5, 10),
///     Span::new(3, 8, 12),
///     Span::new(6, 10, 8),
///     Span::new(9, 12, 7),
/// ];
/// let sel = schedule(&block);
/// assert_eq!(sel.weight, 19);
/// assert_eq!(sel.items, vec![&block[1], &block[3]]);
/// ```
pub fn schedule<T: Interval>(block: &[T]) -> Selection<'_, T> {
    if block.is_empty() {
        return Selection::empty();
    }

    // Stable, equal finishes keep their start order
    let mut order: Vec<&T> = block.iter().collect();
    order.sort_by_key(|iv| iv.finish());
    let finishes: Vec<u64> = order.iter().map(|iv| iv.finish()).collect();

    let mut table = Table::with_capacity(order.len());
    for (i, iv) in order.iter().enumerate() {
        // Number of intervals finishing before `iv` starts, i.e. the table row to extend
        let pred = finishes.partition_point(|&f| f < iv.start()).min(i);
        let candidate = table.extend(pred, i, iv);
        let skip = table.seqs[i];

        table
            .seqs
            .push(if candidate.weight > skip.weight { candidate } else { skip });
    }

    let best = table.seqs[order.len()];
    tracing::trace!(
        intervals = order.len(),
        weight = %best.weight,
        finish = best.finish,
        "scheduled block"
    );

    Selection {
        weight: best.weight,
        items: table.chosen(&best).into_iter().map(|i| order[i]).collect(),
    }
}
