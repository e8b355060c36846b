use crate::libs::interval::Interval;

/// Lazily cuts a start-sorted slice into blocks.
///
/// A block ends right before the first interval whose start lies beyond every finish seen
/// so far in the block. No interval crosses a block boundary, so blocks can be scheduled
/// independently and their selections concatenated.
pub struct Blocks<'a, T> {
    items: &'a [T],
    pos: usize,
}

/// ```
/// # use gor::libs::interval::Span;
/// # use gor::libs::schedule::blocks;
/// let items = [
///     Span::new(1, 10, 1),
///     Span::new(3, 4, 1),
///     Span::new(10, 12, 1), // touches 10, stays in the first block
///     Span::new(13, 20, 1),
/// ];
/// let lens: Vec<usize> = blocks(&items).map(|b| b.len()).collect();
/// assert_eq!(lens, vec![3, 1]);
/// ```
pub fn blocks<T: Interval>(items: &[T]) -> Blocks<'_, T> {
    Blocks { items, pos: 0 }
}

impl<'a, T: Interval> Iterator for Blocks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.items.len() {
            return None;
        }

        let begin = self.pos;
        let mut most_far = self.items[begin].finish();
        let mut end = begin + 1;
        while end < self.items.len() && self.items[end].start() <= most_far {
            most_far = most_far.max(self.items[end].finish());
            end += 1;
        }

        self.pos = end;
        Some(&self.items[begin..end])
    }
}
