//! Scored intervals and the key that partitions them into independent groups.

use std::fmt;

/// A scored, closed interval `[start, finish]`.
///
/// This is the only view the block splitter and the scheduling engine need, so both
/// stay generic over the record type that carries the coordinates.
pub trait Interval {
    fn start(&self) -> u64;
    fn finish(&self) -> u64;
    fn weight(&self) -> i64;

    /// Closed intervals that share an endpoint overlap.
    ///
    /// ```
    /// use gor::libs::interval::{Interval, Span};
    /// let a = Span::new(1, 5, 1);
    /// assert!(a.overlaps(&Span::new(5, 8, 1)));
    /// assert!(!a.overlaps(&Span::new(6, 8, 1)));
    /// ```
    fn overlaps<T: Interval + ?Sized>(&self, other: &T) -> bool {
        self.start() <= other.finish() && other.start() <= self.finish()
    }
}

impl<T: Interval + ?Sized> Interval for &T {
    fn start(&self) -> u64 {
        (**self).start()
    }
    fn finish(&self) -> u64 {
        (**self).finish()
    }
    fn weight(&self) -> i64 {
        (**self).weight()
    }
}

/// A payload tagged with its interval.
impl<P, T: Interval> Interval for (P, T) {
    fn start(&self) -> u64 {
        self.1.start()
    }
    fn finish(&self) -> u64 {
        self.1.finish()
    }
    fn weight(&self) -> i64 {
        self.1.weight()
    }
}

/// A bare interval without any payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u64,
    pub finish: u64,
    pub weight: i64,
}

impl Span {
    pub fn new(start: u64, finish: u64, weight: i64) -> Self {
        Self {
            start,
            finish,
            weight,
        }
    }
}

impl Interval for Span {
    fn start(&self) -> u64 {
        self.start
    }
    fn finish(&self) -> u64 {
        self.finish
    }
    fn weight(&self) -> i64 {
        self.weight
    }
}

/// Sequence id, feature type and strand. Intervals with different keys never compete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub seq_id: String,
    pub feature: String,
    pub strand: String,
}

impl GroupKey {
    pub fn new(seq_id: &str, feature: &str, strand: &str) -> Self {
        Self {
            seq_id: seq_id.to_string(),
            feature: feature.to_string(),
            strand: strand.to_string(),
        }
    }
}

impl fmt::Display for GroupKey {
    /// The three tokens glued together, as the diagnostic output has always shown them.
    ///
    /// ```
    /// # use gor::libs::interval::GroupKey;
    /// let key = GroupKey::new("chr1", "gene", "+");
    /// assert_eq!(key.to_string(), "chr1gene+");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.seq_id, self.feature, self.strand)
    }
}
