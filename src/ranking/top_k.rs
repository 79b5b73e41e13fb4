//! Bounded top-K retention and the ranker that orders what was retained.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::SortOrder;
use crate::catalog::{Item, PlatformFilter};

/// Keeps the `capacity` smallest values offered to it, in one streaming pass.
///
/// "Smallest" is by `Ord`: for ranked items `Less` means better, so this
/// retains the best `capacity` items. The worst retained value sits at the
/// top of a max-heap and is replaced in place when something better arrives,
/// so the working set never grows past `capacity`.
#[derive(Debug, Clone)]
pub struct TopK<T> {
    capacity: usize,
    heap: BinaryHeap<T>,
}

impl<T: Ord> TopK<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Offer a value. Returns whatever fell out: the evicted previous worst,
    /// the offered value itself if it did not make the cut, or `None`.
    pub fn offer(&mut self, value: T) -> Option<T> {
        if self.heap.len() < self.capacity {
            self.heap.push(value);
            return None;
        }
        match self.heap.peek_mut() {
            Some(mut worst) if value < *worst => Some(std::mem::replace(&mut *worst, value)),
            _ => Some(value),
        }
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The worst value currently retained.
    #[cfg(test)]
    pub fn worst(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Retained values in no particular order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    /// Retained values, best first.
    #[cfg(test)]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }
}

impl<T: Ord> Extend<T> for TopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}

/// An item paired with the order it is ranked under.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    pub item: &'a Item,
    pub order: SortOrder,
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order.compare(self.item, other.item)
    }
}

/// Count the items the filter accepts.
pub fn count_compatible(items: &[Item], filter: PlatformFilter) -> usize {
    items.iter().filter(|item| filter.accepts(item)).count()
}

/// Stream `items` through the filter and keep the best `k` under `order`.
///
/// The result holds `min(k, accepted)` items in no particular order.
pub fn retain_top_k<'a, I>(
    items: I,
    filter: PlatformFilter,
    order: SortOrder,
    k: usize,
) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut top = TopK::new(k);
    top.extend(
        items
            .into_iter()
            .filter(|item| filter.accepts(item))
            .map(|item| Ranked { item, order }),
    );
    top.into_vec().into_iter().map(|ranked| ranked.item).collect()
}

/// Order retained items best first. Stable, so items the comparator considers
/// equal keep their relative input order.
pub fn rank<'a>(mut items: Vec<&'a Item>, order: SortOrder) -> Vec<&'a Item> {
    items.sort_by(|a, b| order.compare(a, b));
    items
}
