//! Largest and smallest element

use crate::iteration::each;
use fnkit_core::Container;

/// Largest element; the first of equal maxima wins.
///
/// Values that do not compare with themselves (a float NaN) are skipped.
/// `None` when nothing comparable is present.
pub fn max<T>(container: &Container<T>) -> Option<T>
where
    T: PartialOrd + Clone,
{
    extreme(container, |candidate, best| candidate > best)
}

/// Smallest element; the first of equal minima wins
pub fn min<T>(container: &Container<T>) -> Option<T>
where
    T: PartialOrd + Clone,
{
    extreme(container, |candidate, best| candidate < best)
}

fn extreme<T, W>(container: &Container<T>, wins: W) -> Option<T>
where
    T: PartialOrd + Clone,
    W: Fn(&T, &T) -> bool,
{
    let mut best: Option<&T> = None;
    each(container, |value, _| {
        if value.partial_cmp(value).is_none() {
            return;
        }
        if best.map_or(true, |current| wins(value, current)) {
            best = Some(value);
        }
    });
    best.cloned()
}
