//! Memoization keyed by the stringified arguments of a call
//!
//! The cache key of a call is the `Display` form of each argument joined with
//! a comma. Distinct arguments that stringify the same way share a key: the
//! integer `1` and the string `"1"` hit the same entry, and so do `(1, 2)` and
//! `"1,2"`. Callers that need to tell such values apart must memoize over a
//! type whose rendering keeps them distinct.

use crate::config::{CachePolicy, MemoizeConfig};
use crate::constants::ARG_KEY_SEPARATOR;
use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stringified form of a call's arguments
pub trait ArgKey {
    fn arg_key(&self) -> String;
}

macro_rules! display_arg_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ArgKey for $ty {
                fn arg_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_arg_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: ArgKey + ?Sized> ArgKey for &T {
    fn arg_key(&self) -> String {
        (**self).arg_key()
    }
}

impl<T: ArgKey> ArgKey for [T] {
    fn arg_key(&self) -> String {
        join_keys(self.iter().map(ArgKey::arg_key))
    }
}

impl<T: ArgKey> ArgKey for Vec<T> {
    fn arg_key(&self) -> String {
        self.as_slice().arg_key()
    }
}

/// Strings render without quotes, so `json!("1")` and `json!(1)` collide
impl ArgKey for Value {
    fn arg_key(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Array(items) => items.arg_key(),
            other => other.to_string(),
        }
    }
}

impl ArgKey for () {
    fn arg_key(&self) -> String {
        String::new()
    }
}

macro_rules! tuple_arg_key {
    ($($name:ident),+) => {
        impl<$($name: ArgKey),+> ArgKey for ($($name,)+) {
            #[allow(non_snake_case)]
            fn arg_key(&self) -> String {
                let ($($name,)+) = self;
                join_keys([$($name.arg_key()),+])
            }
        }
    };
}

tuple_arg_key!(A);
tuple_arg_key!(A, B);
tuple_arg_key!(A, B, C);
tuple_arg_key!(A, B, C, D);

fn join_keys<I>(parts: I) -> String
where
    I: IntoIterator<Item = String>,
{
    parts
        .into_iter()
        .collect::<Vec<_>>()
        .join(ARG_KEY_SEPARATOR)
}

/// Wrap `f` so repeated calls with the same argument key reuse the first
/// result. The cache is never evicted.
pub fn memoize<A, R, F>(f: F) -> Memoized<F, R>
where
    A: ArgKey,
    F: Fn(A) -> R,
{
    memoize_with(f, MemoizeConfig::unbounded())
}

/// [`memoize`] with an explicit cache policy
pub fn memoize_with<A, R, F>(f: F, config: MemoizeConfig) -> Memoized<F, R>
where
    A: ArgKey,
    F: Fn(A) -> R,
{
    tracing::debug!(policy = ?config.policy, "creating memoized function");
    Memoized {
        f,
        cache: Mutex::new(MemoCache::new(config.policy)),
        hits: AtomicU64::new(0),
        misses: AtomicU64::new(0),
    }
}

/// Counters describing a memo cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
    pub capacity: Option<NonZeroUsize>,
}

/// A function paired with its private result cache
///
/// The cache sits behind a mutex, so a `Memoized` is `Sync` whenever `F` and
/// `R` are. The wrapped function runs without the lock held; two threads
/// missing on the same key at once may both compute it.
pub struct Memoized<F, R> {
    f: F,
    cache: Mutex<MemoCache<R>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<F, R: Clone> Memoized<F, R> {
    /// Return the cached result for `args`, computing and storing it on a miss
    pub fn call<A>(&self, args: A) -> R
    where
        A: ArgKey,
        F: Fn(A) -> R,
    {
        let key = args.arg_key();

        let cached = self.cache.lock().get(&key);
        if let Some(result) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(key = %key, "memo hit");
            return result;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(key = %key, "memo miss");
        let result = (self.f)(args);
        self.cache.lock().insert(key, result.clone());
        result
    }
}

impl<F, R> Memoized<F, R> {
    /// Number of cached results
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a result is cached under the key `args` would produce
    pub fn contains<A: ArgKey>(&self, args: &A) -> bool {
        self.cache.lock().contains(&args.arg_key())
    }

    pub fn stats(&self) -> MemoStats {
        let cache = self.cache.lock();
        MemoStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            len: cache.len(),
            capacity: cache.capacity(),
        }
    }
}

enum MemoCache<R> {
    Unbounded(HashMap<String, R>),
    Lru(LruCache<String, R>),
}

impl<R> MemoCache<R> {
    fn new(policy: CachePolicy) -> Self {
        match policy {
            CachePolicy::Unbounded => MemoCache::Unbounded(HashMap::new()),
            CachePolicy::Lru { capacity } => MemoCache::Lru(LruCache::new(capacity)),
        }
    }

    fn get(&mut self, key: &str) -> Option<R>
    where
        R: Clone,
    {
        match self {
            MemoCache::Unbounded(map) => map.get(key).cloned(),
            MemoCache::Lru(lru) => lru.get(key).cloned(),
        }
    }

    fn insert(&mut self, key: String, value: R) {
        match self {
            MemoCache::Unbounded(map) => {
                map.insert(key, value);
            }
            MemoCache::Lru(lru) => {
                if let Some((evicted, _)) = lru.push(key, value) {
                    tracing::trace!(key = %evicted, "memo entry displaced");
                }
            }
        }
    }

    fn contains(&self, key: &str) -> bool {
        match self {
            MemoCache::Unbounded(map) => map.contains_key(key),
            MemoCache::Lru(lru) => lru.contains(key),
        }
    }

    fn len(&self) -> usize {
        match self {
            MemoCache::Unbounded(map) => map.len(),
            MemoCache::Lru(lru) => lru.len(),
        }
    }

    fn capacity(&self) -> Option<NonZeroUsize> {
        match self {
            MemoCache::Unbounded(_) => None,
            MemoCache::Lru(lru) => Some(lru.cap()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn computes_once_per_key() {
        let calls = Cell::new(0);
        let square = memoize(|n: i64| {
            calls.set(calls.get() + 1);
            n * n
        });

        assert_eq!(square.call(4), 16);
        assert_eq!(square.call(4), 16);
        assert_eq!(calls.get(), 1);

        assert_eq!(square.call(5), 25);
        assert_eq!(calls.get(), 2);
        assert_eq!(
            square.stats(),
            MemoStats {
                hits: 1,
                misses: 2,
                len: 2,
                capacity: None
            }
        );
    }

    #[test]
    fn tuple_arguments_join_with_commas() {
        assert_eq!((1, "a", 2.5).arg_key(), "1,a,2.5");
        assert_eq!((json!("x"), json!(null)).arg_key(), "x,null");
        assert_eq!(vec![1, 2].arg_key(), "1,2");
        assert_eq!(().arg_key(), "");
    }

    #[test]
    fn stringification_collisions_share_an_entry() {
        let calls = Cell::new(0);
        let echo = memoize(|v: Value| {
            calls.set(calls.get() + 1);
            v
        });

        assert_eq!(echo.call(json!(1)), json!(1));
        // "1" renders like 1 and gets the cached number back
        assert_eq!(echo.call(json!("1")), json!(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn lru_policy_bounds_the_cache() {
        let calls = Cell::new(0);
        let double = memoize_with(
            |n: u32| {
                calls.set(calls.get() + 1);
                n * 2
            },
            MemoizeConfig::bounded(2).unwrap(),
        );

        double.call(1);
        double.call(2);
        double.call(3); // evicts 1
        assert_eq!(double.len(), 2);
        assert!(!double.contains(&1));
        assert!(double.contains(&3));

        double.call(1);
        assert_eq!(calls.get(), 4);
        assert_eq!(double.stats().capacity, NonZeroUsize::new(2));
    }

    #[test]
    fn non_clone_results_can_be_wrapped() {
        struct Handle;

        fn bounded<R>(f: fn(u8) -> R) -> Memoized<fn(u8) -> R, R> {
            memoize_with(f, MemoizeConfig::bounded(1).unwrap())
        }

        let make = memoize(|_: u8| Handle);
        assert!(make.is_empty());
        assert_eq!(bounded(|_| Handle).stats().capacity, NonZeroUsize::new(1));
    }

    #[test]
    fn unbounded_cache_keeps_everything() {
        let identity = memoize(|n: usize| n);
        for n in 0..500 {
            identity.call(n);
        }
        assert_eq!(identity.len(), 500);
        assert!(!identity.is_empty());
    }

    #[test]
    fn shared_across_threads() {
        let calls = AtomicU64::new(0);
        let slow_len = memoize(|s: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            s.len()
        });

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for word in ["alpha", "beta", "gamma"] {
                        assert_eq!(slow_len.call(word.to_string()), word.len());
                    }
                });
            }
        });

        assert_eq!(slow_len.len(), 3);
        assert!(calls.load(Ordering::SeqCst) >= 3);
    }
}
