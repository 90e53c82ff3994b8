//! Currying with explicit arity
//!
//! Closures carry no runtime parameter count, so the arity is fixed either by
//! the constructor (`curry2`, `curry3`) or passed in (`curry_n`). A curried
//! function invokes its target as soon as it has every argument; given fewer,
//! it returns a wrapper that captures the prefix and waits for the rest. Only
//! one level of deferral is supported: the wrapper invokes the target on its
//! first call.

use crate::errors::{Error, Result};
use std::sync::Arc;

/// Curry a two-argument function into a chain of single-argument calls
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    F: Fn(A, B) -> C + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    move |a| {
        let f = f.clone();
        Box::new(move |b| f(a.clone(), b))
    }
}

/// Uncurry a curried function
pub fn uncurry<A, B, C, F>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> Box<dyn Fn(B) -> C>,
{
    move |a, b| f(a)(b)
}

/// Curry a function of two arguments
pub fn curry2<F>(f: F) -> Curried2<F> {
    Curried2 { f: Arc::new(f) }
}

/// Curry a function of three arguments
pub fn curry3<F>(f: F) -> Curried3<F> {
    Curried3 { f: Arc::new(f) }
}

/// Two-argument function that accepts its first argument early
pub struct Curried2<F> {
    f: Arc<F>,
}

impl<F> Curried2<F> {
    /// Full application
    pub fn call<A, B, R>(&self, a: A, b: B) -> R
    where
        F: Fn(A, B) -> R,
    {
        (self.f)(a, b)
    }

    /// Capture `a`; the returned function supplies `b` and invokes the target
    pub fn partial<A, B, R>(&self, a: A) -> impl Fn(B) -> R
    where
        F: Fn(A, B) -> R,
        A: Clone,
    {
        let f = Arc::clone(&self.f);
        move |b| f(a.clone(), b)
    }
}

impl<F> Clone for Curried2<F> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

/// Three-argument function that accepts a prefix of its arguments early
pub struct Curried3<F> {
    f: Arc<F>,
}

impl<F> Curried3<F> {
    /// Full application
    pub fn call<A, B, C, R>(&self, a: A, b: B, c: C) -> R
    where
        F: Fn(A, B, C) -> R,
    {
        (self.f)(a, b, c)
    }

    /// Capture `a`; the returned function supplies `b` and `c`
    pub fn partial<A, B, C, R>(&self, a: A) -> impl Fn(B, C) -> R
    where
        F: Fn(A, B, C) -> R,
        A: Clone,
    {
        let f = Arc::clone(&self.f);
        move |b, c| f(a.clone(), b, c)
    }

    /// Capture `a` and `b`; the returned function supplies `c`
    pub fn partial2<A, B, C, R>(&self, a: A, b: B) -> impl Fn(C) -> R
    where
        F: Fn(A, B, C) -> R,
        A: Clone,
        B: Clone,
    {
        let f = Arc::clone(&self.f);
        move |c| f(a.clone(), b.clone(), c)
    }
}

impl<F> Clone for Curried3<F> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

/// Curry a function over an argument list with a declared arity
pub fn curry_n<A, R, F>(arity: usize, f: F) -> CurryN<F>
where
    F: Fn(Vec<A>) -> R,
{
    CurryN {
        arity,
        f: Arc::new(f),
    }
}

/// Function over an argument list that defers until `arity` arguments arrive
pub struct CurryN<F> {
    arity: usize,
    f: Arc<F>,
}

/// Outcome of calling a [`CurryN`]
pub enum Applied<R, P> {
    /// Enough arguments were supplied; the target ran
    Done(R),
    /// Too few arguments; call the wrapper with the rest
    Partial(P),
}

impl<R, P> Applied<R, P> {
    /// The result, if the target ran
    pub fn done(self) -> Option<R> {
        match self {
            Applied::Done(result) => Some(result),
            Applied::Partial(_) => None,
        }
    }

    /// The waiting wrapper, if the call was deferred
    pub fn partial(self) -> Option<P> {
        match self {
            Applied::Done(_) => None,
            Applied::Partial(partial) => Some(partial),
        }
    }
}

impl<F> CurryN<F> {
    /// Declared arity
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invoke the target when `args` covers the arity (extra arguments are
    /// passed through), otherwise capture `args` and defer
    pub fn call<A, R>(&self, args: Vec<A>) -> Applied<R, PartialN<A, F>>
    where
        F: Fn(Vec<A>) -> R,
    {
        if args.len() >= self.arity {
            return Applied::Done((self.f)(args));
        }

        tracing::trace!(
            supplied = args.len(),
            arity = self.arity,
            "deferring curried call"
        );
        Applied::Partial(PartialN {
            arity: self.arity,
            captured: args,
            f: Arc::clone(&self.f),
        })
    }
}

/// Curried function holding a captured argument prefix
pub struct PartialN<A, F> {
    arity: usize,
    captured: Vec<A>,
    f: Arc<F>,
}

impl<A: Clone, F> PartialN<A, F> {
    /// Arguments captured so far
    pub fn captured(&self) -> &[A] {
        &self.captured
    }

    /// How many more arguments the target expects
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.captured.len())
    }

    /// Append `rest` to the captured prefix and invoke the target.
    ///
    /// Fails with `InvalidArgument` if the combined list is still shorter
    /// than the arity; there is no second level of deferral.
    pub fn call<R>(&self, rest: Vec<A>) -> Result<R>
    where
        F: Fn(Vec<A>) -> R,
    {
        if rest.len() < self.remaining() {
            return Err(Error::invalid_argument(
                "curry",
                format!(
                    "expected {} more argument(s), got {}",
                    self.remaining(),
                    rest.len()
                ),
            ));
        }

        let mut args = Vec::with_capacity(self.captured.len() + rest.len());
        args.extend(self.captured.iter().cloned());
        args.extend(rest);
        Ok((self.f)(args))
    }
}
