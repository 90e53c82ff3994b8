//! Pipelines and function composition
//!
//! [`pipeline`] folds a value through stages of one type. The
//! [`pipeline!`](crate::pipeline) and [`try_pipeline!`](crate::try_pipeline)
//! macros thread a [`Pipe`] through stages whose types may differ, which a
//! homogeneous list of stages cannot express.

/// Apply `stages` left to right, each consuming the previous result,
/// starting from `seed`. A left fold over the stages.
pub fn pipeline<T, I, F>(seed: T, stages: I) -> T
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> T,
{
    stages.into_iter().fold(seed, |acc, stage| stage(acc))
}

/// `g` after `f`: the single-stage building block of a pipeline
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Returns its argument; the empty pipeline
pub fn identity<T>(value: T) -> T {
    value
}

/// Method form of [`compose`]
pub trait Compose<A, B>: Fn(A) -> B + Sized {
    /// Run `self`, then feed its result into `next`
    fn then<C, G>(self, next: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        compose(self, next)
    }
}

impl<A, B, F> Compose<A, B> for F where F: Fn(A) -> B {}

/// Value in flight through a `pipeline!`
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe<T>(T);

impl<T> Pipe<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Feed the value to the next stage
    pub fn pipe<U, F>(self, stage: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe(stage(self.0))
    }

    /// Feed the value to a fallible stage, stopping at its error
    pub fn try_pipe<U, E, F>(self, stage: F) -> Result<Pipe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        stage(self.0).map(Pipe)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Thread a value through stages that may change its type
#[macro_export]
macro_rules! pipeline {
    ($value:expr) => {
        $crate::functional::composition::Pipe::new($value)
    };
    ($value:expr, $($stage:expr),+ $(,)?) => {{
        let piped = $crate::functional::composition::Pipe::new($value);
        $(
            let piped = piped.pipe($stage);
        )+
        piped
    }};
}

/// [`pipeline!`] over fallible stages; returns early with the first error
#[macro_export]
macro_rules! try_pipeline {
    ($value:expr) => {
        Ok($crate::functional::composition::Pipe::new($value))
    };
    ($value:expr, $($stage:expr),+ $(,)?) => {{
        let piped = $crate::functional::composition::Pipe::new($value);
        $(
            let piped = piped.try_pipe($stage)?;
        )+
        Ok(piped)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, Result};

    fn add_five(x: i32) -> i32 {
        x + 5
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    #[test]
    fn pipeline_folds_left_to_right() {
        let stages: [fn(i32) -> i32; 3] = [add_five, double, identity];

        assert_eq!(pipeline(10, stages), 30);
        assert_eq!(pipeline(7, Vec::<fn(i32) -> i32>::new()), 7);
    }

    #[test]
    fn pipeline_agrees_with_nested_composition() {
        let composed = compose(compose(add_five, double), |x: i32| x - 3);
        let stages: [fn(i32) -> i32; 3] = [add_five, double, |x| x - 3];

        assert_eq!(composed(10), pipeline(10, stages));
    }

    #[test]
    fn compose_method_runs_left_then_right() {
        let describe = double.then(|n: i32| format!("{n}!"));
        assert_eq!(describe(21), "42!");
    }

    #[test]
    fn macro_stages_may_change_type() {
        let counted = pipeline!("4,5,6", |s: &str| s.split(',').count(), |n: usize| n * 10)
            .into_inner();
        assert_eq!(counted, 30);

        assert_eq!(pipeline!(3).into_inner(), 3);
        assert_eq!(pipeline!(10, add_five, double, |x| x - 3), Pipe::new(27));
    }

    #[test]
    fn try_pipeline_stops_at_the_first_error() {
        fn run(input: i32) -> Result<Pipe<i32>> {
            try_pipeline!(
                input,
                |x: i32| -> Result<i32> { Ok(x + 1) },
                |x: i32| -> Result<i32> {
                    if x > 5 {
                        Err(Error::invalid_argument("stage", "too large"))
                    } else {
                        Ok(x)
                    }
                }
            )
        }

        assert_eq!(run(1).unwrap().into_inner(), 2);
        assert!(run(10).unwrap_err().is_invalid_argument());
    }
}
