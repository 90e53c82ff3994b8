//! Positional grouping of sequences

/// Group the `i`th element of every input, for each position of the first
/// input. Shorter inputs contribute `None` past their end; longer ones are
/// truncated. No inputs yield no groups.
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let Some(first) = sequences.first() else {
        return Vec::new();
    };

    (0..first.as_ref().len())
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}

/// Two-input [`zip`] for inputs of different element types
pub fn zip2<A, B>(first: &[A], second: &[B]) -> Vec<(A, Option<B>)>
where
    A: Clone,
    B: Clone,
{
    first
        .iter()
        .enumerate()
        .map(|(index, a)| (a.clone(), second.get(index).cloned()))
        .collect()
}
