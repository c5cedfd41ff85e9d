// Bounded repetition of a zero-argument action ("n kertaa")

// RUST CONCEPT: The action's error type passes through untouched
// The first Err stops the loop and is returned as is; there is no retry and
// nothing to roll back. n <= 0 runs the action zero times.
pub fn repeat_n_times<E, F>(n: i64, mut action: F) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
{
    for _ in 0..n {
        action()?;
    }
    Ok(())
}
