pub const PAGE_STEP: usize = 5;

/// Moves forward by `step`, stopping on the last of `len` entries.
pub const fn clamp_increment(index: usize, step: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let next = index.saturating_add(step);
    if next >= len {
        len - 1
    } else {
        next
    }
}

pub const fn clamp_decrement(index: usize, step: usize) -> usize {
    index.saturating_sub(step)
}
