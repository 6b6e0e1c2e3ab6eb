// stepwise/src/navigation/progress.rs

//! Progress and position booleans derived from the cursor.

/// Percentage through the active steps, in `[0, 100]`.
///
/// A wizard with at most one active step is complete. Otherwise the first
/// step is 0, the last is 100, and steps in between are interpolated by
/// position, rounding half up. An unresolved cursor reports 0.
pub fn progress_percent(cursor: Option<usize>, total_steps: usize) -> u8 {
  if total_steps <= 1 {
    return 100;
  }
  let Some(idx) = cursor else {
    return 0;
  };
  let idx = idx.min(total_steps - 1);
  let span = total_steps - 1;
  // round(idx / span * 100) == floor((200 * idx + span) / (2 * span))
  let percent = (200 * idx + span) / (2 * span);
  percent as u8
}

pub fn is_first_step(cursor: Option<usize>) -> bool {
  cursor == Some(0)
}

pub fn is_last_step(cursor: Option<usize>, total_steps: usize) -> bool {
  match cursor {
    Some(idx) => total_steps > 0 && idx == total_steps - 1,
    None => false,
  }
}
