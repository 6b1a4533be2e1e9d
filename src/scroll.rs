// Scroll-direction tracking and stagger-delay assignment.
// The tracker is closure-local state owned by one listener registration;
// there is no process-wide scroll singleton.

/// Vertical scroll direction derived from consecutive offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Tracks the last known vertical offset for one scroll listener.
#[derive(Debug, Clone)]
pub struct DirectionTracker {
    last_offset: f64,
}

impl DirectionTracker {
    pub fn new(initial_offset: f64) -> Self {
        DirectionTracker {
            last_offset: initial_offset,
        }
    }

    /// Classify the current offset against the previous one and remember it.
    /// Only a strictly greater offset counts as Down.
    pub fn observe(&mut self, offset: f64) -> ScrollDirection {
        let direction = if offset > self.last_offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_offset = offset;
        direction
    }
}

/// Transition delay in seconds for the item at `index` of a `count`-item set.
/// Ascending stagger when scrolling down, descending when scrolling up, so the
/// reveal wave follows the scroll direction.
pub fn stagger_delay_secs(
    index: usize,
    count: usize,
    direction: ScrollDirection,
    step_secs: f64,
) -> f64 {
    let position = match direction {
        ScrollDirection::Down => index,
        ScrollDirection::Up => count.saturating_sub(1).saturating_sub(index),
    };
    position as f64 * step_secs
}
