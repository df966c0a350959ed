/// Transition hint consumed by the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }
}

/// Current/previous page-index pair.
///
/// Records the prior value on every write; direction derives from the pair
/// and is never stored separately. Equal values resolve to `Forward` so the
/// surface always receives a well-formed instruction, even for no-op
/// updates. The tracker has no bounds knowledge; the coordinator validates
/// indices before they reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTracker {
    current: usize,
    previous: usize,
}

impl PageTracker {
    pub fn new(initial: usize) -> Self {
        Self {
            current: initial,
            previous: initial,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn previous(&self) -> usize {
        self.previous
    }

    /// Records a transition unconditionally; no-op detection is the
    /// caller's responsibility.
    pub fn set(&mut self, index: usize) {
        self.previous = self.current;
        self.current = index;
    }

    pub fn direction(&self) -> Direction {
        if self.current >= self.previous {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Direction of a prospective transition from `current` to `target`.
    pub fn direction_to(&self, target: usize) -> Direction {
        if target >= self.current {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }
}
