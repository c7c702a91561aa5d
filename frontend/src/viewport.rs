//! Viewport width classes.

/// Display width class, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Smallest width in CSS pixels that belongs to this class
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 600,
            Breakpoint::Md => 960,
            Breakpoint::Lg => 1280,
            Breakpoint::Xl => 1920,
        }
    }

    pub fn from_width(width: f64) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| width >= f64::from(bp.min_width()))
            .unwrap_or(Breakpoint::Xs)
    }

    /// True when this class is at or above `threshold`.
    pub fn is_width_up(self, threshold: Breakpoint) -> bool {
        self >= threshold
    }
}
