use core::fmt;
use core::ops::{Add, AddAssign, Sub};

/// An absolute position in a track, counted in MIDI ticks from the track start.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticks(u64);

impl Ticks {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates a new tick position
    #[inline]
    pub const fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Returns the tick count as a u64
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Advances by a delta time read from a track event.
    #[inline]
    pub const fn advance(&self, delta: u32) -> Self {
        Self(self.0 + delta as u64)
    }

    /// Returns no time if I am less than other.
    pub const fn saturating_sub(&self, other: Self) -> Ticks {
        Ticks(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

impl Add for Ticks {
    type Output = Ticks;
    fn add(self, rhs: Self) -> Self::Output {
        Ticks(self.0 + rhs.0)
    }
}

impl Add<u32> for Ticks {
    type Output = Ticks;
    fn add(self, rhs: u32) -> Self::Output {
        self.advance(rhs)
    }
}

impl AddAssign<u32> for Ticks {
    fn add_assign(&mut self, rhs: u32) {
        self.0 += rhs as u64;
    }
}

impl Sub for Ticks {
    type Output = Ticks;
    fn sub(self, rhs: Self) -> Self::Output {
        Ticks(self.0 - rhs.0)
    }
}

impl From<u64> for Ticks {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[test]
fn accumulates_deltas() {
    let mut tick = Ticks::ZERO;
    tick += 120;
    tick += 0;
    tick += 360;
    assert_eq!(tick, Ticks::new(480));
    assert_eq!(tick + 20u32, Ticks::new(500));
}

#[test]
fn saturating_sub_stops_at_zero() {
    let early = Ticks::new(10);
    let late = Ticks::new(50);
    assert_eq!(late - early, Ticks::new(40));
    assert_eq!(early.saturating_sub(late), Ticks::ZERO);
}
