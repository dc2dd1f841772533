//! Time quantization: ticks to steps.

use crate::prelude::*;

/// Maps an absolute tick to the step containing it.
///
/// Rounds down, so a note shorter than one step can start and end on the same step.
///
/// # Panics
/// if `ticks_per_step` is zero. [`Quantizer::new`] rules that out.
#[inline]
pub const fn quantize(tick: Ticks, ticks_per_step: u64) -> u64 {
    tick.get() / ticks_per_step
}

#[doc = r#"
Splits each beat of a file into a fixed number of steps.

# Example
```rust
# use midichart::prelude::*;
let quantizer = Quantizer::new(480, 4).unwrap();
assert_eq!(quantizer.ticks_per_step(), 120);
assert_eq!(quantizer.step(Ticks::new(239)), 1);
assert_eq!(quantizer.step(Ticks::new(240)), 2);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantizer {
    ticks_per_step: u64,
}

impl Quantizer {
    /// `ticks_per_step = ticks_per_beat / subdivision`, truncated.
    ///
    /// Fails if the subdivision is zero or the truncated step is zero ticks long.
    pub fn new(ticks_per_beat: u16, subdivision: u32) -> Result<Self, ConfigError> {
        if subdivision == 0 {
            return Err(ConfigError::ZeroSubdivision);
        }
        let ticks_per_step = ticks_per_beat as u64 / subdivision as u64;
        if ticks_per_step == 0 {
            return Err(ConfigError::StepTooSmall {
                ticks_per_beat,
                subdivision,
            });
        }
        Ok(Self { ticks_per_step })
    }

    /// Length of one step in ticks
    pub const fn ticks_per_step(&self) -> u64 {
        self.ticks_per_step
    }

    /// The step index for `tick`
    #[inline]
    pub const fn step(&self, tick: Ticks) -> u64 {
        quantize(tick, self.ticks_per_step)
    }
}

#[test]
fn truncates_step_length() {
    assert_eq!(Quantizer::new(100, 3).unwrap().ticks_per_step(), 33);
    assert_eq!(Quantizer::new(96, 4).unwrap().ticks_per_step(), 24);
}

#[test]
fn rejects_zero_length_steps() {
    assert_eq!(Quantizer::new(480, 0), Err(ConfigError::ZeroSubdivision));
    assert_eq!(
        Quantizer::new(3, 4),
        Err(ConfigError::StepTooSmall {
            ticks_per_beat: 3,
            subdivision: 4
        })
    );
    assert!(Quantizer::new(0, 1).is_err());
}

#[test]
fn step_boundaries_map_exactly() {
    let quantizer = Quantizer::new(480, 4).unwrap();
    for k in 0..64 {
        assert_eq!(quantizer.step(Ticks::new(k * 120)), k);
    }
}

#[test]
fn steps_never_decrease() {
    let quantizer = Quantizer::new(96, 3).unwrap();
    let mut last = 0;
    for tick in 0..2_000 {
        let step = quantizer.step(Ticks::new(tick));
        assert!(step >= last);
        last = step;
    }
}

#[test]
fn short_note_lands_on_one_step() {
    let quantizer = Quantizer::new(480, 4).unwrap();
    assert_eq!(quantizer.step(Ticks::new(121)), quantizer.step(Ticks::new(239)));
}
