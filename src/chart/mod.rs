#![doc = r#"
Contains the chart: fixed-width rows of lane codes

# Overview

A chart is what the hardware loader plays back. Each [`Row`] is one tick of
the hardware clock and holds a [`LaneCode`] for each of the [`LANES`] lanes.
A quantized step of the source expands into `rows_per_step` consecutive rows.

A note painted onto a lane shows [`LaneCode::Head`] for its first step worth
of rows, then [`LaneCode::Tail`] until the row its release quantizes to.

## Wire format

Every row is written as one line of eight ASCII binary digits, two per lane,
lane 0 first:

```text
10000000   lane 0 head
01000000   lane 0 tail
00100010   lane 1 head, lane 3 head
```

No header, no trailer. `11` never appears.
"#]

mod code;
pub use code::*;

mod text;
pub use text::*;

/// Number of lanes (buttons) on the hardware
pub const LANES: usize = 4;

/// One row of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row([LaneCode; LANES]);

impl Row {
    /// A row with nothing on it
    pub const EMPTY: Self = Self([LaneCode::None; LANES]);

    /// Create a row from its lane codes
    pub const fn new(codes: [LaneCode; LANES]) -> Self {
        Self(codes)
    }

    /// The code shown on `lane`
    ///
    /// # Panics
    /// if `lane >= LANES`
    #[inline]
    pub const fn lane(&self, lane: usize) -> LaneCode {
        self.0[lane]
    }

    /// Returns the lane codes, lane 0 first
    #[inline]
    pub const fn codes(&self) -> &[LaneCode; LANES] {
        &self.0
    }

    /// Overwrites the code on `lane`.
    ///
    /// # Panics
    /// if `lane >= LANES`
    #[inline]
    pub fn set(&mut self, lane: usize, code: LaneCode) {
        self.0[lane] = code;
    }
}

#[doc = r#"
An ordered sequence of rows.

# Example
```rust
# use midichart::prelude::*;
let mut chart = Chart::blank(8);

// rows 0..6 on lane 2, with a head one step (4 rows) long
chart.paint(2, 0, 6, 4);

assert_eq!(chart.rows()[3].lane(2), LaneCode::Head);
assert_eq!(chart.rows()[4].lane(2), LaneCode::Tail);
assert_eq!(chart.rows()[6].lane(2), LaneCode::None);
```
"#]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    rows: Vec<Row>,
}

impl Chart {
    /// A chart of `num_rows` empty rows
    pub fn blank(num_rows: usize) -> Self {
        Self {
            rows: vec![Row::EMPTY; num_rows],
        }
    }

    /// Create a chart from rows
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns the rows, in playback order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the chart has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The codes of a single lane, top to bottom
    pub fn lane(&self, lane: usize) -> impl Iterator<Item = LaneCode> + '_ {
        self.rows.iter().map(move |row| row.lane(lane))
    }

    /// Paints rows `start_row..end_row` of `lane`.
    ///
    /// The first `head_rows` rows of the range get [`LaneCode::Head`], the rest
    /// [`LaneCode::Tail`]. Whatever was there before is overwritten. Rows past
    /// the end of the chart are skipped.
    ///
    /// Returns how many rows were written.
    ///
    /// # Panics
    /// if `lane >= LANES`
    pub fn paint(&mut self, lane: usize, start_row: usize, end_row: usize, head_rows: usize) -> usize {
        let head_end = start_row.saturating_add(head_rows);
        let end_row = end_row.min(self.rows.len());
        if start_row >= end_row {
            return 0;
        }

        for (offset, row) in self.rows[start_row..end_row].iter_mut().enumerate() {
            let code = if start_row + offset < head_end {
                LaneCode::Head
            } else {
                LaneCode::Tail
            };
            row.set(lane, code);
        }
        end_row - start_row
    }
}

impl FromIterator<Row> for Chart {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use LaneCode::*;

    #[test]
    fn blank_chart_is_all_none() {
        let chart = Chart::blank(3);
        assert_eq!(chart.len(), 3);
        assert!(chart.rows().iter().all(|row| *row == Row::EMPTY));
    }

    #[test]
    fn head_then_tail() {
        let mut chart = Chart::blank(10);
        assert_eq!(chart.paint(0, 0, 8, 4), 8);
        let lane: Vec<_> = chart.lane(0).collect();
        assert_eq!(
            lane,
            [Head, Head, Head, Head, Tail, Tail, Tail, Tail, None, None]
        );
        assert!(chart.lane(1).all(|code| code == None));
    }

    #[test]
    fn one_step_note_is_all_head() {
        let mut chart = Chart::blank(8);
        chart.paint(1, 4, 8, 4);
        let lane: Vec<_> = chart.lane(1).collect();
        assert_eq!(lane, [None, None, None, None, Head, Head, Head, Head]);
    }

    #[test]
    fn empty_range_paints_nothing() {
        let mut chart = Chart::blank(8);
        assert_eq!(chart.paint(0, 4, 4, 4), 0);
        assert_eq!(chart, Chart::blank(8));
    }

    #[test]
    fn rows_past_the_end_are_skipped() {
        let mut chart = Chart::blank(6);
        assert_eq!(chart.paint(3, 4, 12, 4), 2);
        assert_eq!(chart.rows()[5].lane(3), Head);
        assert_eq!(chart.paint(3, 8, 12, 4), 0);
    }

    #[test]
    fn later_paint_wins() {
        let mut chart = Chart::blank(12);
        chart.paint(2, 0, 12, 4);
        chart.paint(2, 4, 8, 4);
        let lane: Vec<_> = chart.lane(2).collect();
        assert_eq!(
            lane,
            [Head, Head, Head, Head, Head, Head, Head, Head, Tail, Tail, Tail, Tail]
        );
    }
}
