use crate::{Layout, LetterTotals, Side};

/// How a [`LetterTotals`] splits across the two halves of the keyboard.
///
/// `left + right + unknown == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideTotals {
    pub left: u128,
    pub right: u128,
    /// Letters the layout does not place on either side.
    pub unknown: u128,
    pub total: u128,
}

/// `part` as a percentage of `total`, or 0 when there is nothing to divide by.
pub fn percent(part: u128, total: u128) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

impl SideTotals {
    pub fn summarize<L: Layout + ?Sized>(letters: &LetterTotals, layout: &L) -> Self {
        let mut sides = SideTotals {
            total: letters.total(),
            ..Default::default()
        };
        for (letter, count) in letters.iter() {
            match layout.side(letter) {
                Some(Side::Left) => sides.left += count,
                Some(Side::Right) => sides.right += count,
                None => sides.unknown += count,
            }
        }
        sides
    }

    pub fn get(&self, side: Side) -> u128 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn percent(&self, side: Side) -> f64 {
        percent(self.get(side), self.total)
    }

    pub fn unknown_percent(&self) -> f64 {
        percent(self.unknown, self.total)
    }
}
