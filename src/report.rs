use crate::{FrequencyTable, Layout, LetterTotals, Position, Side, SideTotals, SortOrder};
use std::fmt;
use tracing::debug;

/// Letter tallies for word endings and beginnings, and their keyboard side split.
///
/// The `Display` impl renders the full text report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    endings: Vec<(char, u128)>,
    beginnings: Vec<(char, u128)>,
    ending_sides: SideTotals,
    beginning_sides: SideTotals,
}

impl Report {
    pub fn new<L: Layout + ?Sized>(table: &FrequencyTable, order: SortOrder, layout: &L) -> Self {
        let endings = LetterTotals::tally(table, Position::Last);
        let beginnings = LetterTotals::tally(table, Position::First);
        debug!(
            words = table.len(),
            ending_letters = endings.len(),
            beginning_letters = beginnings.len(),
            "tallied letters"
        );
        Self::from_totals(&endings, &beginnings, order, layout)
    }

    pub fn from_totals<L: Layout + ?Sized>(
        endings: &LetterTotals,
        beginnings: &LetterTotals,
        order: SortOrder,
        layout: &L,
    ) -> Self {
        Self {
            endings: endings.sorted(order),
            beginnings: beginnings.sorted(order),
            ending_sides: SideTotals::summarize(endings, layout),
            beginning_sides: SideTotals::summarize(beginnings, layout),
        }
    }

    pub fn endings(&self) -> &[(char, u128)] {
        &self.endings
    }

    pub fn beginnings(&self) -> &[(char, u128)] {
        &self.beginnings
    }

    pub fn ending_sides(&self) -> &SideTotals {
        &self.ending_sides
    }

    pub fn beginning_sides(&self) -> &SideTotals {
        &self.beginning_sides
    }

    /// The ending and beginning percentages for `side`, added together.
    ///
    /// Each half is out of 100, so the sum can reach 200.
    pub fn combined(&self, side: Side) -> f64 {
        self.ending_sides.percent(side) + self.beginning_sides.percent(side)
    }
}

fn write_letters(f: &mut fmt::Formatter<'_>, letters: &[(char, u128)]) -> fmt::Result {
    for (letter, count) in letters {
        writeln!(f, "{}: {}", letter, count)?;
    }
    Ok(())
}

fn write_sides(f: &mut fmt::Formatter<'_>, sides: &SideTotals) -> fmt::Result {
    for side in Side::ALL {
        writeln!(f, "{}: {:.2}%", side.label(), sides.percent(side))?;
    }
    if sides.unknown != 0 {
        writeln!(
            f,
            "Unknown: {} ({:.2}%)",
            sides.unknown,
            sides.unknown_percent()
        )?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word endings (a-z):")?;
        write_letters(f, &self.endings)?;

        writeln!(f, "\nWord beginnings (a-z):")?;
        write_letters(f, &self.beginnings)?;

        writeln!(f, "\nKeyboard side summary (by letter endings):")?;
        write_sides(f, &self.ending_sides)?;

        writeln!(f, "\nKeyboard side summary (by word beginnings):")?;
        write_sides(f, &self.beginning_sides)?;

        writeln!(f, "\nCombined keyboard side summary:")?;
        for side in Side::ALL {
            writeln!(f, "{}: {:.2}%", side.label(), self.combined(side))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Report;
    use crate::{FrequencyTable, LetterTotals, Side, SortOrder, KEY_SIDES};
    use std::collections::HashMap;

    #[test]
    fn empty() {
        let r = Report::new(&FrequencyTable::default(), SortOrder::Letter, &KEY_SIDES);
        assert_eq!(
            r.to_string(),
            "\
Word endings (a-z):

Word beginnings (a-z):

Keyboard side summary (by letter endings):
Left: 0.00%
Right: 0.00%

Keyboard side summary (by word beginnings):
Left: 0.00%
Right: 0.00%

Combined keyboard side summary:
Left: 0.00%
Right: 0.00%
"
        );
    }

    #[test]
    fn apple_banana() {
        let t = FrequencyTable::from_counts([("apple", 600_000), ("banana", 500_000)], 500_000);
        let r = Report::new(&t, SortOrder::Letter, &KEY_SIDES);
        assert_eq!(r.endings(), [('a', 500_000), ('e', 600_000)]);
        assert_eq!(r.beginnings(), [('a', 600_000), ('b', 500_000)]);
        // a, e are right-hand keys; b is left.
        assert_eq!(r.ending_sides().right, 1_100_000);
        assert_eq!(r.beginning_sides().left, 500_000);
        assert_eq!(
            r.to_string(),
            "\
Word endings (a-z):
a: 500000
e: 600000

Word beginnings (a-z):
a: 600000
b: 500000

Keyboard side summary (by letter endings):
Left: 0.00%
Right: 100.00%

Keyboard side summary (by word beginnings):
Left: 45.45%
Right: 54.55%

Combined keyboard side summary:
Left: 45.45%
Right: 154.55%
"
        );
    }

    #[test]
    fn sorted_by_count() {
        let t = FrequencyTable::from_counts([("apple", 600_000), ("banana", 500_000)], 0);
        let r = Report::new(&t, SortOrder::Count, &KEY_SIDES);
        assert_eq!(r.endings(), [('e', 600_000), ('a', 500_000)]);
        assert_eq!(r.beginnings(), [('a', 600_000), ('b', 500_000)]);
        assert!(r.to_string().starts_with("Word endings (a-z):\ne: 600000\na: 500000\n"));
    }

    #[test]
    fn unknown_line() {
        let endings: LetterTotals = [('a', 1), ('b', 3)].into_iter().collect();
        let beginnings: LetterTotals = [('a', 2)].into_iter().collect();
        let layout = HashMap::from([('a', Side::Left)]);
        let r = Report::from_totals(&endings, &beginnings, SortOrder::Letter, &layout);
        let text = r.to_string();
        assert!(text.contains(
            "Keyboard side summary (by letter endings):\nLeft: 25.00%\nRight: 0.00%\nUnknown: 3 (75.00%)\n"
        ));
        assert!(text.contains(
            "Keyboard side summary (by word beginnings):\nLeft: 100.00%\nRight: 0.00%\n\n"
        ));
        assert!(text.ends_with("Combined keyboard side summary:\nLeft: 125.00%\nRight: 0.00%\n"));
    }

    #[test]
    fn all_unknown() {
        let letters: LetterTotals = [('a', 5)].into_iter().collect();
        let r = Report::from_totals(
            &letters,
            &letters,
            SortOrder::Letter,
            &HashMap::<char, Side>::new(),
        );
        assert_eq!(r.ending_sides().unknown_percent(), 100.0);
        assert_eq!(r.combined(Side::Left), 0.0);
        assert_eq!(r.combined(Side::Right), 0.0);
        assert!(r.to_string().contains("Unknown: 5 (100.00%)"));
    }
}
