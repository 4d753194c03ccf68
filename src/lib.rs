use std::collections::HashMap;
use std::hash::BuildHasher;
use std::path::Path;

mod error;
pub mod letters;
pub mod logger;
pub mod report;
pub mod sides;
pub mod table;

pub use error::{Error, Result};
pub use letters::{LetterTotals, Position, SortOrder};
pub use report::Report;
pub use sides::SideTotals;
pub use table::{FrequencyTable, LoadStats};

include!(concat!(env!("OUT_DIR"), "/layout.rs"));

/// Words seen fewer times than this are left out of the analysis by default.
pub const DEFAULT_THRESHOLD: u64 = 500_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Tells which half of the keyboard a key sits on.
///
/// The compiled-in layout is [`KEY_SIDES`], but any mapping will do. Keys the layout does not know
/// about end up in the "unknown" bucket of [`SideTotals`].
pub trait Layout {
    fn side(&self, key: char) -> Option<Side>;
}

impl Layout for phf::Map<char, Side> {
    fn side(&self, key: char) -> Option<Side> {
        self.get(&key).copied()
    }
}

impl<S: BuildHasher> Layout for HashMap<char, Side, S> {
    fn side(&self, key: char) -> Option<Side> {
        self.get(&key).copied()
    }
}

impl Layout for fn(key: char) -> Option<Side> {
    fn side(&self, key: char) -> Option<Side> {
        (*self)(key)
    }
}

impl<L: Layout + ?Sized> Layout for &L {
    fn side(&self, key: char) -> Option<Side> {
        (**self).side(key)
    }
}

#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Options {
    /// Only words seen at least this many times are tallied.
    pub threshold: u64,

    /// How letters are ordered in the report.
    pub sort: SortOrder,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            sort: SortOrder::Letter,
        }
    }
}

impl Options {
    /// Loads the word counts at `path` and reports on them using the compiled-in layout.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<Report> {
        let table = FrequencyTable::load(path, self.threshold)?;
        Ok(self.report(&table))
    }

    /// Like [`Options::analyze`], but reads word counts from an arbitrary reader.
    pub fn analyze_reader<R: std::io::Read>(&self, rdr: R) -> Result<Report> {
        let table = FrequencyTable::from_reader(rdr, self.threshold)?;
        Ok(self.report(&table))
    }

    pub fn report(&self, table: &FrequencyTable) -> Report {
        Report::new(table, self.sort, &KEY_SIDES)
    }
}
