use crate::{Error, Result};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

const BOM: &[u8] = b"\xef\xbb\xbf";

/// Parses a count the way Python's `int()` reads base 10: surrounding whitespace, one sign, and
/// single underscores between digits are allowed. Only ASCII digits are recognized.
fn parse_count(field: &str) -> Option<i128> {
    let field = field.trim();
    let (negative, digits) = match field.as_bytes().first()? {
        b'-' => (true, &field[1..]),
        b'+' => (false, &field[1..]),
        _ => (false, field),
    };
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'_')
    {
        return None;
    }
    let n: i128 = digits.replace('_', "").parse().ok()?;
    Some(if negative { -n } else { n })
}

/// What happened to the rows read while building a [`FrequencyTable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows at or above the threshold. Repeated words are counted once per row.
    pub kept: usize,

    pub below_threshold: usize,

    /// Rows that did not have exactly two fields.
    pub malformed: usize,

    /// Rows whose count was not an integer.
    pub unparsable: usize,
}

impl LoadStats {
    pub fn skipped(&self) -> usize {
        self.below_threshold + self.malformed + self.unparsable
    }
}

/// Word counts for every word seen at least `threshold` times.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    words: HashMap<String, u64>,
    stats: LoadStats,
}

impl FrequencyTable {
    /// Reads a tab-separated `word<TAB>count` file.
    ///
    /// Rows that are malformed, have a non-integer count, or fall below `threshold` are skipped.
    /// Failing to open or read the file, or the file not being UTF-8, is an error.
    pub fn load(path: impl AsRef<Path>, threshold: u64) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Open {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), threshold, "loading word counts");
        Self::from_reader(file, threshold)
    }

    /// Like [`Self::load`], for any reader.
    ///
    /// A leading UTF-8 byte order mark stays part of the first word, so that word never counts
    /// towards the beginnings tally.
    pub fn from_reader<R: Read>(mut rdr: R, threshold: u64) -> Result<Self> {
        let mut head = Vec::with_capacity(BOM.len());
        rdr.by_ref()
            .take(BOM.len() as u64)
            .read_to_end(&mut head)
            .map_err(csv::Error::from)?;
        let mut bom = head == BOM;

        // The csv reader drops a BOM from the start of its first read. Handing it exactly the head
        // bytes first makes that read see the whole BOM.
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(Cursor::new(head).chain(rdr));

        let mut words = HashMap::new();
        let mut stats = LoadStats::default();
        let mut record = csv::StringRecord::new();
        while rdr.read_record(&mut record)? {
            let on_first_line = record.position().map_or(false, |pos| pos.line() == 1);
            let bom_word = bom && on_first_line;
            bom = false;
            if record.len() != 2 {
                stats.malformed += 1;
                continue;
            }
            let count = match parse_count(&record[1]) {
                Some(count) => count,
                None => {
                    stats.unparsable += 1;
                    continue;
                }
            };
            if count < i128::from(threshold) {
                stats.below_threshold += 1;
                continue;
            }
            let count = match u64::try_from(count) {
                Ok(count) => count,
                Err(_) => {
                    stats.unparsable += 1;
                    continue;
                }
            };
            stats.kept += 1;
            let word = if bom_word {
                format!("\u{feff}{}", &record[0])
            } else {
                record[0].to_owned()
            };
            // Later rows for the same word replace earlier ones.
            words.insert(word, count);
        }

        debug!(
            words = words.len(),
            kept = stats.kept,
            below_threshold = stats.below_threshold,
            malformed = stats.malformed,
            unparsable = stats.unparsable,
            "loaded word counts"
        );
        Ok(Self { words, stats })
    }

    /// Builds a table from in-memory counts, applying the same threshold as [`Self::load`].
    pub fn from_counts<I, W>(counts: I, threshold: u64) -> Self
    where
        I: IntoIterator<Item = (W, u64)>,
        W: Into<String>,
    {
        let mut table = Self::default();
        for (word, count) in counts {
            if count < threshold {
                table.stats.below_threshold += 1;
                continue;
            }
            table.stats.kept += 1;
            table.words.insert(word.into(), count);
        }
        table
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.words.iter().map(|(word, &count)| (word.as_str(), count))
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub(crate) fn words(&self) -> &HashMap<String, u64> {
        &self.words
    }
}
