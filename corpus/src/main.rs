//! Builds a `word<TAB>count` table from Google Books 1-gram shards.
//!
//! Usage: `corpus [--min-count N] <shard.gz>... > words.txt`

use rayon::prelude::*;
use std::collections::HashMap;
use std::io::prelude::*;
use std::io::BufReader;

/// Adds up the match counts in the `year,match_count,volume_count` fields that follow the word.
///
/// Returns `None` for a malformed field or a line whose total does not fit in a `u64`.
fn matches<'a>(fields: impl Iterator<Item = &'a [u8]>) -> Option<u64> {
    let mut total = 0u64;
    for field in fields {
        let count = field.split(|&c| c == b',').nth(1)?;
        let count: u64 = std::str::from_utf8(count).ok()?.trim_end().parse().ok()?;
        total = total.checked_add(count)?;
    }
    Some(total)
}

fn tally(file: &str) -> HashMap<String, u128> {
    let f = std::fs::File::open(file)
        .unwrap_or_else(|e| panic!("could not open file '{}': {}", file, e));
    let f = flate2::bufread::GzDecoder::new(BufReader::new(f));
    let mut f = BufReader::new(f);

    let mut words = HashMap::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if f
            .read_until(b'\n', &mut line)
            .unwrap_or_else(|e| panic!("could not read '{}': {}", file, e))
            == 0
        {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }

        let mut fields = line.split(|&c| c == b'\t');
        let ngram = match fields.next() {
            Some(ngram) if !ngram.is_empty() => ngram,
            _ => continue,
        };
        // "word_NOUN" and "word" are the same word.
        let word = ngram.splitn(2, |&c| c == b'_').next().unwrap_or(ngram);
        if word.is_empty() {
            continue;
        }
        let word = match std::str::from_utf8(word) {
            Ok(word) => word,
            Err(_) => continue,
        };
        if let Some(count) = matches(fields) {
            *words.entry(word.to_owned()).or_insert(0) += u128::from(count);
        }
    }
    words
}

fn main() {
    let mut args = std::env::args().skip(1).peekable();
    let mut min_count: u128 = 0;
    if args.peek().map(String::as_str) == Some("--min-count") {
        args.next();
        min_count = args
            .next()
            .and_then(|n| n.parse().ok())
            .expect("--min-count takes a number");
    }
    let files: Vec<_> = args.collect();

    let words = files
        .par_iter()
        .map(|file| tally(file))
        .reduce(HashMap::new, |mut map1, map2| {
            for (word, count) in map2 {
                *map1.entry(word).or_insert(0) += count;
            }
            map1
        });

    let mut words: Vec<_> = words
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .collect();
    words.sort_unstable_by(|(w1, c1), (w2, c2)| c2.cmp(c1).then_with(|| w1.cmp(w2)));

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for (word, count) in words {
        writeln!(out, "{}\t{}", word, count).expect("writing to stdout should be okay");
    }
    out.flush().expect("writing to stdout should be okay");
}

#[cfg(test)]
mod tests {
    use super::matches;

    fn fields(s: &str) -> impl Iterator<Item = &[u8]> {
        s.as_bytes().split(|&c| c == b'\t')
    }

    #[test]
    fn sums_years() {
        assert_eq!(matches(fields("1999,10,3\t2000,5,1")), Some(15));
    }

    #[test]
    fn no_years() {
        assert_eq!(matches(std::iter::empty()), Some(0));
    }

    #[test]
    fn overflowing_line_is_skipped() {
        assert_eq!(matches(fields("1999,18446744073709551615,1\t2000,1,1")), None);
        assert_eq!(
            matches(fields("1999,18446744073709551614,1\t2000,1,1")),
            Some(u64::MAX)
        );
    }

    #[test]
    fn malformed_year() {
        assert_eq!(matches(fields("1999\t2000,5,1")), None);
        assert_eq!(matches(fields("1999,lots,1")), None);
    }
}
