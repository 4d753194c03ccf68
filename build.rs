use std::io::prelude::*;

const LAYOUT: &str = include_str!("layout.txt");
const ROWS: usize = 3;
const KEYS_PER_SIDE: usize = 5;

fn main() {
    println!("cargo:rerun-if-changed=layout.txt");

    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let mut f = std::fs::File::create(out_dir.join("layout.rs"))
        .expect("could not create file in OUT_DIR");

    let rows: Vec<Vec<char>> = LAYOUT
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|key| {
                    let mut chars = key.chars();
                    let c = chars.next().expect("split_whitespace yields non-empty keys");
                    assert!(chars.next().is_none(), "key '{}' is not a single character", key);
                    c
                })
                .collect()
        })
        .collect();
    assert_eq!(rows.len(), ROWS, "the layout has {} rows", ROWS);

    // Left half first, then right half, on every row.
    let mut sides = phf_codegen::Map::<char>::new();
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            2 * KEYS_PER_SIDE,
            "row {} must have {} keys per side",
            i + 1,
            KEYS_PER_SIDE
        );
        let (left, right) = row.split_at(KEYS_PER_SIDE);
        for &key in left {
            sides.entry(key, "Side::Left");
        }
        for &key in right {
            sides.entry(key, "Side::Right");
        }
    }

    writeln!(
        f,
        "pub static KEY_SIDES: phf::Map<char, Side> = {};",
        sides.build()
    )
    .unwrap();
}
