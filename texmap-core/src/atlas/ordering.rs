//! Configuration-code to tile permutations.
//!
//! Slot `k` of a table is the grid cell drawn for configuration code `k`.

use serde::{Deserialize, Serialize};

use super::grid::CELL_COUNT;
use crate::error::TexMapError;

// Board search order 3 4 / 1 2.
#[rustfmt::skip]
pub const STANDARD: [usize; CELL_COUNT] = [
    0, 10, 9, 4,
    6, 12, 11, 14,
    5, 8, 15, 13,
    7, 2, 1, 3,
];

#[rustfmt::skip]
pub const HILBERT: [usize; CELL_COUNT] = [
    0, 8, 7, 3,
    13, 5, 11, 9,
    2, 4, 10, 6,
    12, 14, 1, 15,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    #[default]
    Standard,
    Hilbert,
}

impl Ordering {
    pub const ALL: [Ordering; 2] = [Ordering::Standard, Ordering::Hilbert];

    pub fn table(self) -> &'static [usize; CELL_COUNT] {
        match self {
            Ordering::Standard => &STANDARD,
            Ordering::Hilbert => &HILBERT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ordering::Standard => "standard",
            Ordering::Hilbert => "hilbert",
        }
    }
}

impl std::fmt::Display for Ordering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Ordering {
    type Err = TexMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ordering::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TexMapError::InvalidArgument(format!("unknown ordering '{}'", s)))
    }
}

/// Checks that `table` assigns every grid cell to exactly one code.
pub fn validate_permutation(table: &[usize]) -> Result<(), TexMapError> {
    if table.len() != CELL_COUNT {
        return Err(TexMapError::InvalidPermutation(format!(
            "expected {} entries, got {}",
            CELL_COUNT,
            table.len()
        )));
    }
    let mut seen = [false; CELL_COUNT];
    for (code, &cell) in table.iter().enumerate() {
        if cell >= CELL_COUNT {
            return Err(TexMapError::InvalidPermutation(format!(
                "code {} maps to cell {} (out of range)",
                code, cell
            )));
        }
        if seen[cell] {
            return Err(TexMapError::InvalidPermutation(format!(
                "cell {} assigned twice (again at code {})",
                cell, code
            )));
        }
        seen[cell] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_bijections() {
        for o in Ordering::ALL {
            validate_permutation(o.table()).unwrap();
            let mut sorted = *o.table();
            sorted.sort_unstable();
            assert_eq!(sorted, std::array::from_fn::<usize, CELL_COUNT, _>(|i| i));
        }
    }

    #[test]
    fn standard_endpoints() {
        assert_eq!(STANDARD[0], 0);
        assert_eq!(STANDARD[15], 3);
    }

    #[test]
    fn rejects_duplicates_and_out_of_range() {
        let mut dup = STANDARD;
        dup[1] = 0;
        assert!(matches!(validate_permutation(&dup), Err(TexMapError::InvalidPermutation(_))));

        let mut oob = STANDARD;
        oob[5] = 16;
        assert!(matches!(validate_permutation(&oob), Err(TexMapError::InvalidPermutation(_))));

        assert!(validate_permutation(&STANDARD[..15]).is_err());
    }

    #[test]
    fn parse_ordering() {
        assert_eq!("standard".parse::<Ordering>().unwrap(), Ordering::Standard);
        assert_eq!("Hilbert".parse::<Ordering>().unwrap(), Ordering::Hilbert);
        assert!("zorder".parse::<Ordering>().is_err());
        assert_eq!(Ordering::default(), Ordering::Standard);
    }
}
