//! Column-letter and cell-label codec.
//!
//! Sheet coordinates are 1-based: row 1 is the first row and column 1 is
//! column "A". Column letters are a bijective base-26 numeral system: digits
//! run 1..=26 mapping to 'A'..='Z', and there is no zero digit, so 26 is "Z"
//! and 27 is "AA" (not "A0").

use crate::error::{Error, Result};
use lazy_regex::regex_captures;

const ALPHABET_LEN: u32 = 26;

/// Convert a 1-based column index into its letter label.
///
/// # Examples
/// ```
/// use sheetwire_core::label::column_letters;
///
/// assert_eq!(column_letters(1).unwrap(), "A");
/// assert_eq!(column_letters(26).unwrap(), "Z");
/// assert_eq!(column_letters(27).unwrap(), "AA");
/// ```
pub fn column_letters(col: u32) -> Result<String> {
    if col < 1 {
        return Err(Error::InvalidColumn { col: col as i64 });
    }
    let mut letters = String::new();
    let mut n = col;
    while n > 0 {
        // Bijective base 26: shift so a remainder of 0 becomes 'Z' with a
        // borrow from the next higher place.
        n -= 1;
        letters.insert(0, (b'A' + (n % ALPHABET_LEN) as u8) as char);
        n /= ALPHABET_LEN;
    }
    Ok(letters)
}

/// Convert a column letter label back into its 1-based index.
/// Case-insensitive; rejects empty or non-alphabetic input.
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidLabel("empty column letters".to_string()));
    }
    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidLabel(format!(
                "invalid column letter '{c}' in '{letters}'"
            )));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        col = col
            .checked_mul(ALPHABET_LEN)
            .and_then(|c| c.checked_add(digit))
            .ok_or_else(|| {
                Error::InvalidLabel(format!("column letters '{letters}' out of range"))
            })?;
    }
    Ok(col)
}

/// Convert 1-based cell indexes to an A1-style label.
///
/// # Examples
/// ```
/// use sheetwire_core::label::cell_label;
///
/// assert_eq!(cell_label(1, 1).unwrap(), "A1");
/// assert_eq!(cell_label(10, 40).unwrap(), "AN10");
/// ```
pub fn cell_label(row: u32, col: u32) -> Result<String> {
    if row < 1 || col < 1 {
        return Err(Error::InvalidIndex {
            row: row as i64,
            col: col as i64,
        });
    }
    Ok(format!("{}{}", column_letters(col)?, row))
}

/// Parse an A1-style label into 1-based `(row, col)` indexes.
///
/// The whole input must be a maximal run of letters followed by a maximal
/// run of digits; anything else is an [`Error::InvalidLabel`].
///
/// # Examples
/// ```
/// use sheetwire_core::label::parse_cell_label;
///
/// assert_eq!(parse_cell_label("A1").unwrap(), (1, 1));
/// assert_eq!(parse_cell_label("AN10").unwrap(), (10, 40));
/// ```
pub fn parse_cell_label(label: &str) -> Result<(u32, u32)> {
    let Some((_, letters, digits)) = regex_captures!(r"^([A-Za-z]+)([1-9][0-9]*)$", label) else {
        return Err(Error::InvalidLabel(format!(
            "unable to parse label '{label}'"
        )));
    };
    let row: u32 = digits
        .parse()
        .map_err(|_| Error::InvalidLabel(format!("row number out of range in '{label}'")))?;
    let col = letters_to_column(letters)?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(1).unwrap(), "A");
        assert_eq!(column_letters(2).unwrap(), "B");
        assert_eq!(column_letters(26).unwrap(), "Z");
        assert_eq!(column_letters(27).unwrap(), "AA");
        assert_eq!(column_letters(52).unwrap(), "AZ");
        assert_eq!(column_letters(53).unwrap(), "BA");
        assert_eq!(column_letters(702).unwrap(), "ZZ");
        assert_eq!(column_letters(703).unwrap(), "AAA");
        assert_eq!(column_letters(16384).unwrap(), "XFD"); // real sheet limit
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(letters_to_column("A").unwrap(), 1);
        assert_eq!(letters_to_column("Z").unwrap(), 26);
        assert_eq!(letters_to_column("AA").unwrap(), 27);
        assert_eq!(letters_to_column("BA").unwrap(), 53);
        assert_eq!(letters_to_column("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(letters_to_column("a").unwrap(), 1);
        assert_eq!(letters_to_column("aa").unwrap(), 27);
    }

    #[test]
    fn test_cell_label() {
        assert_eq!(cell_label(1, 1).unwrap(), "A1");
        assert_eq!(cell_label(100, 27).unwrap(), "AA100");
        assert_eq!(cell_label(7, 200).unwrap(), "GR7");
        assert_eq!(cell_label(10, 40).unwrap(), "AN10");
        assert_eq!(cell_label(10, 60).unwrap(), "BH10");
    }

    #[test]
    fn test_parse_cell_label() {
        assert_eq!(parse_cell_label("A1").unwrap(), (1, 1));
        assert_eq!(parse_cell_label("AA100").unwrap(), (100, 27));
        assert_eq!(parse_cell_label("GR7").unwrap(), (7, 200));
        assert_eq!(parse_cell_label("an10").unwrap(), (10, 40));
        assert_eq!(parse_cell_label("BH10").unwrap(), (10, 60));
    }

    #[test]
    fn test_rejects_bad_indexes() {
        assert!(matches!(cell_label(0, 1), Err(Error::InvalidIndex { .. })));
        assert!(matches!(cell_label(1, 0), Err(Error::InvalidIndex { .. })));
        assert!(matches!(column_letters(0), Err(Error::InvalidColumn { col: 0 })));
    }

    #[test]
    fn test_rejects_oversized_letter_runs() {
        // 26^7 overflows u32; long runs must error instead of wrapping
        assert!(matches!(
            letters_to_column("ZZZZZZZ"),
            Err(Error::InvalidLabel(_))
        ));
        assert!(matches!(
            parse_cell_label("ZZZZZZZ1"),
            Err(Error::InvalidLabel(_))
        ));
        // The largest label that still fits
        assert_eq!(letters_to_column("MWLQKWU").unwrap(), u32::MAX);
    }

    #[test]
    fn test_rejects_bad_labels() {
        for label in ["1", "AA", "", "A0", "A-1", "A1B", "1A", "A 1"] {
            assert!(
                matches!(parse_cell_label(label), Err(Error::InvalidLabel(_))),
                "label {label:?} should not parse"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_label_round_trip(row in 1u32..=1_048_576, col in 1u32..=16_384) {
            let label = cell_label(row, col).unwrap();
            prop_assert_eq!(parse_cell_label(&label).unwrap(), (row, col));
        }
    }
}
