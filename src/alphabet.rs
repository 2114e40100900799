//! Conversions between uppercase letters and their 1-based alphabet
//! positions. All rotor arithmetic happens in this 1-26 space.

use crate::error::{EnigmaError, Result};

pub(crate) const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Position of an uppercase letter, `b'A'` -> 1 through `b'Z'` -> 26.
pub fn letter_to_number(letter: u8) -> Result<u8> {
	if letter.is_ascii_uppercase() {
		Ok(letter - b'A' + 1)
	} else {
		Err(EnigmaError::NotALetter(char::from(letter)))
	}
}

/// Uppercase letter at a 1-based position, 1 -> `b'A'` through 26 -> `b'Z'`.
pub fn number_to_letter(number: u8) -> Result<u8> {
	if (1..=26).contains(&number) {
		Ok(ALPHABET[usize::from(number - 1)])
	} else {
		Err(EnigmaError::PositionOutOfRange(number))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints() {
		assert_eq!(letter_to_number(b'A').unwrap(), 1);
		assert_eq!(letter_to_number(b'Z').unwrap(), 26);
		assert_eq!(number_to_letter(1).unwrap(), b'A');
		assert_eq!(number_to_letter(26).unwrap(), b'Z');
	}

	#[test]
	fn roundtrips_every_letter() {
		for letter in *ALPHABET {
			assert_eq!(number_to_letter(letter_to_number(letter).unwrap()).unwrap(), letter);
		}
	}

	#[test]
	fn rejects_nonuppercase_letters() {
		assert_eq!(letter_to_number(b'a'), Err(EnigmaError::NotALetter('a')));
		assert!(letter_to_number(b'7').is_err());
		assert!(letter_to_number(b' ').is_err());
	}

	#[test]
	fn rejects_positions_outside_range() {
		assert_eq!(number_to_letter(0), Err(EnigmaError::PositionOutOfRange(0)));
		assert_eq!(number_to_letter(27), Err(EnigmaError::PositionOutOfRange(27)));
	}
}
