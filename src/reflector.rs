//! The fixed reflector that turns the signal back through the rotors.

use crate::alphabet::letter_to_number;
use crate::error::Result;

// Historical UKW-B table. Involutive: reflecting twice restores the letter.
static UKW_B: &[u8; 26] = b"YRUHQSLDPXNGOKMIEBFZCWVJAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflector;

impl Reflector {
	pub fn reflect(&self, letter: u8) -> Result<u8> {
		Ok(UKW_B[usize::from(letter_to_number(letter)? - 1)])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reflects_known_pairs() {
		let reflector = Reflector;
		assert_eq!(reflector.reflect(b'A').unwrap(), b'Y');
		assert_eq!(reflector.reflect(b'Y').unwrap(), b'A');
	}

	#[test]
	fn is_involutive() {
		let reflector = Reflector;
		for letter in b'A'..=b'Z' {
			let out = reflector.reflect(letter).unwrap();
			assert_eq!(reflector.reflect(out).unwrap(), letter);
		}
	}

	#[test]
	fn never_maps_a_letter_to_itself() {
		let reflector = Reflector;
		for letter in b'A'..=b'Z' {
			assert_ne!(reflector.reflect(letter).unwrap(), letter);
		}
	}

	#[test]
	fn rejects_nonletters() {
		assert!(Reflector.reflect(b'!').is_err());
	}
}
