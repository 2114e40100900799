//! The plugboard: a user-configured involution applied before and after the
//! rotor path.

use crate::alphabet::{letter_to_number, ALPHABET};
use crate::error::{EnigmaError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
	map: [u8; 26],
}

impl Plugboard {
	/// Parse a specification of space-separated two-letter plugs, e.g.
	/// `"IH VX PW"`. The empty string leaves every letter wired to itself,
	/// and so does an explicit self-plug such as `"AA"`.
	pub fn new(spec: &str) -> Result<Self> {
		let mut map = *ALPHABET;
		let mut claimed = [false; 26];
		let spec = spec.to_ascii_uppercase();
		if !spec.is_empty() {
			for plug in spec.split(' ') {
				let mut letters = plug.chars();
				let (a, b) = match (letters.next(), letters.next(), letters.next()) {
					(Some(a), Some(b), None) => (a, b),
					_ => return Err(EnigmaError::PlugNotPair(plug.to_owned())),
				};
				// each letter may back at most one plug across the whole
				// specification; claims are checked before content
				if is_claimed(&claimed, a) || is_claimed(&claimed, b) {
					return Err(EnigmaError::DuplicatePlugLetter(plug.to_owned()));
				}
				if !a.is_ascii_alphabetic() || !b.is_ascii_alphabetic() {
					return Err(EnigmaError::PlugNotAlphabetic(plug.to_owned()));
				}
				let (a, b) = (a as u8, b as u8);
				map[usize::from(a - b'A')] = b;
				map[usize::from(b - b'A')] = a;
				claimed[usize::from(a - b'A')] = true;
				claimed[usize::from(b - b'A')] = true;
			}
		}
		Ok(Plugboard { map })
	}

	/// Paired letter for `letter`, or `letter` itself when unpaired.
	pub fn lookup(&self, letter: u8) -> Result<u8> {
		Ok(self.map[usize::from(letter_to_number(letter)? - 1)])
	}
}

fn is_claimed(claimed: &[bool; 26], letter: char) -> bool {
	letter.is_ascii_uppercase() && claimed[usize::from(letter as u8 - b'A')]
}
