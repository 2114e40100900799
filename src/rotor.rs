//! A stepping rotor: a monoalphabetic substitution whose effective mapping
//! shifts as the rotor turns.

use crate::alphabet::{letter_to_number, number_to_letter};
use crate::error::{EnigmaError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
	/// Internal wiring, a permutation of the alphabet. Defines the
	/// substitution when the rotor sits in its zero position.
	wiring: &'static [u8; 26],
	/// Static offset between the external contacts and the wiring.
	ring_setting: u8,
	/// Current angular position, 1-26. Advances one step per keypress.
	rotation: u8,
}

impl Rotor {
	/// Build a rotor from a textual ring setting, its wiring, and the letter
	/// it starts on. The ring setting must be a string of decimal digits
	/// parsing to a value in 1-26.
	pub fn new(ring_setting: &str, wiring: &'static [u8; 26], initial_setting: u8) -> Result<Self> {
		if ring_setting.is_empty() || !ring_setting.bytes().all(|b| b.is_ascii_digit()) {
			return Err(EnigmaError::RingSettingNotInteger(ring_setting.to_owned()));
		}
		let ring_setting = match ring_setting.parse::<u32>() {
			Ok(n) if (1..=26).contains(&n) => n as u8,
			_ => return Err(EnigmaError::RingSettingOutOfRange(ring_setting.to_owned())),
		};
		Ok(Rotor {
			wiring,
			ring_setting,
			rotation: letter_to_number(initial_setting)?,
		})
	}

	/// Current position as a 1-based alphabet number.
	pub fn rotation(&self) -> u8 {
		self.rotation
	}

	/// Turn one position, wrapping 26 back to 1.
	pub fn rotate(&mut self) {
		self.rotation = (self.rotation % 26) + 1;
	}

	/// Substitute a letter travelling in from the plugboard side. Rotation
	/// and ring setting misalign the external contacts from the wiring, so
	/// both offsets shift the tap point into the wiring table.
	pub fn encrypt_forwards(&self, letter: u8) -> Result<u8> {
		let tap = usize::from(self.rotation - 1)
			+ usize::from(self.ring_setting - 1)
			+ usize::from(letter_to_number(letter)? - 1);
		Ok(self.wiring[tap % 26])
	}

	/// Substitute a letter on the return path from the reflector side. Exact
	/// inverse of [`encrypt_forwards`](Self::encrypt_forwards) at a fixed
	/// rotation: locate the letter in the wiring and undo both offsets.
	pub fn encrypt_backwards(&self, letter: u8) -> Result<u8> {
		let slot = self
			.wiring
			.iter()
			.position(|&w| w == letter)
			.ok_or(EnigmaError::NotALetter(char::from(letter)))?;
		let tap = (slot + 52 - usize::from(self.rotation - 1) - usize::from(self.ring_setting - 1)) % 26;
		number_to_letter(tap as u8 + 1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const WIRING_I: &[u8; 26] = b"EKMFLGDQVZNTOWYHXUSPAIBRCJ";

	#[test]
	fn rotation_starts_at_initial_setting() {
		let rotor = Rotor::new("5", WIRING_I, b'J').unwrap();
		assert_eq!(rotor.rotation(), 10);
	}

	#[test]
	fn rotate_wraps_from_z_to_a() {
		let mut rotor = Rotor::new("1", WIRING_I, b'Z').unwrap();
		rotor.rotate();
		assert_eq!(rotor.rotation(), 1);
	}

	#[test]
	fn twenty_six_steps_return_to_start() {
		let mut rotor = Rotor::new("13", WIRING_I, b'K').unwrap();
		let start = rotor.rotation();
		for _ in 0..26 {
			rotor.rotate();
		}
		assert_eq!(rotor.rotation(), start);
	}

	#[test]
	fn forwards_taps_the_shifted_wiring_slot() {
		// rotation 10, ring 5, letter A: slot (9 + 4 + 0) % 26 = 13
		let rotor = Rotor::new("5", WIRING_I, b'J').unwrap();
		assert_eq!(rotor.encrypt_forwards(b'A').unwrap(), b'W');
	}

	#[test]
	fn backwards_inverts_forwards_at_any_offset() {
		for ring in ["1", "7", "26"] {
			for initial in [b'A', b'Q', b'Z'] {
				let rotor = Rotor::new(ring, WIRING_I, initial).unwrap();
				for letter in b'A'..=b'Z' {
					let forward = rotor.encrypt_forwards(letter).unwrap();
					assert_eq!(rotor.encrypt_backwards(forward).unwrap(), letter);
				}
			}
		}
	}

	#[test]
	fn ring_setting_must_be_digits() {
		for bad in ["", "x", "-3", "1.5", "2 "] {
			assert_eq!(
				Rotor::new(bad, WIRING_I, b'A'),
				Err(EnigmaError::RingSettingNotInteger(bad.to_owned()))
			);
		}
	}

	#[test]
	fn ring_setting_must_be_in_range() {
		for bad in ["0", "27", "99999999999999999999"] {
			assert_eq!(
				Rotor::new(bad, WIRING_I, b'A'),
				Err(EnigmaError::RingSettingOutOfRange(bad.to_owned()))
			);
		}
		assert!(Rotor::new("1", WIRING_I, b'A').is_ok());
		assert!(Rotor::new("26", WIRING_I, b'A').is_ok());
	}

	#[test]
	fn initial_setting_must_be_a_letter() {
		assert_eq!(Rotor::new("1", WIRING_I, b'5'), Err(EnigmaError::NotALetter('5')));
	}
}
