//! The assembled machine: two stepping rotors between a plugboard and the
//! reflector.

use tracing::debug;

use crate::alphabet::number_to_letter;
use crate::error::{EnigmaError, Result};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

// Rotor I and II wirings from the 1930s Enigma I.
static ROTOR_I: &[u8; 26] = b"EKMFLGDQVZNTOWYHXUSPAIBRCJ";
static ROTOR_II: &[u8; 26] = b"AJDKSIRUXBLHWTMCQGZNPYFVOE";

// Rotor I turns the slow rotor over as it steps out of Q.
const TURNOVER: u8 = b'Q';

/// A two-rotor Enigma. The fast rotor (Rotor I) steps on every keypress, the
/// slow rotor (Rotor II) once per full revolution of the fast one.
/// Encryption is symmetric: a machine reset to the same configuration turns
/// ciphertext back into plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaMachine {
	rotor1: Rotor,
	rotor2: Rotor,
	plugboard: Plugboard,
	reflector: Reflector,
	initial_settings: String,
}

impl EnigmaMachine {
	/// Assemble a machine from its three setting strings: two
	/// space-separated ring settings (`"5 24"`), a plugboard specification
	/// (possibly empty), and one starting letter per rotor (`"JW"`).
	pub fn new(ring_settings: &str, plugboard: &str, initial_settings: &str) -> Result<Self> {
		let mut rings = ring_settings.split(' ');
		let (ring1, ring2) = match (rings.next(), rings.next()) {
			(Some(ring1), Some(ring2)) => (ring1, ring2),
			_ => return Err(EnigmaError::MissingRingSetting),
		};

		let initial_settings = initial_settings.to_ascii_uppercase();
		let mut positions = initial_settings.bytes();
		let (first, second) = match (positions.next(), positions.next()) {
			(Some(first), Some(second)) => (first, second),
			_ => return Err(EnigmaError::BadInitialSettings(initial_settings.clone())),
		};

		let machine = EnigmaMachine {
			rotor1: Rotor::new(ring1, ROTOR_I, first)?,
			rotor2: Rotor::new(ring2, ROTOR_II, second)?,
			plugboard: Plugboard::new(plugboard)?,
			reflector: Reflector,
			initial_settings,
		};
		debug!(initial_settings = %machine.initial_settings, "machine assembled");
		Ok(machine)
	}

	/// Starting letters the machine was assembled with.
	pub fn initial_settings(&self) -> &str {
		&self.initial_settings
	}

	/// Encrypt (or, symmetrically, decrypt) a message one letter at a time.
	/// Each letter passes through the plugboard, both rotors, the reflector,
	/// back through the rotors, and through the plugboard again.
	///
	/// Non-alphabetic characters are dropped entirely: they are not copied
	/// to the output and do not advance the rotors. Output letters are
	/// grouped five to a block, with a single space after every fifth one.
	pub fn encrypt(&mut self, message: &str) -> Result<String> {
		let mut ciphertext = String::with_capacity(message.len() + message.len() / 5);
		let mut emitted = 0u32;
		for c in message.chars() {
			if !c.is_ascii_alphabetic() {
				continue;
			}
			let letter = (c as u8).to_ascii_uppercase();

			// rotors advance before the letter is substituted; the slow
			// rotor steps only when the fast one is leaving its turnover
			// position
			if number_to_letter(self.rotor1.rotation())? == TURNOVER {
				self.rotor2.rotate();
			}
			self.rotor1.rotate();

			let letter = self.plugboard.lookup(letter)?;
			let letter = self.rotor1.encrypt_forwards(letter)?;
			let letter = self.rotor2.encrypt_forwards(letter)?;
			let letter = self.reflector.reflect(letter)?;
			let letter = self.rotor2.encrypt_backwards(letter)?;
			let letter = self.rotor1.encrypt_backwards(letter)?;
			let letter = self.plugboard.lookup(letter)?;
			ciphertext.push(char::from(letter));

			emitted += 1;
			if emitted % 5 == 0 {
				ciphertext.push(' ');
			}
		}
		debug!(letters = emitted, "message processed");
		Ok(ciphertext)
	}
}
