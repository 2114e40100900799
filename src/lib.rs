//! Two-rotor Enigma machine emulator.
//!
//! Models the Enigma signal path with two stepping rotors (the historical
//! Rotor I and II from Enigma I), the UKW-B reflector, and a configurable
//! plugboard. Encryption is symmetric: a second machine built with the same
//! settings turns the ciphertext back into the plaintext.
//!
//! ```
//! use enigma::EnigmaMachine;
//!
//! let mut machine = EnigmaMachine::new("1 1", "", "AA")?;
//! assert_eq!(machine.encrypt("HELLO")?, "TJJPK ");
//!
//! let mut fresh = EnigmaMachine::new("1 1", "", "AA")?;
//! assert_eq!(fresh.encrypt("TJJPK")?, "HELLO ");
//! # Ok::<(), enigma::EnigmaError>(())
//! ```

pub mod alphabet;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use error::{EnigmaError, Result};
pub use machine::EnigmaMachine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
