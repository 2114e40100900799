use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnigmaError>;

/// Configuration and validation failures. All of these are fatal to the
/// operation that raised them; nothing is silently corrected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnigmaError {
	#[error("ring setting '{0}' is not an integer")]
	RingSettingNotInteger(String),

	#[error("ring setting '{0}' is not in 1-26")]
	RingSettingOutOfRange(String),

	#[error("plug '{0}' must group exactly two letters, e.g. 'PD KV TW'")]
	PlugNotPair(String),

	#[error("duplicate letter used in plug '{0}'")]
	DuplicatePlugLetter(String),

	#[error("only letters are acceptable in plug '{0}'")]
	PlugNotAlphabetic(String),

	#[error("each rotor needs a ring setting, two 1-26 integers, e.g. '21 6'")]
	MissingRingSetting,

	#[error("initial settings '{0}' must name a starting letter per rotor, e.g. 'OU'")]
	BadInitialSettings(String),

	#[error("'{0}' is not an uppercase letter")]
	NotALetter(char),

	#[error("alphabet position {0} is not in 1-26")]
	PositionOutOfRange(u8),
}
