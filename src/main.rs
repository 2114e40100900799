use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{bail, Context};
use clap::Parser;
use enigma::EnigmaMachine;
use tracing_subscriber::EnvFilter;

/// Modified Enigma machine with two rotors.
///
/// Emulates the symmetric rotor cipher used by the Germans in WWII, with two
/// rotors instead of the historical three or four: Rotor I and II from the
/// 1930s Enigma I, and the UKW-B reflector. Configure the ring settings of
/// the two rotors, the plugboard, and the initial rotor positions; the
/// message is read from the arguments or from a prompt.
#[derive(Debug, Parser)]
#[command(after_help = "Example: enigma \"5 24\" \"IH VX PW LA ME OY FB QG TD ZC\" JW")]
struct Cli {
	/// Each rotor's wiring offset relative to the alphabet: two 1-26
	/// integers separated by a space, e.g. "4 15"
	ring_settings: String,

	/// Plugboard letter pairs in the form "AB CD EF". May be empty (""),
	/// and letters left out are mapped to themselves
	plugboard: String,

	/// The initial rotor positions, two letters, e.g. "JK"
	initial_settings: String,

	/// The message to en/decrypt. Read from stdin when not given
	#[arg(short, long)]
	message: Option<String>,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	if let Err(err) = run(Cli::parse()) {
		eprintln!("ERROR: {err:#}");
		process::exit(1);
	}
}

fn run(cli: Cli) -> anyhow::Result<()> {
	validate(&cli)?;

	let mut machine = EnigmaMachine::new(&cli.ring_settings, &cli.plugboard, &cli.initial_settings)?;

	let plaintext = match cli.message {
		Some(message) => message,
		None => prompt()?,
	};

	println!("{}", machine.encrypt(&plaintext.to_ascii_uppercase())?);
	Ok(())
}

// the machine constructor validates setting contents; shape errors a user is
// likely to make are caught here with friendlier messages
fn validate(cli: &Cli) -> anyhow::Result<()> {
	if cli.ring_settings.split(' ').count() < 2 {
		bail!("each rotor needs a ring setting, a 1-26 integer, e.g. '21 6'");
	}
	if cli.initial_settings.chars().count() != 2
		|| !cli.initial_settings.chars().all(|c| c.is_ascii_alphabetic())
	{
		bail!("each rotor needs a letter to start on, e.g. 'OU'");
	}
	Ok(())
}

fn prompt() -> anyhow::Result<String> {
	print!("> ");
	io::stdout().flush()?;
	let mut line = String::new();
	io::stdin()
		.lock()
		.read_line(&mut line)
		.context("failed to read message from stdin")?;
	Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
