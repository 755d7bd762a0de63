use std::{
	fs, //
	io::{self, BufReader, Write},
	path::PathBuf,
	process::ExitCode,
};

use anyhow::Context;
use clap::Parser;

use logcmake::Config;

/// Generate a CMakeLists.txt from the g++/clang++ commands in a build log
#[derive(Parser, Debug)]
#[command(name = "logcmake", version, about)]
struct Cli {
	/// Build log to read. Reads stdin if omitted or "-"
	log: Option<PathBuf>,

	/// Write the CMake project here instead of stdout
	#[arg(short, long, value_name = "FILE")]
	output: Option<PathBuf>,

	/// Project name. Defaults to the first target's name
	#[arg(short, long)]
	name: Option<String>,

	/// TOML file with default settings
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Version passed to cmake_minimum_required()
	#[arg(long, value_name = "VERSION")]
	cmake_minimum_version: Option<String>,
}

impl Cli {
	fn config(&self) -> Result<Config, anyhow::Error> {
		let mut config = match &self.config {
			Some(path) => {
				logcmake::read_config(path).with_context(|| format!("Error loading {}", path.display()))?
			}
			None => Config::default(),
		};
		if let Some(name) = &self.name {
			config.name = Some(name.clone());
		}
		if let Some(version) = &self.cmake_minimum_version {
			config.cmake_minimum_version = version.clone();
		}
		Ok(config)
	}
}

fn run(cli: Cli) -> Result<(), anyhow::Error> {
	let config = cli.config()?;

	let cmake = match cli.log.as_deref() {
		None => logcmake::convert(io::stdin().lock(), &config)?,
		Some(path) if path.as_os_str() == "-" => logcmake::convert(io::stdin().lock(), &config)?,
		Some(path) => {
			log::info!("reading {}", path.display());
			let f = fs::File::open(path).with_context(|| format!("Error opening {}", path.display()))?;
			logcmake::convert(BufReader::new(f), &config)?
		}
	};

	match &cli.output {
		Some(path) => {
			log::info!("writing {}", path.display());
			fs::write(path, cmake + "\n").with_context(|| format!("Error writing {}", path.display()))?;
		}
		None => {
			let mut stdout = io::stdout().lock();
			writeln!(stdout, "{}", cmake).context("Error writing to stdout")?;
		}
	}
	Ok(())
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().filter_or("LOGCMAKE_LOG", "warn"))
		.format_timestamp(None)
		.init();

	match run(Cli::parse()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {:#}", e);
			ExitCode::FAILURE
		}
	}
}
