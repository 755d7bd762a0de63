use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_CMAKE_MINIMUM_VERSION: &str = "2.8";
pub const DEFAULT_OUTPUT: &str = "a.out";

/// Settings that shape the generated project. Read from an optional TOML file; every field may be
/// overridden on the command line.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Project name. Falls back to the first target's name.
	pub name: Option<String>,
	pub cmake_minimum_version: String,
	/// What the compiler calls a linked program when no `-o` is given.
	pub default_output: String,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			name: None,
			cmake_minimum_version: DEFAULT_CMAKE_MINIMUM_VERSION.to_owned(),
			default_output: DEFAULT_OUTPUT.to_owned(),
		}
	}
}

pub fn parse_config(config_toml: &str) -> Result<Config> {
	Ok(toml::from_str::<Config>(config_toml)?)
}

pub fn read_config(config_path: &Path) -> Result<Config> {
	let config_toml = fs::read_to_string(config_path)?;
	let config = parse_config(&config_toml)?;
	log::debug!("config from {}: {:?}", config_path.display(), config);
	Ok(config)
}
