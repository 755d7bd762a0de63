pub mod args;
mod cmake_fmt;
pub mod config;
mod error;
pub mod frontend;
mod misc;
pub mod project;
pub mod target;

use std::io::BufRead;

use anyhow::Context;

pub use config::{read_config, Config};
pub use error::{Error, Result};
pub use project::Project;
pub use target::Target;

/// Reads a build log and returns the CMakeLists.txt that reproduces it.
pub fn convert<R: BufRead>(reader: R, config: &Config) -> anyhow::Result<String> {
	let mut project = Project::new(config);
	for (idx, line) in reader.lines().enumerate() {
		let line = line.with_context(|| format!("Error reading line {}", idx + 1))?;
		project.ingest(&line).with_context(|| format!("Error on line {}: {}", idx + 1, line.trim()))?;
	}
	log::info!("{} targets, {} build outputs", project.targets.len(), project.deps.len());
	Ok(project.to_text())
}
