use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	/// A compile-only invocation named its object file but did not compile exactly one source.
	#[error("Compile step writing \"{output}\" must have exactly one input, found [{}]", .inputs.join(", "))]
	AmbiguousCompileOutput { output: String, inputs: Vec<String> },

	#[error("Cyclic dependency through \"{name}\"")]
	CyclicDependency { name: String },

	#[error("Error reading config file: {0}")]
	ReadConfig(#[from] std::io::Error),

	#[error("Error parsing config file: {0}")]
	ParseConfig(#[from] toml::de::Error),
}
