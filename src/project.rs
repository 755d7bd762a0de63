use core::fmt;
use std::collections::{BTreeSet, HashMap};

use crate::{
	args::{self, InvocationArgs},
	cmake_fmt::format_multiline,
	config::Config,
	error::{Error, Result},
	frontend,
	misc::{object_name, two_digit_run, SHARED_FLAG},
	target::Target,
};

/// Library CMake's `Threads` package resolves to.
pub const THREAD_LIBS: &str = "${CMAKE_THREAD_LIBS_INIT}";
const DEFAULT_PROJECT_NAME: &str = "project_name";

/// Everything learned from a build log so far. Feed it one line at a time with [`Project::ingest`],
/// then render it with `to_string()`.
#[derive(Debug)]
pub struct Project {
	name: Option<String>,
	cmake_minimum_version: String,
	default_output: String,

	/// Build output to the inputs it was produced from.
	pub deps: HashMap<String, Vec<String>>,
	pub targets: Vec<Target>,
	pub standards: BTreeSet<String>,
	pub include_dirs: BTreeSet<String>,
	pub other_flags: Vec<String>,
	pub pthread: bool,
}

impl Default for Project {
	fn default() -> Self {
		Project::new(&Config::default())
	}
}

impl Project {
	pub fn new(config: &Config) -> Self {
		Project {
			name: config.name.clone(),
			cmake_minimum_version: config.cmake_minimum_version.clone(),
			default_output: config.default_output.clone(),
			deps: HashMap::new(),
			targets: Vec::new(),
			standards: BTreeSet::new(),
			include_dirs: BTreeSet::new(),
			other_flags: Vec::new(),
			pthread: false,
		}
	}

	pub fn name(&self) -> &str {
		match self.name.as_deref().filter(|x| !x.is_empty()) {
			Some(name) => name,
			None => self.targets.first().map_or(DEFAULT_PROJECT_NAME, |x| x.name.as_str()),
		}
	}

	/// Resolves `name` to the original sources it is built from, depth first, in input order.
	/// Names that are not build outputs are sources themselves.
	pub fn get_sources(&self, name: &str) -> Result<Vec<String>> {
		let mut sources = Vec::new();
		self.collect_sources(name, &mut Vec::new(), &mut sources)?;
		Ok(sources)
	}

	/// Like [`Project::get_sources`] for an output about to be recorded with `inputs`, without
	/// recording it.
	fn resolve_sources(&self, name: &str, inputs: &[String]) -> Result<Vec<String>> {
		let mut stack = vec![name];
		let mut sources = Vec::new();
		for input in inputs {
			self.collect_sources(input, &mut stack, &mut sources)?;
		}
		Ok(sources)
	}

	fn collect_sources<'a>(&'a self, name: &'a str, stack: &mut Vec<&'a str>, sources: &mut Vec<String>) -> Result<()> {
		if stack.contains(&name) {
			return Err(Error::CyclicDependency { name: name.to_owned() });
		}
		let inputs = match self.deps.get(name) {
			Some(x) => x,
			None => {
				sources.push(name.to_owned());
				return Ok(());
			}
		};
		stack.push(name);
		for input in inputs {
			self.collect_sources(input, stack, sources)?;
		}
		stack.pop();
		Ok(())
	}

	fn add_dependency(&mut self, output: String, inputs: Vec<String>) {
		log::debug!("{} <- [{}]", output, inputs.join(", "));
		self.deps.insert(output, inputs);
	}

	/// Records one line of build output. Lines that are not `g++`/`clang++` invocations are skipped.
	pub fn ingest(&mut self, line: &str) -> Result<()> {
		let invocation = match frontend::split_invocation(line) {
			Some(x) => x,
			None => {
				log::trace!("Not a compiler invocation: {}", line);
				return Ok(());
			}
		};
		log::debug!("{} {}", invocation.frontend.id(), invocation.tokens.join(" "));
		let args = args::interpret(&invocation.tokens);

		// Everything that can fail happens before the project is touched
		let target = if args.compile_only {
			if let Some(output) = &args.output {
				if args.inputs.len() != 1 {
					return Err(Error::AmbiguousCompileOutput { output: output.clone(), inputs: args.inputs });
				}
			}
			None
		} else {
			Some(self.link_target(&args)?)
		};

		for flag in &args.flags {
			if !self.other_flags.contains(flag) {
				self.other_flags.push(flag.clone());
			}
		}
		self.include_dirs.extend(args.include_dirs.iter().cloned());
		if let Some(standard) = &args.standard {
			self.standards.insert(standard.clone());
		}

		match target {
			None => self.add_objects(args),
			Some(target) => {
				self.add_dependency(target.name.clone(), args.inputs);
				if args.pthread {
					self.pthread = true;
				}
				log::debug!(
					"{} {}: [{}]",
					if target.is_shared() { "shared library" } else { "executable" },
					target.name,
					target.sources.join(", ")
				);
				self.targets.push(target);
			}
		}
		Ok(())
	}

	fn add_objects(&mut self, args: InvocationArgs) {
		match args.output {
			Some(output) => self.add_dependency(output, args.inputs),
			None => {
				for input in args.inputs {
					self.add_dependency(object_name(&input), vec![input]);
				}
			}
		}
	}

	fn link_target(&self, args: &InvocationArgs) -> Result<Target> {
		let name = args.output.clone().unwrap_or_else(|| self.default_output.clone());
		let sources = self.resolve_sources(&name, &args.inputs)?;

		let mut target = Target::new(name, sources, args.libs.clone());
		target.defines = args.defines();
		if args.is_shared() {
			target.flags.push(SHARED_FLAG.to_owned());
		}
		if args.pthread {
			target.libs.push(THREAD_LIBS.to_owned());
		}
		Ok(target)
	}

	/// The language standard the generated project is built with: the greatest one seen.
	pub fn standard(&self) -> Option<&str> {
		self.standards.last().map(String::as_str)
	}

	pub fn to_text(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Project {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut parts = vec![
			format!("cmake_minimum_required(VERSION {})", self.cmake_minimum_version),
			format!("project({})", self.name()),
		];
		let mut flags = self.other_flags.clone();
		if let Some(standard) = self.standard() {
			if self.standards.len() > 1 {
				log::warn!(
					"Multiple C++ standards in the build log ({}), using {}",
					self.standards.iter().cloned().collect::<Vec<_>>().join(", "),
					standard
				);
			}
			match two_digit_run(standard) {
				Some(version) => parts.push(format!("set(CMAKE_CXX_STANDARD {})", version)),
				None => flags.push(format!("-std={}", standard)),
			}
		}
		if !flags.is_empty() {
			parts.push(format!(r#"set(CMAKE_CXX_FLAGS "${{CMAKE_CXX_FLAGS}} {}")"#, flags.join(" ")));
		}
		if self.pthread {
			parts.push("find_package(Threads)".to_owned());
		}
		if !self.include_dirs.is_empty() {
			let dirs = self.include_dirs.iter().collect::<Vec<_>>();
			parts.push(format!("include_directories({})", format_multiline(&dirs)));
		}
		for target in &self.targets {
			parts.push(target.to_string());
		}
		write!(f, "{}", parts.join("\n\n"))
	}
}
