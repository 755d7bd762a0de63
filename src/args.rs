//! Extraction of the options that matter for a CMake project from one compiler invocation.
//!
//! Options are looked up in [`OPTIONS`]. Anything not in the table is passed through: tokens starting
//! with `-` become opaque flags, file names become inputs and static archives become libraries. The
//! interpreter never rejects a token, since the logs it reads were produced by someone else's build.

use crate::misc::{is_archive, looks_like_file, PROJECT_DIR_VAR, SHARED_FLAG};

const DEFINE_PREFIX: &str = "-D";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
	Output,
	Debug,
	CompileOnly,
	Optimize,
	Standard,
	Warn,
	Lib,
	IncludeDir,
	Pthread,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Arity {
	/// The token must equal the option name.
	Switch,
	/// The value is glued to the option (`-O2`). The option may also appear bare.
	Joined,
	/// The value is the next token, or glued to the option, or follows an `=`.
	Separate { glued: bool, equals: bool },
}

struct OptionRule {
	name: &'static str,
	arity: Arity,
	field: Field,
}

enum Matched<'a> {
	Bare,
	Inline(&'a str),
	Next,
}

impl OptionRule {
	const fn new(name: &'static str, arity: Arity, field: Field) -> Self {
		OptionRule { name, arity, field }
	}

	fn matches<'a>(&self, token: &'a str) -> Option<Matched<'a>> {
		if token == self.name {
			return match self.arity {
				Arity::Switch | Arity::Joined => Some(Matched::Bare),
				Arity::Separate { .. } => Some(Matched::Next),
			};
		}
		let rest = token.strip_prefix(self.name).filter(|rest| !rest.is_empty())?;
		match self.arity {
			Arity::Switch => None,
			Arity::Joined => Some(Matched::Inline(rest)),
			Arity::Separate { glued, equals } => {
				if let Some(value) = rest.strip_prefix('=').filter(|_| equals) {
					(!value.is_empty()).then_some(Matched::Inline(value))
				} else if glued {
					Some(Matched::Inline(rest))
				} else {
					None
				}
			}
		}
	}
}

const GLUED: Arity = Arity::Separate { glued: true, equals: false };

/// Every option the interpreter understands. The first rule that matches a token wins.
const OPTIONS: &[OptionRule] = &[
	OptionRule::new("-o", GLUED, Field::Output),
	OptionRule::new("-g", Arity::Switch, Field::Debug),
	OptionRule::new("-c", Arity::Switch, Field::CompileOnly),
	OptionRule::new("-O", Arity::Joined, Field::Optimize),
	OptionRule::new("-std", Arity::Separate { glued: false, equals: true }, Field::Standard),
	OptionRule::new("-W", Arity::Joined, Field::Warn),
	OptionRule::new("-l", GLUED, Field::Lib),
	OptionRule::new("-I", GLUED, Field::IncludeDir),
	OptionRule::new("-isystem", Arity::Separate { glued: true, equals: true }, Field::IncludeDir),
	OptionRule::new("-iquote", Arity::Separate { glued: true, equals: true }, Field::IncludeDir),
	OptionRule::new("-idirafter", Arity::Separate { glued: true, equals: true }, Field::IncludeDir),
	OptionRule::new("-L", GLUED, Field::IncludeDir),
	OptionRule::new("-pthread", Arity::Switch, Field::Pthread),
];

/// What one compiler invocation asks for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvocationArgs {
	pub output: Option<String>,
	pub debug: bool,
	pub compile_only: bool,
	pub optimize: Option<u32>,
	pub standard: Option<String>,
	pub warn: Option<String>,
	pub libs: Vec<String>,
	/// Header and library search directories (`-I`, `-isystem`, `-iquote`, `-idirafter`, `-L`).
	pub include_dirs: Vec<String>,
	pub pthread: bool,
	/// Unrecognised tokens starting with `-`.
	pub flags: Vec<String>,
	/// Unrecognised tokens that look like file names, static archives excluded.
	pub inputs: Vec<String>,
}

impl InvocationArgs {
	/// Stores an option's value. Returns false if the value is not usable, in which case the token is
	/// passed through like an unknown option.
	fn apply(&mut self, field: Field, value: Option<&str>) -> bool {
		match (field, value) {
			(Field::Output, Some(path)) => self.output = Some(path.to_owned()),
			(Field::Debug, None) => self.debug = true,
			(Field::CompileOnly, None) => self.compile_only = true,
			(Field::Pthread, None) => self.pthread = true,
			// A bare -O is -O1
			(Field::Optimize, None) => self.optimize = Some(1),
			(Field::Optimize, Some(level)) => match level.parse() {
				Ok(level) => self.optimize = Some(level),
				Err(_) => return false,
			},
			(Field::Standard, Some(std)) => self.standard = Some(std.to_owned()),
			(Field::Warn, Some(warn)) => self.warn = Some(warn.to_owned()),
			(Field::Lib, Some(lib)) => self.libs.push(lib.to_owned()),
			(Field::IncludeDir, Some(dir)) => self.include_dirs.push(dir.to_owned()),
			_ => return false,
		}
		true
	}

	/// Preprocessor definitions passed as `-DNAME` or `-DNAME=VALUE`, without the `-D`.
	pub fn defines(&self) -> Vec<String> {
		self.flags
			.iter()
			.filter_map(|flag| flag.strip_prefix(DEFINE_PREFIX))
			.filter(|def| !def.is_empty())
			.map(str::to_owned)
			.collect()
	}

	pub fn is_shared(&self) -> bool {
		self.flags.iter().any(|flag| flag == SHARED_FLAG)
	}
}

/// Interprets the arguments of a single `g++`/`clang++` invocation.
pub fn interpret<S: AsRef<str>>(tokens: &[S]) -> InvocationArgs {
	let mut args = InvocationArgs::default();
	let mut remaining = Vec::new();

	let mut iter = tokens.iter().map(AsRef::as_ref);
	while let Some(token) = iter.next() {
		let consumed = match OPTIONS.iter().find_map(|rule| rule.matches(token).map(|m| (rule, m))) {
			None => false,
			Some((rule, Matched::Bare)) => args.apply(rule.field, None),
			Some((rule, Matched::Inline(value))) => args.apply(rule.field, Some(value)),
			Some((rule, Matched::Next)) => match iter.next() {
				Some(value) => args.apply(rule.field, Some(value)),
				None => {
					log::debug!("Option {} has no value", rule.name);
					false
				}
			},
		};
		if !consumed {
			remaining.push(token);
		}
	}

	// Archives also look like files, so they are sorted out first
	for token in remaining {
		if is_archive(token) {
			args.libs.push(format!("{}/{}", PROJECT_DIR_VAR, token));
		} else if token.starts_with('-') {
			args.flags.push(token.to_owned());
		} else if looks_like_file(token) {
			args.inputs.push(token.to_owned());
		} else if !token.is_empty() {
			log::debug!("Ignoring argument \"{}\"", token);
		}
	}

	args
}
