use core::fmt;
use std::iter;

use crate::{cmake_fmt::format_multiline, misc::SHARED_FLAG};

/// A program or shared library produced by one link step, with every source that went into it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Target {
	pub name: String,
	pub sources: Vec<String>,
	pub libs: Vec<String>,
	pub defines: Vec<String>,
	pub flags: Vec<String>,
}

impl Target {
	pub fn new(name: String, sources: Vec<String>, libs: Vec<String>) -> Self {
		Target { name, sources, libs, ..Default::default() }
	}

	pub fn is_shared(&self) -> bool {
		self.flags.iter().any(|x| x == SHARED_FLAG)
	}

	fn command(&self, keyword: Option<&str>, args: &[String]) -> String {
		let items = iter::once(self.name.as_str())
			.chain(keyword)
			.chain(args.iter().map(String::as_str))
			.collect::<Vec<_>>();
		format_multiline(&items)
	}

	pub fn to_text(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Target {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut flags = self.flags.clone();
		let mut parts = Vec::new();
		if let Some(idx) = flags.iter().position(|x| x == SHARED_FLAG) {
			flags.remove(idx);
			parts.push(format!("add_library({})", self.command(Some("SHARED"), &self.sources)));
		} else {
			parts.push(format!("add_executable({})", self.command(None, &self.sources)));
		}
		if !self.libs.is_empty() {
			parts.push(format!("target_link_libraries({})", self.command(None, &self.libs)));
		}
		if !self.defines.is_empty() {
			parts.push(format!("target_compile_definitions({})", self.command(Some("PUBLIC"), &self.defines)));
		}
		if !flags.is_empty() {
			let flags = flags.iter().map(|x| x.to_owned() + ";").collect::<Vec<_>>();
			parts.push(format!("target_compile_options({})", self.command(Some("PRIVATE"), &flags)));
		}
		write!(f, "{}", parts.join("\n\n"))
	}
}
