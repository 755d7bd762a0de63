const GCC_ID: &str = "g++";
const CLANG_ID: &str = "clang++";

/// The compiler drivers whose invocations are recognised in a build log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frontend {
	Gcc,
	Clang,
}

impl Frontend {
	pub fn id(&self) -> &'static str {
		match self {
			Frontend::Gcc => GCC_ID,
			Frontend::Clang => CLANG_ID,
		}
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct Invocation<'a> {
	pub frontend: Frontend,
	pub tokens: Vec<&'a str>,
}

/// Finds the last compiler frontend mentioned anywhere in `line` and splits what follows it on single
/// spaces. Returns `None` for lines that mention neither frontend.
///
/// Matching is by substring, so `/usr/bin/g++` or `ccache clang++` count as well. Quoting is not
/// understood.
pub fn split_invocation(line: &str) -> Option<Invocation<'_>> {
	// "clang++" ends in "g++". When both end at the same place, the longer id wins.
	let (frontend, end) = [Frontend::Clang, Frontend::Gcc]
		.into_iter()
		.filter_map(|fe| line.rfind(fe.id()).map(|idx| (fe, idx + fe.id().len())))
		.reduce(|best, next| if next.1 > best.1 { next } else { best })?;

	let tokens = line[end..].trim().split(' ').collect();
	Some(Invocation { frontend, tokens })
}
