const MAX_INLINE_ITEMS: usize = 3;

/// Renders the argument list of a CMake command. Short lists stay on one line, longer ones get one
/// argument per line.
pub(crate) fn format_multiline<S: AsRef<str>>(items: &[S]) -> String {
	if items.len() <= MAX_INLINE_ITEMS {
		return items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
	}
	let mut ret = items.iter().fold(String::new(), |acc, x| acc + "\n    " + x.as_ref());
	ret.push('\n');
	ret
}
