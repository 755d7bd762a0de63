use std::path::Path;

/// Prefix CMake expands to the directory of the generated CMakeLists.txt.
pub(crate) const PROJECT_DIR_VAR: &str = "${CMAKE_CURRENT_LIST_DIR}";

/// Link flag that turns a link step into a shared library.
pub(crate) const SHARED_FLAG: &str = "-shared";

const ARCHIVE_SUFFIX: &str = ".a";
const OBJECT_EXT: &str = "o";

pub(crate) fn is_archive(token: &str) -> bool {
	token.ends_with(ARCHIVE_SUFFIX)
}

/// True for tokens with a file extension: a `.` after the first character, followed by at least one
/// character that is not a `.`.
pub(crate) fn looks_like_file(token: &str) -> bool {
	token
		.char_indices()
		.skip(1)
		.any(|(idx, c)| c == '.' && token[idx + 1..].chars().next().is_some_and(|next| next != '.'))
}

/// Name of the object file the compiler writes for `src` when no `-o` is given.
pub(crate) fn object_name(src: &str) -> String {
	Path::new(src).with_extension(OBJECT_EXT).to_string_lossy().into_owned()
}

/// First run of two ASCII digits in `s`, e.g. `17` in `gnu++17`.
pub(crate) fn two_digit_run(s: &str) -> Option<&str> {
	s.as_bytes()
		.windows(2)
		.position(|w| w[0].is_ascii_digit() && w[1].is_ascii_digit())
		.map(|idx| &s[idx..idx + 2])
}
