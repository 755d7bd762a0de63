use logcmake::{config::parse_config, Config, Error};

#[test]
fn defaults() {
	let config = parse_config("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.name, None);
	assert_eq!(config.cmake_minimum_version, "2.8");
	assert_eq!(config.default_output, "a.out");
}

#[test]
fn all_fields() {
	let config = parse_config(
		r#"
name = "engine"
cmake_minimum_version = "3.10"
default_output = "engine.bin"
"#,
	)
	.unwrap();
	assert_eq!(config.name, Some("engine".to_owned()));
	assert_eq!(config.cmake_minimum_version, "3.10");
	assert_eq!(config.default_output, "engine.bin");
}

#[test]
fn unknown_key() {
	assert!(matches!(parse_config("generator = \"ninja\""), Err(Error::ParseConfig(_))));
}

#[test]
fn missing_file() {
	let res = logcmake::read_config(std::path::Path::new("does/not/exist.toml"));
	assert!(matches!(res, Err(Error::ReadConfig(_))));
}
