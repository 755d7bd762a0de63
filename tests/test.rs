use std::{
	fs, //
	io::{BufReader, Cursor},
	path::PathBuf,
};

use logcmake::Config;

fn test_data(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_data").join(name)
}

#[test]
fn test_01() {
	let f = fs::File::open(test_data("test_01/build.log")).expect("Could not open build log");
	let cmake = logcmake::convert(BufReader::new(f), &Config::default()).expect("Could not convert build log");

	let expected = r#"cmake_minimum_required(VERSION 2.8)

project(app)

set(CMAKE_CXX_STANDARD 14)

set(CMAKE_CXX_FLAGS "${CMAKE_CXX_FLAGS} -DNDEBUG")

find_package(Threads)

include_directories(/opt/boost/include include)

add_executable(app src/main.cpp src/util.cpp)

target_link_libraries(
    app
    m
    ${CMAKE_CURRENT_LIST_DIR}/libfoo.a
    ${CMAKE_THREAD_LIBS_INIT}
)"#;
	assert_eq!(cmake, expected);
}

#[test]
fn config_overrides_header() {
	let config = Config {
		name: Some("renamed".to_owned()),
		cmake_minimum_version: "3.16".to_owned(),
		default_output: "prog".to_owned(),
	};
	let log = "clang++ -c main.cpp\nclang++ main.o\n";
	let cmake = logcmake::convert(Cursor::new(log), &config).unwrap();
	assert_eq!(
		cmake,
		"cmake_minimum_required(VERSION 3.16)\n\nproject(renamed)\n\nadd_executable(prog main.cpp)"
	);
}

#[test]
fn empty_log() {
	let cmake = logcmake::convert(Cursor::new(""), &Config::default()).unwrap();
	assert_eq!(cmake, "cmake_minimum_required(VERSION 2.8)\n\nproject(project_name)");
}

#[test]
fn error_names_the_line() {
	let log = "make all\ng++ -c -o both.o a.cpp b.cpp\n";
	let err = logcmake::convert(Cursor::new(log), &Config::default()).unwrap_err();
	let msg = format!("{:#}", err);
	assert!(msg.contains("line 2"), "{}", msg);
	assert!(matches!(
		err.downcast_ref::<logcmake::Error>(),
		Some(logcmake::Error::AmbiguousCompileOutput { .. })
	));
}
