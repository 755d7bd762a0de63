use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use logcmake::Project;

struct CaptureLogger {
	records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
	fn enabled(&self, _: &Metadata) -> bool {
		true
	}

	fn log(&self, record: &Record) {
		self.records.lock().unwrap().push((record.level(), record.args().to_string()));
	}

	fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };

fn warnings() -> Vec<String> {
	LOGGER
		.records
		.lock()
		.unwrap()
		.drain(..)
		.filter(|(level, _)| *level == Level::Warn)
		.map(|(_, msg)| msg)
		.collect()
}

// Kept as a single test: the logger is global to this test binary.
#[test]
fn standards_warning() {
	log::set_logger(&LOGGER).expect("Could not install logger");
	log::set_max_level(LevelFilter::Trace);

	let mut project = Project::default();
	project.ingest("g++ -std=c++14 -c a.cpp").unwrap();
	warnings();
	let text = project.to_text();
	assert!(text.contains("set(CMAKE_CXX_STANDARD 14)"));
	assert!(warnings().is_empty());

	project.ingest("g++ -std=c++17 -c b.cpp").unwrap();
	warnings();
	let text = project.to_text();
	assert!(text.contains("set(CMAKE_CXX_STANDARD 17)"));
	let warned = warnings();
	assert_eq!(warned.len(), 1, "{:?}", warned);
	assert!(warned[0].contains("c++14"), "{}", warned[0]);
	assert!(warned[0].contains("c++17"), "{}", warned[0]);

	// asking for the standard does not warn, only rendering does
	assert_eq!(project.standard(), Some("c++17"));
	assert!(warnings().is_empty());
}
