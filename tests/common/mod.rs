#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the travel-day-counter binary.
#[macro_export]
macro_rules! travel_day_counter {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("travel-day-counter"))
    };
}

pub const TRAVEL_LOG: &str = "\
DATE,ENTERED
2019-12-01,KR
2020-01-11,JP
2020-01-14,TW
2020-01-16,KR
";

pub const HOME_CONFIG: &str = r#"{
    "source": "travel.csv",
    "lang": "en",
    "track_home": true,
    "home_code": "KR",
    "home_name": "Korea",
    "track_residency": false,
    "table_style": "full",
    "report_style": "chrono"
}"#;

/// A temporary directory holding a settings file and a travel log.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        fs::write(self.dir.path().join(relative_path), content).expect("Failed to write file");
    }

    pub fn create_config(&self, content: &str) {
        self.create_file("config.json", content);
    }

    pub fn create_log(&self, content: &str) {
        self.create_file("travel.csv", content);
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
