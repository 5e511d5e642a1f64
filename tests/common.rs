#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sl() -> Command {
    cargo_bin_cmd!("sessionlog")
}

/// Unique settings file + database paths inside the system temp dir.
/// Any leftovers from a previous run are removed.
pub struct TestEnv {
    pub config: String,
    pub db: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("{}_sessionlog", name));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).expect("create test dir");

        Self {
            config: dir.join("sessionlog.conf").to_string_lossy().to_string(),
            db: dir.join("sessionlog.sqlite").to_string_lossy().to_string(),
        }
    }

    /// Command with `--config` and `--db` already set.
    pub fn cmd(&self) -> Command {
        let mut c = sl();
        c.args(["--config", &self.config, "--db", &self.db]);
        c
    }

    pub fn init(&self) {
        self.cmd().arg("init").assert().success();
    }

    pub fn add(&self, duration: &str, kind: &str) {
        self.cmd()
            .args(["add", "--duration", duration, "--kind", kind])
            .assert()
            .success();
    }

    pub fn config_text(&self) -> String {
        fs::read_to_string(&self.config).expect("read config")
    }
}

/// Temporary output file path; removed if it already exists.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
