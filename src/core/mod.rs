pub mod add;
pub mod boot;
pub mod clear;
pub mod config;
pub mod diagnostics;
pub mod log;
pub mod show;
