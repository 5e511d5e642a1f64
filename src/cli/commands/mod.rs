pub mod add;
pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod panel;
pub mod show;
