pub mod config;
pub mod format;
pub mod list_utils;
pub mod observer;
pub mod storage;
