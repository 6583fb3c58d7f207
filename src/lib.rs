pub mod common;
pub mod config;
pub mod db;
pub mod frontend;
pub mod models;
pub mod services;
pub mod storage;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
