//! Integration tests for the folder/table tracker

mod config_integration;

pub use test_utils::with_xdg_env;
