//! Integration tests for the instance construction protocol

mod logging_config;
mod state_isolation;
