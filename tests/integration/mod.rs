//! Integration tests for the parameter store

mod container_creation;
mod global_config;
mod ledger_audit;
mod merge_report;
