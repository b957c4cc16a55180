pub mod app;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod query;
pub mod rest;
pub mod storage;
pub mod tracing;
