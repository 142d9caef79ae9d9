//! depreport - Dependency drift and Node.js compatibility report library
//!
//! This library provides the pipeline behind the `depreport` binary:
//! - Locating and parsing package.json manifests
//! - Running the libyear and npm-check analyses per manifest
//! - Resolving the last release compatible with each Node.js major
//! - Assembling and writing the semicolon-delimited report

pub mod analyzer;
pub mod cli;
pub mod compat;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod report;
