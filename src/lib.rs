//! TOPSIS Ranker - Multi-criteria decision ranking service
//!
//! The core is a pure TOPSIS engine (`domain::topsis`) that ranks alternatives
//! by their closeness to an ideal solution. Around it sit a project workspace
//! for building decision problems incrementally, a tabular importer, and an
//! axum HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
