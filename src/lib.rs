//! TOPSIS Ranker - Multi-criteria decision ranking service
//!
//! This crate ranks alternatives with TOPSIS (Technique for Order Preference
//! by Similarity to Ideal Solution) and serves it over HTTP: inline JSON
//! scoring, and file uploads whose results are stored and mailed back.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
