//! PriceStory Core — domain types, date normalization, dataset loading, scene stepper.
//!
//! This crate contains everything the story viewer needs headless:
//! - Domain types (records, indicator groups, scenes)
//! - Ordered-fallback date normalizer for drifting CSV date formats
//! - CSV loading with load-time schema validation and fingerprinting
//! - Scene controller state machine with a chart-renderer seam

pub mod config;
pub mod controller;
pub mod data;
pub mod dates;
pub mod domain;
