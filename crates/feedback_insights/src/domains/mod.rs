//! Domain modules for the analytics core.
//!
//! Every function here is a pure transformation of an immutable record
//! snapshot (plus, where time matters, a caller-supplied reference
//! instant). Nothing reads a clock, touches shared state or fails: all
//! degenerate inputs have defined outputs.
//!
//! # Modules
//!
//! - [`windows`]: time-window classification of records
//! - [`ratings`]: per-category average scores
//! - [`engagement`]: submissions-per-day histogram
//! - [`submitters`]: most frequent submitter ranking
//! - [`suggestion`]: textual improvement recommendation
//! - [`export`]: flat CSV rendering of the snapshot

pub mod engagement;
pub mod export;
pub mod ratings;
pub mod submitters;
pub mod suggestion;
pub mod windows;
