//! # u-vaxsets
//!
//! Vaccination campaign simulator built on uniform sampling and set algebra.
//!
//! A fixed population is generated, two vaccine cohorts are drawn from it
//! without replacement, and the population is broken down into citizens
//! with no dose, both doses, or exactly one of the two.
//!
//! ## Modules
//!
//! - [`population`] — Citizens and the immutable universe
//! - [`random`] — Seeded RNG, seed resolution, partial Fisher-Yates sampling
//! - [`collections`] — Union, intersection and difference over ordered sets
//! - [`campaign`] — Runs one campaign and derives the breakdown
//! - [`report`] — Text rendering of an outcome
//!
//! ## Design Philosophy
//!
//! - **No hidden state**: the rng is an explicit value threaded through calls
//! - **Reproducible on request**: an explicit seed replays the same run
//! - **Data first**: computation returns sets; formatting lives in [`report`]
//! - **Property-based testing**: set identities verified via proptest

pub mod campaign;
pub mod collections;
pub mod config;
pub mod error;
pub mod population;
pub mod random;
pub mod report;

pub use error::{Result, SimError};
