//! The training engine: scenario catalog, generators, hint tables, and the
//! rule-based feedback pass.
//!
//! ## Module overview
//!
//! | Module      | Purpose                                                        |
//! |-------------|----------------------------------------------------------------|
//! | `models`    | Wire types: the [`Module`] enum, [`Scenario`], [`Answer`]      |
//! | `hints`     | Static RFI and 3-bet hint tables                               |
//! | `catalog`   | Canned templates and one generator per module                  |
//! | `generator` | [`generate_scenario`], the single dispatch entry point         |
//! | `feedback`  | Substring checks over scenario and action, yielding canned tips |
//!
//! Everything here is pure relative to the caller-supplied RNG: no I/O, no
//! shared state, no stored scenarios.

pub mod catalog;
pub mod feedback;
pub mod generator;
pub mod hints;
pub mod models;

pub use feedback::feedback;
pub use generator::generate_scenario;
pub use models::{Answer, Module, Scenario};
