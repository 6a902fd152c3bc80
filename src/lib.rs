//! # poker_trainer
//!
//! A small poker training-content API: canned scenario texts for five
//! training modules, plus rule-based feedback on submitted actions.
//!
//! The engine half ([`trainer`]) generates scenarios and grades actions
//! with no I/O at all; the [`api`] module wraps it in a stateless axum
//! router (`GET /health`, `GET /scenario/:module`, `POST /feedback`)
//! served by the binary in `main.rs`.
//!
//! ## How it works
//!
//! 1. A client fetches `GET /scenario/{module}`. [`generate_scenario`]
//!    picks the canned template for that module, drawing from the RNG only
//!    where the catalog offers a choice (which bluff-catch spot, which
//!    sample hand), and renders it into a [`Scenario`].
//! 2. The client posts an [`Answer`]. Nothing is stored between requests,
//!    so the server rebuilds a fresh default scenario for the answered
//!    module and runs [`feedback`] over it: an ordered list of substring
//!    checks, each appending one canned tip.
//!
//! Generators take `&mut impl Rng`, so tests drive them with a seeded
//! [`rand::rngs::StdRng`] while the HTTP handlers use `rand::thread_rng()`.
//!
//! ## Quick start
//!
//! ```rust
//! use poker_trainer::{feedback, generate_scenario, Module};
//!
//! let mut rng = rand::thread_rng();
//!
//! // A button open-or-fold drill:
//! let scenario = generate_scenario(&mut rng, Module::PreflopOpen, Some("BTN"), None);
//! assert_eq!(scenario.id, "preflop_open");
//! assert!(scenario.text.contains("Position: BTN"));
//!
//! // Grade a submitted action:
//! let tips = feedback(&scenario, "fold", "");
//! assert!(tips.starts_with("Feedback:\n- "));
//! ```

pub mod api;
pub mod trainer;

// Convenience re-exports so callers can use `poker_trainer::generate_scenario`
// directly without reaching into `trainer::`.
pub use api::router;
pub use trainer::{feedback, generate_scenario, Answer, Module, Scenario};
