//! The scenario catalog behind every training module.
//!
//! | Module         | Generator                            | Ids            |
//! |----------------|--------------------------------------|----------------|
//! | `bluffcatch`   | [`postflop::generate_bluffcatch`]    | `bc1`, `bc2`   |
//! | `thinvalue`    | [`postflop::generate_thinvalue`]     | `tv1`          |
//! | `threebet`     | [`postflop::generate_threebet`]      | `b3p1`         |
//! | `preflop_open` | [`preflop::generate_preflop_open`]   | `preflop_open` |
//! | `preflop_3bet` | [`preflop::generate_preflop_3bet`]   | `preflop_3bet` |

pub mod postflop;
pub mod preflop;
