// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Stable-identity diffing for fluid text and number transitions.
//!
//! Calligraph decides, for every update of a short label, which rendered
//! characters are "the same" as before and which are entering or exiting,
//! and computes the offset, delay and direction an animation engine needs to
//! move them. Interpolation, layout and drawing stay with the engine.
//!
//! # Key entry points
//!
//! - [`Calligraph`] - one live label: feed it content, get [`Frame`]s back
//! - [`update`] - the pure `state -> (state', frame)` step behind it
//! - [`options::Options`] - per-instance configuration with TOML presets
//! - [`align`] - the sequence (LCS) and column aligners
//!
//! # Architecture
//!
//! Every content change runs one synchronous pass: an aligner pairs old and
//! new units, the [`keys`] registry carries identity keys across the pairs
//! and allocates fresh ones for the rest, and the [`transition`] builders
//! turn keys, positions and the update's metric (change ratio for text, roll
//! direction for numbers) into [`transition::RenderDescriptor`]s.

pub mod align;
pub mod animation;
mod calligraph;
pub mod error;
pub mod keys;
pub mod options;
pub mod state;
pub mod transition;

pub use calligraph::{update, Calligraph, CompletionCallback, Content, Frame};
pub use error::CalligraphError;
