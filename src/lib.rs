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
// Complexity limits (thresholds in clippy.toml)
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

//! Staggered dot-wave typing indicator.
//!
//! Dotwave models the "someone is typing" bubble of a chat list: a row of
//! dots that bounce and/or fade in a wave, plus the placement of the bubble
//! inside a list cell whose geometry comes from the host's layout pass.
//!
//! # Key entry points
//!
//! - [`animation::DotWaveAnimator`] - the dot row and its start/stop session
//! - [`cell::TypingIndicatorCell`] - bubble container, placement and color
//! - [`options::IndicatorOptions`] - TOML presets for animator parameters
//!
//! # Timing model
//!
//! Everything runs on the host's event-loop thread. Starting a session
//! queues one deferred attach per dot, `i × delay` after the start; the host
//! drives them by calling [`animation::DotWaveAnimator::advance`] each turn
//! and samples [`animation::DotWaveAnimator::render_states`] to draw. A stop
//! detaches every effect and cancels attaches that have not fired.

pub mod animation;
pub mod cell;
pub mod error;
pub mod geometry;
pub mod options;
pub mod util;

pub use error::DotwaveError;
