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

//! Property tweening for retained-mode UI elements.
//!
//! Viewtween animates element properties (size, margins, background color,
//! translation, scale, opacity, text size) from a start value to a target
//! over a fixed duration, driven by the host's frame loop.
//!
//! # Key entry points
//!
//! - [`element::VisualElement`] - the trait a host element implements
//! - [`animation::Tween`] - builder for a single transition
//! - [`animation::TweenScheduler`] - owns running tweens; call
//!   [`tick`](animation::TweenScheduler::tick) once per frame
//! - [`animation::transition`] - show/hide, fade, resize and other presets
//! - [`options::TweenOptions`] - preset durations and curves, loadable from
//!   TOML
//!
//! # Model
//!
//! Everything runs on one thread. Elements are shared as
//! [`element::ElementHandle`] (`Rc<RefCell<dyn VisualElement>>`); the
//! scheduler keeps only weak references and cancels a tween whose element
//! goes away. Each element has at most one running tween: starting another
//! cancels the first before the new one writes anything. Every tween ends
//! with exactly one [`animation::TweenOutcome`].

pub mod animation;
pub mod element;
pub mod error;
pub mod options;
pub mod util;

#[cfg(test)]
mod testing;

pub use animation::{Track, Tween, TweenId, TweenScheduler};
pub use error::{ConfigError, TweenError};
pub use options::TweenOptions;
pub use util::easing::EasingCurve;
