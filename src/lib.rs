//! Inline rich-text markup with animated per-character effects.
//!
//! This crate re-exports [`rich`] and adds a small file logger for hosts that
//! want the engine's `log` output without wiring up their own backend.
//!
//! ```no_run
//! use rich_text_rs::{RichText, log_init};
//!
//! log_init::init_logger("rich.log", log::LevelFilter::Debug)?;
//! let text = RichText::from_markup("[wave]hello[/wave]");
//! # Ok::<(), rich_text_rs::error::LogInitError>(())
//! ```

pub mod error;
pub mod log_init;

pub use error::{LogInitError, Result};
pub use rich::*;
