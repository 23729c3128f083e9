//! # greetr library
//!
//! Internal library for the greetr binary. It exists so the classification,
//! solar resolution, and rendering seams can be tested in isolation from
//! process bootstrap in main.rs.
//!
//! ## Architecture
//!
//! - **Solar resolution**: `solar` module acquires the current position,
//!   fetches sunrise/sunset from the external time-service, and degrades to
//!   fallback constants on any failure
//! - **Monitoring**: `monitor` module classifies the current moment into
//!   Morning/Afternoon/Night and applies the greeting/theme side effects on
//!   transitions, once per minute
//! - **Rendering**: `surface` module with the terminal-backed surface behind
//!   the `GreetingSurface` trait
//! - **Infrastructure**: signal handling, logging, time source abstraction,
//!   shared constants, and argument parsing

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod constants;
pub mod monitor;
pub mod signals;
pub mod solar;
pub mod surface;
pub mod time_source;
