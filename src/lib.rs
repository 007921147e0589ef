//! micro:bit emulator library - offline testing of micro:bit programs.
//!
//! This library exposes the core functionality of the `mb` CLI for use in
//! tests and in programs that drive an emulated device directly.
//!
//! # Modules
//!
//! - `image`: The 5x5 LED image model, codec, shifts and composition
//! - `state`: The validated, file-persisted device-state store
//! - `device`: Button/pin/sensor/display facades over the store
//! - `config`: Backing-file path resolution
//! - `error`: Error types with user-recoverable hints
//! - `cli`: CLI argument definitions
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod image;
pub mod logging;
pub mod state;
