//! NVDA controller ABI support.
//!
//! The NVDA screen reader exposes a small in-process controller surface:
//! exported C entry points for speaking text, cancelling speech, flashing a
//! braille message, probing whether the reader is running, and notifying it
//! of input-language changes. This crate carries everything shared across
//! that boundary:
//!
//! - the raw status-code contract ([`status`]),
//! - UTF-16 / `wchar_t` marshaling helpers ([`wide`]),
//! - the loader-written function-pointer slot primitive ([`hooks`]),
//! - a safe client over a controller library resolved at runtime
//!   (Windows only, [`Controller`]).
//!
//! The export shim itself lives in the companion `nvdactrl-stub` crate.

pub mod error;
pub mod hooks;
pub mod status;
pub mod wide;

#[cfg(windows)]
mod client;

#[cfg(windows)]
pub use client::Controller;

pub use error::{ControllerError, Result};
pub use status::{check, ErrorStatus, RPC_S_CALL_FAILED, RPC_S_SERVER_UNAVAILABLE, STATUS_OK};
