//! A tiny command router
//!
//! This crate splits a command line into positional arguments and flags, then hands it to the
//! command registered under the first positional argument:
//! ```text
//! app build web -v --release
//! ```
//!
//! Token | Classified as
//! -|-
//! Starts with `-` and is longer than one character (`-v`, `--release`, `--`)|Flag
//! Anything else (`build`, `web`, `-`)|Positional argument
//!
//! Flags carry no values: `--key=value` is a single flag named `--key=value`.
//!
//! # Dispatch
//!
//! With [`Strategy::FirstMatch`] (the default) the first positional argument selects one
//! registered command; when it is missing or unknown the default handler runs instead. With
//! [`Strategy::Priority`] every positional argument must name a command, and the matched
//! commands run in ascending priority.
//!
//! Handlers receive a [`Context`] that exposes the classified arguments and a set-once
//! [`Store`].

mod args;
mod command;
mod context;
mod dispatch;
mod error;
mod store;

pub use args::{is_flag, Arg, Args};
pub use command::Command;
pub use context::Context;
pub use dispatch::{Mood, Strategy, UnknownStrategy};
pub use error::{BoxError, Error};
pub use store::{Key, Store};
