//! inkcalc
//!
//! Ink mixing calculator for print runs.
//!
//! Pure core ([`engine`], [`form`], [`model`]) with a thin impure shell
//! ([`counter`], [`config`], [`logging`], [`shell`]).

pub mod config;
pub mod counter;
pub mod engine;
pub mod form;
pub mod logging;
pub mod model;
pub mod shell;
