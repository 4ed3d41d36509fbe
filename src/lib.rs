//! quire - Terminal notebook application
//!
//! A command-line tool that keeps notebooks, notes and to-dos in a local
//! store and lists them with filtering, sorting and formatting options.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuireError;
