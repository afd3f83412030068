//! Core types for dropcal.
//!
//! This crate holds everything the terminal front end renders:
//! - `sneaker` for the release records and the sample catalog
//! - `catalog` and `grid` for the two render passes
//! - `navigation` for moving the calendar cursor month by month
//! - `ics` for exporting drops to other calendar apps

pub mod catalog;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod cursor;
pub mod date;
pub mod error;
pub mod grid;
pub mod ics;
pub mod navigation;
pub mod sneaker;

pub use error::{DropCalError, DropCalResult};
