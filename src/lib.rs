//! Holiday Query Engine
//!
//! This crate answers calendar questions against a per-year table of date
//! overrides (forced off-days and forced work-days that replace the natural
//! Saturday/Sunday pattern): remaining holidays this year, the nearest
//! holiday window, the nearest weekend and the next payday.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod source;
