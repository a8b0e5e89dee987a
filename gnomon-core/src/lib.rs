//! Board-agnostic watchface logic for the Gnomon firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware:
//!
//! - Hand angle math and face drawing (over any embedded-graphics target)
//! - Lifecycle state machine
//! - Label formatting for date, weather and steps
//! - The application state struct tying it all together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod clock;
pub mod face;
pub mod labels;
pub mod state;
