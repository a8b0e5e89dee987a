//! Companion Link Protocol
//!
//! This crate defines the serial protocol between the watch and the paired
//! phone's companion app. The phone pushes weather reports and wall-clock
//! synchronization; the watch sends periodic weather requests.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌──────┬────────┬──────┬─────────────┬──────────┐
//! │ SYNC │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B   │ 1B     │ 1B   │ 0–120B      │ 1B       │
//! └──────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Application payloads (type [`messages::MSG_DICT`]) are key-value
//! dictionaries — see [`dict`]. The watch never blocks on the link: frames
//! are decoded incrementally and malformed input is dropped.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod dict;
pub mod frame;
pub mod messages;

pub use dict::{DictError, DictReader, DictWriter, Tuple, TupleValue};
pub use frame::{Decoder, LinkError, LinkFrame, FRAME_SYNC, MAX_PAYLOAD};
pub use messages::{MessageError, PhoneMessage, TimeSync, WeatherReport};
