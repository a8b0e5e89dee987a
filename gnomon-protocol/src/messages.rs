//! Typed messages carried over the companion link.
//!
//! Inbound (phone → watch): weather reports and wall-clock synchronization.
//! Outbound (watch → phone): periodic weather requests.

use heapless::String;

use crate::dict::{DictError, DictReader, DictWriter, TupleValue};
use crate::frame::{LinkError, LinkFrame};

/// Frame type: key-value dictionary (application message)
pub const MSG_DICT: u8 = 0x01;
/// Frame type: wall-clock synchronization
pub const MSG_TIME_SYNC: u8 = 0x02;

/// Dictionary key: temperature in integer Celsius (inbound)
pub const KEY_TEMPERATURE: u32 = 0;
/// Dictionary key: short condition text (inbound)
pub const KEY_CONDITIONS: u32 = 1;
/// Dictionary key: request marker (outbound)
pub const KEY_REQUEST: u32 = 0;

/// Maximum stored length of the condition text
pub const CONDITIONS_MAX: usize = 32;

/// Errors that can occur while interpreting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Frame type is not one we understand
    UnknownType(u8),
    /// Dictionary payload was malformed
    Dict(DictError),
    /// Fixed-layout payload was the wrong size
    BadPayload,
    /// Frame could not be built
    Link(LinkError),
}

impl From<DictError> for MessageError {
    fn from(err: DictError) -> Self {
        MessageError::Dict(err)
    }
}

impl From<LinkError> for MessageError {
    fn from(err: LinkError) -> Self {
        MessageError::Link(err)
    }
}

/// A weather report from the phone
///
/// Either field may be absent; the phone is free to send partial updates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherReport {
    /// Temperature in integer Celsius
    pub temperature: Option<i32>,
    /// Short condition text ("Cloudy", "Rain", ...)
    pub conditions: Option<String<CONDITIONS_MAX>>,
}

impl WeatherReport {
    /// Parse a weather report from a dictionary payload
    ///
    /// Unknown keys are skipped; condition text longer than
    /// [`CONDITIONS_MAX`] is truncated at a character boundary.
    pub fn from_dict(payload: &[u8]) -> Result<Self, DictError> {
        let mut report = WeatherReport::default();

        for tuple in DictReader::new(payload)? {
            let tuple = tuple?;
            match (tuple.key, tuple.value) {
                (KEY_TEMPERATURE, TupleValue::Int(celsius)) => {
                    report.temperature = Some(celsius);
                }
                (KEY_CONDITIONS, TupleValue::Text(text)) => {
                    report.conditions = Some(truncate_to(text));
                }
                // Skip keys or kinds we do not know
                _ => {}
            }
        }

        Ok(report)
    }

    /// Whether both fields are present
    pub fn is_complete(&self) -> bool {
        self.temperature.is_some() && self.conditions.is_some()
    }
}

fn truncate_to<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Wall-clock synchronization from the phone
///
/// Payload: year (u16 LE), month, day, hour, minute, second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSync {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeSync {
    /// Payload size on the wire
    pub const WIRE_SIZE: usize = 7;

    /// Parse a time sync from its fixed-layout payload
    pub fn from_payload(payload: &[u8]) -> Result<Self, MessageError> {
        if payload.len() != Self::WIRE_SIZE {
            return Err(MessageError::BadPayload);
        }
        Ok(Self {
            year: u16::from_le_bytes([payload[0], payload[1]]),
            month: payload[2],
            day: payload[3],
            hour: payload[4],
            minute: payload[5],
            second: payload[6],
        })
    }

    /// Encode this time sync into a frame (for tests and simulation)
    pub fn to_frame(&self) -> Result<LinkFrame, MessageError> {
        let year = self.year.to_le_bytes();
        let payload = [
            year[0],
            year[1],
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ];
        Ok(LinkFrame::new(MSG_TIME_SYNC, &payload)?)
    }
}

/// Messages from the phone to the watch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhoneMessage {
    Weather(WeatherReport),
    TimeSync(TimeSync),
}

impl PhoneMessage {
    /// Interpret a decoded frame
    pub fn from_frame(frame: &LinkFrame) -> Result<Self, MessageError> {
        match frame.kind {
            MSG_DICT => Ok(PhoneMessage::Weather(WeatherReport::from_dict(
                &frame.payload,
            )?)),
            MSG_TIME_SYNC => Ok(PhoneMessage::TimeSync(TimeSync::from_payload(
                &frame.payload,
            )?)),
            other => Err(MessageError::UnknownType(other)),
        }
    }
}

/// Build the outbound weather request frame
///
/// A dictionary with the single request key and a placeholder value; the
/// companion app treats any such message as "send me the weather".
pub fn weather_request() -> Result<LinkFrame, MessageError> {
    let mut buf = [0u8; 16];
    let mut writer = DictWriter::new(&mut buf)?;
    writer.push_u8(KEY_REQUEST, 0)?;
    let len = writer.finish();
    Ok(LinkFrame::new(MSG_DICT, &buf[..len])?)
}
