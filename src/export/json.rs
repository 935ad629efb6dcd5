// src/export/json.rs

use std::error::Error;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::session::Session;

/// Full-fidelity dump: every field including the structured persons list.
/// Timestamps render as the same string form the CSV uses. Four-space
/// indentation, matching the other artifacts this feeds.
pub fn to_json_string(sessions: &[Session]) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    sessions.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}
