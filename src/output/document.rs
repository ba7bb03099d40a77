#![forbid(unsafe_code)]

//! Pretty JSON writer for generated documents
//!
//! Documents are written with four-space indentation and a trailing
//! newline. Key order is whatever order the map holds, which is catalog
//! authoring order, so regenerated files diff cleanly.

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

const INDENT: &[u8] = b"    ";

/// Serialize `document` as pretty JSON followed by a newline
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization or the underlying write
/// fails.
pub fn write_document<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    document: &T,
) -> Result<(), serde_json::Error> {
    let mut serializer =
        Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)
}
