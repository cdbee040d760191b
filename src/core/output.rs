//! Writing fetched payloads to disk as indented JSON.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::Result;

/// File written in the working directory when no `--output` is given.
pub const DEFAULT_OUTPUT_FILE: &str = "player_data.json";

const INDENT: &[u8] = b"    ";

/// Serialize `value` as JSON indented by four spaces, without a trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write `value` to `path`, replacing any existing file.
///
/// The payload is serialized before the file is opened, so a serialization
/// failure leaves an existing file untouched.
pub fn write_output<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let contents = to_pretty_json(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())?;
    Ok(())
}
