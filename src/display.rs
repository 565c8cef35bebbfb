use crate::core::error::ProbeError;
use console::style;
use serde::Serialize;
use std::io::{self, Write};

/// Two-space indented JSON; non-ASCII text is written as-is, not `\u` escaped.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ProbeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn write_status(out: &mut impl Write, status: u16) -> io::Result<()> {
    writeln!(out, "Status Code: {}", status)
}

pub fn write_response(out: &mut impl Write, pretty_body: &str) -> io::Result<()> {
    writeln!(out, "Response: {}", pretty_body)
}

pub fn write_error(out: &mut impl Write, err: &ProbeError) -> io::Result<()> {
    writeln!(out, "Error: {}", err)
}

pub fn write_labeled(out: &mut impl Write, label: &str, text: &str) -> io::Result<()> {
    writeln!(out, "{} {}", label, text)
}

pub fn write_success(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        style("✅ SUCCESS! Gemini API is working correctly.").bold().green()
    )
}
