//! Compact JSON text output.
//!
//! Walks the value tree top-down and writes the JSON text subset:
//!
//! - `null`, `true`/`false`
//! - integers in base 10
//! - decimals in shortest round-trip form, with `.0` kept on whole numbers
//!   so they read back as decimals; magnitudes outside `[1e-5, 1e16)` use
//!   exponent notation; NaN and infinities become `null`
//! - strings quoted and escaped by [`escape::write_escaped`]
//! - arrays as `[e0,e1,...]` in insertion order
//! - objects as `{"k0":v0,"k1":v1,...}` in ascending key order
//!
//! No whitespace is emitted. Pretty-printing is left to other formatters.

use std::fmt::{self, Write};

use crate::array::Array;
use crate::escape;
use crate::object::Object;
use crate::value::Value;

/// Write the JSON text of `value` to `out`.
pub fn write_value<W: Write + ?Sized>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Boolean(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => write!(out, "{i}"),
        Value::Decimal(d) => write_decimal(out, *d),
        Value::String(s) => escape::write_escaped(out, s),
        Value::Array(a) => write_array(out, a),
        Value::Object(o) => write_object(out, o),
    }
}

/// Write `[e0,e1,...]`.
pub fn write_array<W: Write + ?Sized>(out: &mut W, array: &Array) -> fmt::Result {
    out.write_char('[')?;
    for (i, item) in array.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write_value(out, item)?;
    }
    out.write_char(']')
}

/// Write `{"k0":v0,...}` in key order.
pub fn write_object<W: Write + ?Sized>(out: &mut W, object: &Object) -> fmt::Result {
    out.write_char('{')?;
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        escape::write_escaped(out, key)?;
        out.write_char(':')?;
        write_value(out, value)?;
    }
    out.write_char('}')
}

fn write_decimal<W: Write + ?Sized>(out: &mut W, d: f64) -> fmt::Result {
    out.write_str(&format_decimal(d))
}

/// Canonical text for a decimal.
fn format_decimal(d: f64) -> String {
    if !d.is_finite() {
        return "null".to_string();
    }
    let magnitude = d.abs();
    if magnitude >= 1e16 || (magnitude < 1e-5 && d != 0.0) {
        return format!("{d:e}");
    }
    // `Display` for f64 is shortest round-trip and never uses an exponent.
    let mut s = d.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// The JSON text of `value`.
pub fn to_json_string(value: &Value) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_value(&mut out, value);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_keeps_fraction_marker() {
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(-2.0), "-2.0");
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(3.14), "3.14");
    }

    #[test]
    fn decimal_exponent_outside_plain_range() {
        assert_eq!(format_decimal(1e21), "1e21");
        assert_eq!(format_decimal(1e300), "1e300");
        assert_eq!(format_decimal(-1.5e20), "-1.5e20");
        assert_eq!(format_decimal(1e-7), "1e-7");
        assert_eq!(format_decimal(f64::MAX), "1.7976931348623157e308");
        assert_eq!(format_decimal(5e-324), "5e-324");
    }

    #[test]
    fn decimal_plain_inside_range() {
        assert_eq!(format_decimal(1e15), "1000000000000000.0");
        assert_eq!(format_decimal(0.00001), "0.00001");
        assert_eq!(format_decimal(0.0), "0.0");
    }

    #[test]
    fn non_finite_decimals_are_null() {
        assert_eq!(format_decimal(f64::NAN), "null");
        assert_eq!(format_decimal(f64::INFINITY), "null");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "null");
    }

    #[test]
    fn negative_zero() {
        assert_eq!(format_decimal(-0.0), "-0.0");
    }
}
