//! Cell parsers shared by the coercer.
//!
//! Integers accept an optional base prefix (`0x`, `0o`, `0b`, or a leading
//! `0` for octal) and `_` separators between digits. Floats are decimal or
//! hexadecimal with a binary exponent (`0x1.8p3`). Booleans accept `yes`/`no`
//! on top of the usual literals.

use crate::{Error, Result};

/// Parses a boolean cell. The empty cell is `false`.
pub fn boolean(cell: &str) -> Result<bool> {
    match cell {
        "yes" | "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "no" | "" | "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::invalid_boolean(cell)),
    }
}

/// Parses a signed integer cell as `i64`. Surrounding whitespace is
/// ignored and the empty cell is `0`.
pub fn signed(cell: &str, to_type: &'static str) -> Result<i64> {
    let text = cell.trim();
    if text.is_empty() {
        return Ok(0);
    }

    let (negative, digits) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = magnitude(digits).ok_or_else(|| Error::invalid_integer(cell, to_type))?;

    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return Err(Error::invalid_integer(cell, to_type));
        }
        Ok((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).map_err(|_| Error::invalid_integer(cell, to_type))
    }
}

/// Parses an unsigned integer cell as `u64`. Surrounding whitespace is
/// ignored and the empty cell is `0`. Signs are rejected.
pub fn unsigned(cell: &str, to_type: &'static str) -> Result<u64> {
    let text = cell.trim();
    if text.is_empty() {
        return Ok(0);
    }

    magnitude(text).ok_or_else(|| Error::invalid_integer(cell, to_type))
}

/// Parses a float cell as `f64`. Surrounding whitespace is ignored and the
/// empty cell is `0`.
pub fn float(cell: &str, to_type: &'static str) -> Result<f64> {
    let text = cell.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    let unsigned = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    let value = if unsigned.starts_with("0x") || unsigned.starts_with("0X") {
        hex_float(text)
    } else {
        text.parse().ok()
    }
    .ok_or_else(|| Error::invalid_float(cell, to_type))?;

    // Finite literals that overflow parse as infinity
    if value.is_infinite() && !text.to_ascii_lowercase().contains("inf") {
        return Err(Error::invalid_float(cell, to_type));
    }

    Ok(value)
}

/// Hexadecimal float such as `-0x1.8p3`. The `p` exponent is required.
fn hex_float(text: &str) -> Option<f64> {
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    if !underscores_ok(rest) {
        return None;
    }

    let (mantissa, exponent) = rest.get(2..)?.split_once(|c| c == 'p' || c == 'P')?;
    let mut scale = i64::from(exponent.replace('_', "").parse::<i32>().ok()?);
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut bits: u64 = 0;
    let mut digits = 0;

    for (c, fractional) in whole
        .chars()
        .map(|c| (c, false))
        .chain(fraction.chars().map(|c| (c, true)))
    {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(16)?;
        digits += 1;

        // Past 60 bits the digit is below f64 precision
        if bits >> 60 == 0 {
            bits = bits << 4 | u64::from(digit);
            if fractional {
                scale -= 4;
            }
        } else if !fractional {
            scale += 4;
        }
    }

    if digits == 0 {
        return None;
    }

    let mut value = bits as f64;
    while scale != 0 && value != 0.0 && value.is_finite() {
        let step = scale.clamp(-1000, 1000);
        value *= 2f64.powi(step as i32);
        scale -= step;
    }

    Some(if negative { -value } else { value })
}

/// Unsigned digits with base detection. `None` on syntax error or overflow.
fn magnitude(text: &str) -> Option<u64> {
    if text.is_empty() || !underscores_ok(text) {
        return None;
    }

    let bytes = text.as_bytes();
    let (radix, body) = if bytes[0] == b'0' && bytes.len() >= 3 {
        match bytes[1].to_ascii_lowercase() {
            b'x' => (16, &text[2..]),
            b'o' => (8, &text[2..]),
            b'b' => (2, &text[2..]),
            _ => (8, &text[1..]),
        }
    } else if bytes[0] == b'0' {
        (8, &text[1..])
    } else {
        (10, text)
    };

    let mut value: u64 = 0;

    for c in body.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix)?;
        value = value
            .checked_mul(u64::from(radix))?
            .checked_add(u64::from(digit))?;
    }

    Some(value)
}

/// `_` may only appear between digits, or between a base prefix and a digit.
fn underscores_ok(text: &str) -> bool {
    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let bytes = text.as_bytes();
    let mut saw = Saw::Start;
    let mut hex = false;
    let mut i = 0;

    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        hex = bytes[1].to_ascii_lowercase() == b'x';
        saw = Saw::Digit;
        i = 2;
    }

    for &c in &bytes[i..] {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            saw = Saw::Digit;
        } else if c == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
        } else {
            if saw == Saw::Underscore {
                return false;
            }
            saw = Saw::Other;
        }
    }

    saw != Saw::Underscore
}
