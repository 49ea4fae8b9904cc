//! Conversion of input values into the bytes that get hashed.
//!
//! The conversion must be stable: the same logical value always produces the
//! same bytes, otherwise assignments would drift between releases.
//!
//! * text is used as its UTF-8 bytes
//! * binary data is used unchanged
//! * integers of any width are rendered in base-10
//! * floats are rendered with the shortest digits that round trip at their
//!   own precision, switching to exponent notation (`1e+06`) when the decimal
//!   exponent is below -4 or at least 6

use crate::Error;

use core::any::{type_name, Any};
use core::fmt::LowerExp;
use std::borrow::Cow;

/// A value that can be assigned to a bucket.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
    Int(i128),
    Uint(u128),
    F32(f32),
    F64(f64),
}

macro_rules! downcast {
    ($any:ident => $variant:ident as $cast:ty: $($ty:ty),+) => {
        $(
            if let Some(v) = $any.downcast_ref::<$ty>() {
                return Ok(Value::$variant(*v as $cast));
            }
        )+
    };
}

impl<'a> Value<'a> {
    /// Inspect the runtime type of `value` and convert it if it belongs to one
    /// of the supported families. Any other type is rejected with
    /// `Error::UnsupportedType`.
    pub fn from_any<T: Any>(value: &'a T) -> Result<Self, Error> {
        let any = value as &dyn Any;

        if let Some(v) = any.downcast_ref::<Vec<u8>>() {
            return Ok(Value::Bytes(v));
        }
        if let Some(v) = any.downcast_ref::<&'static [u8]>() {
            return Ok(Value::Bytes(v));
        }
        if let Some(v) = any.downcast_ref::<Box<[u8]>>() {
            return Ok(Value::Bytes(v));
        }
        if let Some(v) = any.downcast_ref::<String>() {
            return Ok(Value::Text(v));
        }
        if let Some(v) = any.downcast_ref::<&'static str>() {
            return Ok(Value::Text(v));
        }
        if let Some(v) = any.downcast_ref::<Box<str>>() {
            return Ok(Value::Text(v));
        }

        downcast!(any => Int as i128: i8, i16, i32, i64, i128, isize);
        downcast!(any => Uint as u128: u8, u16, u32, u64, u128, usize);
        downcast!(any => F32 as f32: f32);
        downcast!(any => F64 as f64: f64);

        Err(Error::UnsupportedType(type_name::<T>()))
    }

    /// The bytes fed to the hash function for this value.
    pub fn to_bytes(&self) -> Cow<'a, [u8]> {
        match *self {
            Value::Bytes(v) => Cow::Borrowed(v),
            Value::Text(v) => Cow::Borrowed(v.as_bytes()),
            Value::Int(v) => Cow::Owned(v.to_string().into_bytes()),
            Value::Uint(v) => Cow::Owned(v.to_string().into_bytes()),
            Value::F32(v) => Cow::Owned(
                format_float(v, v.is_nan(), v.is_infinite(), v.is_sign_negative()).into_bytes(),
            ),
            Value::F64(v) => Cow::Owned(
                format_float(v, v.is_nan(), v.is_infinite(), v.is_sign_negative()).into_bytes(),
            ),
        }
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(v: &'a [u8]) -> Self {
        Value::Bytes(v)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Value<'a> {
    fn from(v: &'a [u8; N]) -> Self {
        Value::Bytes(v)
    }
}

impl<'a> From<&'a Vec<u8>> for Value<'a> {
    fn from(v: &'a Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Text(v)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(v: &'a String) -> Self {
        Value::Text(v)
    }
}

macro_rules! from_number {
    ($variant:ident as $cast:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $cast)
                }
            }
        )+
    };
}

from_number!(Int as i128: i8, i16, i32, i64, i128, isize);
from_number!(Uint as u128: u8, u16, u32, u64, u128, usize);
from_number!(F32 as f32: f32);
from_number!(F64 as f64: f64);

/// Render a float using the shortest digits at its own precision, in `%g`
/// layout: plain decimal for exponents in `-4..6`, otherwise `d.ddde±XX`.
fn format_float<F: LowerExp>(value: F, nan: bool, infinite: bool, negative: bool) -> String {
    if nan {
        return "NaN".to_string();
    }
    if infinite {
        return if negative { "-Inf" } else { "+Inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, eg: `-1.2345e3`
    let sci = format!("{value:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let mantissa = mantissa.strip_prefix('-').unwrap_or(mantissa);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if !(-4..6).contains(&exp) {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.unsigned_abs()));
    } else if exp < 0 {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            out.push_str(&digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }

    out
}
