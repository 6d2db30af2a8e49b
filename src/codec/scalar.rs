//! Scalar encodings: strings, booleans, characters and numbers.

use crate::codec::{Decode, Encode, Shape};
use crate::error::{ConfigError, Result};
use std::any::type_name;

impl Encode for str {
    fn encode(&self) -> String {
        self.to_string()
    }
}

impl Encode for String {
    fn encode(&self) -> String {
        self.clone()
    }
}

impl Decode for String {
    fn decode(raw: &str, _shape: Shape) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl Encode for bool {
    fn encode(&self) -> String {
        self.to_string()
    }
}

impl Decode for bool {
    fn decode(raw: &str, _shape: Shape) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::parse(raw, "bool", "expected true/false, 1/0, yes/no or on/off")),
        }
    }
}

impl Encode for char {
    fn encode(&self) -> String {
        self.to_string()
    }
}

impl Decode for char {
    fn decode(raw: &str, _shape: Shape) -> Result<Self> {
        let mut chars = raw.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(c);
        }
        let mut chars = raw.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConfigError::parse(raw, "char", "expected exactly one character")),
        }
    }
}

macro_rules! impl_from_str_codec {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> String {
                    self.to_string()
                }
            }

            impl Decode for $ty {
                fn decode(raw: &str, _shape: Shape) -> Result<Self> {
                    raw.trim()
                        .parse::<$ty>()
                        .map_err(|e| ConfigError::parse(raw, type_name::<$ty>(), e))
                }
            }
        )*
    };
}

impl_from_str_codec!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
