//! Value Codec
//!
//! Conversion between the string representation stored in a [`TreeNode`] and
//! typed values. Every supported type has one canonical encoding:
//!
//! - scalars use their plain text form (`3`, `0.5`, `true`, `name`)
//! - sequences use vector literals, `[e0; e1; e2]`; a single entry or an
//!   empty last entry gets a closing `;` (`[a b;]`, `[;]`), and nested
//!   sequences nest their brackets (`[[1; 2]; [3;]]`)
//! - dense matrices use `[a b; c d]`, rows separated by `;`, entries by whitespace
//!
//! Decoding takes a [`Shape`] so callers can request a vector size or a
//! matrix row/column count; `0` means "infer from the literal".
//!
//! [`TreeNode`]: crate::tree::TreeNode

mod matrix;
mod scalar;
mod vector;

pub use matrix::DenseMatrix;
pub(crate) use vector::tokenize;

use crate::error::Result;

/// Requested size of a decoded value.
///
/// `size` is the length of a vector or the row count of a matrix, `cols` the
/// column count of a matrix. Scalars ignore both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shape {
    pub size: usize,
    pub cols: usize,
}

impl Shape {
    /// Infer everything from the stored literal.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn vector(size: usize) -> Self {
        Self { size, cols: 0 }
    }

    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self { size: rows, cols }
    }
}

/// Canonical string form of a value.
pub trait Encode {
    fn encode(&self) -> String;
}

/// Parse a value from its stored string form.
pub trait Decode: Sized {
    fn decode(raw: &str, shape: Shape) -> Result<Self>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> String {
        (**self).encode()
    }
}

/// Decode `raw` as `T` without a shape request.
pub fn decode<T: Decode>(raw: &str) -> Result<T> {
    T::decode(raw, Shape::any())
}

/// Decode `raw` as `T` honouring `shape`.
pub fn decode_shaped<T: Decode>(raw: &str, shape: Shape) -> Result<T> {
    T::decode(raw, shape)
}

/// True if `raw` is a bracketed vector or matrix literal.
pub fn is_vector_literal(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']')
}
