//! Element types stored in list-of-lists containers.
//!
//! `DType` is the runtime tag; `Element` ties a Rust type to its tag and to the
//! "is default" test used by conversions. `CastFrom` is the cast table used when
//! copying a container into another element type.

use num_complex::{Complex32, Complex64};
use num_traits::Zero;
use std::fmt;

/// Runtime tag for the element type of a container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DType {
    U8,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Complex32,
    Complex64,
}

impl DType {
    /// Size of one element in bytes.
    #[inline]
    #[must_use]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::I64 | Self::F64 | Self::Complex32 => 8,
            Self::Complex64 => 16,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex32 | Self::Complex64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Complex32 => "complex32",
            Self::Complex64 => "complex64",
        };
        f.write_str(name)
    }
}

/// A value that can be stored as a terminal element.
///
/// Equality between elements is `PartialEq`; for floats this means `NaN`
/// never compares equal, including against a `NaN` default.
pub trait Element: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    const DTYPE: DType;

    /// The zero representation, used as the default of converted containers.
    fn zero() -> Self;

    /// Whether this value equals the zero representation.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

macro_rules! impl_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$tag;

                #[inline]
                fn zero() -> Self {
                    <$ty as Zero>::zero()
                }
            }
        )*
    };
}

impl_element!(
    u8 => U8,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    Complex32 => Complex32,
    Complex64 => Complex64,
);

/// Cast-copy of one element from a source element type.
pub trait CastFrom<S> {
    fn cast_from(src: &S) -> Self;
}

// Primitive-to-primitive casts follow `as` semantics (saturating for float to int).
macro_rules! impl_cast_primitive {
    (@to $src:ty; $($dst:ty),*) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss
                )]
                fn cast_from(src: &$src) -> Self {
                    *src as $dst
                }
            }
        )*
    };
    ($($src:ty),* $(,)?) => {
        $( impl_cast_primitive!(@to $src; u8, i8, i16, i32, i64, f32, f64); )*
    };
}

impl_cast_primitive!(u8, i8, i16, i32, i64, f32, f64);

macro_rules! impl_cast_to_complex {
    ($($src:ty),* $(,)?) => {
        $(
            impl CastFrom<$src> for Complex32 {
                #[inline]
                #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
                fn cast_from(src: &$src) -> Self {
                    Complex32::new(*src as f32, 0.0)
                }
            }

            impl CastFrom<$src> for Complex64 {
                #[inline]
                #[allow(clippy::cast_lossless)]
                fn cast_from(src: &$src) -> Self {
                    Complex64::new(*src as f64, 0.0)
                }
            }
        )*
    };
}

impl_cast_to_complex!(u8, i8, i16, i32, i64, f32, f64);

impl CastFrom<Complex32> for Complex32 {
    #[inline]
    fn cast_from(src: &Complex32) -> Self {
        *src
    }
}

impl CastFrom<Complex64> for Complex64 {
    #[inline]
    fn cast_from(src: &Complex64) -> Self {
        *src
    }
}

impl CastFrom<Complex32> for Complex64 {
    #[inline]
    fn cast_from(src: &Complex32) -> Self {
        Complex64::new(f64::from(src.re), f64::from(src.im))
    }
}

impl CastFrom<Complex64> for Complex32 {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn cast_from(src: &Complex64) -> Self {
        Complex32::new(src.re as f32, src.im as f32)
    }
}
