use std::fmt::Debug;
use std::fmt::Display;

use num::Num;

/// A numeric representation the activation functions can be instantiated over.
pub trait Element
where
    Self: Debug + Display + Clone + Copy + PartialOrd + Num + 'static,
{
    /// Name printed in the first column of the table.
    const NAME: &'static str;

    /// Convert a 64-bit float into this representation.
    ///
    /// Integers truncate toward zero into an `i64` (saturating, NaN becomes 0)
    /// and then wrap to the target width in two's complement, so `-2.0` is
    /// `254` as a `u8`. Floats use a plain `as` conversion.
    ///
    /// The `i64` step bounds the usable range: for `u64` and `usize`, values at
    /// or above 2^63 saturate to `i64::MAX` instead of converting directly.
    fn from_f64(value: f64) -> Self;

    /// Widen into a 64-bit float.
    fn as_f64(self) -> f64;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const NAME: &'static str = stringify!($t);

                #[inline(always)]
                fn from_f64(value: f64) -> Self {
                    // saturates outside the i64 range, then wraps
                    value as i64 as $t
                }

                #[inline(always)]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const NAME: &'static str = stringify!($t);

                #[inline(always)]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float!(f32, f64);
