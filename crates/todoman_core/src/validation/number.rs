//! Numeric kinds accepted by the comparison helpers.

/// Ordered numeric type with a zero value.
///
/// Implemented for every primitive integer and float width so one generic
/// routine covers all of them.
pub trait Number: Copy + PartialOrd {
    const ZERO: Self;
}

/// Integral subset of [`Number`], used by range checks on whole values.
pub trait Integer: Number {
    /// Widens to `i128`; `None` only for `u128` values above `i128::MAX`.
    fn to_i128(self) -> Option<i128>;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0;
            }

            impl Integer for $ty {
                fn to_i128(self) -> Option<i128> {
                    i128::try_from(self).ok()
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0.0;
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);
