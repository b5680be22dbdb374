//! # Integer Genomes
//!
//! The [`IntegerGenome`] trait is the shared bound of the built-in operators
//! that work on an integer genome's bit representation or value range.
//!
//! The operators view a value as an unsigned offset from the range's lower
//! bound, carried in a `u64`. All primitive integer types up to 64 bits
//! implement the trait; `u128` and `i128` do not fit the offset carrier.

use std::fmt::{Debug, Display};
use std::ops::{BitAnd, BitOr, Not};

use rand::distributions::uniform::SampleUniform;

/// Primitive integer types the built-in bit-level operators accept.
pub trait IntegerGenome:
    Copy
    + Ord
    + Debug
    + Display
    + Send
    + Sync
    + SampleUniform
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    /// The type's bit width.
    const BITS: u32;

    /// `self - min` as an unsigned offset, or `None` when the distance does
    /// not fit the type's representable span.
    fn checked_span(self, min: Self) -> Option<u64>;

    /// `self - min` as an unsigned offset. Callers guarantee `min <= self`.
    fn offset_from(self, min: Self) -> u64;

    /// `min + offset`, truncating the offset to the type's width.
    fn with_offset(min: Self, offset: u64) -> Self;

    /// The low bits of `mask`, reinterpreted in this type.
    fn from_bits(mask: u64) -> Self;

    /// `self + step`, or `None` on overflow.
    fn step_up(self, step: Self) -> Option<Self>;

    /// `self - step`, or `None` on overflow.
    fn step_down(self, step: Self) -> Option<Self>;

    /// Whether the value is below zero. Always `false` for unsigned types.
    fn is_negative(self) -> bool;
}

macro_rules! integer_genome_impl {
    ($($Int:ty)+) => {
        $(
            impl IntegerGenome for $Int {
                const BITS: u32 = <$Int>::BITS;

                fn checked_span(self, min: Self) -> Option<u64> {
                    self.checked_sub(min).map(|span| span as u64)
                }

                fn offset_from(self, min: Self) -> u64 {
                    self.wrapping_sub(min) as u64
                }

                fn with_offset(min: Self, offset: u64) -> Self {
                    min.wrapping_add(offset as $Int)
                }

                fn from_bits(mask: u64) -> Self {
                    mask as $Int
                }

                fn step_up(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                fn step_down(self, step: Self) -> Option<Self> {
                    self.checked_sub(step)
                }

                #[allow(unused_comparisons)]
                fn is_negative(self) -> bool {
                    self < 0
                }
            }
        )+
    };
}

integer_genome_impl!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize);
