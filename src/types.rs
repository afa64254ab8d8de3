//! 通用类型定义

use std::fmt::Debug;
use std::ops::{Add, Neg, Sub};

/// 顶点 ID，顶点编号为 `0..n`
pub type VertexId = usize;

/// 边权 / 容量的数值类型
///
/// 无穷大不占用数值域，而是用 `Option<W>` 的 `None` 表示。
pub trait Weight: Copy + Ord + Debug + Add<Output = Self> + Sub<Output = Self> {
    const ZERO: Self;
    const ONE: Self;

    /// 饱和加法，用于负环输入下的 Floyd-Warshall
    fn saturating_add(self, other: Self) -> Self;

    fn saturating_sub(self, other: Self) -> Self;

    /// 溢出时返回 `None`
    fn checked_add(self, other: Self) -> Option<Self>;

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn saturating_add(self, other: Self) -> Self {
                    <$t>::saturating_add(self, other)
                }

                #[inline]
                fn saturating_sub(self, other: Self) -> Self {
                    <$t>::saturating_sub(self, other)
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// 有符号权重
///
/// 流量矩阵是反对称的（`flow[(v, u)] == -flow[(u, v)]`），
/// 因此最大流只接受有符号的容量类型。
pub trait SignedWeight: Weight + Neg<Output = Self> {}

impl SignedWeight for i8 {}
impl SignedWeight for i16 {}
impl SignedWeight for i32 {}
impl SignedWeight for i64 {}
impl SignedWeight for i128 {}
impl SignedWeight for isize {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_constants() {
        assert_eq!(<i64 as Weight>::ZERO, 0);
        assert_eq!(<u32 as Weight>::ONE, 1);
        assert!((-3i32).is_negative());
        assert!(!0u8.is_negative());
    }

    #[test]
    fn test_saturating_add() {
        assert_eq!(Weight::saturating_add(i8::MIN, -1), i8::MIN);
        assert_eq!(Weight::saturating_add(u8::MAX, 1), u8::MAX);
        assert_eq!(Weight::saturating_sub(i8::MAX, -1), i8::MAX);
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(Weight::checked_add(200u8, 55), Some(255));
        assert_eq!(Weight::checked_add(200u8, 100), None);
        assert_eq!(Weight::checked_add(i16::MIN, -1), None);
    }

    fn negate<W: SignedWeight>(w: W) -> W {
        -w
    }

    #[test]
    fn test_signed_weight() {
        assert_eq!(negate(5i32), -5);
        assert_eq!(negate(-7i64), 7);
    }
}
