use num::{PrimInt, Saturating, Unsigned};

/// 追加回数カウンタの幅
pub trait Count: PrimInt + Unsigned + Saturating {
    const ZERO: Self;
    /// 幅を超える値は最大値に丸める
    fn saturating_from_usize(n: usize) -> Self;
}

impl Count for usize {
    const ZERO: Self = 0usize;
    fn saturating_from_usize(n: usize) -> Self {
        n
    }
}

impl Count for u64 {
    const ZERO: Self = 0u64;
    fn saturating_from_usize(n: usize) -> Self {
        Self::try_from(n).unwrap_or(Self::MAX)
    }
}

impl Count for u32 {
    const ZERO: Self = 0u32;
    fn saturating_from_usize(n: usize) -> Self {
        Self::try_from(n).unwrap_or(Self::MAX)
    }
}

impl Count for u16 {
    const ZERO: Self = 0u16;
    fn saturating_from_usize(n: usize) -> Self {
        Self::try_from(n).unwrap_or(Self::MAX)
    }
}

impl Count for u8 {
    const ZERO: Self = 0u8;
    fn saturating_from_usize(n: usize) -> Self {
        Self::try_from(n).unwrap_or(Self::MAX)
    }
}
