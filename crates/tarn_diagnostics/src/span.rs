//! Span - 源码位置信息

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// Span 辅助函数
pub trait SpanExt {
    /// 覆盖两个范围的最小范围
    fn merge(&self, other: &Self) -> Self;
}

impl SpanExt for Span {
    fn merge(&self, other: &Self) -> Self {
        self.start.min(other.start)..self.end.max(other.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        assert_eq!((10..20).merge(&(5..12)), 5..20);
        assert_eq!((3..4).merge(&(8..9)), 3..9);
    }
}
