//! Span - 源码位置信息
//!
//! 表示源代码中的位置范围

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// Span 辅助函数
pub trait SpanExt {
    /// 创建一个新的 Span
    fn new(start: usize, end: usize) -> Self;

    /// 指向某个偏移的零宽 Span（如输入结束位置）
    fn point(offset: usize) -> Self;

    /// 是否为空
    fn is_empty(&self) -> bool;
}

impl SpanExt for Span {
    fn new(start: usize, end: usize) -> Self {
        start..end
    }

    fn point(offset: usize) -> Self {
        offset..offset
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
