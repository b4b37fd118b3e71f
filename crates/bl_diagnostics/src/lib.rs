//! BL Diagnostics
//!
//! 统一的诊断系统，为 BL 解析器提供清晰的错误报告。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use bl_diagnostics::{Diagnostic, Emitter};
//!
//! let diag = Diagnostic::error("expected 'THEN', found 'DO'")
//!     .span(10..12)
//!     .with_label("expected 'THEN' here");
//!
//! let emitter = Emitter::without_colors();
//! let text = emitter.render_with_source(&diag, "IF random DO move END IF");
//! assert!(text.contains("expected 'THEN'"));
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod span;

// 重新导出核心类型
pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use span::{Span, SpanExt};
