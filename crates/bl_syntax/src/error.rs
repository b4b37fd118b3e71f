//! Syntax Error Types
//!
//! 词法与语法错误定义。语法层只有一类错误：文法不合法。
//! 每个变体对应一种检查失败，遇到第一个错误即停止解析，不做恢复。

use crate::token::{Token, PRIMITIVE_INSTRUCTIONS};
use bl_diagnostics::{Diagnostic, Span};
use thiserror::Error;

/// 解析结果类型
pub type ParseResult<T> = Result<T, ParseError>;

/// 语法错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// 出现了不符合文法的词法单元
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    /// IF / WHILE 后面不是条件
    #[error("'{found}' is not a valid condition")]
    InvalidCondition { found: String, span: Span },

    /// 程序名或指令名不是合法标识符
    #[error("'{found}' is not a valid identifier")]
    InvalidIdentifier { found: String, span: Span },

    /// 试图定义与原语同名的指令
    #[error("cannot redefine primitive instruction '{name}'")]
    PrimitiveRedefinition { name: String, span: Span },

    /// 重复定义指令
    #[error("instruction '{name}' is already defined")]
    DuplicateInstruction { name: String, span: Span },

    /// END 后的名称与开头不一致
    #[error("closing label '{found}' does not match '{expected}'")]
    MismatchedLabel {
        expected: String,
        found: String,
        span: Span,
    },

    /// 程序结束后仍有内容
    #[error("unexpected '{found}' after end of program")]
    TrailingInput { found: String, span: Span },

    /// 词法单元序列在输入结束标记之前耗尽
    #[error("token stream ended without an end-of-input marker")]
    UnexpectedEndOfStream,
}

impl ParseError {
    /// 由实际遇到的词法单元构造 [`ParseError::UnexpectedToken`]
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.lexeme.clone(),
            span: found.span.clone(),
        }
    }

    /// 获取错误发生的位置
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::UnexpectedToken { span, .. } => Some(span),
            Self::InvalidCondition { span, .. } => Some(span),
            Self::InvalidIdentifier { span, .. } => Some(span),
            Self::PrimitiveRedefinition { span, .. } => Some(span),
            Self::DuplicateInstruction { span, .. } => Some(span),
            Self::MismatchedLabel { span, .. } => Some(span),
            Self::TrailingInput { span, .. } => Some(span),
            Self::UnexpectedEndOfStream => None,
        }
    }

    /// 转换为诊断信息
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.to_string());
        if let Some(span) = self.span() {
            diag = diag.span(span.clone());
        }

        match self {
            Self::UnexpectedToken { expected, .. } => {
                diag.with_label(format!("expected {} here", expected))
            }
            Self::InvalidCondition { .. } => diag
                .with_label("not a condition")
                .with_note("conditions look like 'next-is-empty', 'random' or 'less-or-equal'"),
            Self::InvalidIdentifier { .. } => diag
                .with_label("not an identifier")
                .with_note("identifiers start with a letter and contain only letters, digits and '-'"),
            Self::PrimitiveRedefinition { .. } => diag
                .with_label("primitive instruction")
                .with_note(format!(
                    "primitive instructions: {}",
                    PRIMITIVE_INSTRUCTIONS.join(", ")
                )),
            Self::DuplicateInstruction { .. } => diag
                .with_label("second definition starts here")
                .with_help("rename one of the instructions"),
            Self::MismatchedLabel { expected, .. } => diag
                .with_label(format!("expected '{}'", expected))
                .with_help(format!("close the block with 'END {}'", expected)),
            Self::TrailingInput { .. } => diag.with_label("nothing may follow the program"),
            Self::UnexpectedEndOfStream => {
                diag.with_note("the tokenizer must terminate the stream with the end-of-input marker")
            }
        }
    }
}

/// 词法错误：无法识别的输入
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized input '{text}'")]
pub struct LexError {
    pub text: String,
    pub span: Span,
}

impl LexError {
    /// 转换为诊断信息
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string())
            .span(self.span.clone())
            .with_label("unrecognized input")
    }
}
