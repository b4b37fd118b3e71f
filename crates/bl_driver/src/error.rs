//! Driver Errors
//!
//! 驱动层的错误类型，集成统一诊断系统

use bl_diagnostics::{Diagnostic, Emitter};
use bl_syntax::{LexError, ParseError};
use thiserror::Error;

/// 驱动错误
#[derive(Debug, Error)]
pub enum CompileError {
    /// 词法错误
    #[error("Lexical error: {0}")]
    LexError(#[from] LexError),

    /// 语法错误
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    /// IO 错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CompileError {
    /// 转换为诊断信息
    pub fn to_diagnostic(&self, file_path: Option<&str>) -> Diagnostic {
        let diag = match self {
            CompileError::LexError(err) => err.to_diagnostic(),
            CompileError::ParseError(err) => err.to_diagnostic(),
            CompileError::IoError(err) => Diagnostic::error(format!("IO error: {}", err)),
        };

        match file_path {
            Some(path) => diag.with_file(path),
            None => diag,
        }
    }

    /// 格式化错误；有源码时附带源码片段
    pub fn render(&self, emitter: &Emitter, file_path: Option<&str>, source: Option<&str>) -> String {
        let diag = self.to_diagnostic(file_path);
        match source {
            Some(src) => emitter.render_with_source(&diag, src),
            None => emitter.render(&diag),
        }
    }

    /// 使用统一诊断系统输出错误到 stderr
    pub fn emit(&self, emitter: &Emitter, file_path: Option<&str>, source: Option<&str>) {
        eprint!("{}", self.render(emitter, file_path, source));
    }
}

/// 驱动结果类型
pub type CompileResult<T> = Result<T, CompileError>;
