//! Diagnostic - 诊断信息
//!
//! 表示一个语法错误及其附加信息

use crate::span::Span;

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 主要消息
    pub message: String,
    /// 源码位置（可选）
    pub span: Option<Span>,
    /// 标注在源码位置上的短说明
    pub label: Option<String>,
    /// 源文件路径（可选）
    pub file: Option<String>,
    /// 补充注释
    pub notes: Vec<String>,
    /// 修复建议
    pub help: Option<String>,
}

impl Diagnostic {
    /// 创建错误诊断
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
            label: None,
            file: None,
            notes: Vec::new(),
            help: None,
        }
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 设置位置标注
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// 设置源文件
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// 设置建议
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
