//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出。有源码时借助 ariadne 画出源码片段，
//! 否则退化为单行消息加注释。

use crate::diagnostic::Diagnostic;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use colored::*;
use std::fmt::Write as _;

/// 没有文件名时在报告中使用的源标识
const ANONYMOUS_SOURCE: &str = "<input>";

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出单个诊断到 stderr
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }

    /// 输出带源码片段的诊断到 stderr
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        eprint!("{}", self.render_with_source(diagnostic, source));
    }

    /// 格式化诊断（不含源码片段）
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        if self.use_colors {
            self.render_colored(diagnostic)
        } else {
            self.render_plain(diagnostic)
        }
    }

    /// 格式化诊断，附带源码片段
    ///
    /// 诊断没有位置、或位置超出源码范围时，退化为 [`Emitter::render`]。
    pub fn render_with_source(&self, diagnostic: &Diagnostic, source: &str) -> String {
        let span = match &diagnostic.span {
            Some(span) if span.end <= source.len() => span.clone(),
            _ => return self.render(diagnostic),
        };
        let file = diagnostic.file.as_deref().unwrap_or(ANONYMOUS_SOURCE);

        let mut label = Label::new((file, span.clone()));
        if let Some(text) = &diagnostic.label {
            label = label.with_message(text);
        }
        if self.use_colors {
            label = label.with_color(Color::Red);
        }

        let mut report = Report::build(ReportKind::Error, file, span.start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(label);
        for note in &diagnostic.notes {
            report = report.with_note(note);
        }
        if let Some(help) = &diagnostic.help {
            report = report.with_help(help);
        }

        let mut buf = Vec::new();
        match report.finish().write((file, Source::from(source)), &mut buf) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.render(diagnostic),
        }
    }

    /// 带颜色的诊断
    fn render_colored(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}: {}",
            "error".red().bold(),
            diagnostic.message.bold()
        );

        if let Some(location) = location(diagnostic) {
            let _ = writeln!(out, "  {} {}", "-->".blue().bold(), location);
        }

        for note in &diagnostic.notes {
            let _ = writeln!(
                out,
                "  {} {}",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            );
        }

        if let Some(help) = &diagnostic.help {
            let _ = writeln!(
                out,
                "  {} {}",
                "=".green().bold(),
                format!("help: {}", help).green()
            );
        }
        out
    }

    /// 纯文本诊断
    fn render_plain(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "error: {}", diagnostic.message);

        if let Some(location) = location(diagnostic) {
            let _ = writeln!(out, "  --> {}", location);
        }

        for note in &diagnostic.notes {
            let _ = writeln!(out, "  = note: {}", note);
        }

        if let Some(help) = &diagnostic.help {
            let _ = writeln!(out, "  = help: {}", help);
        }
        out
    }
}

/// `file:start..end` 形式的位置描述
fn location(diagnostic: &Diagnostic) -> Option<String> {
    match (&diagnostic.file, &diagnostic.span) {
        (Some(file), Some(span)) => Some(format!("{}:{}..{}", file, span.start, span.end)),
        (Some(file), None) => Some(file.clone()),
        (None, Some(span)) => Some(format!("{}..{}", span.start, span.end)),
        (None, None) => None,
    }
}
