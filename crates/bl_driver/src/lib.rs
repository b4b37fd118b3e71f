//! BL Driver
//!
//! 驱动模块，串联分词、解析和格式化输出

pub mod error;

pub use bl_diagnostics::Emitter;
pub use error::{CompileError, CompileResult};

use bl_syntax::ast::{Program, Statement};
use bl_syntax::{parse_program, parse_statement, tokenize, TokenStream};
use std::path::Path;
use tracing::debug;

/// `check` 命令的统计结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// 程序名
    pub name: String,
    /// 用户定义的指令数量
    pub instructions: usize,
    /// 语句总数（含嵌套、含指令体）
    pub statements: usize,
}

impl Summary {
    pub fn of(program: &Program) -> Self {
        Self {
            name: program.name.clone(),
            instructions: program.context.len(),
            statements: program.statement_count(),
        }
    }
}

/// 读取源文件
pub fn load_source(path: impl AsRef<Path>) -> CompileResult<String> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading source");
    Ok(std::fs::read_to_string(path)?)
}

/// 分词
pub fn tokenize_source(source: &str) -> CompileResult<TokenStream> {
    Ok(tokenize(source)?)
}

/// 解析完整程序
///
/// # Example
/// ```
/// use bl_driver::parse_source;
///
/// let program = parse_source("PROGRAM p IS BEGIN move END p").unwrap();
/// assert_eq!(program.name, "p");
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse_source(source: &str) -> CompileResult<Program> {
    let mut tokens = tokenize_source(source)?;
    Ok(parse_program(&mut tokens)?)
}

/// 解析单条语句，之后只能是输入结束
pub fn parse_statement_source(source: &str) -> CompileResult<Statement> {
    let mut tokens = tokenize_source(source)?;
    let statement = parse_statement(&mut tokens)?;
    tokens.expect_end_of_input()?;
    Ok(statement)
}

/// 从文件解析完整程序
pub fn parse_file(path: impl AsRef<Path>) -> CompileResult<Program> {
    let source = load_source(path)?;
    parse_source(&source)
}

/// 从文件解析单条语句
pub fn parse_statement_file(path: impl AsRef<Path>) -> CompileResult<Statement> {
    let source = load_source(path)?;
    parse_statement_source(&source)
}

/// 解析并统计程序
pub fn check_source(source: &str) -> CompileResult<Summary> {
    parse_source(source).map(|program| Summary::of(&program))
}
