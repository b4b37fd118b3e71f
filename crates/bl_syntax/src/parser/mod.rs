//! Parser Module
//!
//! 递归下降解析器。所有解析函数共享同一个 [`TokenStream`]，
//! 只向前看一个词法单元，不回溯；遇到第一个文法错误即返回。
//!
//! [`TokenStream`]: crate::token::TokenStream

pub mod program;
pub mod stmt;


pub use program::{parse_instruction, parse_program};
pub use stmt::{parse_block, parse_statement};
