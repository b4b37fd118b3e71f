//! BL Syntax
//!
//! BL 语言的前端：分词、语法树、递归下降解析和格式化输出。
//!
//! # 示例
//!
//! ```rust
//! use bl_syntax::ast::{Condition, Statement};
//! use bl_syntax::{parse_program, tokenize};
//!
//! let mut tokens = tokenize("PROGRAM p IS BEGIN IF less THEN go END IF END p").unwrap();
//! let program = parse_program(&mut tokens).unwrap();
//!
//! assert_eq!(program.name, "p");
//! assert_eq!(
//!     program.body,
//!     vec![Statement::If {
//!         condition: Condition::Less,
//!         body: vec![Statement::call("go")],
//!     }]
//! );
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod token;

// 重新导出核心类型
pub use ast::{Block, Condition, Program, Statement};
pub use error::{LexError, ParseError, ParseResult};
pub use lexer::tokenize;
pub use parser::{parse_block, parse_instruction, parse_program, parse_statement};
pub use pretty::{print_block, print_program, print_statement};
pub use token::{Token, TokenStream, END_OF_INPUT};
