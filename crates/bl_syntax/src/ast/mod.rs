pub mod condition;
pub mod program;
pub mod stmt;

// 重新导出核心类型，方便外部直接使用 bl_syntax::ast::Statement 等
pub use condition::Condition;
pub use program::Program;
pub use stmt::{count_statements, Block, Statement};
