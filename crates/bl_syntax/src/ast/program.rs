use crate::ast::stmt::{count_statements, Block};
use std::collections::BTreeMap;

// 整个程序的数据结构
// context 保存用户定义的指令：名称 -> 指令体
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub name: String,
    pub context: BTreeMap<String, Block>,
    pub body: Block,
}

impl Program {
    /// 按名称查找用户定义的指令
    pub fn instruction(&self, name: &str) -> Option<&Block> {
        self.context.get(name)
    }

    /// 所有指令体与程序体中的语句总数
    pub fn statement_count(&self) -> usize {
        self.context
            .values()
            .map(|body| count_statements(body))
            .sum::<usize>()
            + count_statements(&self.body)
    }
}
