use crate::ast::condition::Condition;

/// 语句块：按源码顺序排列的语句，可以为空
pub type Block = Vec<Statement>;

// 语句：出现在指令体和程序体内部
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    // 调用: move / my-instruction (名称在这一层不做解析)
    Call { name: String },

    // 条件: IF c THEN ... END IF
    If { condition: Condition, body: Block },

    // 条件: IF c THEN ... ELSE ... END IF
    IfElse {
        condition: Condition,
        then_body: Block,
        else_body: Block,
    },

    // 循环: WHILE c DO ... END WHILE
    While { condition: Condition, body: Block },
}

impl Statement {
    /// 创建调用语句
    pub fn call(name: impl Into<String>) -> Self {
        Self::Call { name: name.into() }
    }

    /// 语句本身加上所有嵌套语句的数量
    pub fn size(&self) -> usize {
        match self {
            Self::Call { .. } => 1,
            Self::If { body, .. } | Self::While { body, .. } => 1 + count_statements(body),
            Self::IfElse {
                then_body,
                else_body,
                ..
            } => 1 + count_statements(then_body) + count_statements(else_body),
        }
    }
}

/// 统计语句块中（含嵌套）的语句总数
pub fn count_statements(block: &[Statement]) -> usize {
    block.iter().map(Statement::size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_statements() {
        let block = vec![
            Statement::call("move"),
            Statement::While {
                condition: Condition::True,
                body: vec![Statement::IfElse {
                    condition: Condition::Random,
                    then_body: vec![Statement::call("turn-left")],
                    else_body: vec![Statement::call("turn-right"), Statement::call("skip")],
                }],
            },
        ];

        assert_eq!(count_statements(&block), 6);
        assert_eq!(count_statements(&[]), 0);
    }
}
