//! Pretty Printer
//!
//! 将语法树输出为规范格式的 BL 源码，每层缩进两个空格。
//! 输出可以被重新分词、解析，得到结构相同的语法树。

use crate::ast::{Program, Statement};
use crate::token::keyword::{BEGIN, DO, ELSE, END, IF, INSTRUCTION, IS, PROGRAM, THEN, WHILE};
use std::fmt;

/// 每层缩进的空格数
const INDENT: usize = 2;

/// 输出整个程序
pub fn print_program(program: &Program) -> String {
    let mut printer = Printer::default();
    printer.program(program);
    printer.out
}

/// 输出语句块，`indent` 为起始缩进（空格数）
pub fn print_block(block: &[Statement], indent: usize) -> String {
    let mut printer = Printer::default();
    printer.block(block, indent);
    printer.out
}

/// 输出单条语句
pub fn print_statement(statement: &Statement, indent: usize) -> String {
    let mut printer = Printer::default();
    printer.statement(statement, indent);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn line(&mut self, indent: usize, text: &str) {
        for _ in 0..indent {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn program(&mut self, program: &Program) {
        self.line(0, &format!("{} {} {}", PROGRAM, program.name, IS));
        self.blank();

        for (name, body) in &program.context {
            self.line(INDENT, &format!("{} {} {}", INSTRUCTION, name, IS));
            self.block(body, 2 * INDENT);
            self.line(INDENT, &format!("{} {}", END, name));
            self.blank();
        }

        self.line(0, BEGIN);
        self.block(&program.body, INDENT);
        self.line(0, &format!("{} {}", END, program.name));
    }

    fn block(&mut self, block: &[Statement], indent: usize) {
        for statement in block {
            self.statement(statement, indent);
        }
    }

    fn statement(&mut self, statement: &Statement, indent: usize) {
        match statement {
            Statement::Call { name } => self.line(indent, name),
            Statement::If { condition, body } => {
                self.line(indent, &format!("{} {} {}", IF, condition, THEN));
                self.block(body, indent + INDENT);
                self.line(indent, &format!("{} {}", END, IF));
            }
            Statement::IfElse {
                condition,
                then_body,
                else_body,
            } => {
                self.line(indent, &format!("{} {} {}", IF, condition, THEN));
                self.block(then_body, indent + INDENT);
                self.line(indent, ELSE);
                self.block(else_body, indent + INDENT);
                self.line(indent, &format!("{} {}", END, IF));
            }
            Statement::While { condition, body } => {
                self.line(indent, &format!("{} {} {}", WHILE, condition, DO));
                self.block(body, indent + INDENT);
                self.line(indent, &format!("{} {}", END, WHILE));
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_program(self))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_statement(self, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Condition;
    use std::collections::BTreeMap;

    #[test]
    fn test_print_nested_statement() {
        let statement = Statement::While {
            condition: Condition::True,
            body: vec![Statement::IfElse {
                condition: Condition::NextIsEmpty,
                then_body: vec![Statement::call("move")],
                else_body: vec![],
            }],
        };

        let expected = "\
WHILE true DO
  IF next-is-empty THEN
    move
  ELSE
  END IF
END WHILE
";
        assert_eq!(print_statement(&statement, 0), expected);
        assert_eq!(statement.to_string(), expected);
    }

    #[test]
    fn test_print_block_with_indent() {
        let block = vec![Statement::call("move"), Statement::call("infect")];
        assert_eq!(print_block(&block, 4), "    move\n    infect\n");
        assert_eq!(print_block(&[], 4), "");
    }

    #[test]
    fn test_print_program() {
        let mut context = BTreeMap::new();
        context.insert(
            "step".to_string(),
            vec![Statement::If {
                condition: Condition::Less,
                body: vec![Statement::call("move")],
            }],
        );
        let program = Program {
            name: "walker".to_string(),
            context,
            body: vec![Statement::call("step")],
        };

        let expected = "\
PROGRAM walker IS

  INSTRUCTION step IS
    IF less THEN
      move
    END IF
  END step

BEGIN
  step
END walker
";
        assert_eq!(print_program(&program), expected);
    }

    #[test]
    fn test_print_empty_program() {
        let program = Program {
            name: "p".to_string(),
            ..Program::default()
        };
        assert_eq!(program.to_string(), "PROGRAM p IS\n\nBEGIN\nEND p\n");
    }
}
