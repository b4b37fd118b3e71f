//! Statement Parser
//!
//! 语句解析：调用、IF、IF-ELSE、WHILE，以及语句块。
//! 语句与语句块互相递归。

use crate::ast::{Block, Condition, Statement};
use crate::error::{ParseError, ParseResult};
use crate::token::keyword::{DO, ELSE, END, IF, THEN, WHILE};
use crate::token::{is_condition, is_identifier, Token, TokenStream};
use tracing::trace;

/// 解析一条语句
///
/// 根据下一个词法单元分派（只查看，不消费）：
/// `WHILE`、`IF` 或标识符，其他内容都是错误。
pub fn parse_statement(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let front = tokens.peek()?;
    if front.is(WHILE) {
        parse_while(tokens)
    } else if front.is(IF) {
        parse_if(tokens)
    } else if is_identifier(&front.lexeme) {
        parse_call(tokens)
    } else {
        Err(ParseError::unexpected("identifier, 'IF' or 'WHILE'", front))
    }
}

/// 解析语句块
///
/// 不断解析语句，直到下一个词法单元是 `END`、`ELSE` 或输入结束标记。
/// 终止符留给调用方消费。语句块可以为空。
pub fn parse_block(tokens: &mut TokenStream) -> ParseResult<Block> {
    let mut block = Block::new();
    while !is_block_terminator(tokens.peek()?) {
        let statement = parse_statement(tokens)?;
        trace!(index = block.len(), "parsed statement");
        block.push(statement);
    }
    Ok(block)
}

fn is_block_terminator(token: &Token) -> bool {
    token.is(END) || token.is(ELSE) || token.is_end_of_input()
}

/// IF c THEN ... [ELSE ...] END IF
fn parse_if(tokens: &mut TokenStream) -> ParseResult<Statement> {
    tokens.expect(IF)?;
    let condition = parse_condition(tokens)?;
    tokens.expect(THEN)?;
    let then_body = parse_block(tokens)?;

    let terminal = tokens.next_token()?;
    if terminal.is(ELSE) {
        let else_body = parse_block(tokens)?;
        tokens.expect(END)?;
        tokens.expect(IF)?;
        Ok(Statement::IfElse {
            condition,
            then_body,
            else_body,
        })
    } else if terminal.is(END) {
        tokens.expect(IF)?;
        Ok(Statement::If {
            condition,
            body: then_body,
        })
    } else {
        Err(ParseError::unexpected("'ELSE' or 'END'", &terminal))
    }
}

/// WHILE c DO ... END WHILE
fn parse_while(tokens: &mut TokenStream) -> ParseResult<Statement> {
    tokens.expect(WHILE)?;
    let condition = parse_condition(tokens)?;
    tokens.expect(DO)?;
    let body = parse_block(tokens)?;
    tokens.expect(END)?;
    tokens.expect(WHILE)?;
    Ok(Statement::While { condition, body })
}

/// 调用语句，不检查被调用的指令是否存在
fn parse_call(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let name = tokens.next_token()?;
    debug_assert!(is_identifier(&name.lexeme));
    Ok(Statement::Call { name: name.lexeme })
}

fn parse_condition(tokens: &mut TokenStream) -> ParseResult<Condition> {
    let token = tokens.next_token()?;
    if !is_condition(&token.lexeme) {
        return Err(ParseError::InvalidCondition {
            found: token.lexeme,
            span: token.span,
        });
    }
    Ok(Condition::from_spelling(&token.lexeme))
}
