//! Program Parser
//!
//! 顶层解析：程序头、指令表、程序体。

use super::stmt::parse_block;
use crate::ast::{Block, Program};
use crate::error::{ParseError, ParseResult};
use crate::token::keyword::{BEGIN, END, INSTRUCTION, IS, PROGRAM};
use crate::token::{is_identifier, is_primitive, Token, TokenStream};
use std::collections::BTreeMap;
use tracing::debug;

/// 解析一条指令定义
///
/// `INSTRUCTION name IS ... END name`，返回指令名和指令体。
/// 指令名不能是原语指令名，结尾名称必须与开头一致。
pub fn parse_instruction(tokens: &mut TokenStream) -> ParseResult<(String, Block)> {
    tokens.expect(INSTRUCTION)?;
    let name = expect_identifier(tokens)?;
    if is_primitive(&name.lexeme) {
        return Err(ParseError::PrimitiveRedefinition {
            name: name.lexeme,
            span: name.span,
        });
    }

    tokens.expect(IS)?;
    let body = parse_block(tokens)?;
    tokens.expect(END)?;
    expect_closing_label(tokens, &name.lexeme)?;

    debug!(name = %name.lexeme, statements = body.len(), "parsed instruction");
    Ok((name.lexeme, body))
}

/// 解析整个程序
///
/// `PROGRAM name IS <指令>* BEGIN ... END name`，之后必须紧跟输入结束标记。
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_program(tokens: &mut TokenStream) -> ParseResult<Program> {
    tokens.expect(PROGRAM)?;
    let name = expect_identifier(tokens)?.lexeme;
    tokens.expect(IS)?;

    let mut context = BTreeMap::new();
    while tokens.peek_is(INSTRUCTION)? {
        let start = tokens.peek()?.span.clone();
        let (instruction, body) = parse_instruction(tokens)?;
        // 原语名称在 parse_instruction 中已被拒绝，这里只需检查重复
        if context.contains_key(&instruction) {
            return Err(ParseError::DuplicateInstruction {
                name: instruction,
                span: start,
            });
        }
        context.insert(instruction, body);
    }

    tokens.expect(BEGIN)?;
    let body = parse_block(tokens)?;
    tokens.expect(END)?;
    expect_closing_label(tokens, &name)?;
    tokens.expect_end_of_input()?;

    debug!(program = %name, instructions = context.len(), "parsed program");
    Ok(Program {
        name,
        context,
        body,
    })
}

fn expect_identifier(tokens: &mut TokenStream) -> ParseResult<Token> {
    let token = tokens.next_token()?;
    if is_identifier(&token.lexeme) {
        Ok(token)
    } else {
        Err(ParseError::InvalidIdentifier {
            found: token.lexeme,
            span: token.span,
        })
    }
}

fn expect_closing_label(tokens: &mut TokenStream, name: &str) -> ParseResult<()> {
    let label = tokens.next_token()?;
    if label.is(name) {
        Ok(())
    } else {
        Err(ParseError::MismatchedLabel {
            expected: name.to_string(),
            found: label.lexeme,
            span: label.span,
        })
    }
}
