//! Token Stream
//!
//! 解析器消费的词法单元队列，以及关键字、条件、标识符的分类函数。
//! 词法单元按 FIFO 顺序消费，只允许向前看一个。

use crate::ast::Condition;
use crate::error::{ParseError, ParseResult};
use bl_diagnostics::Span;
use std::collections::VecDeque;

/// 输入结束标记，由分词器追加在词法单元序列末尾
pub const END_OF_INPUT: &str = "### END OF INPUT ###";

/// 语法关键字（大小写敏感）
pub mod keyword {
    pub const PROGRAM: &str = "PROGRAM";
    pub const IS: &str = "IS";
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const INSTRUCTION: &str = "INSTRUCTION";
    pub const IF: &str = "IF";
    pub const THEN: &str = "THEN";
    pub const ELSE: &str = "ELSE";
    pub const WHILE: &str = "WHILE";
    pub const DO: &str = "DO";

    pub const ALL: [&str; 10] = [
        PROGRAM,
        IS,
        BEGIN,
        END,
        INSTRUCTION,
        IF,
        THEN,
        ELSE,
        WHILE,
        DO,
    ];
}

/// 原语指令名称，只能被调用，不能被重新定义
pub const PRIMITIVE_INSTRUCTIONS: [&str; 5] = ["move", "turn-left", "turn-right", "infect", "skip"];

/// 是否为关键字
pub fn is_keyword(text: &str) -> bool {
    keyword::ALL.contains(&text)
}

/// 是否为合法的条件拼写
pub fn is_condition(text: &str) -> bool {
    Condition::ALL
        .into_iter()
        .any(|condition| condition.spelling() == text)
}

/// 是否为原语指令名称
pub fn is_primitive(text: &str) -> bool {
    PRIMITIVE_INSTRUCTIONS.contains(&text)
}

/// 是否为语法上合法的标识符
///
/// 以字母开头，后续为字母、数字或 `-`，且不是关键字或条件。
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let starts_with_letter = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic());
    starts_with_letter
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !is_keyword(text)
        && !is_condition(text)
}

/// 词法单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            lexeme: lexeme.into(),
            span,
        }
    }

    /// 文本是否与 `text` 完全相同
    pub fn is(&self, text: &str) -> bool {
        self.lexeme == text
    }

    /// 是否为输入结束标记
    pub fn is_end_of_input(&self) -> bool {
        self.is(END_OF_INPUT)
    }
}

/// 词法单元队列
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

impl TokenStream {
    /// 由带位置的词法单元构造
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// 由纯文本构造，位置为空
    ///
    /// 不会自动追加 [`END_OF_INPUT`]，调用方需要自行提供。
    pub fn from_lexemes<I, S>(lexemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_tokens(
            lexemes
                .into_iter()
                .map(|lexeme| Token::new(lexeme, Span::default())),
        )
    }

    /// 查看下一个词法单元，不消费
    pub fn peek(&self) -> ParseResult<&Token> {
        self.tokens.front().ok_or(ParseError::UnexpectedEndOfStream)
    }

    /// 下一个词法单元是否为 `text`
    pub fn peek_is(&self, text: &str) -> ParseResult<bool> {
        Ok(self.peek()?.is(text))
    }

    /// 消费下一个词法单元
    pub fn next_token(&mut self) -> ParseResult<Token> {
        self.tokens
            .pop_front()
            .ok_or(ParseError::UnexpectedEndOfStream)
    }

    /// 消费下一个词法单元，并要求它是关键字 `keyword`
    pub fn expect(&mut self, keyword: &str) -> ParseResult<Token> {
        let token = self.next_token()?;
        if token.is(keyword) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(format!("'{}'", keyword), &token))
        }
    }

    /// 要求下一个（未消费的）词法单元是输入结束标记
    pub fn expect_end_of_input(&self) -> ParseResult<()> {
        let token = self.peek()?;
        if token.is_end_of_input() {
            Ok(())
        } else {
            Err(ParseError::TrailingInput {
                found: token.lexeme.clone(),
                span: token.span.clone(),
            })
        }
    }

    /// 剩余的词法单元
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// 剩余词法单元数量
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("go"));
        assert!(is_identifier("turn-left"));
        assert!(is_identifier("find-wall2"));
        assert!(is_identifier("Main"));

        assert!(!is_identifier(""));
        assert!(!is_identifier("2go"));
        assert!(!is_identifier("-go"));
        assert!(!is_identifier("go_home"));
        assert!(!is_identifier("IF"));
        assert!(!is_identifier("WHILE"));
        assert!(!is_identifier("less"));
        assert!(!is_identifier("next-is-empty"));
        assert!(!is_identifier(END_OF_INPUT));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(is_keyword("BEGIN"));
        assert!(!is_keyword("begin"));
        assert!(is_identifier("begin"));
    }

    #[test]
    fn test_is_condition() {
        assert!(is_condition("less"));
        assert!(is_condition("more-or-equal"));
        assert!(is_condition("next-is-not-enemy"));
        assert!(!is_condition("LESS"));
        assert!(!is_condition("move"));
    }

    #[test]
    fn test_is_primitive() {
        for name in ["move", "turn-left", "turn-right", "infect", "skip"] {
            assert!(is_primitive(name));
        }
        assert!(!is_primitive("turnleft"));
        assert!(!is_primitive("MOVE"));
    }

    #[test]
    fn test_stream_is_fifo() {
        let mut tokens = TokenStream::from_lexemes(["IF", "less", END_OF_INPUT]);
        assert_eq!(tokens.len(), 3);
        assert!(tokens.peek_is("IF").unwrap());
        assert_eq!(tokens.next_token().unwrap().lexeme, "IF");
        assert_eq!(tokens.peek().unwrap().lexeme, "less");
        assert_eq!(tokens.next_token().unwrap().lexeme, "less");
        assert!(tokens.expect_end_of_input().is_ok());
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_expect_reports_found_token() {
        let mut tokens = TokenStream::from_tokens([Token::new("DO", 5..7)]);
        let err = tokens.expect("THEN").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: "'THEN'".to_string(),
                found: "DO".to_string(),
                span: 5..7,
            }
        );
    }

    #[test]
    fn test_exhausted_stream_is_an_error() {
        let mut tokens = TokenStream::from_lexemes(Vec::<String>::new());
        assert!(tokens.is_empty());
        assert_eq!(tokens.peek().unwrap_err(), ParseError::UnexpectedEndOfStream);
        assert_eq!(
            tokens.next_token().unwrap_err(),
            ParseError::UnexpectedEndOfStream
        );
    }

    #[test]
    fn test_expect_end_of_input_rejects_trailing_token() {
        let tokens = TokenStream::from_lexemes(["move", END_OF_INPUT]);
        assert!(matches!(
            tokens.expect_end_of_input(),
            Err(ParseError::TrailingInput { found, .. }) if found == "move"
        ));
    }
}
