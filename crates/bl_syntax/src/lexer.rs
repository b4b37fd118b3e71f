//! Lexer
//!
//! 将 BL 源码切分为词法单元，并在末尾追加输入结束标记。
//! 关键字、条件和标识符都是"单词"，由解析器负责区分。

use crate::error::LexError;
use crate::token::{Token, TokenStream, END_OF_INPUT};
use bl_diagnostics::{Span, SpanExt};
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[a-zA-Z][a-zA-Z0-9-]*", |lex| lex.slice().to_string())]
    Word(String),

    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
}

/// 分词
///
/// 遇到无法识别的字符立即返回 [`LexError`]。
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    let mut tokens = Vec::new();

    for (result, span) in RawToken::lexer(source).spanned() {
        match result {
            Ok(RawToken::Word(word)) => tokens.push(Token::new(word, span)),
            Ok(RawToken::Comment) => {}
            Err(()) => {
                return Err(LexError {
                    text: source[span.clone()].to_string(),
                    span,
                })
            }
        }
    }

    tokens.push(Token::new(END_OF_INPUT, Span::point(source.len())));
    Ok(TokenStream::from_tokens(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .iter()
            .map(|token| token.lexeme.clone())
            .collect()
    }

    #[test]
    fn test_lexer_basic() {
        assert_eq!(
            lexemes("IF next-is-wall THEN\n  turn-left\nEND IF"),
            vec!["IF", "next-is-wall", "THEN", "turn-left", "END", "IF", END_OF_INPUT]
        );
    }

    #[test]
    fn test_lexer_skips_comments() {
        assert_eq!(
            lexemes("# leading comment\nmove # trailing\nskip"),
            vec!["move", "skip", END_OF_INPUT]
        );
    }

    #[test]
    fn test_empty_source_yields_only_sentinel() {
        assert_eq!(lexemes("  \n\t"), vec![END_OF_INPUT]);
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("PROGRAM p").unwrap();
        let spans: Vec<_> = tokens.iter().map(|token| token.span.clone()).collect();
        assert_eq!(spans, vec![0..7, 8..9, 9..9]);
    }

    #[test]
    fn test_unrecognized_input() {
        let err = tokenize("move\n@ skip").unwrap_err();
        assert_eq!(err.text, "@");
        assert_eq!(err.span, 5..6);
    }
}
