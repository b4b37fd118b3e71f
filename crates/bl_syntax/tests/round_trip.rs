//! 格式化输出后重新解析，语法树应保持不变

use bl_syntax::ast::{Condition, Program, Statement};
use bl_syntax::{
    parse_block, parse_program, print_block, print_program, tokenize, ParseError,
};
use std::collections::BTreeMap;

const SOURCE: &str = r#"
# 沿墙行走，遇到敌人就感染
PROGRAM wall-walker IS

  INSTRUCTION find-obstacle IS
    WHILE next-is-empty DO
      move
    END WHILE
  END find-obstacle

  INSTRUCTION turn-around IS
    turn-left
    turn-left
  END turn-around

  INSTRUCTION handle IS
    IF next-is-enemy THEN
      infect
    ELSE
      IF next-is-wall THEN
        turn-right
      ELSE
        IF random THEN turn-around END IF
      END IF
    END IF
  END handle

BEGIN
  WHILE true DO
    find-obstacle
    handle
    skip
  END WHILE
END wall-walker
"#;

fn parse(source: &str) -> Result<Program, ParseError> {
    let mut tokens = tokenize(source).expect("source should tokenize");
    parse_program(&mut tokens)
}

#[test]
fn test_program_round_trip() {
    let program = parse(SOURCE).unwrap();
    assert_eq!(program.name, "wall-walker");
    assert_eq!(program.context.len(), 3);

    let printed = print_program(&program);
    let reparsed = parse(&printed).unwrap();
    assert_eq!(reparsed, program);

    // 规范输出是不动点
    assert_eq!(print_program(&reparsed), printed);
}

#[test]
fn test_constructed_program_round_trip() {
    let mut context = BTreeMap::new();
    context.insert("empty".to_string(), vec![]);
    context.insert(
        "compare".to_string(),
        vec![
            Statement::IfElse {
                condition: Condition::LessOrEqual,
                then_body: vec![],
                else_body: vec![Statement::call("empty")],
            },
            Statement::While {
                condition: Condition::NotEqual,
                body: vec![Statement::If {
                    condition: Condition::MoreOrEqual,
                    body: vec![Statement::call("skip")],
                }],
            },
        ],
    );
    let program = Program {
        name: "compare-all".to_string(),
        context,
        body: vec![Statement::call("compare"), Statement::call("empty")],
    };

    assert_eq!(parse(&print_program(&program)).unwrap(), program);
}

#[test]
fn test_block_round_trip() {
    let block = vec![
        Statement::call("move"),
        Statement::While {
            condition: Condition::Equal,
            body: vec![],
        },
        Statement::If {
            condition: Condition::NextIsNotFriend,
            body: vec![Statement::call("infect")],
        },
    ];

    let mut tokens = tokenize(&print_block(&block, 0)).unwrap();
    assert_eq!(parse_block(&mut tokens).unwrap(), block);
    assert!(tokens.expect_end_of_input().is_ok());
}

#[test]
fn test_error_spans_point_into_source() {
    let source = "PROGRAM p IS\nBEGIN\n  move\nEND q\n";
    let err = parse(source).unwrap_err();

    let span = err.span().cloned().unwrap();
    assert_eq!(&source[span], "q");
}

#[test]
fn test_missing_closing_label_points_at_end_of_input() {
    let source = "PROGRAM p IS BEGIN END";
    let err = parse(source).unwrap_err();

    assert!(matches!(&err, ParseError::MismatchedLabel { expected, .. } if expected == "p"));
    assert_eq!(err.span(), Some(&(source.len()..source.len())));
}
