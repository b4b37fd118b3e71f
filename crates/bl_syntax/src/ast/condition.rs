//! Condition - 条件
//!
//! IF / WHILE 后面跟随的条件。每个变体对应唯一的小写连字符拼写。

use std::fmt;

/// 条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    // ============ 传感器条件 ============
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsWall,
    NextIsNotWall,
    NextIsFriend,
    NextIsNotFriend,
    NextIsEnemy,
    NextIsNotEnemy,
    Random,
    True,

    // ============ 比较条件 ============
    Less,
    LessOrEqual,
    Equal,
    NotEqual,
    More,
    MoreOrEqual,
}

impl Condition {
    /// 全部条件，按声明顺序
    pub const ALL: [Condition; 16] = [
        Condition::NextIsEmpty,
        Condition::NextIsNotEmpty,
        Condition::NextIsWall,
        Condition::NextIsNotWall,
        Condition::NextIsFriend,
        Condition::NextIsNotFriend,
        Condition::NextIsEnemy,
        Condition::NextIsNotEnemy,
        Condition::Random,
        Condition::True,
        Condition::Less,
        Condition::LessOrEqual,
        Condition::Equal,
        Condition::NotEqual,
        Condition::More,
        Condition::MoreOrEqual,
    ];

    /// 源码中的拼写
    pub fn spelling(self) -> &'static str {
        match self {
            Self::NextIsEmpty => "next-is-empty",
            Self::NextIsNotEmpty => "next-is-not-empty",
            Self::NextIsWall => "next-is-wall",
            Self::NextIsNotWall => "next-is-not-wall",
            Self::NextIsFriend => "next-is-friend",
            Self::NextIsNotFriend => "next-is-not-friend",
            Self::NextIsEnemy => "next-is-enemy",
            Self::NextIsNotEnemy => "next-is-not-enemy",
            Self::Random => "random",
            Self::True => "true",
            Self::Less => "less",
            Self::LessOrEqual => "less-or-equal",
            Self::Equal => "equal",
            Self::NotEqual => "not-equal",
            Self::More => "more",
            Self::MoreOrEqual => "more-or-equal",
        }
    }

    /// 按拼写查找条件（忽略大小写）
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|condition| condition.spelling() == normalized)
    }

    /// 将已校验过的条件拼写转换为 [`Condition`]
    ///
    /// 调用方必须先用 [`crate::token::is_condition`] 校验 `text`；
    /// 传入非条件拼写属于调用方违约，会 panic。
    pub fn from_spelling(text: &str) -> Self {
        debug_assert!(
            crate::token::is_condition(text),
            "violation of: '{}' is a condition string",
            text
        );
        match Self::parse(text) {
            Some(condition) => condition,
            None => panic!("violation of: '{}' is a condition string", text),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}
