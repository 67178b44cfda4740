//! Token Spellings
//!
//! Every keyword, delimiter and operator the printer can emit. The printer
//! treats these as opaque symbols; only their `Display` spelling matters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved words and fixed delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Bang,      // !
    Amp,       // &
    Semicolon, // ;
    DSemi,     // ;;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBrack,    // [
    RBrack,    // ]
    Dollar,    // $
    Hash,      // #
    Slash,     // /
    BQuote,    // `
    SQuote,    // '
    DQuote,    // "
    CmdIn,     // <(
    If,
    Then,
    Elif,
    Else,
    Fi,
    While,
    Until,
    Do,
    Done,
    For,
    In,
    Case,
    Esac,
    Function,
    Local,
    Declare,
    Let,
    Eval,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bang => "!",
            Self::Amp => "&",
            Self::Semicolon => ";",
            Self::DSemi => ";;",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBrack => "[",
            Self::RBrack => "]",
            Self::Dollar => "$",
            Self::Hash => "#",
            Self::Slash => "/",
            Self::BQuote => "`",
            Self::SQuote => "'",
            Self::DQuote => "\"",
            Self::CmdIn => "<(",
            Self::If => "if",
            Self::Then => "then",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::Fi => "fi",
            Self::While => "while",
            Self::Until => "until",
            Self::Do => "do",
            Self::Done => "done",
            Self::For => "for",
            Self::In => "in",
            Self::Case => "case",
            Self::Esac => "esac",
            Self::Function => "function",
            Self::Local => "local",
            Self::Declare => "declare",
            Self::Let => "let",
            Self::Eval => "eval",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// REDIRECTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedirOperator {
    Less,      // <
    Great,     // >
    DGreat,    // >>
    GreatAnd,  // >&
    LessAnd,   // <&
    LessGreat, // <>
    Clobber,   // >|
    AndGreat,  // &>
    AndDGreat, // &>>
    TLess,     // <<<
    DLess,     // <<
    DLessDash, // <<-
}

impl RedirOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Great => ">",
            Self::DGreat => ">>",
            Self::GreatAnd => ">&",
            Self::LessAnd => "<&",
            Self::LessGreat => "<>",
            Self::Clobber => ">|",
            Self::AndGreat => "&>",
            Self::AndDGreat => "&>>",
            Self::TLess => "<<<",
            Self::DLess => "<<",
            Self::DLessDash => "<<-",
        }
    }
}

impl fmt::Display for RedirOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// COMMAND LISTS
// =============================================================================

/// Operators joining two statements: pipelines and and-or lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinCmdOperator {
    AndAnd,  // &&
    OrOr,    // ||
    Pipe,    // |
    PipeAll, // |&
}

impl BinCmdOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Pipe => "|",
            Self::PipeAll => "|&",
        }
    }
}

impl fmt::Display for BinCmdOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ARITHMETIC
// =============================================================================

/// Operators of arithmetic expressions, both unary and binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOperator {
    Not,    // !
    BitNot, // ~
    Inc,    // ++
    Dec,    // --
    Add,    // +
    Sub,    // -
    Mul,    // *
    Quo,    // /
    Rem,    // %
    Pow,    // **
    Shl,    // <<
    Shr,    // >>
    Lss,    // <
    Leq,    // <=
    Gtr,    // >
    Geq,    // >=
    Eql,    // ==
    Neq,    // !=
    BitAnd, // &
    BitOr,  // |
    Xor,    // ^
    AndAnd, // &&
    OrOr,   // ||
    Comma,  // ,
    Quest,  // ?
    Colon,  // :
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    QuoAssign,
    RemAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    OrAssign,
    XorAssign,
}

impl ArithOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::BitNot => "~",
            Self::Inc => "++",
            Self::Dec => "--",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Quo => "/",
            Self::Rem => "%",
            Self::Pow => "**",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Lss => "<",
            Self::Leq => "<=",
            Self::Gtr => ">",
            Self::Geq => ">=",
            Self::Eql => "==",
            Self::Neq => "!=",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::Xor => "^",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Comma => ",",
            Self::Quest => "?",
            Self::Colon => ":",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::QuoAssign => "/=",
            Self::RemAssign => "%=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::AndAssign => "&=",
            Self::OrAssign => "|=",
            Self::XorAssign => "^=",
        }
    }
}

impl fmt::Display for ArithOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PARAMETER EXPANSION
// =============================================================================

/// Operator of a `${name<op>word}` expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpansionOperator {
    ColonMinus,  // :-
    Minus,       // -
    ColonAssign, // :=
    Assign,      // =
    ColonQuest,  // :?
    Quest,       // ?
    ColonPlus,   // :+
    Plus,        // +
    Colon,       // :
    Hash,        // #
    DHash,       // ##
    Percent,     // %
    DPercent,    // %%
    Caret,       // ^
    DCaret,      // ^^
    Comma,       // ,
    DComma,      // ,,
}

impl ExpansionOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ColonMinus => ":-",
            Self::Minus => "-",
            Self::ColonAssign => ":=",
            Self::Assign => "=",
            Self::ColonQuest => ":?",
            Self::Quest => "?",
            Self::ColonPlus => ":+",
            Self::Plus => "+",
            Self::Colon => ":",
            Self::Hash => "#",
            Self::DHash => "##",
            Self::Percent => "%",
            Self::DPercent => "%%",
            Self::Caret => "^",
            Self::DCaret => "^^",
            Self::Comma => ",",
            Self::DComma => ",,",
        }
    }
}

impl fmt::Display for ExpansionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// QUOTES
// =============================================================================

/// Opening delimiter of a quoted region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteKind {
    DoubleQuote,  // "
    SingleQuote,  // '
    DollarSingle, // $'
    DollarDouble, // $"
}

impl QuoteKind {
    pub fn opening(self) -> &'static str {
        match self {
            Self::DoubleQuote => Keyword::DQuote.as_str(),
            Self::SingleQuote => Keyword::SQuote.as_str(),
            Self::DollarSingle => "$'",
            Self::DollarDouble => "$\"",
        }
    }

    /// Dollar-prefixed quotes close with the plain quote character.
    pub fn closing(self) -> &'static str {
        match self {
            Self::DoubleQuote | Self::DollarDouble => Keyword::DQuote.as_str(),
            Self::SingleQuote | Self::DollarSingle => Keyword::SQuote.as_str(),
        }
    }
}

impl fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opening())
    }
}
