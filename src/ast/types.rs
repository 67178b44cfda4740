//! Abstract Syntax Tree (AST) Types for shell scripts
//!
//! This module defines the AST structure handed to the printer.
//! Nodes are plain owned data; the printer only ever borrows them.

use crate::ast::token::{
    ArithOperator, BinCmdOperator, ExpansionOperator, QuoteKind, RedirOperator,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// FILE & STATEMENTS
// =============================================================================

/// Root node: a complete script
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileNode {
    #[serde(default)]
    pub stmts: Vec<StmtNode>,
}

/// A single statement: `[!] [assigns] [command] [redirs] [&]`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StmtNode {
    #[serde(default)]
    pub negated: bool,
    /// Variable assignments before the command: VAR=value cmd
    #[serde(default)]
    pub assigns: Vec<AssignNode>,
    /// None for assignment-only or redirection-only statements
    #[serde(default)]
    pub command: Option<CommandNode>,
    #[serde(default)]
    pub redirs: Vec<RedirNode>,
    /// Run in background?
    #[serde(default)]
    pub background: bool,
}

impl StmtNode {
    /// Whether the statement should be followed by a line break instead of
    /// `; ` when another statement or a closing keyword comes after it.
    pub fn newline_after(&self) -> bool {
        // `&` already terminates the statement; `&;` is a syntax error
        if self.background {
            return true;
        }
        if !self.redirs.is_empty() {
            return false;
        }
        self.command
            .as_ref()
            .is_some_and(CommandNode::ends_with_keyword)
    }
}

// =============================================================================
// ASSIGNMENTS & REDIRECTIONS
// =============================================================================

/// Variable assignment: VAR=value or VAR+=value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssignNode {
    #[serde(default)]
    pub name: Option<String>,
    /// Append mode: VAR+=value
    #[serde(default)]
    pub append: bool,
    /// An empty word means `VAR=`
    #[serde(default)]
    pub value: WordNode,
}

/// I/O redirection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirNode {
    /// File descriptor written before the operator, e.g. the `2` of `2>`
    #[serde(default)]
    pub fd: Option<String>,
    pub op: RedirOperator,
    pub word: WordNode,
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Union of all command-like forms a statement may carry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommandNode {
    Simple(SimpleCommandNode),
    Binary(BinaryCmdNode),
    Subshell(SubshellNode),
    Block(BlockNode),
    If(IfNode),
    While(WhileNode),
    Until(UntilNode),
    For(ForNode),
    Case(CaseNode),
    FuncDecl(FuncDeclNode),
    Decl(DeclNode),
    Let(LetNode),
    Eval(EvalNode),
}

impl CommandNode {
    /// True when the rendered command ends in `fi`, `done`, `esac` or `}`.
    pub fn ends_with_keyword(&self) -> bool {
        match self {
            Self::If(_)
            | Self::While(_)
            | Self::Until(_)
            | Self::For(_)
            | Self::Case(_)
            | Self::Block(_) => true,
            Self::FuncDecl(f) => f.body.newline_after(),
            Self::Eval(e) => e.stmt.newline_after(),
            Self::Binary(b) => b.y.newline_after(),
            Self::Simple(_) | Self::Subshell(_) | Self::Decl(_) | Self::Let(_) => false,
        }
    }
}

/// Simple command: ordered argument words, the first being the name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleCommandNode {
    #[serde(default)]
    pub args: Vec<WordNode>,
}

/// Two statements joined by `&&`, `||`, `|` or `|&`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryCmdNode {
    pub op: BinCmdOperator,
    pub x: Box<StmtNode>,
    pub y: Box<StmtNode>,
}

/// Subshell: ( ... )
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubshellNode {
    #[serde(default)]
    pub stmts: Vec<StmtNode>,
}

/// Command group: { ...; }
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockNode {
    #[serde(default)]
    pub stmts: Vec<StmtNode>,
}

// =============================================================================
// CONTROL FLOW
// =============================================================================

/// The test of an if/elif/while/until
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CondNode {
    /// A statement list whose exit status is the test
    Stmts(StmtCondNode),
    /// `(( expr ))`
    CStyle(CStyleCondNode),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StmtCondNode {
    #[serde(default)]
    pub stmts: Vec<StmtNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CStyleCondNode {
    pub cond: ArithExpr,
}

/// if statement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IfNode {
    #[serde(default)]
    pub cond: Option<CondNode>,
    #[serde(default)]
    pub then_stmts: Vec<StmtNode>,
    #[serde(default)]
    pub elifs: Vec<ElifNode>,
    #[serde(default)]
    pub else_stmts: Vec<StmtNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElifNode {
    #[serde(default)]
    pub cond: Option<CondNode>,
    #[serde(default)]
    pub then_stmts: Vec<StmtNode>,
}

/// while loop
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WhileNode {
    #[serde(default)]
    pub cond: Option<CondNode>,
    #[serde(default)]
    pub do_stmts: Vec<StmtNode>,
}

/// until loop
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UntilNode {
    #[serde(default)]
    pub cond: Option<CondNode>,
    #[serde(default)]
    pub do_stmts: Vec<StmtNode>,
}

/// for loop, either over words or C-style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForNode {
    pub clause: LoopClause,
    #[serde(default)]
    pub do_stmts: Vec<StmtNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoopClause {
    /// for NAME [in WORDS]
    WordIter(WordIterNode),
    /// for ((init; cond; post))
    CStyle(CStyleLoopNode),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordIterNode {
    pub name: String,
    /// Empty means iterate over "$@"
    #[serde(default)]
    pub list: Vec<WordNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CStyleLoopNode {
    #[serde(default)]
    pub init: Option<ArithExpr>,
    #[serde(default)]
    pub cond: Option<ArithExpr>,
    #[serde(default)]
    pub post: Option<ArithExpr>,
}

/// case statement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseNode {
    pub word: WordNode,
    #[serde(default)]
    pub list: Vec<PatternListNode>,
}

/// One `pat1 | pat2) stmts` clause of a case statement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatternListNode {
    pub patterns: Vec<WordNode>,
    #[serde(default)]
    pub stmts: Vec<StmtNode>,
}

// =============================================================================
// FUNCTIONS & BUILTIN FORMS
// =============================================================================

/// Function declaration: `name() body` or `function name() body`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDeclNode {
    pub name: String,
    pub body: Box<StmtNode>,
    /// Declared with the `function` keyword
    #[serde(default)]
    pub bash_style: bool,
}

/// `local` or `declare` with options and assignments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeclNode {
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub opts: Vec<WordNode>,
    #[serde(default)]
    pub assigns: Vec<AssignNode>,
}

/// let expr...
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LetNode {
    pub exprs: Vec<ArithExpr>,
}

/// eval stmt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalNode {
    pub stmt: Box<StmtNode>,
}

// =============================================================================
// WORDS
// =============================================================================

/// A Word is a sequence of parts concatenated without separators.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordNode {
    #[serde(default)]
    pub parts: Vec<WordPart>,
}

/// Parts that can make up a word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WordPart {
    Literal(LiteralPart),
    SingleQuoted(SingleQuotedPart),
    Quoted(QuotedPart),
    ParamExp(ParamExpPart),
    CmdSubst(CmdSubstPart),
    ArithmExp(ArithmExpPart),
    Array(ArrayPart),
    CmdInput(CmdInputPart),
}

/// Literal text (no special meaning)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiteralPart {
    pub value: String,
}

/// Single-quoted string: 'literal'
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SingleQuotedPart {
    pub value: String,
}

/// Quoted region: "...", $'...', $"..."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotedPart {
    pub quote: QuoteKind,
    #[serde(default)]
    pub parts: Vec<WordPart>,
}

/// Command substitution: $(cmd) or `cmd`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CmdSubstPart {
    #[serde(default)]
    pub stmts: Vec<StmtNode>,
    /// Legacy backtick syntax
    #[serde(default)]
    pub backquotes: bool,
}

/// Arithmetic expansion: $((expr))
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArithmExpPart {
    #[serde(default)]
    pub expr: Option<ArithExpr>,
}

/// Array literal: (a b c)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrayPart {
    #[serde(default)]
    pub list: Vec<WordNode>,
}

/// Process substitution reading from a command: <(cmd)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CmdInputPart {
    #[serde(default)]
    pub stmts: Vec<StmtNode>,
}

// =============================================================================
// PARAMETER EXPANSION
// =============================================================================

/// Parameter expansion: $VAR or ${VAR...}
///
/// A short expansion never carries an index, replace or expansion clause.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParamExpPart {
    /// $VAR rather than ${VAR}
    #[serde(default)]
    pub short: bool,
    /// ${#VAR}
    #[serde(default)]
    pub length: bool,
    pub param: String,
    #[serde(default)]
    pub index: Option<IndexNode>,
    #[serde(default)]
    pub replace: Option<ReplaceNode>,
    #[serde(default)]
    pub expansion: Option<ExpansionNode>,
}

/// ${VAR[index]}
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexNode {
    pub word: WordNode,
}

/// ${VAR/orig/with} or ${VAR//orig/with}
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReplaceNode {
    #[serde(default)]
    pub all: bool,
    pub orig: WordNode,
    #[serde(default)]
    pub with: WordNode,
}

/// ${VAR<op>word}, e.g. ${VAR:-default}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionNode {
    pub op: ExpansionOperator,
    #[serde(default)]
    pub word: WordNode,
}

// =============================================================================
// ARITHMETIC
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArithExpr {
    Word(WordNode),
    Unary(Box<UnaryExprNode>),
    Binary(Box<BinaryExprNode>),
    Paren(Box<ParenExprNode>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExprNode {
    pub op: ArithOperator,
    pub x: ArithExpr,
    /// Postfix form: x++ rather than ++x
    #[serde(default)]
    pub post: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExprNode {
    pub op: ArithOperator,
    pub x: ArithExpr,
    pub y: ArithExpr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExprNode {
    pub x: ArithExpr,
}

// =============================================================================
// FACTORY FUNCTIONS (AST builders)
// =============================================================================

/// AST factory for building nodes
pub struct AST;

impl AST {
    pub fn file(stmts: Vec<StmtNode>) -> FileNode {
        FileNode { stmts }
    }

    /// A statement holding just `command`
    pub fn stmt(command: CommandNode) -> StmtNode {
        StmtNode {
            command: Some(command),
            ..Default::default()
        }
    }

    pub fn word(parts: Vec<WordPart>) -> WordNode {
        WordNode { parts }
    }

    /// A word made of a single literal part
    pub fn lit_word(value: impl Into<String>) -> WordNode {
        WordNode {
            parts: vec![Self::literal(value)],
        }
    }

    pub fn literal(value: impl Into<String>) -> WordPart {
        WordPart::Literal(LiteralPart { value: value.into() })
    }

    pub fn single_quoted(value: impl Into<String>) -> WordPart {
        WordPart::SingleQuoted(SingleQuotedPart { value: value.into() })
    }

    pub fn quoted(quote: QuoteKind, parts: Vec<WordPart>) -> WordPart {
        WordPart::Quoted(QuotedPart { quote, parts })
    }

    /// `$name`
    pub fn short_param(param: impl Into<String>) -> WordPart {
        WordPart::ParamExp(ParamExpPart {
            short: true,
            param: param.into(),
            ..Default::default()
        })
    }

    pub fn cmd_subst(stmts: Vec<StmtNode>, backquotes: bool) -> WordPart {
        WordPart::CmdSubst(CmdSubstPart { stmts, backquotes })
    }

    /// A simple command from literal words: `AST::call(&["echo", "hi"])`
    pub fn call(args: &[&str]) -> CommandNode {
        CommandNode::Simple(SimpleCommandNode {
            args: args.iter().map(|a| Self::lit_word(*a)).collect(),
        })
    }

    /// A statement running a simple command of literal words
    pub fn call_stmt(args: &[&str]) -> StmtNode {
        Self::stmt(Self::call(args))
    }

    pub fn assign(name: impl Into<String>, value: WordNode, append: bool) -> AssignNode {
        AssignNode {
            name: Some(name.into()),
            append,
            value,
        }
    }

    pub fn redir(fd: Option<&str>, op: RedirOperator, word: WordNode) -> RedirNode {
        RedirNode {
            fd: fd.map(str::to_string),
            op,
            word,
        }
    }

    pub fn stmt_cond(stmts: Vec<StmtNode>) -> Option<CondNode> {
        Some(CondNode::Stmts(StmtCondNode { stmts }))
    }

    pub fn arith_word(value: impl Into<String>) -> ArithExpr {
        ArithExpr::Word(Self::lit_word(value))
    }

    pub fn unary(op: ArithOperator, x: ArithExpr, post: bool) -> ArithExpr {
        ArithExpr::Unary(Box::new(UnaryExprNode { op, x, post }))
    }

    pub fn binary(op: ArithOperator, x: ArithExpr, y: ArithExpr) -> ArithExpr {
        ArithExpr::Binary(Box::new(BinaryExprNode { op, x, y }))
    }

    pub fn paren(x: ArithExpr) -> ArithExpr {
        ArithExpr::Paren(Box::new(ParenExprNode { x }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::token::RedirOperator;

    #[test]
    fn test_simple_command_no_newline() {
        assert!(!AST::call_stmt(&["echo", "hi"]).newline_after());
    }

    #[test]
    fn test_compound_commands_want_newline() {
        let block = AST::stmt(CommandNode::Block(BlockNode::default()));
        assert!(block.newline_after());

        let sub = AST::stmt(CommandNode::Subshell(SubshellNode::default()));
        assert!(!sub.newline_after());
    }

    #[test]
    fn test_redirection_cancels_keyword_newline() {
        let mut stmt = AST::stmt(CommandNode::If(IfNode::default()));
        stmt.redirs
            .push(AST::redir(None, RedirOperator::Great, AST::lit_word("out")));
        assert!(!stmt.newline_after());
    }

    #[test]
    fn test_heredoc_redirection_is_plain_redirection() {
        let mut heredoc = AST::call_stmt(&["cat"]);
        heredoc
            .redirs
            .push(AST::redir(None, RedirOperator::DLess, AST::lit_word("EOF")));
        assert!(!heredoc.newline_after());
    }

    #[test]
    fn test_background_wants_newline() {
        let mut bg = AST::call_stmt(&["sleep", "1"]);
        bg.background = true;
        assert!(bg.newline_after());
    }

    #[test]
    fn test_func_decl_inherits_body() {
        let func = AST::stmt(CommandNode::FuncDecl(FuncDeclNode {
            name: "f".to_string(),
            body: Box::new(AST::stmt(CommandNode::Block(BlockNode::default()))),
            bash_style: false,
        }));
        assert!(func.newline_after());

        let bare = AST::stmt(CommandNode::FuncDecl(FuncDeclNode {
            name: "g".to_string(),
            body: Box::new(AST::call_stmt(&["true"])),
            bash_style: true,
        }));
        assert!(!bare.newline_after());
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"stmts":[{"command":{"Simple":{"args":[{"parts":[{"Literal":{"value":"ls"}}]}]}}}]}"#;
        let file: FileNode = serde_json::from_str(json).unwrap();
        assert_eq!(file, AST::file(vec![AST::call_stmt(&["ls"])]));
    }
}
