//! Printer Types
//!
//! The error returned by a print call and the set of nodes that may be
//! printed on their own.

use crate::ast::types::{
    ArithExpr, AssignNode, CommandNode, CondNode, FileNode, LoopClause, RedirNode, StmtNode,
    WordNode, WordPart,
};
use std::io;
use thiserror::Error;

/// The only way printing can fail: the output sink rejected a write.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// A borrowed node that can be handed to the printer as a root
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    File(&'a FileNode),
    Stmt(&'a StmtNode),
    Assign(&'a AssignNode),
    Redir(&'a RedirNode),
    Command(&'a CommandNode),
    Cond(&'a CondNode),
    LoopClause(&'a LoopClause),
    Word(&'a WordNode),
    WordPart(&'a WordPart),
    ArithExpr(&'a ArithExpr),
}

impl Node<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::File(_) => "file",
            Node::Stmt(_) => "statement",
            Node::Assign(_) => "assignment",
            Node::Redir(_) => "redirection",
            Node::Command(_) => "command",
            Node::Cond(_) => "condition",
            Node::LoopClause(_) => "loop clause",
            Node::Word(_) => "word",
            Node::WordPart(_) => "word part",
            Node::ArithExpr(_) => "arithmetic expression",
        }
    }
}

macro_rules! node_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

node_from! {
    File => FileNode,
    Stmt => StmtNode,
    Assign => AssignNode,
    Redir => RedirNode,
    Command => CommandNode,
    Cond => CondNode,
    LoopClause => LoopClause,
    Word => WordNode,
    WordPart => WordPart,
    ArithExpr => ArithExpr,
}
