//! Tree-Walking Printer for Shell ASTs
//!
//! Walks a tree depth-first and writes its source form to a sink.
//! The output is not an echo of the parsed script: comments and layout
//! are gone, but parsing the output again yields the same tree.
//!
//! Statements in a list are separated by `; ` unless the previous one asked
//! for a line break (see `StmtNode::newline_after`). Lists nested in a
//! compound command always end in a separator so that the closing keyword
//! stays a separate token.

use crate::ast::token::{ArithOperator, Keyword};
use crate::ast::types::{
    ArithExpr, AssignNode, CommandNode, CondNode, FileNode, LoopClause, ParamExpPart, RedirNode,
    StmtNode, WordNode, WordPart,
};
use crate::printer::types::{Node, PrintError};
use std::fmt;
use std::io::{self, Write};

/// Print `node` to `w`.
///
/// Returns the first error the writer reported, if any. Once a write has
/// failed nothing else is written, but the walk still runs to the end.
pub fn fprint<'a, W: Write>(w: W, node: impl Into<Node<'a>>) -> Result<(), PrintError> {
    Printer::new(w).print(node)
}

/// Render `node` into a `String`.
pub fn to_string<'a>(node: impl Into<Node<'a>>) -> String {
    let mut buf = Vec::new();
    let result = fprint(&mut buf, node);
    debug_assert!(result.is_ok(), "writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// A single print session over one sink
pub struct Printer<W: Write> {
    w: W,
    /// First write error; every later write is skipped
    err: Option<io::Error>,
    /// The statement just printed wants a line break after it
    newline: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            err: None,
            newline: false,
        }
    }

    pub fn print<'a>(mut self, node: impl Into<Node<'a>>) -> Result<(), PrintError> {
        let node = node.into();
        log::trace!("printing {} node", node.kind());
        self.node(node);
        match self.err.take() {
            Some(e) => Err(PrintError::Write(e)),
            None => Ok(()),
        }
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    fn pr(&mut self, s: &str) {
        if self.err.is_some() {
            return;
        }
        if let Err(e) = self.w.write_all(s.as_bytes()) {
            log::debug!("output sink failed, skipping remaining writes: {}", e);
            self.err = Some(e);
        }
    }

    fn kw(&mut self, k: Keyword) {
        self.pr(k.as_str());
    }

    // =========================================================================
    // JOIN HELPERS
    // =========================================================================

    fn node_join<'a, T: 'a>(&mut self, nodes: &'a [T], sep: &str)
    where
        &'a T: Into<Node<'a>>,
    {
        for (i, n) in nodes.iter().enumerate() {
            if i > 0 {
                self.pr(sep);
            }
            self.node(n.into());
        }
    }

    fn word_join(&mut self, words: &[WordNode], sep: &str) {
        for (i, w) in words.iter().enumerate() {
            if i > 0 {
                self.pr(sep);
            }
            self.word(w);
        }
    }

    /// Statements separated by `; ` or a line break, with nothing after the
    /// last one. Leaves `self.newline` set from the last statement.
    fn stmt_join(&mut self, stmts: &[StmtNode]) {
        self.newline = false;
        for (i, s) in stmts.iter().enumerate() {
            if self.newline {
                self.newline = false;
                self.pr("\n");
            } else if i > 0 {
                self.pr("; ");
            }
            self.stmt(s);
            self.newline = s.newline_after();
        }
    }

    /// A statement list nested in a compound command, always terminated.
    fn stmt_list(&mut self, stmts: &[StmtNode]) {
        if stmts.is_empty() {
            self.kw(Keyword::Semicolon);
            self.pr(" ");
            return;
        }
        self.pr(" ");
        self.stmt_join(stmts);
        if self.newline {
            self.newline = false;
            self.pr("\n");
        } else {
            self.kw(Keyword::Semicolon);
            self.pr(" ");
        }
    }

    fn cond_or_semicolon(&mut self, cond: Option<&CondNode>) {
        match cond {
            Some(c) => self.cond(c),
            None => {
                self.kw(Keyword::Semicolon);
                self.pr(" ");
            }
        }
    }

    // =========================================================================
    // NODES
    // =========================================================================

    fn node(&mut self, node: Node<'_>) {
        match node {
            Node::File(f) => self.file(f),
            Node::Stmt(s) => self.stmt(s),
            Node::Assign(a) => self.assign(a),
            Node::Redir(r) => self.redir(r),
            Node::Command(c) => self.command(c),
            Node::Cond(c) => self.cond(c),
            Node::LoopClause(l) => self.loop_clause(l),
            Node::Word(w) => self.word(w),
            Node::WordPart(p) => self.word_part(p),
            Node::ArithExpr(x) => self.arith(x),
        }
    }

    fn file(&mut self, f: &FileNode) {
        self.stmt_join(&f.stmts);
    }

    fn stmt(&mut self, s: &StmtNode) {
        let mut first = true;
        if s.negated {
            self.kw(Keyword::Bang);
            first = false;
        }
        for a in &s.assigns {
            if !first {
                self.pr(" ");
            }
            self.assign(a);
            first = false;
        }
        if let Some(c) = &s.command {
            if !first {
                self.pr(" ");
            }
            self.command(c);
            first = false;
        }
        for r in &s.redirs {
            if !first {
                self.pr(" ");
            }
            self.redir(r);
            first = false;
        }
        if s.background {
            if !first {
                self.pr(" ");
            }
            self.kw(Keyword::Amp);
        }
    }

    fn assign(&mut self, a: &AssignNode) {
        if let Some(name) = &a.name {
            self.pr(name);
            self.pr(if a.append { "+=" } else { "=" });
        }
        self.word(&a.value);
    }

    fn redir(&mut self, r: &RedirNode) {
        if let Some(fd) = &r.fd {
            self.pr(fd);
        }
        self.pr(r.op.as_str());
        // `<<(` would lex as a heredoc operator
        if matches!(r.word.parts.first(), Some(WordPart::CmdInput(_))) {
            self.pr(" ");
        }
        self.word(&r.word);
    }

    fn command(&mut self, c: &CommandNode) {
        match c {
            CommandNode::Simple(x) => self.word_join(&x.args, " "),
            CommandNode::Binary(x) => {
                self.stmt(&x.x);
                self.pr(" ");
                self.pr(x.op.as_str());
                self.pr(" ");
                self.stmt(&x.y);
            }
            CommandNode::Subshell(x) => {
                self.kw(Keyword::LParen);
                if x.stmts.is_empty() {
                    // keep it apart from `()`
                    self.pr(" ");
                }
                self.stmt_join(&x.stmts);
                self.kw(Keyword::RParen);
            }
            CommandNode::Block(x) => {
                self.kw(Keyword::LBrace);
                self.stmt_list(&x.stmts);
                self.kw(Keyword::RBrace);
            }
            CommandNode::If(x) => {
                self.kw(Keyword::If);
                self.cond_or_semicolon(x.cond.as_ref());
                self.kw(Keyword::Then);
                self.stmt_list(&x.then_stmts);
                for el in &x.elifs {
                    self.kw(Keyword::Elif);
                    self.cond_or_semicolon(el.cond.as_ref());
                    self.kw(Keyword::Then);
                    self.stmt_list(&el.then_stmts);
                }
                if !x.else_stmts.is_empty() {
                    self.kw(Keyword::Else);
                    self.stmt_list(&x.else_stmts);
                }
                self.kw(Keyword::Fi);
            }
            CommandNode::While(x) => {
                self.kw(Keyword::While);
                self.cond_or_semicolon(x.cond.as_ref());
                self.kw(Keyword::Do);
                self.stmt_list(&x.do_stmts);
                self.kw(Keyword::Done);
            }
            CommandNode::Until(x) => {
                self.kw(Keyword::Until);
                self.cond_or_semicolon(x.cond.as_ref());
                self.kw(Keyword::Do);
                self.stmt_list(&x.do_stmts);
                self.kw(Keyword::Done);
            }
            CommandNode::For(x) => {
                self.kw(Keyword::For);
                self.pr(" ");
                self.loop_clause(&x.clause);
                self.pr("; ");
                self.kw(Keyword::Do);
                self.stmt_list(&x.do_stmts);
                self.kw(Keyword::Done);
            }
            CommandNode::Case(x) => {
                self.kw(Keyword::Case);
                self.pr(" ");
                self.word(&x.word);
                self.pr(" ");
                self.kw(Keyword::In);
                for (i, pl) in x.list.iter().enumerate() {
                    if i > 0 {
                        self.kw(Keyword::DSemi);
                    }
                    self.pr(" ");
                    self.word_join(&pl.patterns, " | ");
                    self.pr(") ");
                    for (j, s) in pl.stmts.iter().enumerate() {
                        if j > 0 {
                            self.pr("; ");
                        }
                        self.stmt(s);
                    }
                }
                self.pr("; ");
                self.kw(Keyword::Esac);
            }
            CommandNode::FuncDecl(x) => {
                if x.bash_style {
                    self.kw(Keyword::Function);
                    self.pr(" ");
                }
                self.pr(&x.name);
                self.pr("() ");
                self.stmt(&x.body);
            }
            CommandNode::Decl(x) => {
                self.kw(if x.local { Keyword::Local } else { Keyword::Declare });
                for w in &x.opts {
                    self.pr(" ");
                    self.word(w);
                }
                for a in &x.assigns {
                    self.pr(" ");
                    self.assign(a);
                }
            }
            CommandNode::Let(x) => {
                self.kw(Keyword::Let);
                self.pr(" ");
                self.node_join(&x.exprs, " ");
            }
            CommandNode::Eval(x) => {
                self.kw(Keyword::Eval);
                self.pr(" ");
                self.stmt(&x.stmt);
            }
        }
    }

    fn cond(&mut self, c: &CondNode) {
        match c {
            CondNode::Stmts(x) => self.stmt_list(&x.stmts),
            CondNode::CStyle(x) => {
                self.pr(" ((");
                self.arith(&x.cond);
                self.pr(")); ");
            }
        }
    }

    fn loop_clause(&mut self, l: &LoopClause) {
        match l {
            LoopClause::WordIter(x) => {
                self.pr(&x.name);
                if !x.list.is_empty() {
                    self.pr(" ");
                    self.kw(Keyword::In);
                    self.pr(" ");
                    self.word_join(&x.list, " ");
                }
            }
            LoopClause::CStyle(x) => {
                self.pr("((");
                if let Some(init) = &x.init {
                    self.arith(init);
                }
                self.pr("; ");
                if let Some(cond) = &x.cond {
                    self.arith(cond);
                }
                self.pr("; ");
                if let Some(post) = &x.post {
                    self.arith(post);
                }
                self.pr("))");
            }
        }
    }

    // =========================================================================
    // WORDS
    // =========================================================================

    fn word(&mut self, w: &WordNode) {
        self.node_join(&w.parts, "");
    }

    fn word_part(&mut self, p: &WordPart) {
        match p {
            WordPart::Literal(x) => self.pr(&x.value),
            WordPart::SingleQuoted(x) => {
                self.kw(Keyword::SQuote);
                self.pr(&x.value);
                self.kw(Keyword::SQuote);
            }
            WordPart::Quoted(x) => {
                self.pr(x.quote.opening());
                self.node_join(&x.parts, "");
                self.pr(x.quote.closing());
            }
            WordPart::ParamExp(x) => self.param_exp(x),
            WordPart::CmdSubst(x) => {
                if x.backquotes {
                    self.kw(Keyword::BQuote);
                } else {
                    self.kw(Keyword::Dollar);
                    self.kw(Keyword::LParen);
                }
                self.stmt_join(&x.stmts);
                if x.backquotes {
                    self.kw(Keyword::BQuote);
                } else {
                    self.kw(Keyword::RParen);
                }
            }
            WordPart::ArithmExp(x) => {
                self.pr("$((");
                if let Some(expr) = &x.expr {
                    self.arith(expr);
                }
                self.pr("))");
            }
            WordPart::Array(x) => {
                self.kw(Keyword::LParen);
                self.word_join(&x.list, " ");
                self.kw(Keyword::RParen);
            }
            WordPart::CmdInput(x) => {
                self.kw(Keyword::CmdIn);
                self.stmt_join(&x.stmts);
                self.kw(Keyword::RParen);
            }
        }
    }

    fn param_exp(&mut self, x: &ParamExpPart) {
        if x.short {
            self.kw(Keyword::Dollar);
            self.pr(&x.param);
            return;
        }
        self.pr("${");
        if x.length {
            self.kw(Keyword::Hash);
        }
        self.pr(&x.param);
        if let Some(ind) = &x.index {
            self.kw(Keyword::LBrack);
            self.word(&ind.word);
            self.kw(Keyword::RBrack);
        }
        if let Some(repl) = &x.replace {
            if repl.all {
                self.kw(Keyword::Slash);
            }
            self.kw(Keyword::Slash);
            self.word(&repl.orig);
            self.kw(Keyword::Slash);
            self.word(&repl.with);
        }
        if let Some(exp) = &x.expansion {
            self.pr(exp.op.as_str());
            self.word(&exp.word);
        }
        self.pr("}");
    }

    // =========================================================================
    // ARITHMETIC
    // =========================================================================

    fn arith(&mut self, x: &ArithExpr) {
        match x {
            ArithExpr::Word(w) => self.word(w),
            ArithExpr::Unary(u) => {
                if !u.post {
                    self.pr(u.op.as_str());
                }
                self.arith(&u.x);
                if u.post {
                    self.pr(u.op.as_str());
                }
            }
            ArithExpr::Binary(b) => {
                self.arith(&b.x);
                if b.op != ArithOperator::Comma {
                    self.pr(" ");
                }
                self.pr(b.op.as_str());
                self.pr(" ");
                self.arith(&b.y);
            }
            ArithExpr::Paren(p) => {
                self.pr("(");
                self.arith(&p.x);
                self.pr(")");
            }
        }
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

impl fmt::Display for FileNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}

impl fmt::Display for StmtNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}

impl fmt::Display for WordNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::token::{BinCmdOperator, ExpansionOperator, QuoteKind, RedirOperator};
    use crate::ast::types::*;

    fn print_file(stmts: Vec<StmtNode>) -> String {
        to_string(&AST::file(stmts))
    }

    fn if_stmt(cond: Vec<StmtNode>, then_stmts: Vec<StmtNode>) -> StmtNode {
        AST::stmt(CommandNode::If(IfNode {
            cond: AST::stmt_cond(cond),
            then_stmts,
            ..Default::default()
        }))
    }

    fn param(p: ParamExpPart) -> String {
        to_string(&WordPart::ParamExp(p))
    }

    /// Accepts `limit` writes, then fails every call while counting them
    struct FailingWriter {
        written: Vec<u8>,
        limit: usize,
        calls: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls += 1;
            if self.calls > self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_simple_command() {
        assert_eq!(print_file(vec![AST::call_stmt(&["echo", "hi"])]), "echo hi");
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(print_file(vec![]), "");
    }

    #[test]
    fn test_if_statement() {
        let stmt = if_stmt(
            vec![AST::call_stmt(&["true"])],
            vec![AST::call_stmt(&["echo", "yes"])],
        );
        assert_eq!(print_file(vec![stmt]), "if true; then echo yes; fi");
    }

    #[test]
    fn test_if_elif_else() {
        let stmt = AST::stmt(CommandNode::If(IfNode {
            cond: AST::stmt_cond(vec![AST::call_stmt(&["a"])]),
            then_stmts: vec![AST::call_stmt(&["b"])],
            elifs: vec![ElifNode {
                cond: AST::stmt_cond(vec![AST::call_stmt(&["c"])]),
                then_stmts: vec![AST::call_stmt(&["d"])],
            }],
            else_stmts: vec![AST::call_stmt(&["e"])],
        }));
        assert_eq!(
            print_file(vec![stmt]),
            "if a; then b; elif c; then d; else e; fi"
        );
    }

    #[test]
    fn test_absent_condition_renders_separator() {
        let stmt = AST::stmt(CommandNode::While(WhileNode {
            cond: None,
            do_stmts: vec![AST::call_stmt(&["x"])],
        }));
        assert_eq!(print_file(vec![stmt]), "while; do x; done");
    }

    #[test]
    fn test_empty_body_renders_separator() {
        let stmt = AST::stmt(CommandNode::Until(UntilNode {
            cond: AST::stmt_cond(vec![]),
            do_stmts: vec![],
        }));
        assert_eq!(print_file(vec![stmt]), "until; do; done");
    }

    #[test]
    fn test_cstyle_condition() {
        let stmt = AST::stmt(CommandNode::While(WhileNode {
            cond: Some(CondNode::CStyle(CStyleCondNode {
                cond: AST::binary(ArithOperator::Lss, AST::arith_word("i"), AST::arith_word("3")),
            })),
            do_stmts: vec![AST::call_stmt(&["step"])],
        }));
        assert_eq!(print_file(vec![stmt]), "while ((i < 3)); do step; done");
    }

    #[test]
    fn test_keyword_statements_separated_by_newline() {
        let first = if_stmt(vec![AST::call_stmt(&["a"])], vec![AST::call_stmt(&["b"])]);
        let out = print_file(vec![first, AST::call_stmt(&["c"]), AST::call_stmt(&["d"])]);
        assert_eq!(out, "if a; then b; fi\nc; d");
    }

    #[test]
    fn test_nested_list_ends_with_newline() {
        let inner = if_stmt(vec![AST::call_stmt(&["a"])], vec![AST::call_stmt(&["b"])]);
        let block = AST::stmt(CommandNode::Block(BlockNode { stmts: vec![inner] }));
        assert_eq!(print_file(vec![block]), "{ if a; then b; fi\n}");
    }

    #[test]
    fn test_separator_between_every_pair() {
        let mut bg = AST::call_stmt(&["sleep", "1"]);
        bg.background = true;
        let out = print_file(vec![
            AST::call_stmt(&["a"]),
            bg,
            AST::call_stmt(&["b"]),
            AST::call_stmt(&["c"]),
        ]);
        assert_eq!(out, "a; sleep 1 &\nb; c");
    }

    #[test]
    fn test_for_word_list() {
        let stmt = AST::stmt(CommandNode::For(ForNode {
            clause: LoopClause::WordIter(WordIterNode {
                name: "i".to_string(),
                list: vec![AST::lit_word("a"), AST::lit_word("b")],
            }),
            do_stmts: vec![AST::stmt(CommandNode::Simple(SimpleCommandNode {
                args: vec![AST::lit_word("echo"), AST::word(vec![AST::short_param("i")])],
            }))],
        }));
        assert_eq!(print_file(vec![stmt]), "for i in a b; do echo $i; done");
    }

    #[test]
    fn test_for_without_list() {
        let stmt = AST::stmt(CommandNode::For(ForNode {
            clause: LoopClause::WordIter(WordIterNode {
                name: "arg".to_string(),
                list: vec![],
            }),
            do_stmts: vec![AST::call_stmt(&["x"])],
        }));
        assert_eq!(print_file(vec![stmt]), "for arg; do x; done");
    }

    #[test]
    fn test_for_cstyle() {
        let stmt = AST::stmt(CommandNode::For(ForNode {
            clause: LoopClause::CStyle(CStyleLoopNode {
                init: Some(AST::binary(
                    ArithOperator::Assign,
                    AST::arith_word("i"),
                    AST::arith_word("0"),
                )),
                cond: None,
                post: Some(AST::unary(ArithOperator::Inc, AST::arith_word("i"), true)),
            }),
            do_stmts: vec![AST::call_stmt(&["x"])],
        }));
        assert_eq!(print_file(vec![stmt]), "for ((i = 0; ; i++)); do x; done");

        let empty = LoopClause::CStyle(CStyleLoopNode::default());
        assert_eq!(to_string(&empty), "((; ; ))");
    }

    #[test]
    fn test_case_statement() {
        let stmt = AST::stmt(CommandNode::Case(CaseNode {
            word: AST::word(vec![AST::short_param("x")]),
            list: vec![
                PatternListNode {
                    patterns: vec![AST::lit_word("a")],
                    stmts: vec![AST::call_stmt(&["echo", "A"])],
                },
                PatternListNode {
                    patterns: vec![AST::lit_word("b"), AST::lit_word("c")],
                    stmts: vec![AST::call_stmt(&["echo", "B"])],
                },
            ],
        }));
        assert_eq!(
            print_file(vec![stmt]),
            "case $x in a) echo A;; b | c) echo B; esac"
        );
    }

    #[test]
    fn test_case_clause_uses_inline_join() {
        let inner = if_stmt(vec![AST::call_stmt(&["a"])], vec![AST::call_stmt(&["b"])]);
        let stmt = AST::stmt(CommandNode::Case(CaseNode {
            word: AST::lit_word("v"),
            list: vec![PatternListNode {
                patterns: vec![AST::lit_word("*")],
                stmts: vec![inner, AST::call_stmt(&["c"])],
            }],
        }));
        assert_eq!(
            print_file(vec![stmt]),
            "case v in *) if a; then b; fi; c; esac"
        );
    }

    #[test]
    fn test_redirection_with_cmd_input() {
        let mut stmt = AST::call_stmt(&["cat"]);
        stmt.redirs.push(AST::redir(
            None,
            RedirOperator::Less,
            AST::word(vec![WordPart::CmdInput(CmdInputPart {
                stmts: vec![AST::call_stmt(&["ls"])],
            })]),
        ));
        assert_eq!(print_file(vec![stmt]), "cat < <(ls)");
    }

    #[test]
    fn test_redirection_with_fd() {
        let mut stmt = AST::call_stmt(&["cmd"]);
        stmt.redirs
            .push(AST::redir(Some("2"), RedirOperator::GreatAnd, AST::lit_word("1")));
        stmt.redirs
            .push(AST::redir(None, RedirOperator::DGreat, AST::lit_word("log")));
        assert_eq!(print_file(vec![stmt]), "cmd 2>&1 >>log");
    }

    #[test]
    fn test_statement_pieces() {
        let stmt = StmtNode {
            negated: true,
            assigns: vec![
                AST::assign("A", AST::lit_word("1"), false),
                AST::assign("B", WordNode::default(), true),
            ],
            command: Some(AST::call(&["env"])),
            redirs: vec![AST::redir(None, RedirOperator::Great, AST::lit_word("/dev/null"))],
            background: true,
        };
        assert_eq!(to_string(&stmt), "! A=1 B+= env >/dev/null &");
    }

    #[test]
    fn test_assignment_only_statement() {
        let stmt = StmtNode {
            assigns: vec![AST::assign("x", WordNode::default(), false)],
            ..Default::default()
        };
        assert_eq!(to_string(&stmt), "x=");
    }

    #[test]
    fn test_assignment_without_name() {
        let assign = AssignNode {
            name: None,
            append: true,
            value: AST::lit_word("v"),
        };
        assert_eq!(to_string(&assign), "v");
    }

    #[test]
    fn test_heredoc_redirection_joins_inline() {
        let mut cat = AST::call_stmt(&["cat"]);
        cat.redirs
            .push(AST::redir(None, RedirOperator::DLess, AST::lit_word("EOF")));
        let pipe = AST::stmt(CommandNode::Binary(BinaryCmdNode {
            op: BinCmdOperator::Pipe,
            x: Box::new(cat.clone()),
            y: Box::new(AST::call_stmt(&["wc"])),
        }));
        assert_eq!(
            print_file(vec![pipe, AST::call_stmt(&["echo"])]),
            "cat <<EOF | wc; echo"
        );

        let case = AST::stmt(CommandNode::Case(CaseNode {
            word: AST::lit_word("v"),
            list: vec![PatternListNode {
                patterns: vec![AST::lit_word("*")],
                stmts: vec![cat],
            }],
        }));
        assert_eq!(to_string(&case), "case v in *) cat <<EOF; esac");
    }

    #[test]
    fn test_binary_commands() {
        let pipe = AST::stmt(CommandNode::Binary(BinaryCmdNode {
            op: BinCmdOperator::Pipe,
            x: Box::new(AST::call_stmt(&["ls"])),
            y: Box::new(AST::call_stmt(&["wc", "-l"])),
        }));
        let and = AST::stmt(CommandNode::Binary(BinaryCmdNode {
            op: BinCmdOperator::AndAnd,
            x: Box::new(pipe),
            y: Box::new(AST::call_stmt(&["echo", "ok"])),
        }));
        assert_eq!(print_file(vec![and]), "ls | wc -l && echo ok");
    }

    #[test]
    fn test_subshell_and_block() {
        let sub = AST::stmt(CommandNode::Subshell(SubshellNode {
            stmts: vec![AST::call_stmt(&["a"]), AST::call_stmt(&["b"])],
        }));
        assert_eq!(to_string(&sub), "(a; b)");

        let empty_sub = AST::stmt(CommandNode::Subshell(SubshellNode::default()));
        assert_eq!(to_string(&empty_sub), "( )");

        let block = AST::stmt(CommandNode::Block(BlockNode {
            stmts: vec![AST::call_stmt(&["a"])],
        }));
        assert_eq!(to_string(&block), "{ a; }");
    }

    #[test]
    fn test_func_decl() {
        let body = AST::stmt(CommandNode::Block(BlockNode {
            stmts: vec![AST::call_stmt(&["echo", "hi"])],
        }));
        let posix = AST::stmt(CommandNode::FuncDecl(FuncDeclNode {
            name: "greet".to_string(),
            body: Box::new(body.clone()),
            bash_style: false,
        }));
        let bash = AST::stmt(CommandNode::FuncDecl(FuncDeclNode {
            name: "greet".to_string(),
            body: Box::new(body),
            bash_style: true,
        }));
        assert_eq!(to_string(&posix), "greet() { echo hi; }");
        assert_eq!(
            print_file(vec![bash, AST::call_stmt(&["greet"])]),
            "function greet() { echo hi; }\ngreet"
        );
    }

    #[test]
    fn test_decl_let_eval() {
        let decl = AST::stmt(CommandNode::Decl(DeclNode {
            local: true,
            opts: vec![AST::lit_word("-r")],
            assigns: vec![AST::assign("x", AST::lit_word("1"), false)],
        }));
        assert_eq!(to_string(&decl), "local -r x=1");

        let declare = AST::stmt(CommandNode::Decl(DeclNode::default()));
        assert_eq!(to_string(&declare), "declare");

        let let_stmt = AST::stmt(CommandNode::Let(LetNode {
            exprs: vec![
                AST::binary(ArithOperator::AddAssign, AST::arith_word("i"), AST::arith_word("2")),
                AST::unary(ArithOperator::Dec, AST::arith_word("j"), false),
            ],
        }));
        assert_eq!(to_string(&let_stmt), "let i += 2 --j");

        let eval = AST::stmt(CommandNode::Eval(EvalNode {
            stmt: Box::new(AST::call_stmt(&["echo", "x"])),
        }));
        assert_eq!(to_string(&eval), "eval echo x");
    }

    #[test]
    fn test_quoting() {
        let word = AST::word(vec![
            AST::literal("a"),
            AST::single_quoted("b c"),
            AST::quoted(QuoteKind::DoubleQuote, vec![AST::literal("d "), AST::short_param("e")]),
        ]);
        assert_eq!(to_string(&word), "a'b c'\"d $e\"");
    }

    #[test]
    fn test_quote_delimiters() {
        let cases = [
            (QuoteKind::DoubleQuote, "\"x\""),
            (QuoteKind::SingleQuote, "'x'"),
            (QuoteKind::DollarSingle, "$'x'"),
            (QuoteKind::DollarDouble, "$\"x\""),
        ];
        for (quote, want) in cases {
            let part = AST::quoted(quote, vec![AST::literal("x")]);
            assert_eq!(to_string(&part), want);
        }
    }

    #[test]
    fn test_command_substitution() {
        let dollar = AST::cmd_subst(
            vec![AST::call_stmt(&["a"]), AST::call_stmt(&["b"])],
            false,
        );
        assert_eq!(to_string(&dollar), "$(a; b)");

        let backquoted = AST::cmd_subst(vec![AST::call_stmt(&["date"])], true);
        assert_eq!(to_string(&backquoted), "`date`");
    }

    #[test]
    fn test_param_exp_forms() {
        assert_eq!(to_string(&AST::short_param("HOME")), "$HOME");

        assert_eq!(
            param(ParamExpPart {
                length: true,
                param: "s".to_string(),
                ..Default::default()
            }),
            "${#s}"
        );
        assert_eq!(
            param(ParamExpPart {
                param: "arr".to_string(),
                index: Some(IndexNode { word: AST::lit_word("@") }),
                ..Default::default()
            }),
            "${arr[@]}"
        );
        assert_eq!(
            param(ParamExpPart {
                param: "p".to_string(),
                replace: Some(ReplaceNode {
                    all: true,
                    orig: AST::lit_word("a"),
                    with: AST::lit_word("b"),
                }),
                ..Default::default()
            }),
            "${p//a/b}"
        );
        assert_eq!(
            param(ParamExpPart {
                param: "p".to_string(),
                replace: Some(ReplaceNode {
                    all: false,
                    orig: AST::lit_word("a"),
                    with: WordNode::default(),
                }),
                ..Default::default()
            }),
            "${p/a/}"
        );
        assert_eq!(
            param(ParamExpPart {
                param: "v".to_string(),
                expansion: Some(ExpansionNode {
                    op: ExpansionOperator::ColonMinus,
                    word: AST::lit_word("default"),
                }),
                ..Default::default()
            }),
            "${v:-default}"
        );
    }

    #[test]
    fn test_short_param_ignores_clauses() {
        let out = param(ParamExpPart {
            short: true,
            length: true,
            param: "x".to_string(),
            index: Some(IndexNode { word: AST::lit_word("0") }),
            replace: Some(ReplaceNode::default()),
            expansion: Some(ExpansionNode {
                op: ExpansionOperator::Plus,
                word: AST::lit_word("y"),
            }),
        });
        assert_eq!(out, "$x");
    }

    #[test]
    fn test_arithmetic_expansion() {
        let expr = AST::binary(
            ArithOperator::Mul,
            AST::paren(AST::binary(
                ArithOperator::Add,
                AST::arith_word("a"),
                AST::arith_word("1"),
            )),
            AST::unary(ArithOperator::Sub, AST::arith_word("b"), false),
        );
        let part = WordPart::ArithmExp(ArithmExpPart { expr: Some(expr) });
        assert_eq!(to_string(&part), "$(((a + 1) * -b))");

        let empty = WordPart::ArithmExp(ArithmExpPart { expr: None });
        assert_eq!(to_string(&empty), "$(())");
    }

    #[test]
    fn test_comma_operator_spacing() {
        let expr = AST::binary(ArithOperator::Comma, AST::arith_word("a"), AST::arith_word("b"));
        assert_eq!(to_string(&expr), "a, b");
    }

    #[test]
    fn test_array_assignment() {
        let value = AST::word(vec![WordPart::Array(ArrayPart {
            list: vec![AST::lit_word("a"), AST::lit_word("b")],
        })]);
        let stmt = StmtNode {
            assigns: vec![AST::assign("arr", value, false)],
            ..Default::default()
        };
        assert_eq!(to_string(&stmt), "arr=(a b)");
    }

    #[test]
    fn test_display_impls() {
        let file = AST::file(vec![AST::call_stmt(&["echo", "hi"])]);
        assert_eq!(file.to_string(), "echo hi");
        assert_eq!(AST::lit_word("x").to_string(), "x");
    }

    #[test]
    fn test_write_error_is_sticky() {
        let file = AST::file(vec![
            AST::call_stmt(&["a", "b", "c"]),
            AST::call_stmt(&["d"]),
        ]);
        let mut w = FailingWriter {
            written: Vec::new(),
            limit: 2,
            calls: 0,
        };
        let result = fprint(&mut w, &file);
        assert!(matches!(result, Err(PrintError::Write(_))));
        assert_eq!(w.written, b"a ");
        // one failing attempt, nothing after it
        assert_eq!(w.calls, 3);
    }

    #[test]
    fn test_fprint_success() {
        let mut out = Vec::new();
        let stmt = AST::call_stmt(&["true"]);
        fprint(&mut out, &stmt).unwrap();
        assert_eq!(out, b"true");
    }
}
