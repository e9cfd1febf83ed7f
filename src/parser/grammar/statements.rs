//! Statement parsing
//!
//! ```text
//! SourceFile = Statement*
//! Statement  = Block | VarDecl | FunctionDecl | ClassDecl | IfStmt | ForStmt
//!            | WhileStmt | DoWhileStmt | ReturnStmt | BreakStmt | ContinueStmt
//!            | ThrowStmt | TryStmt | SwitchStmt | LabeledStmt | DebuggerStmt
//!            | WithStmt | EmptyStmt | ImportDecl | ExportDecl
//!            | TypedDeclaration | ExpressionStmt
//! ```

use super::*;
use super::declarations::{
    at_typed_declaration, binding_target, class_with_decorators_at, decorators,
    export_declaration, function, import_declaration, typed_declaration, var_declaration,
};
use super::expressions::{expression, expression_allow_in, is_expression_start};
use super::types::type_annotation;

/// SourceFile = Statement*
///
/// Entry point for every dialect. Parsing stops at the first error; the
/// unparsed rest of the input is kept in an ERROR node.
pub fn parse_source_file<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::SOURCE_FILE);
    p.skip_trivia();
    statement_list(p, SyntaxKind::EOF);
    p.recover_remaining();
    p.finish_node();
}

/// Statements up to `stop` (or end of input)
pub(super) fn statement_list<P: ScriptParser>(p: &mut P, stop: SyntaxKind) {
    while !p.at_eof() && !p.at(stop) {
        let before = p.get_pos();
        statement(p);
        if p.get_pos() == before && !p.has_failed() {
            p.error_expected("a statement", ErrorCode::E0205);
        }
    }
}

/// Statement
pub(super) fn statement<P: ScriptParser>(p: &mut P) {
    if !p.enter() {
        return;
    }
    statement_inner(p);
    p.exit();
}

fn statement_inner<P: ScriptParser>(p: &mut P) {
    match p.current() {
        SyntaxKind::L_BRACE => block(p),
        SyntaxKind::SEMICOLON => {
            p.start_node(SyntaxKind::EMPTY_STMT);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::VAR_KW => var_declaration(p, false),
        SyntaxKind::CONST_KW if p.nth_at(1, SyntaxKind::ENUM_KW) && p.flags().types => typed_declaration(p),
        SyntaxKind::CONST_KW => var_declaration(p, false),
        SyntaxKind::IDENT if at_let_declaration(p) => var_declaration(p, false),
        SyntaxKind::FUNCTION_KW => function(p, SyntaxKind::FN_DECL, true),
        SyntaxKind::IDENT if at_async_function(p) => function(p, SyntaxKind::FN_DECL, true),
        SyntaxKind::CLASS_KW => {
            let cp = p.checkpoint();
            class_with_decorators_at(p, cp, SyntaxKind::CLASS_DECL, true);
        }
        SyntaxKind::AT => decorated_statement(p),
        SyntaxKind::IF_KW => if_statement(p),
        SyntaxKind::FOR_KW => for_statement(p),
        SyntaxKind::WHILE_KW => while_statement(p),
        SyntaxKind::DO_KW => do_while_statement(p),
        SyntaxKind::RETURN_KW => return_statement(p),
        SyntaxKind::BREAK_KW => jump_statement(p, SyntaxKind::BREAK_STMT),
        SyntaxKind::CONTINUE_KW => jump_statement(p, SyntaxKind::CONTINUE_STMT),
        SyntaxKind::THROW_KW => throw_statement(p),
        SyntaxKind::TRY_KW => try_statement(p),
        SyntaxKind::SWITCH_KW => switch_statement(p),
        SyntaxKind::DEBUGGER_KW => {
            p.start_node(SyntaxKind::DEBUGGER_STMT);
            p.bump();
            consume_semicolon(p);
            p.finish_node();
        }
        SyntaxKind::WITH_KW => with_statement(p),
        SyntaxKind::IMPORT_KW if !matches!(p.nth(1), SyntaxKind::L_PAREN | SyntaxKind::DOT) => {
            if module_item_allowed(p) {
                import_declaration(p);
            }
        }
        SyntaxKind::EXPORT_KW => {
            if module_item_allowed(p) {
                let cp = p.checkpoint();
                export_declaration(p, cp);
            }
        }
        SyntaxKind::ENUM_KW if p.flags().types => typed_declaration(p),
        SyntaxKind::IDENT if p.flags().types && at_typed_declaration(p) => typed_declaration(p),
        SyntaxKind::IDENT if p.nth_at(1, SyntaxKind::COLON) => labeled_statement(p),
        _ => expression_statement(p),
    }
}

/// `let` starts a declaration only when a binding follows
pub(super) fn at_let_declaration<P: ScriptParser>(p: &mut P) -> bool {
    p.at_contextual("let")
        && matches!(
            p.nth(1),
            SyntaxKind::IDENT | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE
        )
}

pub(super) fn at_async_function<P: ScriptParser>(p: &mut P) -> bool {
    p.at_contextual("async") && p.nth_at(1, SyntaxKind::FUNCTION_KW) && !p.nth_has_line_break_before(1)
}

fn module_item_allowed<P: ScriptParser>(p: &mut P) -> bool {
    if p.context().top_level {
        return true;
    }
    let range = p.current_range();
    p.error(SyntaxError::from_code(ErrorCode::E0502, range));
    false
}

/// `@dec class X {}` or `@dec export class X {}`
fn decorated_statement<P: ScriptParser>(p: &mut P) {
    if !p.flags().decorators {
        p.error_expected("a statement", ErrorCode::E0205);
        return;
    }
    let cp = p.checkpoint();
    decorators(p);
    if p.at(SyntaxKind::EXPORT_KW) {
        if module_item_allowed(p) {
            export_declaration(p, cp);
        }
    } else {
        class_with_decorators_at(p, cp, SyntaxKind::CLASS_DECL, true);
    }
}

/// Block = '{' Statement* '}'
pub(super) fn block<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::BLOCK);
    p.expect(SyntaxKind::L_BRACE);
    let ctx = p.context().block();
    with_context(p, ctx, |p| statement_list(p, SyntaxKind::R_BRACE));
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// Body of a loop
fn loop_body<P: ScriptParser>(p: &mut P) {
    let ctx = Context {
        in_iteration: true,
        ..p.context().block()
    };
    with_context(p, ctx, statement);
}

/// `'(' Expression ')'` after if/while/switch/with
fn paren_condition<P: ScriptParser>(p: &mut P) {
    p.expect(SyntaxKind::L_PAREN);
    expression_allow_in(p);
    p.expect(SyntaxKind::R_PAREN);
}

/// IfStmt = 'if' '(' Expression ')' Statement ('else' Statement)?
fn if_statement<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::IF_STMT);
    p.bump(); // if
    paren_condition(p);
    nested_statement(p);
    if p.eat(SyntaxKind::ELSE_KW) {
        nested_statement(p);
    }
    p.finish_node();
}

fn nested_statement<P: ScriptParser>(p: &mut P) {
    let ctx = p.context().block();
    with_context(p, ctx, statement);
}

/// ForStmt = 'for' 'await'? '(' ForHead ')' Statement
///
/// ForHead = (VarDecl | Expression)? ';' Expression? ';' Expression?
///         | (VarDecl | LeftHandSide) ('in' Expression | 'of' AssignmentExpression)
fn for_statement<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::FOR_STMT);
    p.bump(); // for
    let ctx = p.context();
    if ctx.in_async || !ctx.in_function {
        p.eat_contextual("await");
    }
    p.expect(SyntaxKind::L_PAREN);

    let head_ctx = ctx.block().with_no_in(true);
    let iterates = with_context(p, head_ctx, |p| {
        if p.at(SyntaxKind::SEMICOLON) {
            return false;
        }
        if p.at(SyntaxKind::VAR_KW) || p.at(SyntaxKind::CONST_KW) || at_let_declaration(p) {
            var_declaration(p, true);
        } else {
            expression(p);
        }
        p.at(SyntaxKind::IN_KW) || p.at_contextual("of")
    });

    if iterates {
        let is_of = p.at_contextual("of");
        p.bump(); // in | of
        if is_of {
            super::expressions::assignment_expr_allow_in(p);
        } else {
            expression_allow_in(p);
        }
    } else {
        p.expect(SyntaxKind::SEMICOLON);
        if !p.at(SyntaxKind::SEMICOLON) {
            expression_allow_in(p);
        }
        p.expect(SyntaxKind::SEMICOLON);
        if !p.at(SyntaxKind::R_PAREN) {
            expression_allow_in(p);
        }
    }
    p.expect(SyntaxKind::R_PAREN);
    loop_body(p);
    p.finish_node();
}

/// WhileStmt = 'while' '(' Expression ')' Statement
fn while_statement<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::WHILE_STMT);
    p.bump();
    paren_condition(p);
    loop_body(p);
    p.finish_node();
}

/// DoWhileStmt = 'do' Statement 'while' '(' Expression ')' ';'?
fn do_while_statement<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::DO_WHILE_STMT);
    p.bump(); // do
    loop_body(p);
    p.expect(SyntaxKind::WHILE_KW);
    paren_condition(p);
    p.eat(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// ReturnStmt = 'return' Expression? ';'   (no line break before the expression)
fn return_statement<P: ScriptParser>(p: &mut P) {
    if !p.context().in_function {
        let range = p.current_range();
        p.error(SyntaxError::new(
            "'return' outside of a function",
            range,
            ErrorCode::E0405,
        ));
        return;
    }
    p.start_node(SyntaxKind::RETURN_STMT);
    p.bump();
    if !at_statement_end(p) {
        expression_allow_in(p);
    }
    consume_semicolon(p);
    p.finish_node();
}

/// BreakStmt = 'break' Label? ';'
/// ContinueStmt = 'continue' Label? ';'
fn jump_statement<P: ScriptParser>(p: &mut P, kind: SyntaxKind) {
    let ctx = p.context();
    let keyword = p.current_range();
    p.start_node(kind);
    p.bump();
    if p.at(SyntaxKind::IDENT) && !p.has_line_break_before() {
        p.bump(); // label
    } else if kind == SyntaxKind::BREAK_STMT && !ctx.in_iteration && !ctx.in_switch {
        p.error(SyntaxError::new(
            "'break' outside of a loop or switch",
            keyword,
            ErrorCode::E0405,
        ));
    } else if kind == SyntaxKind::CONTINUE_STMT && !ctx.in_iteration {
        p.error(SyntaxError::new("'continue' outside of a loop", keyword, ErrorCode::E0405));
    }
    consume_semicolon(p);
    p.finish_node();
}

/// ThrowStmt = 'throw' Expression ';'   (no line break after 'throw')
fn throw_statement<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::THROW_STMT);
    p.bump();
    if p.has_line_break_before() {
        let range = p.current_range();
        p.error(SyntaxError::new("illegal line break after 'throw'", range, ErrorCode::E0402));
    } else {
        expression_allow_in(p);
        consume_semicolon(p);
    }
    p.finish_node();
}

/// TryStmt = 'try' Block CatchClause? FinallyClause?
/// CatchClause = 'catch' ('(' Binding TypeAnnotation? ')')? Block
fn try_statement<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TRY_STMT);
    p.bump(); // try
    block(p);
    let mut handled = false;
    if p.at(SyntaxKind::CATCH_KW) {
        handled = true;
        p.start_node(SyntaxKind::CATCH_CLAUSE);
        p.bump();
        if p.eat(SyntaxKind::L_PAREN) {
            binding_target(p, "a catch binding", ErrorCode::E0301);
            if p.flags().types && p.at(SyntaxKind::COLON) {
                type_annotation(p);
            }
            p.expect(SyntaxKind::R_PAREN);
        }
        block(p);
        p.finish_node();
    }
    if p.at(SyntaxKind::FINALLY_KW) {
        handled = true;
        p.start_node(SyntaxKind::FINALLY_CLAUSE);
        p.bump();
        block(p);
        p.finish_node();
    }
    if !handled {
        p.error_expected("'catch' or 'finally'", ErrorCode::E0902);
    }
    p.finish_node();
}

/// SwitchStmt = 'switch' '(' Expression ')' '{' SwitchCase* '}'
/// SwitchCase = ('case' Expression | 'default') ':' Statement*
fn switch_statement<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::SWITCH_STMT);
    p.bump();
    paren_condition(p);
    p.expect(SyntaxKind::L_BRACE);
    let ctx = Context {
        in_switch: true,
        ..p.context().block()
    };
    with_context(p, ctx, |p| {
        while p.at(SyntaxKind::CASE_KW) || p.at(SyntaxKind::DEFAULT_KW) {
            p.start_node(SyntaxKind::SWITCH_CASE);
            if p.eat(SyntaxKind::CASE_KW) {
                expression_allow_in(p);
            } else {
                p.bump(); // default
            }
            p.expect(SyntaxKind::COLON);
            while !p.at_any(&[SyntaxKind::CASE_KW, SyntaxKind::DEFAULT_KW, SyntaxKind::R_BRACE])
                && !p.at_eof()
            {
                statement(p);
            }
            p.finish_node();
        }
    });
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// WithStmt = 'with' '(' Expression ')' Statement
fn with_statement<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::WITH_STMT);
    p.bump();
    paren_condition(p);
    nested_statement(p);
    p.finish_node();
}

/// LabeledStmt = Identifier ':' Statement
fn labeled_statement<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::LABELED_STMT);
    p.bump(); // label
    p.bump(); // :
    statement(p);
    p.finish_node();
}

/// ExpressionStmt = Expression ';'
fn expression_statement<P: ScriptParser>(p: &mut P) {
    if !is_expression_start(p.current(), p.flags()) {
        p.error_expected("a statement", ErrorCode::E0205);
        return;
    }
    p.start_node(SyntaxKind::EXPR_STMT);
    expression_allow_in(p);
    consume_semicolon(p);
    p.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::parser::{parse, ErrorCode, GrammarFlags};

    fn accepts(source: &str) -> bool {
        parse(source, GrammarFlags::plain()).ok()
    }

    fn first_message(source: &str) -> Option<String> {
        parse(source, GrammarFlags::plain())
            .first_error()
            .map(|e| e.message.clone())
    }

    #[test]
    fn test_control_flow() {
        let source = r#"
            outer: for (let i = 0, j = 10; i < j; i++) {
                if (i % 2) continue outer; else break;
            }
            for (const key in obj) {}
            for (const [k, v] of Object.entries(obj)) { console.log(k, v) }
            for (;;) { break }
            while (x--) x;
            do { x++ } while (x < 3)
            switch (x) { case 1: case 2: y(); break; default: z() }
            try { risky() } catch { recover() } finally { done() }
            try { risky() } catch ({ message }) {}
            label: { break label; }
            debugger;
            ;
        "#;
        assert!(accepts(source), "{:?}", first_message(source));
    }

    #[test]
    fn test_automatic_semicolons() {
        assert!(accepts("let a = 1\nlet b = 2\na\n++b\n"));
        assert!(accepts("function f() { return\n42 }"));
        assert!(accepts("{ x = 1 } y = 2"));
        assert_eq!(
            first_message("let a = 1 let b = 2").as_deref(),
            Some("expected ';', found 'let'")
        );
    }

    #[test]
    fn test_in_operator_inside_for_heads() {
        assert!(accepts("for (var i = 0, n = ('a' in o) ? 1 : 2; i < n; i++) {}"));
        assert!(accepts("for (const k in { a: 1 }) {}"));
    }

    #[test]
    fn test_top_level_await_and_for_await() {
        assert!(accepts("const data = await fetch(url);"));
        assert!(accepts("for await (const chunk of stream) {}"));
        assert!(accepts("async function f() { for await (const x of xs) {} }"));
    }

    #[test]
    fn test_misplaced_statements() {
        let parsed = parse("return 1;", GrammarFlags::plain());
        assert_eq!(parsed.first_error().map(|e| e.code), Some(ErrorCode::E0405));
        assert_eq!(
            first_message("break;").as_deref(),
            Some("'break' outside of a loop or switch")
        );
        let parsed = parse("function f() { import x from 'y'; }", GrammarFlags::plain());
        assert_eq!(parsed.first_error().map(|e| e.code), Some(ErrorCode::E0502));
    }

    #[test]
    fn test_try_requires_handler() {
        assert_eq!(
            first_message("try {} x();").as_deref(),
            Some("expected 'catch' or 'finally', found 'x'")
        );
    }

    #[test]
    fn test_throw_requires_same_line() {
        let parse = parse("throw\nnew Error('x');", GrammarFlags::plain());
        assert_eq!(parse.first_error().map(|e| e.code), Some(ErrorCode::E0402));
    }

    #[test]
    fn test_unclosed_block() {
        let parse = parse("function f() {\n  return 1;\n", GrammarFlags::plain());
        let error = parse.first_error().expect("error");
        assert_eq!(error.message, "expected '}', found end of input");
        assert_eq!(error.code, ErrorCode::E0202);
    }

    #[test]
    fn test_stray_closing_brace() {
        assert_eq!(first_message("}").as_deref(), Some("expected a statement, found '}'"));
    }
}
