//! Expression parsing
//!
//! This module implements the expression precedence chain:
//!
//! ```text
//! Expression → AssignmentExpression (yield, arrows) → ConditionalExpression
//!     → BinaryExpression (?? || && | ^ & equality relational shift
//!       additive multiplicative **) → UnaryExpression → PostfixExpression
//!     → CallChain → PrimaryExpression
//! ```
//!
//! Every level returns `true` when it produced an arrow function. An arrow
//! is a complete AssignmentExpression, so no operator may follow it.

// Submodules
mod chains;
mod primary;

// Shared imports; submodules pick them up via `use super::*;`
use super::*;
use super::declarations::{class_with_decorators, function, function_body, method_tail};
use super::jsx::jsx_element;
use super::types::{return_type, type_annotation, type_args, type_expr, type_params};

pub(super) use self::chains::{arguments, call_chain, lhs_expr};
pub(super) use self::primary::{property_name, property_name_follows, template};

/// Expression = AssignmentExpression (',' AssignmentExpression)*
pub(super) fn expression<P: ScriptParser>(p: &mut P) {
    let cp = p.checkpoint();
    assignment_expr(p);
    if p.at(SyntaxKind::COMMA) {
        p.start_node_at(cp, SyntaxKind::SEQUENCE_EXPR);
        while p.eat(SyntaxKind::COMMA) {
            assignment_expr(p);
        }
        p.finish_node();
    }
}

/// Expression with `in` re-enabled (inside brackets, arguments, bodies)
pub(super) fn expression_allow_in<P: ScriptParser>(p: &mut P) {
    let ctx = p.context().with_no_in(false);
    with_context(p, ctx, expression);
}

/// AssignmentExpression = YieldExpression | ArrowFunction
///     | ConditionalExpression (AssignOp AssignmentExpression)?
pub(super) fn assignment_expr<P: ScriptParser>(p: &mut P) -> bool {
    if !p.enter() {
        return false;
    }
    let arrow = assignment_inner(p);
    p.exit();
    arrow
}

fn assignment_inner<P: ScriptParser>(p: &mut P) -> bool {
    if p.at_contextual("yield") && p.context().in_generator {
        yield_expr(p);
        return false;
    }

    let cp = p.checkpoint();
    if conditional_expr(p) {
        return true;
    }
    if let Some((kind, len)) = assign_op(p) {
        p.start_node_at(cp, SyntaxKind::ASSIGN_EXPR);
        p.bump_joined(len, kind);
        assignment_expr(p);
        p.finish_node();
    }
    false
}

/// AssignmentExpression with `in` re-enabled
pub(super) fn assignment_expr_allow_in<P: ScriptParser>(p: &mut P) -> bool {
    let ctx = p.context().with_no_in(false);
    with_context(p, ctx, assignment_expr)
}

/// YieldExpression = 'yield' ('*'? AssignmentExpression)?
fn yield_expr<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::YIELD_EXPR);
    p.bump(); // yield
    if !p.has_line_break_before() {
        let delegate = p.eat(SyntaxKind::STAR);
        if delegate || is_expression_start(p.current(), p.flags()) {
            assignment_expr(p);
        }
    }
    p.finish_node();
}

fn assign_op<P: ScriptParser>(p: &mut P) -> Option<(SyntaxKind, usize)> {
    let kind = p.current();
    if kind.is_assign_op() {
        return Some((kind, 1));
    }
    if kind == SyntaxKind::GT {
        return match gt_compound(p) {
            (joined @ (SyntaxKind::GT_GT_EQ | SyntaxKind::GT_GT_GT_EQ), len) => Some((joined, len)),
            _ => None,
        };
    }
    None
}

/// The lexer never joins `>`, so `>=`, `>>`, `>>=`, `>>>` and `>>>=` are
/// assembled here from adjacent tokens
fn gt_compound<P: ScriptParser>(p: &mut P) -> (SyntaxKind, usize) {
    match (p.glued(1), p.glued(2), p.glued(3)) {
        (SyntaxKind::GT, SyntaxKind::GT, SyntaxKind::EQ) => (SyntaxKind::GT_GT_GT_EQ, 4),
        (SyntaxKind::GT, SyntaxKind::GT, _) => (SyntaxKind::GT_GT_GT, 3),
        (SyntaxKind::GT, SyntaxKind::EQ, _) => (SyntaxKind::GT_GT_EQ, 3),
        (SyntaxKind::GT, _, _) => (SyntaxKind::GT_GT, 2),
        (SyntaxKind::EQ, _, _) => (SyntaxKind::GT_EQ, 2),
        _ => (SyntaxKind::GT, 1),
    }
}

/// ConditionalExpression = BinaryExpression ('?' AssignmentExpression ':' AssignmentExpression)?
fn conditional_expr<P: ScriptParser>(p: &mut P) -> bool {
    let cp = p.checkpoint();
    if binary_expr(p, 0) {
        return true;
    }
    if p.at(SyntaxKind::QUESTION) && !at_optional_marker(p) {
        p.start_node_at(cp, SyntaxKind::COND_EXPR);
        p.bump(); // ?
        let ctx = Context {
            in_consequent: true,
            ..p.context().with_no_in(false)
        };
        with_context(p, ctx, assignment_expr);
        p.expect(SyntaxKind::COLON);
        assignment_expr(p);
        p.finish_node();
    }
    false
}

/// `(a?: T)`, `(a?, b)`, `(a?)` and `(a? = 1)` mark optional arrow parameters
fn at_optional_marker<P: ScriptParser>(p: &mut P) -> bool {
    p.flags().types
        && matches!(
            p.nth(1),
            SyntaxKind::COLON | SyntaxKind::COMMA | SyntaxKind::R_PAREN | SyntaxKind::EQ
        )
}

/// A binary operator: precedence, token count and (joined) kind
struct BinaryOp {
    prec: u8,
    len: usize,
    kind: SyntaxKind,
}

fn binary_op<P: ScriptParser>(p: &mut P) -> Option<BinaryOp> {
    let op = |prec, kind| Some(BinaryOp { prec, len: 1, kind });
    match p.current() {
        SyntaxKind::QUESTION_QUESTION => op(1, SyntaxKind::QUESTION_QUESTION),
        SyntaxKind::PIPE_PIPE => op(2, SyntaxKind::PIPE_PIPE),
        SyntaxKind::AMP_AMP => op(3, SyntaxKind::AMP_AMP),
        SyntaxKind::PIPE => op(4, SyntaxKind::PIPE),
        SyntaxKind::CARET => op(5, SyntaxKind::CARET),
        SyntaxKind::AMP => op(6, SyntaxKind::AMP),
        kind @ (SyntaxKind::EQ_EQ | SyntaxKind::EQ_EQ_EQ | SyntaxKind::BANG_EQ | SyntaxKind::BANG_EQ_EQ) => {
            op(7, kind)
        }
        kind @ (SyntaxKind::LT | SyntaxKind::LT_EQ | SyntaxKind::INSTANCEOF_KW) => op(8, kind),
        SyntaxKind::IN_KW if !p.context().no_in => op(8, SyntaxKind::IN_KW),
        SyntaxKind::GT => match gt_compound(p) {
            (kind @ (SyntaxKind::GT | SyntaxKind::GT_EQ), len) => Some(BinaryOp { prec: 8, len, kind }),
            (kind @ (SyntaxKind::GT_GT | SyntaxKind::GT_GT_GT), len) => Some(BinaryOp { prec: 9, len, kind }),
            _ => None,
        },
        SyntaxKind::LT_LT => op(9, SyntaxKind::LT_LT),
        kind @ (SyntaxKind::PLUS | SyntaxKind::MINUS) => op(10, kind),
        kind @ (SyntaxKind::STAR | SyntaxKind::SLASH | SyntaxKind::PERCENT) => op(11, kind),
        SyntaxKind::STAR_STAR => op(12, SyntaxKind::STAR_STAR),
        SyntaxKind::IDENT
            if p.flags().types
                && (p.at_contextual("as") || p.at_contextual("satisfies"))
                && !p.has_line_break_before() =>
        {
            op(8, SyntaxKind::AS_EXPR)
        }
        _ => None,
    }
}

/// BinaryExpression by precedence climbing; `**` is right-associative.
///
/// A run of same-precedence operators becomes one flat node, so the tree
/// only deepens with the source's own nesting.
fn binary_expr<P: ScriptParser>(p: &mut P, min_prec: u8) -> bool {
    let cp = p.checkpoint();
    if unary_expr(p) {
        return true;
    }
    // Precedence and node kind of the run not yet wrapped
    let mut run: Option<(u8, SyntaxKind)> = None;
    while let Some(op) = binary_op(p) {
        if op.prec <= min_prec {
            break;
        }
        let node = if op.kind == SyntaxKind::AS_EXPR {
            SyntaxKind::AS_EXPR
        } else {
            SyntaxKind::BIN_EXPR
        };
        run = match run {
            // `a as T < b` mixes kinds at one level
            Some((prec, kind)) if prec == op.prec && kind != node => Some((prec, SyntaxKind::BIN_EXPR)),
            Some((prec, kind)) if prec == op.prec => Some((prec, kind)),
            Some((_, kind)) => {
                p.start_node_at(cp, kind);
                p.finish_node();
                Some((op.prec, node))
            }
            None => Some((op.prec, node)),
        };

        if op.kind == SyntaxKind::AS_EXPR {
            p.bump(); // as | satisfies
            if !p.eat(SyntaxKind::CONST_KW) {
                type_expr(p);
            }
            continue;
        }
        p.bump_joined(op.len, op.kind);
        if op.kind == SyntaxKind::STAR_STAR {
            if !p.enter() {
                break;
            }
            binary_expr(p, op.prec - 1);
            p.exit();
        } else {
            binary_expr(p, op.prec);
        }
    }
    if let Some((_, kind)) = run {
        p.start_node_at(cp, kind);
        p.finish_node();
    }
    false
}

/// UnaryExpression = ('!' | '~' | '+' | '-' | 'typeof' | 'void' | 'delete' | 'await') UnaryExpression
///     | ('++' | '--') UnaryExpression
///     | '<' Type '>' UnaryExpression
///     | PostfixExpression
fn unary_expr<P: ScriptParser>(p: &mut P) -> bool {
    if !p.enter() {
        return false;
    }
    let arrow = unary_inner(p);
    p.exit();
    arrow
}

fn unary_inner<P: ScriptParser>(p: &mut P) -> bool {
    match p.current() {
        SyntaxKind::BANG
        | SyntaxKind::TILDE
        | SyntaxKind::PLUS
        | SyntaxKind::MINUS
        | SyntaxKind::TYPEOF_KW
        | SyntaxKind::VOID_KW
        | SyntaxKind::DELETE_KW => {
            p.start_node(SyntaxKind::UNARY_EXPR);
            p.bump();
            unary_expr(p);
            p.finish_node();
            false
        }
        SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS => {
            p.start_node(SyntaxKind::UPDATE_EXPR);
            p.bump();
            unary_expr(p);
            p.finish_node();
            false
        }
        SyntaxKind::IDENT if at_await(p) => {
            p.start_node(SyntaxKind::AWAIT_EXPR);
            p.bump(); // await
            unary_expr(p);
            p.finish_node();
            false
        }
        SyntaxKind::LT if p.flags().angle_assertions() && !primary::at_generic_arrow(p) => {
            p.start_node(SyntaxKind::TYPE_ASSERTION);
            p.bump(); // <
            type_expr(p);
            p.expect(SyntaxKind::GT);
            unary_expr(p);
            p.finish_node();
            false
        }
        _ => postfix_expr(p),
    }
}

/// `await` is an operator in async functions and at the top level of a module
fn at_await<P: ScriptParser>(p: &P) -> bool {
    let ctx = p.context();
    p.at_contextual("await") && (ctx.in_async || !ctx.in_function)
}

/// PostfixExpression = CallChain ('++' | '--')?   (no line break before the operator)
fn postfix_expr<P: ScriptParser>(p: &mut P) -> bool {
    let cp = p.checkpoint();
    if call_chain(p) {
        return true;
    }
    if p.at_any(&[SyntaxKind::PLUS_PLUS, SyntaxKind::MINUS_MINUS]) && !p.has_line_break_before() {
        p.start_node_at(cp, SyntaxKind::UPDATE_EXPR);
        p.bump();
        p.finish_node();
    }
    false
}

/// Whether a token can begin an expression
pub(super) fn is_expression_start(kind: SyntaxKind, flags: GrammarFlags) -> bool {
    match kind {
        SyntaxKind::IDENT
        | SyntaxKind::PRIVATE_NAME
        | SyntaxKind::NUMBER
        | SyntaxKind::STRING
        | SyntaxKind::REGEX
        | SyntaxKind::TEMPLATE_FULL
        | SyntaxKind::TEMPLATE_HEAD
        | SyntaxKind::SLASH
        | SyntaxKind::SLASH_EQ
        | SyntaxKind::L_PAREN
        | SyntaxKind::L_BRACKET
        | SyntaxKind::L_BRACE
        | SyntaxKind::BANG
        | SyntaxKind::TILDE
        | SyntaxKind::PLUS
        | SyntaxKind::MINUS
        | SyntaxKind::PLUS_PLUS
        | SyntaxKind::MINUS_MINUS
        | SyntaxKind::TYPEOF_KW
        | SyntaxKind::VOID_KW
        | SyntaxKind::DELETE_KW
        | SyntaxKind::THIS_KW
        | SyntaxKind::SUPER_KW
        | SyntaxKind::NULL_KW
        | SyntaxKind::TRUE_KW
        | SyntaxKind::FALSE_KW
        | SyntaxKind::FUNCTION_KW
        | SyntaxKind::CLASS_KW
        | SyntaxKind::NEW_KW
        | SyntaxKind::IMPORT_KW => true,
        SyntaxKind::AT => flags.decorators,
        SyntaxKind::LT => flags.types || flags.markup,
        _ => false,
    }
}
