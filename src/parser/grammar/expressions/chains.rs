//! Member access, calls, `new` and the other left-hand-side links

use super::*;

/// Lookahead budget for `f<T>(...)` detection
const TYPE_ARGS_LOOKAHEAD: usize = 256;

/// CallChain = (NewExpression | PrimaryExpression) ChainLink*
pub(crate) fn call_chain<P: ScriptParser>(p: &mut P) -> bool {
    let cp = p.checkpoint();
    if p.at(SyntaxKind::NEW_KW) {
        new_expr(p);
    } else if primary::primary_expr(p) {
        return true;
    }
    chain_links(p, cp, true);
    false
}

/// LeftHandSideExpression, as used by `extends` clauses and decorators
pub(crate) fn lhs_expr<P: ScriptParser>(p: &mut P) {
    call_chain(p);
}

/// ChainLink = '.' Name | '?.' (Name | Arguments | '[' Expression ']')
///     | '[' Expression ']' | Arguments | Template | '!' | TypeArgs Arguments
///
/// The links of one chain are siblings under a single node named after the
/// last link. With `allow_calls` unset (the callee of `new`) the chain stops
/// before any call or optional link.
fn chain_links<P: ScriptParser>(p: &mut P, cp: rowan::Checkpoint, allow_calls: bool) {
    let mut last = None;
    loop {
        let kind = match p.current() {
            SyntaxKind::DOT => {
                p.bump(); // .
                member_name(p);
                SyntaxKind::MEMBER_EXPR
            }
            SyntaxKind::QUESTION if allow_calls && p.glued(1) == SyntaxKind::DOT => optional_link(p),
            SyntaxKind::L_BRACKET => {
                p.bump(); // [
                expression_allow_in(p);
                p.expect(SyntaxKind::R_BRACKET);
                SyntaxKind::INDEX_EXPR
            }
            SyntaxKind::L_PAREN if allow_calls => {
                arguments(p);
                SyntaxKind::CALL_EXPR
            }
            SyntaxKind::TEMPLATE_FULL | SyntaxKind::TEMPLATE_HEAD => {
                template(p);
                SyntaxKind::TAGGED_TEMPLATE
            }
            SyntaxKind::BANG if p.flags().types && !p.has_line_break_before() => {
                p.bump(); // !
                SyntaxKind::NON_NULL_EXPR
            }
            SyntaxKind::LT if allow_calls && p.flags().types && at_type_args_call(p) => {
                type_args(p);
                if p.at(SyntaxKind::L_PAREN) {
                    arguments(p);
                } else {
                    template(p);
                }
                SyntaxKind::CALL_EXPR
            }
            _ => break,
        };
        last = Some(kind);
    }
    if let Some(kind) = last {
        p.start_node_at(cp, kind);
        p.finish_node();
    }
}

fn optional_link<P: ScriptParser>(p: &mut P) -> SyntaxKind {
    let kind = match p.nth(2) {
        SyntaxKind::L_PAREN => SyntaxKind::CALL_EXPR,
        SyntaxKind::L_BRACKET => SyntaxKind::INDEX_EXPR,
        SyntaxKind::LT if p.flags().types => SyntaxKind::CALL_EXPR,
        _ => SyntaxKind::MEMBER_EXPR,
    };
    p.bump_joined(2, SyntaxKind::QUESTION_DOT);
    match kind {
        SyntaxKind::CALL_EXPR => {
            if p.at(SyntaxKind::LT) {
                type_args(p);
            }
            arguments(p);
        }
        SyntaxKind::INDEX_EXPR => {
            p.bump(); // [
            expression_allow_in(p);
            p.expect(SyntaxKind::R_BRACKET);
        }
        _ => member_name(p),
    }
    kind
}

fn member_name<P: ScriptParser>(p: &mut P) {
    if p.current().is_identifier_name() || p.at(SyntaxKind::PRIVATE_NAME) {
        p.start_node(SyntaxKind::NAME_REF);
        p.bump();
        p.finish_node();
    } else {
        p.error_expected("a property name", ErrorCode::E0401);
    }
}

/// Arguments = '(' (('...')? AssignmentExpression (',' ...)* ','?)? ')'
pub(crate) fn arguments<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::ARG_LIST);
    p.expect(SyntaxKind::L_PAREN);
    let ctx = p.context().with_no_in(false);
    with_context(p, ctx, |p| {
        while !p.at(SyntaxKind::R_PAREN) && !p.at_eof() {
            if p.at(SyntaxKind::DOT_DOT_DOT) {
                p.start_node(SyntaxKind::SPREAD);
                p.bump();
                assignment_expr(p);
                p.finish_node();
            } else {
                assignment_expr(p);
            }
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
        }
    });
    p.expect(SyntaxKind::R_PAREN);
    p.finish_node();
}

/// NewExpression = 'new' '.' 'target'
///     | 'new' MemberExpression TypeArgs? Arguments?
fn new_expr<P: ScriptParser>(p: &mut P) {
    if p.nth_at(1, SyntaxKind::DOT) {
        p.start_node(SyntaxKind::META_PROPERTY);
        p.bump(); // new
        p.bump(); // .
        if !p.eat_contextual("target") {
            p.error_expected("'target'", ErrorCode::E0902);
        }
        p.finish_node();
        return;
    }

    p.start_node(SyntaxKind::NEW_EXPR);
    p.bump(); // new
    let cp = p.checkpoint();
    if p.at(SyntaxKind::NEW_KW) {
        if !p.enter() {
            p.finish_node();
            return;
        }
        new_expr(p);
        p.exit();
    } else {
        primary::primary_expr(p);
    }
    chain_links(p, cp, false);
    if p.at(SyntaxKind::LT) && p.flags().types && at_type_args_call(p) {
        type_args(p);
    }
    if p.at(SyntaxKind::L_PAREN) {
        arguments(p);
    }
    p.finish_node();
}

/// Decide whether `<` opens type arguments of a call (`f<T>(x)`) rather
/// than a comparison, by scanning to the matching `>`
fn at_type_args_call<P: ScriptParser>(p: &mut P) -> bool {
    let mut angle = 0usize;
    let mut nested = 0usize;
    for i in 0..TYPE_ARGS_LOOKAHEAD {
        match p.nth(i) {
            SyntaxKind::LT => angle += 1,
            SyntaxKind::GT => {
                angle -= 1;
                if angle == 0 {
                    return matches!(
                        p.nth(i + 1),
                        SyntaxKind::L_PAREN | SyntaxKind::TEMPLATE_FULL | SyntaxKind::TEMPLATE_HEAD
                    );
                }
            }
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => nested += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                if nested == 0 {
                    return false;
                }
                nested -= 1;
            }
            SyntaxKind::EOF
            | SyntaxKind::SEMICOLON
            | SyntaxKind::AMP_AMP
            | SyntaxKind::PIPE_PIPE
            | SyntaxKind::PLUS_PLUS
            | SyntaxKind::MINUS_MINUS
            | SyntaxKind::QUESTION_QUESTION
            | SyntaxKind::EQ_EQ
            | SyntaxKind::EQ_EQ_EQ
            | SyntaxKind::BANG_EQ
            | SyntaxKind::BANG_EQ_EQ => return false,
            _ => {}
        }
    }
    false
}
