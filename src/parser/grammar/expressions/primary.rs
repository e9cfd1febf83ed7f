//! Primary expressions: literals, names, arrows, object and array
//! literals, templates, function and class expressions

use super::*;

/// Lookahead budget when deciding whether `(...)` is followed by `: T =>`
const ARROW_LOOKAHEAD: usize = 512;

/// PrimaryExpression = Identifier | Literal | Template | ArrayLiteral
///     | ObjectLiteral | ParenthesizedOrArrow | FunctionExpression
///     | ClassExpression | ImportCall | ImportMeta | JsxElement
pub(super) fn primary_expr<P: ScriptParser>(p: &mut P) -> bool {
    match p.current() {
        SyntaxKind::IDENT => identifier_or_arrow(p),
        SyntaxKind::THIS_KW | SyntaxKind::SUPER_KW => {
            name_ref(p);
            false
        }
        SyntaxKind::NUMBER
        | SyntaxKind::STRING
        | SyntaxKind::NULL_KW
        | SyntaxKind::TRUE_KW
        | SyntaxKind::FALSE_KW => {
            p.start_node(SyntaxKind::LITERAL);
            p.bump();
            p.finish_node();
            false
        }
        SyntaxKind::SLASH | SyntaxKind::SLASH_EQ | SyntaxKind::REGEX => {
            regex_literal(p);
            false
        }
        SyntaxKind::TEMPLATE_FULL | SyntaxKind::TEMPLATE_HEAD => {
            template(p);
            false
        }
        SyntaxKind::L_PAREN => {
            let cp = p.checkpoint();
            paren_or_arrow(p, cp, ArrowPrefix::default())
        }
        SyntaxKind::L_BRACKET => {
            array_literal(p);
            false
        }
        SyntaxKind::L_BRACE => {
            object_literal(p);
            false
        }
        SyntaxKind::FUNCTION_KW => {
            function(p, SyntaxKind::FN_EXPR, false);
            false
        }
        SyntaxKind::CLASS_KW => {
            class_with_decorators(p, SyntaxKind::CLASS_EXPR, false);
            false
        }
        SyntaxKind::AT if p.flags().decorators => {
            class_with_decorators(p, SyntaxKind::CLASS_EXPR, false);
            false
        }
        SyntaxKind::IMPORT_KW => {
            import_call_or_meta(p);
            false
        }
        SyntaxKind::PRIVATE_NAME if p.nth_at(1, SyntaxKind::IN_KW) => {
            name_ref(p);
            false
        }
        SyntaxKind::LT if p.flags().markup => {
            if at_generic_arrow(p) {
                generic_arrow(p, None)
            } else {
                jsx_element(p, false);
                false
            }
        }
        SyntaxKind::LT if p.flags().types => generic_arrow(p, None),
        _ => {
            p.error_expected("an expression", ErrorCode::E0401);
            false
        }
    }
}

fn name_ref<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::NAME_REF);
    p.bump();
    p.finish_node();
}

fn regex_literal<P: ScriptParser>(p: &mut P) {
    p.relex_regex();
    if p.at(SyntaxKind::REGEX) {
        p.start_node(SyntaxKind::LITERAL);
        p.bump();
        p.finish_node();
    } else {
        p.error_expected("an expression", ErrorCode::E0401);
    }
}

/// `<T,>(...)` and `<T extends U>(...)` in markup grammars, and
/// `<T>(...) =>` in the typed grammar, start a generic arrow
pub(super) fn at_generic_arrow<P: ScriptParser>(p: &mut P) -> bool {
    if !p.nth_at(1, SyntaxKind::IDENT) {
        return false;
    }
    match p.nth(2) {
        SyntaxKind::COMMA => true,
        SyntaxKind::EXTENDS_KW => true,
        SyntaxKind::EQ => !p.flags().markup,
        SyntaxKind::GT => !p.flags().markup && p.nth_at(3, SyntaxKind::L_PAREN),
        _ => false,
    }
}

// =============================================================================
// Arrow functions
// =============================================================================

/// What precedes the parenthesized part of a possible arrow
#[derive(Debug, Clone, Copy, Default)]
struct ArrowPrefix {
    is_async: bool,
    generic: bool,
}

/// Identifier, `x => ...`, `async x => ...`, `async (...)`, `async function`
fn identifier_or_arrow<P: ScriptParser>(p: &mut P) -> bool {
    if p.at_contextual("async") && !p.nth_has_line_break_before(1) {
        match p.nth(1) {
            SyntaxKind::FUNCTION_KW => {
                function(p, SyntaxKind::FN_EXPR, false);
                return false;
            }
            SyntaxKind::IDENT if p.nth_at(2, SyntaxKind::FAT_ARROW) && !p.nth_has_line_break_before(2) => {
                return simple_arrow(p, true);
            }
            SyntaxKind::L_PAREN => {
                let cp = p.checkpoint();
                p.bump(); // async
                let prefix = ArrowPrefix {
                    is_async: true,
                    generic: false,
                };
                return paren_or_arrow(p, cp, prefix);
            }
            SyntaxKind::LT if p.flags().types => {
                let cp = p.checkpoint();
                p.bump(); // async
                return generic_arrow(p, Some(cp));
            }
            _ => {}
        }
    }

    if p.nth_at(1, SyntaxKind::FAT_ARROW) && !p.nth_has_line_break_before(1) {
        return simple_arrow(p, false);
    }
    name_ref(p);
    false
}

/// ArrowFunction = 'async'? Identifier '=>' ArrowBody
fn simple_arrow<P: ScriptParser>(p: &mut P, is_async: bool) -> bool {
    p.start_node(SyntaxKind::ARROW_FN);
    if is_async {
        p.bump(); // async
    }
    p.start_node(SyntaxKind::PARAM_LIST);
    p.start_node(SyntaxKind::PARAM);
    p.start_node(SyntaxKind::NAME);
    p.bump();
    p.finish_node();
    p.finish_node();
    p.finish_node();
    p.bump(); // =>
    arrow_body(p, is_async);
    p.finish_node();
    true
}

/// ArrowBody = FunctionBody | AssignmentExpression
fn arrow_body<P: ScriptParser>(p: &mut P, is_async: bool) {
    let outer = p.context();
    let ctx = outer.function(is_async, false).with_no_in(outer.no_in);
    if p.at(SyntaxKind::L_BRACE) {
        with_context(p, ctx.with_no_in(false), function_body);
    } else {
        with_context(p, ctx, assignment_expr);
    }
}

/// TypeParams followed by a parenthesized parameter list
fn generic_arrow<P: ScriptParser>(p: &mut P, async_cp: Option<rowan::Checkpoint>) -> bool {
    let cp = async_cp.unwrap_or_else(|| p.checkpoint());
    type_params(p);
    if !p.at(SyntaxKind::L_PAREN) {
        p.error_expected("'('", ErrorCode::E0403);
        return false;
    }
    let prefix = ArrowPrefix {
        is_async: async_cp.is_some(),
        generic: true,
    };
    paren_or_arrow(p, cp, prefix)
}

/// Parenthesized expression, arrow parameters, or the arguments of an
/// `async(...)` call. The contents are parsed once as expressions and the
/// node kind is decided at the closing parenthesis.
fn paren_or_arrow<P: ScriptParser>(p: &mut P, outer: rowan::Checkpoint, prefix: ArrowPrefix) -> bool {
    let params_cp = p.checkpoint();
    p.bump(); // (
    let mut arrow_only = p.at(SyntaxKind::R_PAREN);
    let mut type_syntax = false;

    let ctx = p.context().with_no_in(false);
    with_context(p, ctx, |p| {
        while !p.at(SyntaxKind::R_PAREN) && !p.at_eof() {
            if p.at(SyntaxKind::DOT_DOT_DOT) {
                arrow_only = true;
                p.start_node(SyntaxKind::SPREAD);
                p.bump();
                assignment_expr(p);
                p.finish_node();
            } else {
                assignment_expr(p);
            }
            if p.flags().types {
                if p.eat(SyntaxKind::QUESTION) {
                    type_syntax = true;
                }
                if p.at(SyntaxKind::COLON) {
                    type_syntax = true;
                    type_annotation(p);
                }
                if type_syntax && p.eat(SyntaxKind::EQ) {
                    assignment_expr(p);
                }
            }
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
            if p.at(SyntaxKind::R_PAREN) && !prefix.is_async {
                arrow_only = true;
            }
        }
    });
    p.expect(SyntaxKind::R_PAREN);

    let is_arrow = (p.at(SyntaxKind::FAT_ARROW) && !p.has_line_break_before())
        || (p.flags().types && p.at(SyntaxKind::COLON) && typed_arrow_follows(p));

    if is_arrow {
        p.start_node_at(params_cp, SyntaxKind::PARAM_LIST);
        p.finish_node();
        p.start_node_at(outer, SyntaxKind::ARROW_FN);
        if p.at(SyntaxKind::COLON) {
            return_type(p);
        }
        p.expect(SyntaxKind::FAT_ARROW);
        arrow_body(p, prefix.is_async);
        p.finish_node();
        return true;
    }

    if prefix.generic && !arrow_only && !type_syntax && p.flags().angle_assertions() {
        // `<T>(x)` was a type assertion after all
        p.start_node_at(params_cp, SyntaxKind::PAREN_EXPR);
        p.finish_node();
        p.start_node_at(outer, SyntaxKind::TYPE_ASSERTION);
        p.finish_node();
        return false;
    }
    if prefix.is_async && !prefix.generic && !type_syntax {
        p.start_node_at(params_cp, SyntaxKind::ARG_LIST);
        p.finish_node();
        p.start_node_at(outer, SyntaxKind::CALL_EXPR);
        p.finish_node();
        return false;
    }
    if arrow_only || type_syntax || prefix.generic || prefix.is_async {
        p.error_expected("'=>'", ErrorCode::E0403);
        return false;
    }
    p.start_node_at(params_cp, SyntaxKind::PAREN_EXPR);
    p.finish_node();
    false
}

/// After `)`, whether `: ReturnType =>` follows. In the `?` branch of a
/// conditional the arrow's body must also be followed by that
/// conditional's `:`, otherwise the `:` belongs to the conditional.
fn typed_arrow_follows<P: ScriptParser>(p: &mut P) -> bool {
    let Some(arrow) = return_type_then_arrow(p) else {
        return false;
    };
    !p.context().in_consequent || colon_after_arrow_body(p, arrow)
}

/// Lookahead index of the `=>` closing `: ReturnType =>`
fn return_type_then_arrow<P: ScriptParser>(p: &mut P) -> Option<usize> {
    let mut depth = 0usize;
    for i in 1..ARROW_LOOKAHEAD {
        match p.nth(i) {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE | SyntaxKind::LT => depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE | SyntaxKind::GT => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            SyntaxKind::FAT_ARROW if depth == 0 => return Some(i),
            SyntaxKind::COMMA | SyntaxKind::EQ if depth == 0 => return None,
            SyntaxKind::SEMICOLON | SyntaxKind::EOF => return None,
            _ => {}
        }
    }
    None
}

/// Scan an arrow body starting after the `=>` at lookahead index `arrow`
/// for the `:` of the enclosing conditional. A closing bracket first means
/// the arrow sits inside a nested literal or call, where it is unambiguous.
fn colon_after_arrow_body<P: ScriptParser>(p: &mut P, arrow: usize) -> bool {
    let mut depth = 0usize;
    // Conditionals inside the body still waiting for their `:`
    let mut pending = 0usize;
    for i in arrow + 1..arrow + ARROW_LOOKAHEAD {
        match p.nth(i) {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                if depth == 0 {
                    return true;
                }
                depth -= 1;
            }
            SyntaxKind::QUESTION if depth == 0 && p.nth(i + 1) != SyntaxKind::DOT => pending += 1,
            SyntaxKind::COLON if depth == 0 => {
                if pending == 0 {
                    return true;
                }
                pending -= 1;
            }
            SyntaxKind::SEMICOLON if depth == 0 => return false,
            SyntaxKind::EOF => return false,
            _ => {}
        }
    }
    true
}

// =============================================================================
// Templates
// =============================================================================

/// Template = TEMPLATE_FULL
///     | TEMPLATE_HEAD Expression (TEMPLATE_MIDDLE Expression)* TEMPLATE_TAIL
pub(crate) fn template<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TEMPLATE);
    if p.at(SyntaxKind::TEMPLATE_FULL) {
        p.bump();
        p.finish_node();
        return;
    }

    let head = p.current_range();
    p.bump(); // `...${
    loop {
        expression_allow_in(p);
        if p.at(SyntaxKind::R_BRACE) {
            p.relex_template_continuation();
            match p.current() {
                SyntaxKind::TEMPLATE_MIDDLE => p.bump(),
                SyntaxKind::TEMPLATE_TAIL => {
                    p.bump();
                    break;
                }
                _ => {
                    p.error_expected("the end of the template", ErrorCode::E0104);
                    break;
                }
            }
        } else if p.at_eof() && !p.has_failed() {
            p.error(SyntaxError::from_code(ErrorCode::E0104, head));
            break;
        } else {
            p.error_expected("'}'", ErrorCode::E0404);
            break;
        }
    }
    p.finish_node();
}

// =============================================================================
// Array and object literals
// =============================================================================

/// ArrayLiteral = '[' (Elision | '...'? AssignmentExpression) (',' ...)* ']'
fn array_literal<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::ARRAY_EXPR);
    p.bump(); // [
    let ctx = p.context().with_no_in(false);
    with_context(p, ctx, |p| {
        while !p.at(SyntaxKind::R_BRACKET) && !p.at_eof() {
            if p.eat(SyntaxKind::COMMA) {
                continue;
            }
            if p.at(SyntaxKind::DOT_DOT_DOT) {
                p.start_node(SyntaxKind::SPREAD);
                p.bump();
                assignment_expr(p);
                p.finish_node();
            } else {
                assignment_expr(p);
            }
            if !p.at(SyntaxKind::R_BRACKET) && !p.expect(SyntaxKind::COMMA) {
                break;
            }
        }
    });
    p.expect(SyntaxKind::R_BRACKET);
    p.finish_node();
}

/// ObjectLiteral = '{' (Property (',' Property)* ','?)? '}'
fn object_literal<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::OBJECT_EXPR);
    p.bump(); // {
    let ctx = p.context().with_no_in(false);
    with_context(p, ctx, |p| {
        while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
            property(p);
            if !p.at(SyntaxKind::R_BRACE) && !p.expect(SyntaxKind::COMMA) {
                break;
            }
        }
    });
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// Property = '...' AssignmentExpression
///     | ('async' | 'get' | 'set')? '*'? PropertyName MethodTail
///     | PropertyName ':' AssignmentExpression
///     | Identifier ('=' AssignmentExpression)?
fn property<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::PROPERTY);
    if p.eat(SyntaxKind::DOT_DOT_DOT) {
        assignment_expr(p);
        p.finish_node();
        return;
    }

    let mut is_async = false;
    let mut modified = false;
    if p.at_contextual("async") && property_name_follows(p, 1) && !p.nth_has_line_break_before(1) {
        p.bump();
        is_async = true;
        modified = true;
    }
    let is_generator = p.eat(SyntaxKind::STAR);
    modified |= is_generator;
    if !modified && (p.at_contextual("get") || p.at_contextual("set")) && property_name_follows(p, 1) {
        p.bump();
        modified = true;
    }

    let shorthand = property_name(p);
    match p.current() {
        SyntaxKind::L_PAREN => method_tail(p, is_async, is_generator, false),
        SyntaxKind::LT if p.flags().types => method_tail(p, is_async, is_generator, false),
        SyntaxKind::COLON if !modified => {
            p.bump();
            assignment_expr(p);
        }
        SyntaxKind::EQ if shorthand && !modified => {
            // cover grammar for `({ a = 1 } = obj)`
            p.bump();
            assignment_expr(p);
        }
        _ if shorthand && !modified => {}
        _ if modified => p.error_expected("'('", ErrorCode::E0902),
        _ => p.error_expected("':'", ErrorCode::E0902),
    }
    p.finish_node();
}

/// Whether the token at `n` can start a property name (used to tell
/// `get x() {}` from a property called `get`)
pub(crate) fn property_name_follows<P: ScriptParser>(p: &mut P, n: usize) -> bool {
    let kind = p.nth(n);
    kind.is_identifier_name()
        || matches!(
            kind,
            SyntaxKind::STRING
                | SyntaxKind::NUMBER
                | SyntaxKind::PRIVATE_NAME
                | SyntaxKind::L_BRACKET
                | SyntaxKind::STAR
        )
}

/// PropertyName = IdentifierName | String | Number | PrivateName | '[' AssignmentExpression ']'
///
/// Returns whether the name was a plain identifier (so shorthand is allowed).
pub(crate) fn property_name<P: ScriptParser>(p: &mut P) -> bool {
    if p.at(SyntaxKind::L_BRACKET) {
        p.start_node(SyntaxKind::COMPUTED_NAME);
        p.bump();
        assignment_expr_allow_in(p);
        p.expect(SyntaxKind::R_BRACKET);
        p.finish_node();
        return false;
    }
    if at_literal_property_name(p) {
        let shorthand = p.at(SyntaxKind::IDENT);
        p.start_node(SyntaxKind::PROPERTY_NAME);
        p.bump();
        p.finish_node();
        return shorthand;
    }
    p.error_expected("a property name", ErrorCode::E0401);
    false
}

// =============================================================================
// import() and import.meta
// =============================================================================

fn import_call_or_meta<P: ScriptParser>(p: &mut P) {
    match p.nth(1) {
        SyntaxKind::DOT => {
            p.start_node(SyntaxKind::META_PROPERTY);
            p.bump(); // import
            p.bump(); // .
            if !p.eat_contextual("meta") {
                p.error_expected("'meta'", ErrorCode::E0902);
            }
            p.finish_node();
        }
        SyntaxKind::L_PAREN => {
            p.start_node(SyntaxKind::IMPORT_CALL);
            p.bump(); // import
            arguments(p);
            p.finish_node();
        }
        _ => p.error_expected("an expression", ErrorCode::E0401),
    }
}
