//! Type syntax of the typed superset
//!
//! ```text
//! Type         = FunctionType | UnionType ('extends' Type '?' Type ':' Type)?
//! UnionType    = '|'? IntersectionType ('|' IntersectionType)*
//! Intersection = '&'? TypeOperator ('&' TypeOperator)*
//! TypeOperator = ('keyof' | 'unique' | 'readonly') TypeOperator
//!              | 'infer' Name ('extends' Type)? | PostfixType
//! PostfixType  = PrimaryType ('[' Type? ']')*
//! ```

use super::*;
use super::declarations::params;
use super::expressions::{property_name, property_name_follows};

/// Lookahead budget for function-type detection inside parentheses
const PAREN_LOOKAHEAD: usize = 256;

/// TypeAnnotation = ':' Type
pub(super) fn type_annotation<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE_ANNOTATION);
    p.bump(); // :
    type_expr(p);
    p.finish_node();
}

/// ReturnType = ':' (TypePredicate | Type)
pub(super) fn return_type<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE_ANNOTATION);
    p.bump(); // :
    type_or_predicate(p);
    p.finish_node();
}

/// TypePredicate = 'asserts' (Name | 'this') ('is' Type)? | (Name | 'this') 'is' Type
fn type_or_predicate<P: ScriptParser>(p: &mut P) {
    if p.at_contextual("asserts")
        && matches!(p.nth(1), SyntaxKind::IDENT | SyntaxKind::THIS_KW)
        && !p.nth_has_line_break_before(1)
    {
        p.start_node(SyntaxKind::TYPE);
        p.bump(); // asserts
        p.bump(); // name
        if p.eat_contextual("is") {
            type_expr(p);
        }
        p.finish_node();
    } else if p.at_any(&[SyntaxKind::IDENT, SyntaxKind::THIS_KW])
        && p.nth_contextual(1, "is")
        && !p.nth_has_line_break_before(1)
    {
        p.start_node(SyntaxKind::TYPE);
        p.bump(); // name
        p.bump(); // is
        type_expr(p);
        p.finish_node();
    } else {
        type_expr(p);
    }
}

/// Type
pub(super) fn type_expr<P: ScriptParser>(p: &mut P) {
    if !p.enter() {
        return;
    }
    type_inner(p, true);
    p.exit();
}

fn type_inner<P: ScriptParser>(p: &mut P, allow_conditional: bool) {
    if at_function_type(p) {
        function_type(p);
        return;
    }
    let cp = p.checkpoint();
    union_type(p, !allow_conditional);
    if allow_conditional && p.at(SyntaxKind::EXTENDS_KW) && !p.has_line_break_before() {
        p.start_node_at(cp, SyntaxKind::TYPE);
        p.bump(); // extends
        if p.enter() {
            type_inner(p, false);
            p.exit();
        }
        p.expect(SyntaxKind::QUESTION);
        type_expr(p);
        p.expect(SyntaxKind::COLON);
        type_expr(p);
        p.finish_node();
    }
}

/// `extends_clause` is set for the `extends` operand of a conditional type,
/// where `infer X extends C` always takes the constraint
fn union_type<P: ScriptParser>(p: &mut P, extends_clause: bool) {
    let cp = p.checkpoint();
    let leading = p.eat(SyntaxKind::PIPE);
    intersection_type(p, extends_clause);
    if leading || p.at(SyntaxKind::PIPE) {
        p.start_node_at(cp, SyntaxKind::TYPE);
        while p.eat(SyntaxKind::PIPE) {
            intersection_type(p, extends_clause);
        }
        p.finish_node();
    }
}

fn intersection_type<P: ScriptParser>(p: &mut P, extends_clause: bool) {
    let cp = p.checkpoint();
    let leading = p.eat(SyntaxKind::AMP);
    type_operator(p, extends_clause);
    if leading || p.at(SyntaxKind::AMP) {
        p.start_node_at(cp, SyntaxKind::TYPE);
        while p.eat(SyntaxKind::AMP) {
            type_operator(p, extends_clause);
        }
        p.finish_node();
    }
}

fn type_operator<P: ScriptParser>(p: &mut P, extends_clause: bool) {
    let is_operator = p.at_contextual("keyof") || p.at_contextual("unique") || p.at_contextual("readonly");
    if is_operator && is_type_start(p.nth(1)) {
        if !p.enter() {
            return;
        }
        p.start_node(SyntaxKind::TYPE);
        p.bump();
        type_operator(p, extends_clause);
        p.finish_node();
        p.exit();
        return;
    }
    if p.at_contextual("infer") && p.nth_at(1, SyntaxKind::IDENT) {
        p.start_node(SyntaxKind::TYPE);
        p.bump(); // infer
        p.start_node(SyntaxKind::NAME);
        p.bump();
        p.finish_node();
        if p.at(SyntaxKind::EXTENDS_KW) && (extends_clause || !conditional_follows(p)) && p.enter() {
            p.bump(); // extends
            type_inner(p, false);
            p.exit();
        }
        p.finish_node();
        return;
    }
    postfix_type(p);
}

/// Outside a conditional's `extends` operand, `infer X extends C ? A : B`
/// is itself a conditional type. Scans from `extends` for a `?` at the
/// same nesting level.
fn conditional_follows<P: ScriptParser>(p: &mut P) -> bool {
    let mut depth = 0usize;
    for i in 1..PAREN_LOOKAHEAD {
        match p.nth(i) {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE | SyntaxKind::LT => depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE | SyntaxKind::GT => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            SyntaxKind::QUESTION if depth == 0 => return true,
            SyntaxKind::COMMA | SyntaxKind::SEMICOLON | SyntaxKind::EQ | SyntaxKind::COLON if depth == 0 => {
                return false;
            }
            SyntaxKind::EOF => return false,
            _ => {}
        }
    }
    false
}

/// PostfixType = PrimaryType ('[' Type? ']')*   (no line break before '[')
///
/// All suffixes of one type share a single node.
fn postfix_type<P: ScriptParser>(p: &mut P) {
    let cp = p.checkpoint();
    primary_type(p);
    let mut suffixed = false;
    while p.at(SyntaxKind::L_BRACKET) && !p.has_line_break_before() {
        p.bump(); // [
        if !p.at(SyntaxKind::R_BRACKET) {
            type_expr(p);
        }
        p.expect(SyntaxKind::R_BRACKET);
        suffixed = true;
    }
    if suffixed {
        p.start_node_at(cp, SyntaxKind::TYPE);
        p.finish_node();
    }
}

/// PrimaryType = TypeReference | Literal | TemplateLiteralType | TypeQuery
///     | ImportType | '(' Type ')' | ObjectType | MappedType | TupleType
fn primary_type<P: ScriptParser>(p: &mut P) {
    match p.current() {
        SyntaxKind::IDENT => type_reference(p),
        SyntaxKind::VOID_KW
        | SyntaxKind::NULL_KW
        | SyntaxKind::TRUE_KW
        | SyntaxKind::FALSE_KW
        | SyntaxKind::NUMBER
        | SyntaxKind::STRING
        | SyntaxKind::THIS_KW
        | SyntaxKind::TEMPLATE_FULL => {
            p.start_node(SyntaxKind::TYPE);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::MINUS if p.nth_at(1, SyntaxKind::NUMBER) => {
            p.start_node(SyntaxKind::TYPE);
            p.bump();
            p.bump();
            p.finish_node();
        }
        SyntaxKind::TEMPLATE_HEAD => template_literal_type(p),
        SyntaxKind::TYPEOF_KW => type_query(p),
        SyntaxKind::IMPORT_KW => import_type(p),
        SyntaxKind::L_PAREN => {
            p.start_node(SyntaxKind::TYPE);
            p.bump();
            type_expr(p);
            p.expect(SyntaxKind::R_PAREN);
            p.finish_node();
        }
        SyntaxKind::L_BRACE => {
            if at_mapped_type(p) {
                mapped_type(p);
            } else {
                object_type(p);
            }
        }
        SyntaxKind::L_BRACKET => tuple_type(p),
        _ => p.error_expected("a type", ErrorCode::E0601),
    }
}

/// TypeReference = Name ('.' IdentifierName)* TypeArgs?
pub(super) fn type_reference<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE);
    if p.at(SyntaxKind::IDENT) {
        p.bump();
        while p.at(SyntaxKind::DOT) {
            p.bump();
            if p.current().is_identifier_name() {
                p.bump();
            } else {
                p.error_expected("a type name", ErrorCode::E0601);
                break;
            }
        }
        if p.at(SyntaxKind::LT) && !p.has_line_break_before() {
            type_args(p);
        }
    } else {
        p.error_expected("a type name", ErrorCode::E0601);
    }
    p.finish_node();
}

/// TypeQuery = 'typeof' (ImportType | EntityName TypeArgs?)
fn type_query<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE);
    p.bump(); // typeof
    if p.at(SyntaxKind::IMPORT_KW) {
        import_type(p);
    } else if p.at(SyntaxKind::IDENT) || p.at(SyntaxKind::THIS_KW) {
        p.bump();
        while p.eat(SyntaxKind::DOT) {
            if p.current().is_identifier_name() || p.at(SyntaxKind::PRIVATE_NAME) {
                p.bump();
            } else {
                p.error_expected("a property name", ErrorCode::E0601);
                break;
            }
        }
        if p.at(SyntaxKind::LT) && !p.has_line_break_before() {
            type_args(p);
        }
    } else {
        p.error_expected("a name", ErrorCode::E0601);
    }
    p.finish_node();
}

/// ImportType = 'import' '(' String ')' ('.' IdentifierName)* TypeArgs?
fn import_type<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE);
    p.bump(); // import
    p.expect(SyntaxKind::L_PAREN);
    if !p.eat(SyntaxKind::STRING) {
        p.error_expected("a module specifier", ErrorCode::E0501);
    }
    p.expect(SyntaxKind::R_PAREN);
    while p.eat(SyntaxKind::DOT) {
        if p.current().is_identifier_name() {
            p.bump();
        } else {
            p.error_expected("a type name", ErrorCode::E0601);
            break;
        }
    }
    if p.at(SyntaxKind::LT) {
        type_args(p);
    }
    p.finish_node();
}

/// TemplateLiteralType = TEMPLATE_HEAD Type (TEMPLATE_MIDDLE Type)* TEMPLATE_TAIL
fn template_literal_type<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE);
    let head = p.current_range();
    p.bump();
    loop {
        type_expr(p);
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
// Function and constructor types
// =============================================================================

/// `<`, `new`, `abstract new`, or a parenthesis that opens a parameter list
fn at_function_type<P: ScriptParser>(p: &mut P) -> bool {
    match p.current() {
        SyntaxKind::LT | SyntaxKind::NEW_KW => true,
        SyntaxKind::IDENT => p.at_contextual("abstract") && p.nth_at(1, SyntaxKind::NEW_KW),
        SyntaxKind::L_PAREN => at_parameter_list(p),
        _ => false,
    }
}

fn at_parameter_list<P: ScriptParser>(p: &mut P) -> bool {
    match p.nth(1) {
        SyntaxKind::R_PAREN | SyntaxKind::DOT_DOT_DOT => true,
        SyntaxKind::IDENT | SyntaxKind::THIS_KW => match p.nth(2) {
            SyntaxKind::COLON | SyntaxKind::COMMA | SyntaxKind::QUESTION | SyntaxKind::EQ => true,
            SyntaxKind::R_PAREN => p.nth_at(3, SyntaxKind::FAT_ARROW),
            _ => false,
        },
        SyntaxKind::L_BRACE | SyntaxKind::L_BRACKET => {
            let Some(after) = skip_balanced(p, 1) else {
                return false;
            };
            match p.nth(after) {
                SyntaxKind::COLON | SyntaxKind::COMMA | SyntaxKind::EQ | SyntaxKind::QUESTION => true,
                SyntaxKind::R_PAREN => p.nth_at(after + 1, SyntaxKind::FAT_ARROW),
                _ => false,
            }
        }
        _ => false,
    }
}

/// Index just past the bracket group opening at `start`
fn skip_balanced<P: ScriptParser>(p: &mut P, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for i in start..start + PAREN_LOOKAHEAD {
        match p.nth(i) {
            SyntaxKind::L_BRACE | SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN => depth += 1,
            SyntaxKind::R_BRACE | SyntaxKind::R_BRACKET | SyntaxKind::R_PAREN => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            SyntaxKind::EOF => return None,
            _ => {}
        }
    }
    None
}

/// FunctionType = ('abstract'? 'new')? TypeParams? Params '=>' (TypePredicate | Type)
fn function_type<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::FUNCTION_TYPE);
    p.eat_contextual("abstract");
    p.eat(SyntaxKind::NEW_KW);
    if p.at(SyntaxKind::LT) {
        type_params(p);
    }
    let ctx = p.context().function(false, false);
    with_context(p, ctx, params);
    p.expect(SyntaxKind::FAT_ARROW);
    type_or_predicate(p);
    p.finish_node();
}

// =============================================================================
// Object, mapped and tuple types
// =============================================================================

/// ObjectType = '{' (TypeMember (';' | ',' | newline))* '}'
pub(super) fn object_type<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::OBJECT_TYPE);
    p.expect(SyntaxKind::L_BRACE);
    while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
        type_member(p);
        if !p.eat(SyntaxKind::SEMICOLON)
            && !p.eat(SyntaxKind::COMMA)
            && !p.at(SyntaxKind::R_BRACE)
            && !p.has_line_break_before()
        {
            p.error_expected("';'", ErrorCode::E0603);
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// TypeMember = CallSignature | 'new' CallSignature | IndexSignature
///     | 'readonly'? ('get' | 'set')? PropertyName '?'? (CallSignature | TypeAnnotation)?
fn type_member<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE_MEMBER);
    if p.at(SyntaxKind::L_PAREN) || p.at(SyntaxKind::LT) {
        call_signature(p);
    } else if p.at(SyntaxKind::NEW_KW) && matches!(p.nth(1), SyntaxKind::L_PAREN | SyntaxKind::LT) {
        p.bump();
        call_signature(p);
    } else {
        if p.at_contextual("readonly") && property_name_follows(p, 1) {
            p.bump();
        }
        if p.at(SyntaxKind::L_BRACKET) && p.nth_at(1, SyntaxKind::IDENT) && p.nth_at(2, SyntaxKind::COLON) {
            index_signature(p);
        } else {
            if (p.at_contextual("get") || p.at_contextual("set")) && property_name_follows(p, 1) {
                p.bump();
            }
            property_name(p);
            p.eat(SyntaxKind::QUESTION);
            if p.at(SyntaxKind::L_PAREN) || p.at(SyntaxKind::LT) {
                call_signature(p);
            } else if p.at(SyntaxKind::COLON) {
                type_annotation(p);
            }
        }
    }
    p.finish_node();
}

/// CallSignature = TypeParams? Params ReturnType?
fn call_signature<P: ScriptParser>(p: &mut P) {
    if p.at(SyntaxKind::LT) {
        type_params(p);
    }
    let ctx = p.context().function(false, false);
    with_context(p, ctx, params);
    if p.at(SyntaxKind::COLON) {
        return_type(p);
    }
}

/// IndexSignature = '[' Name ':' Type ']' TypeAnnotation?
pub(super) fn index_signature<P: ScriptParser>(p: &mut P) {
    p.bump(); // [
    p.start_node(SyntaxKind::NAME);
    p.bump();
    p.finish_node();
    type_annotation(p);
    p.expect(SyntaxKind::R_BRACKET);
    if p.at(SyntaxKind::COLON) {
        type_annotation(p);
    }
}

/// `{ readonly [K in ...` or `{ +readonly [K in ...` or `{ [K in ...`
fn at_mapped_type<P: ScriptParser>(p: &mut P) -> bool {
    let mut i = 1;
    if matches!(p.nth(i), SyntaxKind::PLUS | SyntaxKind::MINUS) {
        i += 1;
    }
    if p.nth_contextual(i, "readonly") {
        i += 1;
    }
    p.nth_at(i, SyntaxKind::L_BRACKET) && p.nth_at(i + 1, SyntaxKind::IDENT) && p.nth_at(i + 2, SyntaxKind::IN_KW)
}

/// MappedType = '{' ('+' | '-')? 'readonly'? '[' Name 'in' Type ('as' Type)? ']'
///     ('+' | '-')? '?'? TypeAnnotation? ';'? '}'
fn mapped_type<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::MAPPED_TYPE);
    p.bump(); // {
    if !p.eat(SyntaxKind::PLUS) {
        p.eat(SyntaxKind::MINUS);
    }
    p.eat_contextual("readonly");
    p.expect(SyntaxKind::L_BRACKET);
    p.start_node(SyntaxKind::NAME);
    p.bump();
    p.finish_node();
    p.expect(SyntaxKind::IN_KW);
    type_expr(p);
    if p.eat_contextual("as") {
        type_expr(p);
    }
    p.expect(SyntaxKind::R_BRACKET);
    if !p.eat(SyntaxKind::PLUS) {
        p.eat(SyntaxKind::MINUS);
    }
    p.eat(SyntaxKind::QUESTION);
    if p.at(SyntaxKind::COLON) {
        type_annotation(p);
    }
    if !p.eat(SyntaxKind::SEMICOLON) {
        p.eat(SyntaxKind::COMMA);
    }
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// TupleType = '[' (TupleElement (',' TupleElement)* ','?)? ']'
/// TupleElement = '...'? (Name '?'? ':')? Type '?'?
fn tuple_type<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TUPLE_TYPE);
    p.bump(); // [
    while !p.at(SyntaxKind::R_BRACKET) && !p.at_eof() {
        p.eat(SyntaxKind::DOT_DOT_DOT);
        let named = p.current().is_identifier_name()
            && (p.nth_at(1, SyntaxKind::COLON)
                || (p.nth_at(1, SyntaxKind::QUESTION) && p.nth_at(2, SyntaxKind::COLON)));
        if named {
            p.start_node(SyntaxKind::NAME);
            p.bump();
            p.finish_node();
            p.eat(SyntaxKind::QUESTION);
            p.bump(); // :
            type_expr(p);
        } else {
            type_expr(p);
            p.eat(SyntaxKind::QUESTION);
        }
        if !p.at(SyntaxKind::R_BRACKET) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACKET);
    p.finish_node();
}

// =============================================================================
// Type parameters and arguments
// =============================================================================

/// TypeParams = '<' TypeParam (',' TypeParam)* ','? '>'
/// TypeParam = ('in' | 'out' | 'const')* Name ('extends' Type)? ('=' Type)?
pub(super) fn type_params<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE_PARAMS);
    p.bump(); // <
    while !p.at(SyntaxKind::GT) && !p.at_eof() {
        p.start_node(SyntaxKind::TYPE_PARAM);
        while (p.at(SyntaxKind::IN_KW) || p.at(SyntaxKind::CONST_KW) || p.at_contextual("out"))
            && p.nth_at(1, SyntaxKind::IDENT)
        {
            p.bump();
        }
        if p.at(SyntaxKind::IDENT) {
            p.start_node(SyntaxKind::NAME);
            p.bump();
            p.finish_node();
        } else {
            p.error_expected("a type parameter name", ErrorCode::E0601);
        }
        if p.eat(SyntaxKind::EXTENDS_KW) {
            type_expr(p);
        }
        if p.eat(SyntaxKind::EQ) {
            type_expr(p);
        }
        p.finish_node();
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::GT);
    p.finish_node();
}

/// TypeArgs = '<' Type (',' Type)* ','? '>'
pub(super) fn type_args<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE_ARGS);
    p.bump(); // <
    while !p.at(SyntaxKind::GT) && !p.at_eof() {
        type_expr(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::GT);
    p.finish_node();
}

/// Whether a token can begin a type
fn is_type_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::IDENT
            | SyntaxKind::VOID_KW
            | SyntaxKind::NULL_KW
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW
            | SyntaxKind::THIS_KW
            | SyntaxKind::TYPEOF_KW
            | SyntaxKind::IMPORT_KW
            | SyntaxKind::NEW_KW
            | SyntaxKind::NUMBER
            | SyntaxKind::STRING
            | SyntaxKind::MINUS
            | SyntaxKind::TEMPLATE_FULL
            | SyntaxKind::TEMPLATE_HEAD
            | SyntaxKind::L_PAREN
            | SyntaxKind::L_BRACE
            | SyntaxKind::L_BRACKET
            | SyntaxKind::LT
    )
}

#[cfg(test)]
mod tests {
    use crate::parser::{parse, ErrorCode, GrammarFlags, SyntaxKind};

    fn check_type(ty: &str) {
        let source = format!("let value: {ty};");
        let parse = parse(&source, GrammarFlags::typed());
        assert!(parse.ok(), "{ty}: {:?}", parse.errors);
    }

    #[test]
    fn test_type_forms() {
        for ty in [
            "string",
            "Array<number>",
            "Map<string, Array<Set<number>>>",
            "ns.Inner.Type<T>",
            "string | number | undefined",
            "A & B & { c: string }",
            "keyof typeof config",
            "readonly string[]",
            "unique symbol",
            "T[K][]",
            "'literal' | 42 | -1 | true | null | void",
            "`prefix-${string}`",
            "typeof import('./module')",
            "import('./types').Config<T>",
            "(string | number)[]",
            "() => void",
            "(a: number, b?: string, ...rest: any[]) => boolean",
            "({ a }: Props) => JSX.Element",
            "(string) => void",
            "new (x: number) => Foo",
            "abstract new () => object",
            "<T>(x: T) => T",
            "(x: unknown) => x is string",
            "{ readonly a: number; b?: string, c(): void; [key: string]: unknown }",
            "{ [K in keyof T]?: T[K] }",
            "{ -readonly [K in keyof T as `get${K & string}`]-?: T[K] }",
            "[string, number?, ...boolean[]]",
            "[first: string, second?: number]",
            "T extends string ? 'str' : T extends number ? 'num' : never",
            "T extends Array<infer U> ? U : never",
            "T extends infer U extends string ? U : never",
            "T extends [infer H extends string, ...infer R] ? [H, R] : never",
            "T extends { a: infer A extends number } ? A : 0",
        ] {
            check_type(ty);
        }
    }

    #[test]
    fn test_constrained_infer_needs_its_question_mark() {
        let parsed = parse("type X = A extends infer U extends string;", GrammarFlags::typed());
        assert_eq!(
            parsed.first_error().map(|e| e.message.as_str()),
            Some("expected '?', found ';'")
        );
    }

    #[test]
    fn test_array_suffixes_share_one_node() {
        let source = format!("let value: string{};", "[]".repeat(20_000));
        let parsed = parse(&source, GrammarFlags::typed());
        assert!(parsed.ok());
        let depth = parsed.syntax().descendants().map(|n| n.ancestors().count()).max();
        assert!(depth.is_some_and(|d| d < 16), "{depth:?}");
    }

    #[test]
    fn test_type_params() {
        let parse = parse(
            "function f<const T extends readonly unknown[], U = T[number]>(x: T): U { return x[0]; }",
            GrammarFlags::typed(),
        );
        assert!(parse.ok(), "{:?}", parse.errors);
        assert!(parse.syntax().descendants().any(|n| n.kind() == SyntaxKind::TYPE_PARAM));
    }

    #[test]
    fn test_missing_type() {
        let parse = parse("let x: = 1;", GrammarFlags::typed());
        let error = parse.first_error().expect("error");
        assert_eq!(error.message, "expected a type, found '='");
        assert_eq!(error.code, ErrorCode::E0601);
    }

    #[test]
    fn test_unclosed_type_arguments() {
        let parse = parse("let x: Array<number;", GrammarFlags::typed());
        assert_eq!(parse.first_error().map(|e| e.code), Some(ErrorCode::E0602));
    }

    #[test]
    fn test_assertion_functions() {
        let parse = parse(
            "function check(v: unknown): asserts v is string {}\nfunction ok(this: Foo): this is Bar { return true; }",
            GrammarFlags::typed(),
        );
        assert!(parse.ok(), "{:?}", parse.errors);
    }
}
