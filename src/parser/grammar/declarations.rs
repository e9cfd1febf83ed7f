//! Declarations: variables, binding patterns, functions, classes,
//! import/export and the typed declarations
//!
//! ```text
//! VarDecl     = ('var' | 'let' | 'const') Declarator (',' Declarator)* ';'
//! FunctionDecl = 'async'? 'function' '*'? Name TypeParams? Params ReturnType? Body
//! ClassDecl   = Decorator* 'abstract'? 'class' Name TypeParams? Heritage* ClassBody
//! ImportDecl  = 'import' ImportClause? ModuleSpecifier Attributes? ';'
//! ExportDecl  = 'export' (Declaration | 'default' ... | SpecifierList From? | '*' ...)
//! ```

use super::*;
use super::expressions::{
    arguments, assignment_expr, assignment_expr_allow_in, expression_allow_in, lhs_expr,
    property_name, property_name_follows,
};
use super::statements::{at_async_function, at_let_declaration, statement, statement_list};
use super::types::{
    index_signature, object_type, return_type, type_annotation, type_args, type_expr, type_params,
    type_reference,
};

// =============================================================================
// Variables and binding patterns
// =============================================================================

/// VarDecl = ('var' | 'let' | 'const') Declarator (',' Declarator)*
///
/// In a `for` head the declaration is not terminated and `const` may omit
/// its initializer.
pub(super) fn var_declaration<P: ScriptParser>(p: &mut P, in_for_head: bool) {
    p.start_node(SyntaxKind::VAR_DECL);
    let is_const = p.at(SyntaxKind::CONST_KW);
    p.bump(); // var | let | const
    loop {
        declarator(p, is_const, in_for_head);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    if !in_for_head {
        consume_semicolon(p);
    }
    p.finish_node();
}

/// Declarator = BindingTarget '!'? TypeAnnotation? ('=' AssignmentExpression)?
fn declarator<P: ScriptParser>(p: &mut P, is_const: bool, in_for_head: bool) {
    p.start_node(SyntaxKind::DECLARATOR);
    let is_pattern = p.at_any(&[SyntaxKind::L_BRACE, SyntaxKind::L_BRACKET]);
    binding_target(p, "a variable name", ErrorCode::E0301);
    if p.flags().types {
        if p.at(SyntaxKind::BANG) && !p.has_line_break_before() {
            p.bump();
        }
        if p.at(SyntaxKind::COLON) {
            type_annotation(p);
        }
    }
    if p.eat(SyntaxKind::EQ) {
        assignment_expr(p);
    } else if !in_for_head && !p.context().ambient && !p.has_failed() {
        if is_const {
            let range = p.current_range();
            p.error(SyntaxError::from_code(ErrorCode::E0302, range));
        } else if is_pattern {
            p.error_expected("'='", ErrorCode::E0302);
        }
    }
    p.finish_node();
}

/// BindingTarget = Identifier | ObjectPattern | ArrayPattern
pub(super) fn binding_target<P: ScriptParser>(p: &mut P, what: &str, code: ErrorCode) {
    match p.current() {
        SyntaxKind::IDENT => name(p),
        SyntaxKind::L_BRACE => object_pattern(p),
        SyntaxKind::L_BRACKET => array_pattern(p),
        _ => p.error_expected(what, code),
    }
}

fn name<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::NAME);
    p.bump();
    p.finish_node();
}

fn expect_name<P: ScriptParser>(p: &mut P, what: &str) {
    if at_binding_identifier(p) {
        name(p);
    } else {
        p.error_expected(what, ErrorCode::E0301);
    }
}

/// BindingElement = BindingTarget ('=' AssignmentExpression)?
fn binding_element<P: ScriptParser>(p: &mut P) {
    binding_target(p, "a binding", ErrorCode::E0301);
    if p.eat(SyntaxKind::EQ) {
        assignment_expr_allow_in(p);
    }
}

fn rest_pattern<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::REST_PATTERN);
    p.bump(); // ...
    binding_target(p, "a rest binding", ErrorCode::E0301);
    p.finish_node();
}

/// ObjectPattern = '{' (PatternProperty (',' PatternProperty)* ','?)? '}'
/// PatternProperty = '...' BindingTarget | Identifier ('=' Default)? | PropertyName ':' BindingElement
fn object_pattern<P: ScriptParser>(p: &mut P) {
    if !p.enter() {
        return;
    }
    p.start_node(SyntaxKind::OBJECT_PATTERN);
    p.bump(); // {
    while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
        if p.at(SyntaxKind::DOT_DOT_DOT) {
            rest_pattern(p);
        } else {
            p.start_node(SyntaxKind::PATTERN_PROPERTY);
            if p.at(SyntaxKind::IDENT) && !p.nth_at(1, SyntaxKind::COLON) {
                name(p);
                if p.eat(SyntaxKind::EQ) {
                    assignment_expr_allow_in(p);
                }
            } else {
                property_name(p);
                p.expect(SyntaxKind::COLON);
                binding_element(p);
            }
            p.finish_node();
        }
        if !p.at(SyntaxKind::R_BRACE) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
    p.exit();
}

/// ArrayPattern = '[' (Elision | BindingElement | '...' BindingTarget)* ']'
fn array_pattern<P: ScriptParser>(p: &mut P) {
    if !p.enter() {
        return;
    }
    p.start_node(SyntaxKind::ARRAY_PATTERN);
    p.bump(); // [
    while !p.at(SyntaxKind::R_BRACKET) && !p.at_eof() {
        if p.eat(SyntaxKind::COMMA) {
            continue;
        }
        if p.at(SyntaxKind::DOT_DOT_DOT) {
            rest_pattern(p);
        } else {
            binding_element(p);
        }
        if !p.at(SyntaxKind::R_BRACKET) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACKET);
    p.finish_node();
    p.exit();
}

// =============================================================================
// Functions
// =============================================================================

/// Function = 'async'? 'function' '*'? Name? MethodTail
///
/// Declarations in the typed grammar may omit the body (overloads).
pub(super) fn function<P: ScriptParser>(p: &mut P, kind: SyntaxKind, name_required: bool) {
    p.start_node(kind);
    let is_async = p.eat_contextual("async");
    p.expect(SyntaxKind::FUNCTION_KW);
    let is_generator = p.eat(SyntaxKind::STAR);
    if at_binding_identifier(p) {
        name(p);
    } else if name_required {
        p.error_expected("a function name", ErrorCode::E0301);
    }
    let body_optional = kind == SyntaxKind::FN_DECL && p.flags().types;
    method_tail(p, is_async, is_generator, body_optional);
    p.finish_node();
}

/// MethodTail = TypeParams? Params ReturnType? (FunctionBody | ';')
pub(super) fn method_tail<P: ScriptParser>(p: &mut P, is_async: bool, is_generator: bool, body_optional: bool) {
    let ctx = p.context().function(is_async, is_generator);
    if p.flags().types && p.at(SyntaxKind::LT) {
        type_params(p);
    }
    with_context(p, ctx, params);
    if p.flags().types && p.at(SyntaxKind::COLON) {
        return_type(p);
    }
    if p.at(SyntaxKind::L_BRACE) {
        with_context(p, ctx, function_body);
    } else if body_optional {
        consume_semicolon(p);
    } else {
        p.error_expected("'{'", ErrorCode::E0304);
    }
}

/// FunctionBody = '{' Statement* '}'
///
/// The caller sets the function context.
pub(super) fn function_body<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::BLOCK);
    p.expect(SyntaxKind::L_BRACE);
    statement_list(p, SyntaxKind::R_BRACE);
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// Params = '(' (Param (',' Param)* ','?)? ')'
pub(super) fn params<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::PARAM_LIST);
    if p.expect(SyntaxKind::L_PAREN) {
        while !p.at(SyntaxKind::R_PAREN) && !p.at_eof() {
            param(p);
            if !p.at(SyntaxKind::R_PAREN) && !p.expect(SyntaxKind::COMMA) {
                break;
            }
        }
        p.expect(SyntaxKind::R_PAREN);
    }
    p.finish_node();
}

const PARAM_MODIFIERS: &[&str] = &["public", "private", "protected", "readonly", "override"];

/// Param = Decorator* Modifier* '...'? (BindingTarget | 'this') '?'? TypeAnnotation? ('=' Default)?
fn param<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::PARAM);
    if p.at(SyntaxKind::AT) && p.flags().decorators {
        decorators(p);
    }
    if p.flags().types {
        while PARAM_MODIFIERS.iter().any(|m| p.at_contextual(m))
            && matches!(
                p.nth(1),
                SyntaxKind::IDENT | SyntaxKind::L_BRACE | SyntaxKind::L_BRACKET
            )
        {
            p.bump();
        }
    }
    let rest = p.eat(SyntaxKind::DOT_DOT_DOT);
    if p.flags().types && p.at(SyntaxKind::THIS_KW) {
        p.bump();
    } else {
        binding_target(p, "a parameter name", ErrorCode::E0305);
    }
    if p.flags().types {
        if !rest {
            p.eat(SyntaxKind::QUESTION);
        }
        if p.at(SyntaxKind::COLON) {
            type_annotation(p);
        }
    }
    if p.eat(SyntaxKind::EQ) {
        assignment_expr_allow_in(p);
    }
    p.finish_node();
}

// =============================================================================
// Decorators
// =============================================================================

/// Decorator*
pub(super) fn decorators<P: ScriptParser>(p: &mut P) {
    while p.at(SyntaxKind::AT) {
        decorator(p);
    }
}

/// Decorator = '@' ('(' Expression ')' | Identifier ('.' IdentifierName)* TypeArgs? Arguments?)
fn decorator<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::DECORATOR);
    p.bump(); // @
    if p.eat(SyntaxKind::L_PAREN) {
        expression_allow_in(p);
        p.expect(SyntaxKind::R_PAREN);
    } else if p.at(SyntaxKind::IDENT) {
        let cp = p.checkpoint();
        p.start_node(SyntaxKind::NAME_REF);
        p.bump();
        p.finish_node();
        let mut kind = None;
        while p.eat(SyntaxKind::DOT) {
            if p.current().is_identifier_name() || p.at(SyntaxKind::PRIVATE_NAME) {
                p.start_node(SyntaxKind::NAME_REF);
                p.bump();
                p.finish_node();
            } else {
                p.error_expected("a property name", ErrorCode::E0401);
            }
            kind = Some(SyntaxKind::MEMBER_EXPR);
        }
        if p.at(SyntaxKind::L_PAREN) || (p.flags().types && p.at(SyntaxKind::LT)) {
            if p.at(SyntaxKind::LT) {
                type_args(p);
            }
            arguments(p);
            kind = Some(SyntaxKind::CALL_EXPR);
        }
        if let Some(kind) = kind {
            p.start_node_at(cp, kind);
            p.finish_node();
        }
    } else {
        p.error_expected("a decorator", ErrorCode::E0301);
    }
    p.finish_node();
}

// =============================================================================
// Classes
// =============================================================================

/// Class with any leading decorators
pub(super) fn class_with_decorators<P: ScriptParser>(p: &mut P, kind: SyntaxKind, name_required: bool) {
    let cp = p.checkpoint();
    if p.at(SyntaxKind::AT) {
        if !p.flags().decorators {
            p.error_expected("a class", ErrorCode::E0901);
            return;
        }
        decorators(p);
    }
    class_with_decorators_at(p, cp, kind, name_required);
}

/// Class = 'abstract'? 'class' Name? TypeParams? ('extends' LeftHandSide TypeArgs?)?
///     ('implements' TypeRef (',' TypeRef)*)? ClassBody
///
/// Decorators, if any, were parsed since `cp`.
pub(super) fn class_with_decorators_at<P: ScriptParser>(
    p: &mut P,
    cp: Checkpoint,
    kind: SyntaxKind,
    name_required: bool,
) {
    p.start_node_at(cp, kind);
    let types = p.flags().types;
    if types {
        p.eat_contextual("abstract");
    }
    p.expect(SyntaxKind::CLASS_KW);
    if at_binding_identifier(p) && !(types && p.at_contextual("implements")) {
        name(p);
    } else if name_required {
        p.error_expected("a class name", ErrorCode::E0301);
    }
    if types && p.at(SyntaxKind::LT) {
        type_params(p);
    }
    if p.at(SyntaxKind::EXTENDS_KW) {
        p.start_node(SyntaxKind::HERITAGE_CLAUSE);
        p.bump();
        lhs_expr(p);
        if types && p.at(SyntaxKind::LT) {
            type_args(p);
        }
        p.finish_node();
    }
    if types && p.at_contextual("implements") {
        p.start_node(SyntaxKind::HERITAGE_CLAUSE);
        p.bump();
        type_reference(p);
        while p.eat(SyntaxKind::COMMA) {
            type_reference(p);
        }
        p.finish_node();
    }
    class_body(p);
    p.finish_node();
}

/// ClassBody = '{' ClassMember* '}'
fn class_body<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::CLASS_BODY);
    p.expect(SyntaxKind::L_BRACE);
    while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
        class_member(p);
    }
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

const TYPED_MEMBER_MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "readonly",
    "abstract",
    "override",
    "declare",
];

/// A modifier keyword followed by something that can still name a member
fn at_member_modifier<P: ScriptParser>(p: &mut P) -> bool {
    let is_modifier = p.at_contextual("static")
        || p.at_contextual("accessor")
        || (p.flags().types && TYPED_MEMBER_MODIFIERS.iter().any(|m| p.at_contextual(m)));
    is_modifier && property_name_follows(p, 1)
}

/// ClassMember = ';'
///     | 'static' FunctionBody
///     | Decorator* Modifier* ('async' | 'get' | 'set')? '*'? PropertyName ('?' | '!')?
///       (MethodTail | TypeAnnotation? ('=' AssignmentExpression)? ';')
///     | IndexSignature ';'
fn class_member<P: ScriptParser>(p: &mut P) {
    if p.eat(SyntaxKind::SEMICOLON) {
        return;
    }
    let types = p.flags().types;
    p.start_node(SyntaxKind::CLASS_MEMBER);

    if p.at(SyntaxKind::AT) {
        if !p.flags().decorators {
            p.error_expected("a class member", ErrorCode::E0303);
            p.finish_node();
            return;
        }
        decorators(p);
    }

    if p.at_contextual("static") && p.nth_at(1, SyntaxKind::L_BRACE) {
        p.bump(); // static
        let ctx = p.context().function(false, false);
        with_context(p, ctx, function_body);
        p.finish_node();
        return;
    }

    while at_member_modifier(p) {
        p.bump();
    }

    let mut is_async = false;
    let mut accessor = false;
    if p.at_contextual("async") && !p.nth_has_line_break_before(1) && property_name_follows(p, 1) {
        p.bump();
        is_async = true;
    }
    let is_generator = p.eat(SyntaxKind::STAR);
    if !is_async
        && !is_generator
        && (p.at_contextual("get") || p.at_contextual("set"))
        && property_name_follows(p, 1)
    {
        p.bump();
        accessor = true;
    }

    if types
        && p.at(SyntaxKind::L_BRACKET)
        && p.nth_at(1, SyntaxKind::IDENT)
        && p.nth_at(2, SyntaxKind::COLON)
    {
        index_signature(p);
        consume_semicolon(p);
        p.finish_node();
        return;
    }

    property_name(p);
    if types && !p.eat(SyntaxKind::QUESTION) && !p.has_line_break_before() {
        p.eat(SyntaxKind::BANG);
    }

    if p.at(SyntaxKind::L_PAREN) || (types && p.at(SyntaxKind::LT)) {
        method_tail(p, is_async, is_generator, types);
    } else if is_async || is_generator || accessor {
        p.error_expected("'('", ErrorCode::E0303);
    } else {
        if types && p.at(SyntaxKind::COLON) {
            type_annotation(p);
        }
        if p.eat(SyntaxKind::EQ) {
            let ctx = p.context().function(false, false);
            with_context(p, ctx, assignment_expr);
        }
        consume_semicolon(p);
    }
    p.finish_node();
}

// =============================================================================
// Import and export
// =============================================================================

/// ImportDecl = 'import' 'type'? ImportClause 'from' ModuleSpecifier Attributes? ';'
///     | 'import' ModuleSpecifier Attributes? ';'
///     | 'import' 'type'? Identifier '=' ('require' '(' String ')' | EntityName) ';'
///
/// ImportClause = Identifier (',' (NamespaceImport | SpecifierList))?
///     | NamespaceImport | SpecifierList
pub(super) fn import_declaration<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::IMPORT_DECL);
    p.bump(); // import

    if p.at(SyntaxKind::STRING) {
        p.bump();
        import_attributes(p);
        consume_semicolon(p);
        p.finish_node();
        return;
    }

    if p.flags().types && p.at_contextual("type") && at_type_only_import(p) {
        p.bump(); // type
    }

    let mut has_clause = false;
    if at_binding_identifier(p) {
        if p.flags().types && p.nth_at(1, SyntaxKind::EQ) {
            import_equals(p);
            p.finish_node();
            return;
        }
        name(p);
        has_clause = true;
        if !p.eat(SyntaxKind::COMMA) {
            from_clause(p);
            consume_semicolon(p);
            p.finish_node();
            return;
        }
    }

    match p.current() {
        SyntaxKind::STAR => {
            p.bump();
            if !p.eat_contextual("as") {
                p.error_expected("'as'", ErrorCode::E0503);
            }
            expect_name(p, "a namespace name");
        }
        SyntaxKind::L_BRACE => specifier_list(p),
        _ => {
            let what = if has_clause {
                "a namespace import or import list"
            } else {
                "an import clause"
            };
            p.error_expected(what, ErrorCode::E0503);
        }
    }
    from_clause(p);
    consume_semicolon(p);
    p.finish_node();
}

/// `import type X from`, `import type { X }`, `import type * as X` but not
/// `import type from "x"` (a default import called `type`)
fn at_type_only_import<P: ScriptParser>(p: &mut P) -> bool {
    match p.nth(1) {
        SyntaxKind::L_BRACE | SyntaxKind::STAR => true,
        SyntaxKind::IDENT => !(p.nth_contextual(1, "from") && p.nth_at(2, SyntaxKind::STRING)),
        _ => false,
    }
}

/// `X = require("y")` or `X = A.B`
fn import_equals<P: ScriptParser>(p: &mut P) {
    name(p);
    p.bump(); // =
    if p.at_contextual("require") && p.nth_at(1, SyntaxKind::L_PAREN) {
        p.bump();
        p.bump(); // (
        module_specifier(p);
        p.expect(SyntaxKind::R_PAREN);
    } else {
        entity_name(p);
    }
    consume_semicolon(p);
}

/// EntityName = Identifier ('.' IdentifierName)*
fn entity_name<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::NAME_REF);
    if at_binding_identifier(p) {
        p.bump();
        while p.eat(SyntaxKind::DOT) {
            if p.current().is_identifier_name() {
                p.bump();
            } else {
                p.error_expected("a name", ErrorCode::E0301);
                break;
            }
        }
    } else {
        p.error_expected("a name", ErrorCode::E0301);
    }
    p.finish_node();
}

fn from_clause<P: ScriptParser>(p: &mut P) {
    if !p.eat_contextual("from") {
        p.error_expected("'from'", ErrorCode::E0503);
        return;
    }
    module_specifier(p);
    import_attributes(p);
}

fn module_specifier<P: ScriptParser>(p: &mut P) {
    if !p.eat(SyntaxKind::STRING) {
        p.error_expected("a module specifier", ErrorCode::E0501);
    }
}

/// Attributes = ('with' | 'assert') ObjectLiteral   (same line only)
fn import_attributes<P: ScriptParser>(p: &mut P) {
    if (p.at(SyntaxKind::WITH_KW) || p.at_contextual("assert"))
        && !p.has_line_break_before()
        && p.nth_at(1, SyntaxKind::L_BRACE)
    {
        p.bump();
        assignment_expr_allow_in(p);
    }
}

/// SpecifierList = '{' (Specifier (',' Specifier)* ','?)? '}'
/// Specifier = 'type'? ModuleExportName ('as' ModuleExportName)?
fn specifier_list<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::SPECIFIER_LIST);
    p.bump(); // {
    while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
        p.start_node(SyntaxKind::SPECIFIER);
        if p.flags().types
            && p.at_contextual("type")
            && (p.nth(1).is_identifier_name() || p.nth_at(1, SyntaxKind::STRING))
            && !(p.nth_contextual(1, "as") && !p.nth(2).is_identifier_name())
        {
            p.bump(); // type
        }
        module_export_name(p);
        if p.eat_contextual("as") {
            module_export_name(p);
        }
        p.finish_node();
        if !p.at(SyntaxKind::R_BRACE) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

fn module_export_name<P: ScriptParser>(p: &mut P) {
    if p.current().is_identifier_name() || p.at(SyntaxKind::STRING) {
        p.bump();
    } else {
        p.error_expected("an import or export name", ErrorCode::E0503);
    }
}

/// ExportDecl = 'export' Declaration
///     | 'export' 'default' (FunctionDecl | ClassDecl | InterfaceDecl | AssignmentExpression ';')
///     | 'export' 'type'? SpecifierList ('from' ModuleSpecifier)? ';'
///     | 'export' 'type'? '*' ('as' ModuleExportName)? 'from' ModuleSpecifier ';'
///     | 'export' '=' Expression ';'
///     | 'export' 'as' 'namespace' Identifier ';'
///     | 'export' ImportEquals
pub(super) fn export_declaration<P: ScriptParser>(p: &mut P, cp: Checkpoint) {
    p.start_node_at(cp, SyntaxKind::EXPORT_DECL);
    p.bump(); // export
    let types = p.flags().types;

    if types && p.at_contextual("type") && matches!(p.nth(1), SyntaxKind::L_BRACE | SyntaxKind::STAR) {
        p.bump(); // type
    }

    match p.current() {
        SyntaxKind::DEFAULT_KW => {
            p.bump();
            export_default(p);
        }
        SyntaxKind::STAR => {
            p.bump();
            if p.eat_contextual("as") {
                module_export_name(p);
            }
            from_clause(p);
            consume_semicolon(p);
        }
        SyntaxKind::L_BRACE => {
            specifier_list(p);
            if p.at_contextual("from") {
                from_clause(p);
            }
            consume_semicolon(p);
        }
        SyntaxKind::EQ if types => {
            p.bump();
            expression_allow_in(p);
            consume_semicolon(p);
        }
        SyntaxKind::IMPORT_KW if types => import_declaration(p),
        SyntaxKind::IDENT if types && p.at_contextual("as") && p.nth_contextual(1, "namespace") => {
            p.bump(); // as
            p.bump(); // namespace
            expect_name(p, "a namespace name");
            consume_semicolon(p);
        }
        _ if at_declaration_start(p) => statement(p),
        _ => p.error_expected("a declaration", ErrorCode::E0503),
    }
    p.finish_node();
}

fn export_default<P: ScriptParser>(p: &mut P) {
    let types = p.flags().types;
    if p.at(SyntaxKind::FUNCTION_KW) || at_async_function(p) {
        function(p, SyntaxKind::FN_DECL, false);
    } else if p.at(SyntaxKind::CLASS_KW)
        || (p.at(SyntaxKind::AT) && p.flags().decorators)
        || (types && p.at_contextual("abstract") && p.nth_at(1, SyntaxKind::CLASS_KW))
    {
        class_with_decorators(p, SyntaxKind::CLASS_DECL, false);
    } else if types && p.at_contextual("interface") && p.nth_at(1, SyntaxKind::IDENT) {
        interface_declaration(p);
    } else {
        assignment_expr_allow_in(p);
        consume_semicolon(p);
    }
}

/// Whether a declaration (as allowed after `export`) starts here
fn at_declaration_start<P: ScriptParser>(p: &mut P) -> bool {
    match p.current() {
        SyntaxKind::VAR_KW | SyntaxKind::CONST_KW | SyntaxKind::FUNCTION_KW | SyntaxKind::CLASS_KW => true,
        SyntaxKind::AT => p.flags().decorators,
        SyntaxKind::ENUM_KW => p.flags().types,
        SyntaxKind::IDENT => {
            at_let_declaration(p)
                || at_async_function(p)
                || (p.flags().types && at_typed_declaration(p))
        }
        _ => false,
    }
}

// =============================================================================
// Typed declarations
// =============================================================================

/// Whether the current identifier starts a typed declaration
/// (`interface`, `type`, `namespace`, `module`, `global`, `declare`, `abstract class`)
pub(super) fn at_typed_declaration<P: ScriptParser>(p: &mut P) -> bool {
    if p.nth_has_line_break_before(1) {
        return false;
    }
    if p.at_contextual("interface") || p.at_contextual("namespace") {
        return p.nth_at(1, SyntaxKind::IDENT);
    }
    if p.at_contextual("type") {
        return p.nth_at(1, SyntaxKind::IDENT) && matches!(p.nth(2), SyntaxKind::EQ | SyntaxKind::LT);
    }
    if p.at_contextual("module") {
        return match p.nth(1) {
            SyntaxKind::STRING => true,
            SyntaxKind::IDENT => matches!(p.nth(2), SyntaxKind::L_BRACE | SyntaxKind::DOT),
            _ => false,
        };
    }
    if p.at_contextual("global") {
        return p.context().ambient && p.nth_at(1, SyntaxKind::L_BRACE);
    }
    if p.at_contextual("abstract") {
        return p.nth_at(1, SyntaxKind::CLASS_KW);
    }
    if p.at_contextual("declare") {
        return match p.nth(1) {
            SyntaxKind::VAR_KW
            | SyntaxKind::CONST_KW
            | SyntaxKind::FUNCTION_KW
            | SyntaxKind::CLASS_KW
            | SyntaxKind::ENUM_KW => true,
            SyntaxKind::IDENT => [
                "let", "async", "interface", "type", "namespace", "module", "global", "abstract",
            ]
            .iter()
            .any(|word| p.nth_contextual(1, word)),
            _ => false,
        };
    }
    false
}

/// TypedDeclaration = EnumDecl | InterfaceDecl | TypeAliasDecl | ModuleDecl
///     | AmbientDecl | AbstractClassDecl
pub(super) fn typed_declaration<P: ScriptParser>(p: &mut P) {
    if p.at(SyntaxKind::CONST_KW) || p.at(SyntaxKind::ENUM_KW) {
        enum_declaration(p);
    } else if p.at_contextual("interface") {
        interface_declaration(p);
    } else if p.at_contextual("type") {
        type_alias_declaration(p);
    } else if p.at_contextual("declare") {
        ambient_declaration(p);
    } else if p.at_contextual("abstract") {
        class_with_decorators(p, SyntaxKind::CLASS_DECL, true);
    } else {
        module_declaration(p);
    }
}

/// InterfaceDecl = 'interface' Name TypeParams? ('extends' TypeRef (',' TypeRef)*)? ObjectType
fn interface_declaration<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::INTERFACE_DECL);
    p.bump(); // interface
    expect_name(p, "an interface name");
    if p.at(SyntaxKind::LT) {
        type_params(p);
    }
    if p.at(SyntaxKind::EXTENDS_KW) {
        p.start_node(SyntaxKind::HERITAGE_CLAUSE);
        p.bump();
        type_reference(p);
        while p.eat(SyntaxKind::COMMA) {
            type_reference(p);
        }
        p.finish_node();
    }
    object_type(p);
    p.finish_node();
}

/// TypeAliasDecl = 'type' Name TypeParams? '=' Type ';'
fn type_alias_declaration<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE_ALIAS_DECL);
    p.bump(); // type
    expect_name(p, "a type name");
    if p.at(SyntaxKind::LT) {
        type_params(p);
    }
    p.expect(SyntaxKind::EQ);
    type_expr(p);
    consume_semicolon(p);
    p.finish_node();
}

/// EnumDecl = 'const'? 'enum' Name '{' (EnumMember (',' EnumMember)* ','?)? '}'
/// EnumMember = PropertyName ('=' AssignmentExpression)?
fn enum_declaration<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::ENUM_DECL);
    p.eat(SyntaxKind::CONST_KW);
    p.expect(SyntaxKind::ENUM_KW);
    expect_name(p, "an enum name");
    p.expect(SyntaxKind::L_BRACE);
    while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
        p.start_node(SyntaxKind::ENUM_MEMBER);
        property_name(p);
        if p.eat(SyntaxKind::EQ) {
            assignment_expr_allow_in(p);
        }
        p.finish_node();
        if !p.at(SyntaxKind::R_BRACE) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// ModuleDecl = ('namespace' | 'module') (Name ('.' Name)* | String) ModuleBlock
///     | 'global' ModuleBlock
///     | 'module' String ';'   (ambient shorthand)
fn module_declaration<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::MODULE_DECL);
    let is_global = p.at_contextual("global");
    p.bump(); // namespace | module | global
    if !is_global {
        if !p.eat(SyntaxKind::STRING) {
            expect_name(p, "a namespace name");
            while p.eat(SyntaxKind::DOT) {
                expect_name(p, "a namespace name");
            }
        }
    }
    if p.at(SyntaxKind::L_BRACE) {
        p.bump();
        let ctx = Context {
            top_level: true,
            ..p.context().block()
        };
        with_context(p, ctx, |p| statement_list(p, SyntaxKind::R_BRACE));
        p.expect(SyntaxKind::R_BRACE);
    } else if p.context().ambient {
        consume_semicolon(p);
    } else {
        p.expect(SyntaxKind::L_BRACE);
    }
    p.finish_node();
}

/// AmbientDecl = 'declare' Declaration
fn ambient_declaration<P: ScriptParser>(p: &mut P) {
    p.start_node(SyntaxKind::AMBIENT_DECL);
    p.bump(); // declare
    let ctx = Context {
        ambient: true,
        ..p.context()
    };
    with_context(p, ctx, statement);
    p.finish_node();
}
