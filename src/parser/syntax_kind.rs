//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! shared by the plain script, typed superset and markup-embedded grammars.

/// All syntax kinds (tokens and nodes)
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (statements, expressions, types, elements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,
    SHEBANG,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // identifier, including contextual words (let, async, type, ...)
    PRIVATE_NAME,       // #field
    NUMBER,             // 42, 0x2A, 1_000n, .5e3
    STRING,             // "hello" or 'hello'
    REGEX,              // /ab+c/gi
    TEMPLATE_FULL,      // `no substitutions`
    TEMPLATE_HEAD,      // `text${
    TEMPLATE_MIDDLE,    // }text${
    TEMPLATE_TAIL,      // }text`
    JSX_TEXT,           // text between tags
    JSX_STRING,         // "attribute value" (no escapes)

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    SEMICOLON,          // ;
    COMMA,              // ,
    DOT,                // .
    DOT_DOT_DOT,        // ...
    COLON,              // :
    QUESTION,           // ?
    QUESTION_DOT,       // ?.  (joined by the parser)
    QUESTION_QUESTION,  // ??
    QUESTION_QUESTION_EQ, // ??=
    AT,                 // @
    TILDE,              // ~
    BANG,               // !
    EQ,                 // =
    EQ_EQ,              // ==
    EQ_EQ_EQ,           // ===
    BANG_EQ,            // !=
    BANG_EQ_EQ,         // !==
    FAT_ARROW,          // =>
    LT,                 // <
    LT_EQ,              // <=
    LT_LT,              // <<
    LT_LT_EQ,           // <<=
    GT,                 // >  (the lexer never joins '>' so type arguments close cleanly)
    GT_EQ,              // >=   (joined by the parser)
    GT_GT,              // >>   (joined by the parser)
    GT_GT_EQ,           // >>=  (joined by the parser)
    GT_GT_GT,           // >>>  (joined by the parser)
    GT_GT_GT_EQ,        // >>>= (joined by the parser)
    PLUS,               // +
    PLUS_PLUS,          // ++
    PLUS_EQ,            // +=
    MINUS,              // -
    MINUS_MINUS,        // --
    MINUS_EQ,           // -=
    STAR,               // *
    STAR_STAR,          // **
    STAR_EQ,            // *=
    STAR_STAR_EQ,       // **=
    SLASH,              // /
    SLASH_EQ,           // /=
    PERCENT,            // %
    PERCENT_EQ,         // %=
    AMP,                // &
    AMP_AMP,            // &&
    AMP_EQ,             // &=
    AMP_AMP_EQ,         // &&=
    PIPE,               // |
    PIPE_PIPE,          // ||
    PIPE_EQ,            // |=
    PIPE_PIPE_EQ,       // ||=
    CARET,              // ^
    CARET_EQ,           // ^=

    // =========================================================================
    // KEYWORDS - reserved words only; contextual words lex as IDENT
    // =========================================================================
    BREAK_KW,
    CASE_KW,
    CATCH_KW,
    CLASS_KW,
    CONST_KW,
    CONTINUE_KW,
    DEBUGGER_KW,
    DEFAULT_KW,
    DELETE_KW,
    DO_KW,
    ELSE_KW,
    ENUM_KW,
    EXPORT_KW,
    EXTENDS_KW,
    FALSE_KW,
    FINALLY_KW,
    FOR_KW,
    FUNCTION_KW,
    IF_KW,
    IMPORT_KW,
    IN_KW,
    INSTANCEOF_KW,
    NEW_KW,
    NULL_KW,
    RETURN_KW,
    SUPER_KW,
    SWITCH_KW,
    THIS_KW,
    THROW_KW,
    TRUE_KW,
    TRY_KW,
    TYPEOF_KW,
    VAR_KW,
    VOID_KW,
    WHILE_KW,
    WITH_KW,

    // =========================================================================
    // NODES - module level
    // =========================================================================
    SOURCE_FILE,
    IMPORT_DECL,
    EXPORT_DECL,
    SPECIFIER_LIST,
    SPECIFIER,

    // =========================================================================
    // NODES - statements and declarations
    // =========================================================================
    BLOCK,
    EMPTY_STMT,
    EXPR_STMT,
    VAR_DECL,
    DECLARATOR,
    FN_DECL,
    CLASS_DECL,
    CLASS_BODY,
    CLASS_MEMBER,
    PARAM_LIST,
    PARAM,
    IF_STMT,
    FOR_STMT,
    WHILE_STMT,
    DO_WHILE_STMT,
    RETURN_STMT,
    BREAK_STMT,
    CONTINUE_STMT,
    THROW_STMT,
    TRY_STMT,
    CATCH_CLAUSE,
    FINALLY_CLAUSE,
    SWITCH_STMT,
    SWITCH_CASE,
    LABELED_STMT,
    DEBUGGER_STMT,
    WITH_STMT,
    DECORATOR,

    // =========================================================================
    // NODES - patterns
    // =========================================================================
    NAME,
    OBJECT_PATTERN,
    ARRAY_PATTERN,
    PATTERN_PROPERTY,
    REST_PATTERN,

    // =========================================================================
    // NODES - expressions
    // =========================================================================
    LITERAL,
    NAME_REF,
    ARRAY_EXPR,
    OBJECT_EXPR,
    PROPERTY,
    PROPERTY_NAME,
    COMPUTED_NAME,
    TEMPLATE,
    PAREN_EXPR,
    FN_EXPR,
    ARROW_FN,
    CLASS_EXPR,
    CALL_EXPR,
    ARG_LIST,
    MEMBER_EXPR,
    INDEX_EXPR,
    NEW_EXPR,
    META_PROPERTY,
    IMPORT_CALL,
    UNARY_EXPR,
    UPDATE_EXPR,
    AWAIT_EXPR,
    YIELD_EXPR,
    BIN_EXPR,
    ASSIGN_EXPR,
    COND_EXPR,
    SEQUENCE_EXPR,
    SPREAD,
    TAGGED_TEMPLATE,
    AS_EXPR,
    NON_NULL_EXPR,
    TYPE_ASSERTION,

    // =========================================================================
    // NODES - typed superset
    // =========================================================================
    TYPE_ANNOTATION,
    TYPE,
    TYPE_PARAMS,
    TYPE_PARAM,
    TYPE_ARGS,
    FUNCTION_TYPE,
    OBJECT_TYPE,
    TYPE_MEMBER,
    MAPPED_TYPE,
    TUPLE_TYPE,
    INTERFACE_DECL,
    TYPE_ALIAS_DECL,
    ENUM_DECL,
    ENUM_MEMBER,
    MODULE_DECL,
    AMBIENT_DECL,
    HERITAGE_CLAUSE,

    // =========================================================================
    // NODES - embedded markup
    // =========================================================================
    JSX_ELEMENT,
    JSX_FRAGMENT,
    JSX_OPENING,
    JSX_CLOSING,
    JSX_NAME,
    JSX_ATTR,
    JSX_SPREAD_ATTR,
    JSX_EXPR_CONTAINER,

    // Special
    ERROR,
    EOF,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT | Self::SHEBANG
        )
    }

    /// Check if this is a reserved keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::BREAK_KW as u16) && (self as u16) <= (Self::WITH_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::CARET_EQ as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::NUMBER
                | Self::STRING
                | Self::REGEX
                | Self::TEMPLATE_FULL
                | Self::TRUE_KW
                | Self::FALSE_KW
                | Self::NULL_KW
        )
    }

    /// Identifier names: identifiers plus every reserved word (valid after `.`,
    /// as property keys and as JSX tag/attribute names)
    pub fn is_identifier_name(self) -> bool {
        self == Self::IDENT || self.is_keyword()
    }

    /// Check if this is an assignment operator
    pub fn is_assign_op(self) -> bool {
        matches!(
            self,
            Self::EQ
                | Self::PLUS_EQ
                | Self::MINUS_EQ
                | Self::STAR_EQ
                | Self::STAR_STAR_EQ
                | Self::SLASH_EQ
                | Self::PERCENT_EQ
                | Self::AMP_EQ
                | Self::AMP_AMP_EQ
                | Self::PIPE_EQ
                | Self::PIPE_PIPE_EQ
                | Self::CARET_EQ
                | Self::QUESTION_QUESTION_EQ
                | Self::LT_LT_EQ
                | Self::GT_GT_EQ
                | Self::GT_GT_GT_EQ
        )
    }

    /// Source text of fixed-spelling tokens (punctuation and keywords)
    pub fn fixed_text(self) -> Option<&'static str> {
        use SyntaxKind::*;
        let text = match self {
            L_BRACE => "{",
            R_BRACE => "}",
            L_BRACKET => "[",
            R_BRACKET => "]",
            L_PAREN => "(",
            R_PAREN => ")",
            SEMICOLON => ";",
            COMMA => ",",
            DOT => ".",
            DOT_DOT_DOT => "...",
            COLON => ":",
            QUESTION => "?",
            QUESTION_DOT => "?.",
            QUESTION_QUESTION => "??",
            QUESTION_QUESTION_EQ => "??=",
            AT => "@",
            TILDE => "~",
            BANG => "!",
            EQ => "=",
            EQ_EQ => "==",
            EQ_EQ_EQ => "===",
            BANG_EQ => "!=",
            BANG_EQ_EQ => "!==",
            FAT_ARROW => "=>",
            LT => "<",
            LT_EQ => "<=",
            LT_LT => "<<",
            LT_LT_EQ => "<<=",
            GT => ">",
            GT_EQ => ">=",
            GT_GT => ">>",
            GT_GT_EQ => ">>=",
            GT_GT_GT => ">>>",
            GT_GT_GT_EQ => ">>>=",
            PLUS => "+",
            PLUS_PLUS => "++",
            PLUS_EQ => "+=",
            MINUS => "-",
            MINUS_MINUS => "--",
            MINUS_EQ => "-=",
            STAR => "*",
            STAR_STAR => "**",
            STAR_EQ => "*=",
            STAR_STAR_EQ => "**=",
            SLASH => "/",
            SLASH_EQ => "/=",
            PERCENT => "%",
            PERCENT_EQ => "%=",
            AMP => "&",
            AMP_AMP => "&&",
            AMP_EQ => "&=",
            AMP_AMP_EQ => "&&=",
            PIPE => "|",
            PIPE_PIPE => "||",
            PIPE_EQ => "|=",
            PIPE_PIPE_EQ => "||=",
            CARET => "^",
            CARET_EQ => "^=",
            BREAK_KW => "break",
            CASE_KW => "case",
            CATCH_KW => "catch",
            CLASS_KW => "class",
            CONST_KW => "const",
            CONTINUE_KW => "continue",
            DEBUGGER_KW => "debugger",
            DEFAULT_KW => "default",
            DELETE_KW => "delete",
            DO_KW => "do",
            ELSE_KW => "else",
            ENUM_KW => "enum",
            EXPORT_KW => "export",
            EXTENDS_KW => "extends",
            FALSE_KW => "false",
            FINALLY_KW => "finally",
            FOR_KW => "for",
            FUNCTION_KW => "function",
            IF_KW => "if",
            IMPORT_KW => "import",
            IN_KW => "in",
            INSTANCEOF_KW => "instanceof",
            NEW_KW => "new",
            NULL_KW => "null",
            RETURN_KW => "return",
            SUPER_KW => "super",
            SWITCH_KW => "switch",
            THIS_KW => "this",
            THROW_KW => "throw",
            TRUE_KW => "true",
            TRY_KW => "try",
            TYPEOF_KW => "typeof",
            VAR_KW => "var",
            VOID_KW => "void",
            WHILE_KW => "while",
            WITH_KW => "with",
            _ => return None,
        };
        Some(text)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScriptLanguage {}

impl rowan::Language for ScriptLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<ScriptLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ScriptLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ScriptLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<ScriptLanguage>;

/// Human-readable name of a token kind, used in diagnostics
pub fn kind_to_name(kind: SyntaxKind) -> &'static str {
    use SyntaxKind::*;
    match kind {
        IDENT => "identifier",
        PRIVATE_NAME => "private name",
        NUMBER => "number",
        STRING | JSX_STRING => "string",
        REGEX => "regular expression",
        TEMPLATE_FULL | TEMPLATE_HEAD | TEMPLATE_MIDDLE | TEMPLATE_TAIL => "template literal",
        JSX_TEXT => "JSX text",
        L_BRACE => "'{'",
        R_BRACE => "'}'",
        L_BRACKET => "'['",
        R_BRACKET => "']'",
        L_PAREN => "'('",
        R_PAREN => "')'",
        SEMICOLON => "';'",
        COMMA => "','",
        COLON => "':'",
        DOT => "'.'",
        FAT_ARROW => "'=>'",
        EQ => "'='",
        LT => "'<'",
        GT => "'>'",
        SLASH => "'/'",
        EOF => "end of input",
        ERROR => "invalid token",
        k if k.is_keyword() => "keyword",
        k if k.is_punct() => "punctuation",
        _ => "syntax",
    }
}
