//! The grammar variants a snippet can be checked against.

use crate::parser::GrammarFlags;

/// A syntax grammar variant of the JavaScript family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// Plain scripts: no type syntax, no markup
    PlainScript,
    /// Type annotations and typed declarations on top of plain scripts
    TypedSuperset,
    /// The typed superset with tags in expression positions
    MarkupEmbedded,
}

impl Dialect {
    /// Every dialect, from most to least restrictive
    pub const ALL: [Dialect; 3] = [
        Dialect::PlainScript,
        Dialect::TypedSuperset,
        Dialect::MarkupEmbedded,
    ];

    /// Dialect implied by a file extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Some(Self::PlainScript),
            "ts" | "mts" | "cts" => Some(Self::TypedSuperset),
            "jsx" | "tsx" => Some(Self::MarkupEmbedded),
            _ => None,
        }
    }

    /// Grammar configuration used to validate this dialect
    pub fn grammar(self) -> GrammarFlags {
        match self {
            Self::PlainScript => GrammarFlags::plain(),
            Self::TypedSuperset => GrammarFlags::typed(),
            Self::MarkupEmbedded => GrammarFlags::markup(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlainScript => "plain script",
            Self::TypedSuperset => "typed superset",
            Self::MarkupEmbedded => "markup embedded",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Dialect::from_extension("js"), Some(Dialect::PlainScript));
        assert_eq!(Dialect::from_extension("MJS"), Some(Dialect::PlainScript));
        assert_eq!(Dialect::from_extension("cts"), Some(Dialect::TypedSuperset));
        assert_eq!(Dialect::from_extension("Tsx"), Some(Dialect::MarkupEmbedded));
        assert_eq!(Dialect::from_extension("jsx"), Some(Dialect::MarkupEmbedded));
        assert_eq!(Dialect::from_extension("json"), None);
        assert_eq!(Dialect::from_extension(""), None);
    }

    #[test]
    fn test_grammar_flags() {
        assert!(!Dialect::PlainScript.grammar().types);
        assert!(Dialect::TypedSuperset.grammar().angle_assertions());
        let markup = Dialect::MarkupEmbedded.grammar();
        assert!(markup.types && markup.markup && !markup.angle_assertions());
    }
}
