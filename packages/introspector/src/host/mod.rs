//! Introspection Host
//!
//! Defines the interface the enum extractors use to resolve names, documentation and
//! literal values, independent of how the program was analyzed.

pub mod jsdoc;
pub mod oxc_host;

pub use oxc_host::OxcIntrospectionHost;

use crate::error::HostError;
use oxc_ast::ast::{Class, Expression, PropertyDefinition, TSEnumDeclaration, TSEnumMember};
use oxc_semantic::SymbolId;
use oxc_span::Span;

/// A syntax node that can introduce a named binding.
///
/// oxc models these as unrelated structs; this wrapper lets the host accept any of them.
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'n> {
    Class(&'n Class<'n>),
    Property(&'n PropertyDefinition<'n>),
    Enum(&'n TSEnumDeclaration<'n>),
    EnumMember(&'n TSEnumMember<'n>),
}

impl Declaration<'_> {
    pub fn span(&self) -> Span {
        match self {
            Declaration::Class(c) => c.span,
            Declaration::Property(p) => p.span,
            Declaration::Enum(e) => e.span,
            Declaration::EnumMember(m) => m.span,
        }
    }
}

/// A resolved name-to-declaration association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    name: String,
    declaration: Span,
    symbol: Option<SymbolId>,
}

impl Binding {
    pub fn new(name: impl Into<String>, declaration: Span, symbol: Option<SymbolId>) -> Self {
        Self {
            name: name.into(),
            declaration,
            symbol,
        }
    }

    /// Source text of the bound name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Span of the declaration including its decorators and modifiers.
    pub fn declaration(&self) -> Span {
        self.declaration
    }

    /// Semantic symbol, for scoped bindings. Class members have none.
    pub fn symbol(&self) -> Option<SymbolId> {
        self.symbol
    }
}

/// Source analysis services consumed by the extractors.
///
/// Implementations must be read-only so one host can serve any number of extractions.
pub trait IntrospectionHost {
    /// Resolve the binding introduced by `declaration`, or fail if its name is unbound.
    fn resolve_binding(&self, declaration: Declaration<'_>) -> Result<Binding, HostError>;

    /// Documentation attached to `binding`, or an empty string.
    fn documentation_of(&self, binding: &Binding) -> String;

    /// Canonical string form of a literal expression.
    fn resolve_literal(&self, expression: &Expression<'_>) -> String;

    /// Human readable `file:line:column` position of `span`.
    fn position_of(&self, span: Span) -> String;
}
