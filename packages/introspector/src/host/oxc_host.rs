//! OXC Introspection Host
//!
//! Implements the `IntrospectionHost` trait for a program parsed by oxc.

use super::{jsdoc, Binding, Declaration, IntrospectionHost};
use crate::error::HostError;
use oxc_ast::ast::{Expression, Program};
use oxc_semantic::SemanticBuilder;
use oxc_span::{GetSpan, Span};

/// Keywords that may sit between a JSDoc block and the declaration it documents.
const MODIFIERS: &[&str] = &[
    "export",
    "default",
    "declare",
    "abstract",
    "const",
    "static",
    "readonly",
    "public",
    "private",
    "protected",
    "override",
    "accessor",
];

pub struct OxcIntrospectionHost<'a> {
    file_name: String,
    source: &'a str,
    /// Full spans of `/** ... */` blocks, in source order.
    doc_comments: Vec<Span>,
    /// Full spans of every other comment, skipped when looking for documentation.
    plain_comments: Vec<Span>,
    line_starts: Vec<u32>,
}

impl<'a> OxcIntrospectionHost<'a> {
    /// Analyze `program` and build a host over it.
    ///
    /// Runs semantic analysis so that declaration names are bound to symbols.
    pub fn new(file_name: impl Into<String>, program: &'a Program<'a>) -> Self {
        let file_name = file_name.into();
        let source = program.source_text;

        let semantic = SemanticBuilder::new()
            .with_excess_capacity(0.0)
            .build(program);
        if !semantic.errors.is_empty() {
            tracing::debug!(
                file = %file_name,
                errors = semantic.errors.len(),
                "semantic analysis reported errors"
            );
        }

        let (doc_comments, plain_comments): (Vec<Span>, Vec<Span>) = program
            .comments
            .iter()
            .filter_map(|comment| full_comment_span(source, comment.span))
            .partition(|span| is_jsdoc_span(source, *span));

        let line_starts = std::iter::once(0)
            .chain(
                source
                    .bytes()
                    .enumerate()
                    .filter(|(_, b)| *b == b'\n')
                    .map(|(i, _)| i as u32 + 1),
            )
            .collect();

        Self {
            file_name,
            source,
            doc_comments,
            plain_comments,
            line_starts,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    fn text(&self, span: Span) -> &'a str {
        self.source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }

    /// Start of a declaration once its decorators are taken into account.
    fn leading_span(&self, span: Span, decorators: impl Iterator<Item = Span>) -> Span {
        let start = decorators.map(|d| d.start).fold(span.start, u32::min);
        Span::new(start, span.end)
    }

    /// Position right after the last token preceding `pos`, skipping modifier keywords
    /// and comments that are not JSDoc.
    fn doc_anchor(&self, pos: u32) -> u32 {
        let mut pos = (pos as usize).min(self.source.len());
        loop {
            let before = self.source[..pos].trim_end();
            if let Some(comment) = self
                .plain_comments
                .iter()
                .find(|span| span.end as usize == before.len())
            {
                pos = comment.start as usize;
                continue;
            }
            let word_start = before
                .char_indices()
                .rev()
                .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
                .last()
                .map_or(before.len(), |(i, _)| i);
            if MODIFIERS.contains(&&before[word_start..]) {
                pos = word_start;
                continue;
            }
            return before.len() as u32;
        }
    }

    fn unresolved(&self, name: impl Into<String>, span: Span) -> HostError {
        HostError::UnresolvedSymbol {
            name: name.into(),
            position: self.position_of(span),
        }
    }
}

impl IntrospectionHost for OxcIntrospectionHost<'_> {
    fn resolve_binding(&self, declaration: Declaration<'_>) -> Result<Binding, HostError> {
        match declaration {
            Declaration::Class(class) => {
                let span = self.leading_span(class.span, class.decorators.iter().map(|d| d.span));
                let id = class
                    .id
                    .as_ref()
                    .ok_or_else(|| self.unresolved("<anonymous class>", class.span))?;
                let symbol = id
                    .symbol_id
                    .get()
                    .ok_or_else(|| self.unresolved(id.name.as_str(), id.span))?;
                Ok(Binding::new(id.name.as_str(), span, Some(symbol)))
            }
            Declaration::Property(property) => {
                if property.computed {
                    return Err(self.unresolved(self.text(property.key.span()), property.key.span()));
                }
                let span = self.leading_span(
                    property.span,
                    property.decorators.iter().map(|d| d.span),
                );
                Ok(Binding::new(self.text(property.key.span()), span, None))
            }
            Declaration::Enum(decl) => {
                let symbol = decl
                    .id
                    .symbol_id
                    .get()
                    .ok_or_else(|| self.unresolved(decl.id.name.as_str(), decl.id.span))?;
                Ok(Binding::new(decl.id.name.as_str(), decl.span, Some(symbol)))
            }
            Declaration::EnumMember(member) => {
                Ok(Binding::new(self.text(member.id.span()), member.span, None))
            }
        }
    }

    fn documentation_of(&self, binding: &Binding) -> String {
        let anchor = self.doc_anchor(binding.declaration().start);
        self.doc_comments
            .iter()
            .rev()
            .find(|span| span.end == anchor)
            .map(|span| jsdoc::description(self.text(*span)))
            .unwrap_or_default()
    }

    fn resolve_literal(&self, expression: &Expression<'_>) -> String {
        match expression {
            Expression::StringLiteral(lit) => lit.value.to_string(),
            Expression::TemplateLiteral(tpl) if tpl.expressions.is_empty() => {
                let text = self.text(tpl.span);
                text.strip_prefix('`')
                    .and_then(|t| t.strip_suffix('`'))
                    .unwrap_or(text)
                    .to_string()
            }
            Expression::ParenthesizedExpression(e) => self.resolve_literal(&e.expression),
            Expression::TSAsExpression(e) => self.resolve_literal(&e.expression),
            Expression::TSSatisfiesExpression(e) => self.resolve_literal(&e.expression),
            Expression::TSTypeAssertion(e) => self.resolve_literal(&e.expression),
            // Numbers, booleans, `null` and anything non-literal keep their source text.
            _ => self.text(expression.span()).to_string(),
        }
    }

    fn position_of(&self, span: Span) -> String {
        let offset = (span.start as usize).min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start as usize <= offset);
        let line_start = self.line_starts[line.saturating_sub(1)] as usize;
        let column = self
            .source
            .get(line_start..offset)
            .map_or(0, |s| s.encode_utf16().count());
        format!("{}:{}:{}", self.file_name, line, column + 1)
    }
}

/// Widen a comment span to include its delimiters if the parser reported the content only.
fn full_comment_span(source: &str, span: Span) -> Option<Span> {
    let text = source.get(span.start as usize..span.end as usize)?;
    if text.starts_with("/*") || text.starts_with("//") {
        return Some(span);
    }
    let start = span.start.checked_sub(2)?;
    if source.get(start as usize..span.start as usize) == Some("//") {
        return Some(Span::new(start, span.end));
    }
    let widened = Span::new(start, span.end + 2);
    source
        .get(widened.start as usize..widened.end as usize)
        .filter(|t| t.starts_with("/*") && t.ends_with("*/"))
        .map(|_| widened)
}

fn is_jsdoc_span(source: &str, span: Span) -> bool {
    source
        .get(span.start as usize..span.end as usize)
        .is_some_and(jsdoc::is_jsdoc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::Statement;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn first_initializer<'a>(program: &'a Program<'a>) -> &'a Expression<'a> {
        match &program.body[0] {
            Statement::VariableDeclaration(decl) => decl.declarations[0].init.as_ref().unwrap(),
            other => panic!("unexpected statement: {:?}", other.span()),
        }
    }

    fn literal_of(source: &str) -> String {
        let allocator = Allocator::default();
        let program = Parser::new(&allocator, source, SourceType::ts()).parse().program;
        let host = OxcIntrospectionHost::new("lit.ts", &program);
        host.resolve_literal(first_initializer(&program))
    }

    #[test]
    fn should_resolve_string_literals_to_their_value() {
        assert_eq!(literal_of(r#"const x = "RED";"#), "RED");
        assert_eq!(literal_of("const x = 'it\\'s';"), "it's");
    }

    #[test]
    fn should_resolve_plain_template_literals() {
        assert_eq!(literal_of("const x = `GREEN`;"), "GREEN");
    }

    #[test]
    fn should_keep_source_text_of_other_literals() {
        assert_eq!(literal_of("const x = 42;"), "42");
        assert_eq!(literal_of("const x = 0x1F;"), "0x1F");
        assert_eq!(literal_of("const x = true;"), "true");
        assert_eq!(literal_of("const x = null;"), "null");
        assert_eq!(literal_of("const x = -1;"), "-1");
    }

    #[test]
    fn should_unwrap_type_wrappers() {
        assert_eq!(literal_of(r#"const x = ("BLUE" as const);"#), "BLUE");
        assert_eq!(literal_of(r#"const x = "BLUE" satisfies string;"#), "BLUE");
    }

    #[test]
    fn should_format_one_based_positions() {
        let allocator = Allocator::default();
        let source = "const a = 1;\n  const b = 2;\n";
        let program = Parser::new(&allocator, source, SourceType::ts()).parse().program;
        let host = OxcIntrospectionHost::new("pos.ts", &program);

        assert_eq!(host.position_of(Span::new(0, 1)), "pos.ts:1:1");
        assert_eq!(host.position_of(Span::new(15, 20)), "pos.ts:2:3");
        assert_eq!(host.file_name(), "pos.ts");
    }

    #[test]
    fn should_collect_only_jsdoc_blocks() {
        let allocator = Allocator::default();
        let source = "/* plain */\n// line\n/** doc */\nconst a = 1;\n";
        let program = Parser::new(&allocator, source, SourceType::ts()).parse().program;
        let host = OxcIntrospectionHost::new("doc.ts", &program);

        assert_eq!(host.doc_comments.len(), 1);
        assert_eq!(host.text(host.doc_comments[0]), "/** doc */");
    }

    #[test]
    fn should_skip_modifiers_before_declarations() {
        let allocator = Allocator::default();
        let source = "/** doc */\nexport default abstract class A {}\n";
        let program = Parser::new(&allocator, source, SourceType::ts()).parse().program;
        let host = OxcIntrospectionHost::new("doc.ts", &program);

        let class_start = source.find("class").unwrap() as u32;
        assert_eq!(host.doc_anchor(class_start), 10);
    }

    #[test]
    fn should_skip_plain_comments_before_declarations() {
        let allocator = Allocator::default();
        let source = "/** doc */\n// eslint-disable-next-line\n/* note */ export class A {}\n";
        let program = Parser::new(&allocator, source, SourceType::ts()).parse().program;
        let host = OxcIntrospectionHost::new("doc.ts", &program);

        assert_eq!(host.plain_comments.len(), 2);
        let class_start = source.find("class").unwrap() as u32;
        assert_eq!(host.doc_anchor(class_start), 10);
    }

    #[test]
    fn should_count_columns_in_utf16_units() {
        let allocator = Allocator::default();
        let source = "const s = \"\u{1F600}\"; const t = 1;\n";
        let program = Parser::new(&allocator, source, SourceType::ts()).parse().program;
        let host = OxcIntrospectionHost::new("pos.ts", &program);

        let t_start = source.find("const t").unwrap() as u32;
        assert_eq!(host.position_of(Span::new(t_start, t_start + 1)), "pos.ts:1:17");
    }

    #[test]
    fn host_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OxcIntrospectionHost<'static>>();
    }
}
