// Module Scanner
//
// Walks the top-level statements of a module and extracts every enum it declares.

use super::{EnumBase, EnumDeclDefinition, EnumDefinition, EnumRepresentation, ScannerOptions};
use crate::error::IntrospectionError;
use crate::host::IntrospectionHost;
use indexmap::IndexMap;
use oxc_ast::ast as oxc;
use serde::Serialize;

/// Enums of one module, keyed by name in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModuleEnums {
    enums: IndexMap<String, EnumRepresentation>,
}

impl ModuleEnums {
    pub fn get(&self, name: &str) -> Option<&EnumRepresentation> {
        self.enums.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enums.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnumRepresentation> {
        self.enums.values()
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    fn insert(&mut self, representation: EnumRepresentation) {
        self.enums
            .insert(representation.name().to_string(), representation);
    }
}

/// Scan `program` for enums.
///
/// Classes qualify when decorated with `options.enum_decorator`; `enum` declarations
/// qualify when `options.include_ts_enums` is set. The first failing extraction aborts the
/// scan.
pub fn scan_module(
    program: &oxc::Program<'_>,
    host: &impl IntrospectionHost,
    options: &ScannerOptions,
) -> Result<ModuleEnums, IntrospectionError> {
    let mut scanner = Scanner {
        host,
        options,
        enums: ModuleEnums::default(),
    };

    for statement in &program.body {
        match statement {
            oxc::Statement::ClassDeclaration(class) => scanner.visit_class(class)?,
            oxc::Statement::TSEnumDeclaration(decl) => scanner.visit_enum(decl)?,
            oxc::Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(oxc::Declaration::ClassDeclaration(class)) => scanner.visit_class(class)?,
                Some(oxc::Declaration::TSEnumDeclaration(decl)) => scanner.visit_enum(decl)?,
                _ => {}
            },
            oxc::Statement::ExportDefaultDeclaration(export) => {
                if let oxc::ExportDefaultDeclarationKind::ClassDeclaration(class) =
                    &export.declaration
                {
                    scanner.visit_class(class)?;
                }
            }
            _ => {}
        }
    }

    Ok(scanner.enums)
}

struct Scanner<'s, H> {
    host: &'s H,
    options: &'s ScannerOptions,
    enums: ModuleEnums,
}

impl<H: IntrospectionHost> Scanner<'_, H> {
    fn visit_class(&mut self, class: &oxc::Class<'_>) -> Result<(), IntrospectionError> {
        if !has_decorator(class, &self.options.enum_decorator) {
            return Ok(());
        }

        let def = EnumDefinition::extract(class, self.host)?;
        tracing::debug!(
            name = def.name(),
            values = def.values().len(),
            "extracted enum class"
        );
        self.enums.insert(def.into());
        Ok(())
    }

    fn visit_enum(&mut self, decl: &oxc::TSEnumDeclaration<'_>) -> Result<(), IntrospectionError> {
        if !self.options.include_ts_enums {
            return Ok(());
        }

        let def = EnumDeclDefinition::extract(decl, self.host)?;
        tracing::debug!(
            name = def.name(),
            values = def.values().len(),
            "extracted enum declaration"
        );
        self.enums.insert(def.into());
        Ok(())
    }
}

/// Whether `class` carries `@name` or `@name(...)`.
fn has_decorator(class: &oxc::Class<'_>, name: &str) -> bool {
    class.decorators.iter().any(|decorator| {
        let callee = match &decorator.expression {
            oxc::Expression::CallExpression(call) => &call.callee,
            expression => expression,
        };
        matches!(callee, oxc::Expression::Identifier(ident) if ident.name == name)
    })
}
