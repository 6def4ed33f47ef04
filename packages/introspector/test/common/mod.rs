// Shared helpers for the introspector integration tests.
#![allow(dead_code)]

use oxc_allocator::Allocator;
use oxc_ast::ast;
use oxc_parser::Parser;
use oxc_span::SourceType;

pub struct TestProgram<'a> {
    pub program: ast::Program<'a>,
}

impl<'a> TestProgram<'a> {
    pub fn new(allocator: &'a Allocator, source: &'a str) -> Self {
        let source_type = SourceType::default()
            .with_typescript(true)
            .with_module(true);
        let ret = Parser::new(allocator, source, source_type).parse();

        if !ret.errors.is_empty() {
            panic!("Parse errors: {:?}", ret.errors);
        }

        Self {
            program: ret.program,
        }
    }

    /// Top-level class declarations, including exported ones, in source order.
    pub fn classes(&self) -> Vec<&ast::Class<'a>> {
        let mut classes = Vec::new();
        for stmt in &self.program.body {
            match stmt {
                ast::Statement::ClassDeclaration(class) => classes.push(&**class),
                ast::Statement::ExportNamedDeclaration(decl) => {
                    if let Some(ast::Declaration::ClassDeclaration(class)) = &decl.declaration {
                        classes.push(&**class);
                    }
                }
                ast::Statement::ExportDefaultDeclaration(decl) => {
                    if let ast::ExportDefaultDeclarationKind::ClassDeclaration(class) =
                        &decl.declaration
                    {
                        classes.push(&**class);
                    }
                }
                _ => {}
            }
        }
        classes
    }

    pub fn find_class(&self, name: &str) -> &ast::Class<'a> {
        self.classes()
            .into_iter()
            .find(|class| class.id.as_ref().is_some_and(|id| id.name == name))
            .unwrap_or_else(|| panic!("class {} not found", name))
    }

    pub fn first_class(&self) -> &ast::Class<'a> {
        self.classes()
            .into_iter()
            .next()
            .expect("no class declared")
    }

    pub fn find_enum(&self, name: &str) -> &ast::TSEnumDeclaration<'a> {
        for stmt in &self.program.body {
            let decl = match stmt {
                ast::Statement::TSEnumDeclaration(decl) => decl,
                ast::Statement::ExportNamedDeclaration(export) => match &export.declaration {
                    Some(ast::Declaration::TSEnumDeclaration(decl)) => decl,
                    _ => continue,
                },
                _ => continue,
            };
            if decl.id.name == name {
                return decl;
            }
        }
        panic!("enum {} not found", name)
    }
}
