//! Print structured import declarations as JavaScript

use modularize_core::{ImportDeclaration, ImportSpecifier};
use oxc_allocator::Allocator;
use oxc_ast::AstBuilder;
use oxc_ast::ast::{
    BindingIdentifier, ImportDeclarationSpecifier, ImportOrExportKind, ModuleExportName, Statement,
    WithClause,
};
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_span::{SPAN, SourceType};

use crate::format::{FormatOptions, QuoteStyle};

/// Builds oxc import statements from the structured model
///
/// Consumed by [`ImportEmitter::render`], since statements are moved into
/// the generated program.
pub struct ImportEmitter<'a> {
    ast: AstBuilder<'a>,
    body: Vec<Statement<'a>>,
    source_type: SourceType,
}

impl<'a> ImportEmitter<'a> {
    pub fn new(allocator: &'a Allocator) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
            body: Vec::new(),
            source_type: SourceType::mjs(),
        }
    }

    /// Add one declaration
    pub fn push(&mut self, declaration: &ImportDeclaration) {
        let stmt = self.statement(declaration);
        self.body.push(stmt);
    }

    /// Add multiple declarations, in order
    pub fn extend<'d>(&mut self, declarations: impl IntoIterator<Item = &'d ImportDeclaration>) {
        for declaration in declarations {
            self.push(declaration);
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Build the `import` statement for one declaration
    pub fn statement(&self, declaration: &ImportDeclaration) -> Statement<'a> {
        let specifiers = if declaration.is_side_effect() {
            None
        } else {
            Some(
                self.ast.vec_from_iter(
                    declaration
                        .specifiers
                        .iter()
                        .map(|spec| self.specifier(spec)),
                ),
            )
        };

        let source = self
            .ast
            .string_literal(SPAN, self.ast.atom(&declaration.source), None);

        let import = self.ast.module_declaration_import_declaration(
            SPAN,
            specifiers,
            source,
            None,
            None::<oxc_allocator::Box<'_, WithClause<'_>>>,
            ImportOrExportKind::Value,
        );
        Statement::from(import)
    }

    /// Generate the statements, one per line, without a trailing newline
    pub fn render(self, opts: &FormatOptions) -> String {
        let body = self.ast.vec_from_iter(self.body);
        let program = self.ast.program(
            SPAN,
            self.source_type,
            "",
            self.ast.vec(), // comments
            None,           // hashbang
            self.ast.vec(), // directives
            body,
        );

        let options = CodegenOptions {
            single_quote: opts.quote_style == QuoteStyle::Single,
            ..CodegenOptions::default()
        };
        let code = Codegen::new().with_options(options).build(&program).code;
        code.trim_end().to_string()
    }

    fn specifier(&self, spec: &ImportSpecifier) -> ImportDeclarationSpecifier<'a> {
        match spec {
            ImportSpecifier::Default { local } => {
                let default = self.ast.import_default_specifier(SPAN, self.binding(local));
                ImportDeclarationSpecifier::ImportDefaultSpecifier(self.ast.alloc(default))
            }
            ImportSpecifier::Namespace { local } => {
                let namespace = self.ast.import_namespace_specifier(SPAN, self.binding(local));
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(self.ast.alloc(namespace))
            }
            ImportSpecifier::Named { imported, local } => {
                let named = self.ast.import_specifier(
                    SPAN,
                    self.export_name(imported),
                    self.binding(local),
                    ImportOrExportKind::Value,
                );
                ImportDeclarationSpecifier::ImportSpecifier(self.ast.alloc(named))
            }
        }
    }

    fn binding(&self, name: &str) -> BindingIdentifier<'a> {
        self.ast.binding_identifier(SPAN, self.ast.atom(name))
    }

    fn export_name(&self, name: &str) -> ModuleExportName<'a> {
        if is_identifier_name(name) {
            ModuleExportName::IdentifierName(self.ast.identifier_name(SPAN, self.ast.atom(name)))
        } else {
            ModuleExportName::StringLiteral(self.ast.string_literal(
                SPAN,
                self.ast.atom(name),
                None,
            ))
        }
    }
}

/// Render declarations to source text in one go
pub fn render_declarations<'d>(
    declarations: impl IntoIterator<Item = &'d ImportDeclaration>,
    opts: &FormatOptions,
) -> String {
    let allocator = Allocator::default();
    let mut emitter = ImportEmitter::new(&allocator);
    emitter.extend(declarations);
    emitter.render(opts)
}

fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
