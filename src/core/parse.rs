//! Single-file TypeScript parsing.
//!
//! Each source file is parsed into its own module AST with its own source
//! map, with no cross-file resolution: imports and type references are not
//! followed. This isolation is deliberate — malformed or partially typed
//! code elsewhere in the tree must never block extraction from a
//! well-formed file, and tests can build a tree straight from a string.

use std::sync::Arc;

use swc_common::{BytePos, FileName, Globals, SourceMap, SourceMapper, Span, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::error::SourceLocation;

/// A syntax error, located at the parser's reported span.
#[derive(Debug, Clone)]
pub struct SyntaxFailure {
    pub location: SourceLocation,
    pub message: String,
}

/// One parsed source file: the module root plus enough context to map AST
/// positions back to 1-based line/column diagnostics.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub file: String,
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSource")
            .field("module", &self.module)
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

impl ParsedSource {
    /// Map a byte position in this file to a 1-based line/column location.
    pub fn location(&self, pos: BytePos) -> SourceLocation {
        let loc = self.source_map.lookup_char_pos(pos);
        SourceLocation::new(&self.file, loc.line, loc.col_display + 1)
    }

    /// The source text covered by a span, for naming offending code in
    /// diagnostics. Empty if the span cannot be resolved.
    pub fn snippet(&self, span: Span) -> String {
        self.source_map.span_to_snippet(span).unwrap_or_default()
    }
}

/// Parse TypeScript (tsx-capable) source text into an AST.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource, SyntaxFailure> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Arc::default();
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser.parse_module().map_err(|err| {
            let loc = source_map.lookup_char_pos(err.span().lo);
            SyntaxFailure {
                location: SourceLocation::new(file_path, loc.line, loc.col_display + 1),
                message: err.into_kind().msg().to_string(),
            }
        })?;

        Ok(ParsedSource {
            module,
            source_map,
            file: file_path.to_string(),
        })
    })
}
