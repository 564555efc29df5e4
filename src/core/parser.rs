use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::error::StyleError;

pub struct ParsedSource {
    pub module: Module,
    pub source_map: SourceMap,
}

/// Parse JS/TS/JSX source into an AST with source position annotations.
pub fn parse_source(code: &str) -> Result<ParsedSource, StyleError> {
    let source_map = SourceMap::default();
    let source_file = source_map.new_source_file(FileName::Anon.into(), code.to_string());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser
        .parse_module()
        .map_err(|e| StyleError::Parse(format!("{:?}", e)))?;
    Ok(ParsedSource { module, source_map })
}
