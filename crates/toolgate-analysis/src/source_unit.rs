//! Parsed source files

use tree_sitter::{Node, Parser, Tree};

use toolgate_domain::{Error, Result};

/// A parsed representation of one source file
///
/// Produced once per file and immutable afterwards; the extractor borrows
/// it for the duration of extraction and then it is discarded.
#[derive(Debug)]
pub struct SourceUnit {
    tree: Tree,
    source: String,
    path: String,
}

impl SourceUnit {
    /// Parse Python source text into a source unit
    ///
    /// A failed parse — no tree at all, or a tree containing error nodes —
    /// is fatal for the whole file and propagated, never swallowed.
    pub fn parse(content: &str, path: &str) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| Error::config(format!("failed to load Python grammar: {e}")))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| Error::parse(path, "parser produced no syntax tree"))?;

        if tree.root_node().has_error() {
            return Err(Error::parse(path, "source is not syntactically valid Python"));
        }

        Ok(Self {
            tree,
            source: content.to_string(),
            path: path.to_string(),
        })
    }

    /// Root node of the parsed module
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by a node
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// Source text of a node's named field, when present
    pub fn text_of_field(&self, node: Node<'_>, field: &str) -> Option<&str> {
        node.child_by_field_name(field).map(|n| self.text(n))
    }

    /// Full source text of the unit
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Path the unit was parsed from
    pub fn path(&self) -> &str {
        &self.path
    }
}
