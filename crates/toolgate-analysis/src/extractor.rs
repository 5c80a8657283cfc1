//! Tool definition extraction
//!
//! Walks a parsed source file, finds top-level class declarations that
//! qualify as tool classes, and harvests the literal schema each one
//! returns from its `definition` accessor.

use tracing::debug;
use tree_sitter::Node;

use toolgate_domain::constants::DEFINITION_ACCESSOR_NAME;
use toolgate_domain::{LiteralValue, Result, ToolMarkers, ToolRecord};

use crate::literal::reconstruct;
use crate::source_unit::SourceUnit;

/// Extracts [`ToolRecord`]s from Python source text
///
/// Stateless between invocations: each call parses, scans, and reconstructs
/// from scratch, so callers may run one extractor per worker with no
/// coordination.
#[derive(Debug, Clone)]
pub struct DefinitionExtractor {
    markers: ToolMarkers,
}

impl DefinitionExtractor {
    /// Create an extractor with the given qualification markers
    pub fn new(markers: ToolMarkers) -> Self {
        Self { markers }
    }

    /// Extract one record per qualifying tool class, in declaration order
    ///
    /// A class qualifies when it inherits from the base marker by simple
    /// name AND carries at least one registration decorator. A qualifying
    /// class with no usable `definition` accessor still yields a record,
    /// with the definition absent.
    pub fn extract(&self, content: &str, path: &str) -> Result<Vec<ToolRecord>> {
        let unit = SourceUnit::parse(content, path)?;
        let root = unit.root();

        let mut records = Vec::new();
        let mut cursor = root.walk();
        // Top-level declarations only; nested classes are never tool classes
        for child in root.named_children(&mut cursor) {
            let Some((decorators, class_node)) = unwrap_class(child) else {
                continue;
            };
            if !self.qualifies(&unit, class_node, &decorators) {
                continue;
            }

            let class_name = unit
                .text_of_field(class_node, "name")
                .unwrap_or_default()
                .to_string();
            let definition = self.harvest_definition(&unit, class_node);
            debug!(
                class = %class_name,
                has_definition = definition.is_some(),
                "extracted tool class"
            );
            records.push(ToolRecord {
                class_name,
                definition,
            });
        }

        Ok(records)
    }

    /// Tool-class qualification predicate: base marker plus registration
    /// decorator, both judged purely on declaration syntax
    fn qualifies(&self, unit: &SourceUnit, class_node: Node<'_>, decorators: &[Node<'_>]) -> bool {
        self.has_base_marker(unit, class_node)
            && decorators
                .iter()
                .any(|d| self.is_registration_decorator(unit, *d))
    }

    /// Check the superclass list for the base marker as a simple name
    ///
    /// Dotted bases (`mod.BaseTool`) deliberately do not match.
    fn has_base_marker(&self, unit: &SourceUnit, class_node: Node<'_>) -> bool {
        let Some(superclasses) = class_node.child_by_field_name("superclasses") else {
            return false;
        };
        let mut cursor = superclasses.walk();
        superclasses.named_children(&mut cursor).any(|base| {
            base.kind() == "identifier" && unit.text(base) == self.markers.base_class
        })
    }

    /// Registration decorators are a dotted attribute ending in the
    /// registration identifier, or a call whose callee is such an
    /// attribute. Every other decorator shape is ignored.
    fn is_registration_decorator(&self, unit: &SourceUnit, expr: Node<'_>) -> bool {
        match expr.kind() {
            "attribute" => self.attribute_matches(unit, expr),
            "call" => expr
                .child_by_field_name("function")
                .is_some_and(|callee| {
                    callee.kind() == "attribute" && self.attribute_matches(unit, callee)
                }),
            other => {
                debug!(kind = other, "ignoring unrecognized decorator shape");
                false
            }
        }
    }

    fn attribute_matches(&self, unit: &SourceUnit, attribute: Node<'_>) -> bool {
        attribute
            .child_by_field_name("attribute")
            .is_some_and(|name| unit.text(name) == self.markers.registration)
    }

    /// Find the eligible `definition` accessor among the class's direct
    /// members and reconstruct its first returned literal
    fn harvest_definition(&self, unit: &SourceUnit, class_node: Node<'_>) -> Option<LiteralValue> {
        let body = class_node.child_by_field_name("body")?;

        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            // An eligible accessor is always decorated; a bare method
            // named `definition` is not treated as the schema
            if member.kind() != "decorated_definition" {
                continue;
            }
            let Some(func) = member.child_by_field_name("definition") else {
                continue;
            };
            if func.kind() != "function_definition" {
                continue;
            }
            if unit.text_of_field(func, "name") != Some(DEFINITION_ACCESSOR_NAME) {
                continue;
            }
            if !self.has_accessor_guard(unit, member) {
                continue;
            }
            return self.harvest_return(unit, func);
        }
        None
    }

    /// Only the FIRST decorator on the accessor is checked; additional
    /// decorators are ignored. Fixed contract, not an oversight.
    fn has_accessor_guard(&self, unit: &SourceUnit, decorated: Node<'_>) -> bool {
        decorator_expressions(decorated)
            .first()
            .is_some_and(|expr| {
                expr.kind() == "identifier" && unit.text(*expr) == self.markers.accessor
            })
    }

    /// Honor the first `return` found in a pre-order depth-first walk of
    /// the accessor body. This is walk order, not control-flow order: a
    /// return nested in an earlier branch wins over a later top-level one.
    /// The analyzer does not simulate control flow.
    fn harvest_return(&self, unit: &SourceUnit, func: Node<'_>) -> Option<LiteralValue> {
        let body = func.child_by_field_name("body")?;
        let return_node = first_return(body)?;
        let payload = return_node.named_child(0)?;

        match reconstruct(payload, unit.source()) {
            // A return whose whole payload degraded carries no schema
            LiteralValue::Null => None,
            value => Some(value),
        }
    }
}

impl Default for DefinitionExtractor {
    fn default() -> Self {
        Self::new(ToolMarkers::default())
    }
}

/// Split a top-level declaration into its decorators and class node
///
/// Returns `None` for anything that is not a class declaration.
fn unwrap_class(node: Node<'_>) -> Option<(Vec<Node<'_>>, Node<'_>)> {
    match node.kind() {
        "class_definition" => Some((Vec::new(), node)),
        "decorated_definition" => {
            let inner = node.child_by_field_name("definition")?;
            if inner.kind() == "class_definition" {
                Some((decorator_expressions(node), inner))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Collect the expression node of each decorator on a decorated definition
fn decorator_expressions(decorated: Node<'_>) -> Vec<Node<'_>> {
    let mut expressions = Vec::new();
    let mut cursor = decorated.walk();
    for child in decorated.named_children(&mut cursor) {
        if child.kind() == "decorator" {
            if let Some(expr) = child.named_child(0) {
                expressions.push(expr);
            }
        }
    }
    expressions
}

/// First `return_statement` in a pre-order depth-first walk
fn first_return(node: Node<'_>) -> Option<Node<'_>> {
    if node.kind() == "return_statement" {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(found) = first_return(child) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> Vec<ToolRecord> {
        DefinitionExtractor::default()
            .extract(source, "test.py")
            .unwrap()
    }

    #[test]
    fn test_wrong_base_right_decorator_does_not_qualify() {
        let source = r#"
@registry.register
class NotATool(SomethingElse):
    @property
    def definition(self):
        return {"type": "function"}
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_right_base_wrong_decorator_does_not_qualify() {
        let source = r#"
@registry.deprecated
class NotRegistered(BaseTool):
    @property
    def definition(self):
        return {"type": "function"}
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_right_base_no_decorator_does_not_qualify() {
        let source = r#"
class Undecorated(BaseTool):
    @property
    def definition(self):
        return {"type": "function"}
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_bare_name_decorator_does_not_qualify() {
        // Registration must be a dotted attribute; `@register` alone
        // never matches
        let source = r#"
@register
class BareDecorator(BaseTool):
    pass
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_dotted_base_does_not_qualify() {
        let source = r#"
@registry.register
class DottedBase(tools.BaseTool):
    pass
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_call_and_attribute_decorators_both_register() {
        let source = r#"
@registry.register
class First(BaseTool):
    pass

@registry.register(category="weather")
class Second(BaseTool):
    pass
"#;
        let records = extract(source);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].class_name, "First");
        assert_eq!(records[1].class_name, "Second");
    }

    #[test]
    fn test_qualifying_class_without_accessor_yields_absent_definition() {
        let source = r#"
@registry.register
class NoAccessor(BaseTool):
    def run(self):
        return 1
"#;
        let records = extract(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].class_name, "NoAccessor");
        assert!(records[0].definition.is_none());
    }

    #[test]
    fn test_accessor_without_property_guard_is_ignored() {
        let source = r#"
@registry.register
class Unguarded(BaseTool):
    def definition(self):
        return {"type": "function"}
"#;
        let records = extract(source);
        assert_eq!(records.len(), 1);
        assert!(records[0].definition.is_none());
    }

    #[test]
    fn test_only_first_accessor_decorator_is_checked() {
        let source = r#"
@registry.register
class GuardedSecond(BaseTool):
    @cached
    @property
    def definition(self):
        return {"type": "function"}
"#;
        let records = extract(source);
        assert_eq!(records.len(), 1);
        // `property` is present but not first, so the accessor is ineligible
        assert!(records[0].definition.is_none());
    }

    #[test]
    fn test_nested_classes_are_not_tool_classes() {
        let source = r#"
class Outer:
    @registry.register
    class Inner(BaseTool):
        @property
        def definition(self):
            return {"type": "function"}
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_depth_first_walk_order_wins_over_control_flow() {
        // The branch return appears earlier in the subtree walk than the
        // top-level return, so it is the one harvested.
        let source = r#"
@registry.register
class Branchy(BaseTool):
    @property
    def definition(self):
        if self.legacy:
            return {"kind": "legacy"}
        return {"kind": "current"}
"#;
        let records = extract(source);
        let definition = records[0].definition.as_ref().unwrap();
        assert_eq!(
            definition.get("kind"),
            Some(&LiteralValue::Str("legacy".into()))
        );
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let source = r#"
@registry.register
class Zebra(BaseTool):
    pass

@registry.register
class Alpha(BaseTool):
    pass
"#;
        let names: Vec<_> = extract(source)
            .into_iter()
            .map(|r| r.class_name)
            .collect();
        assert_eq!(names, vec!["Zebra", "Alpha"]);
    }

    #[test]
    fn test_syntax_error_propagates() {
        let result = DefinitionExtractor::default().extract("class Broken(:", "broken.py");
        assert!(result.is_err());
    }
}
