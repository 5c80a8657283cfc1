//! Literal reconstruction
//!
//! Rebuilds an in-memory [`LiteralValue`] from a syntax subtree, best
//! effort, without execution. The mapping from node kind to value is total:
//! unsupported kinds degrade to [`LiteralValue::Null`] inline rather than
//! failing the walk, because a partially reconstructed schema is more
//! useful to a reviewer than none.

use tree_sitter::Node;

use toolgate_domain::LiteralValue;

/// Reconstruct the literal value a syntax node represents
pub fn reconstruct(node: Node<'_>, source: &str) -> LiteralValue {
    match node.kind() {
        "dictionary" => reconstruct_dictionary(node, source),
        "list" => LiteralValue::List(reconstruct_elements(node, source)),
        "tuple" => LiteralValue::Tuple(reconstruct_elements(node, source)),
        "set" => reconstruct_set(node, source),
        "string" => reconstruct_string(node, source),
        "concatenated_string" => reconstruct_concatenated(node, source),
        "integer" => reconstruct_integer(text_of(node, source)),
        "float" => text_of(node, source)
            .replace('_', "")
            .parse::<f64>()
            .map_or(LiteralValue::Null, LiteralValue::Float),
        "true" => LiteralValue::Bool(true),
        "false" => LiteralValue::Bool(false),
        "none" => LiteralValue::None,
        "identifier" => LiteralValue::Symbol(text_of(node, source).to_string()),
        "attribute" => reconstruct_attribute(node, source),
        "parenthesized_expression" => node
            .named_child(0)
            .map_or(LiteralValue::Null, |inner| reconstruct(inner, source)),
        "unary_operator" => reconstruct_unary(node, source),
        _ => LiteralValue::Null,
    }
}

fn text_of<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

fn reconstruct_elements(node: Node<'_>, source: &str) -> Vec<LiteralValue> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .map(|child| reconstruct(child, source))
        .collect()
}

fn reconstruct_dictionary(node: Node<'_>, source: &str) -> LiteralValue {
    let mut entries = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "pair" => {
                let key = child
                    .child_by_field_name("key")
                    .map_or(LiteralValue::Null, |k| reconstruct(k, source));
                let value = child
                    .child_by_field_name("value")
                    .map_or(LiteralValue::Null, |v| reconstruct(v, source));
                entries.push((key, value));
            }
            // `**splat` has no syntactic key; the entry degrades to a
            // null key with the splatted expression as its value
            "dictionary_splat" => {
                let value = child
                    .named_child(0)
                    .map_or(LiteralValue::Null, |v| reconstruct(v, source));
                entries.push((LiteralValue::Null, value));
            }
            _ => {}
        }
    }
    LiteralValue::Map(entries)
}

fn reconstruct_set(node: Node<'_>, source: &str) -> LiteralValue {
    let mut items: Vec<LiteralValue> = Vec::new();
    for item in reconstruct_elements(node, source) {
        if !items.contains(&item) {
            items.push(item);
        }
    }
    LiteralValue::Set(items)
}

fn reconstruct_attribute(node: Node<'_>, source: &str) -> LiteralValue {
    let object = node
        .child_by_field_name("object")
        .map_or(LiteralValue::Null, |obj| reconstruct(obj, source));
    let attr = node
        .child_by_field_name("attribute")
        .map(|a| text_of(a, source).to_string())
        .unwrap_or_default();
    LiteralValue::Symbol(format!("{}.{attr}", chain_text(&object)))
}

/// Render a reconstructed value as the left side of an attribute chain
fn chain_text(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Symbol(s) | LiteralValue::Str(s) => s.clone(),
        LiteralValue::Int(n) => n.to_string(),
        LiteralValue::Float(f) => f.to_string(),
        LiteralValue::Bool(b) => b.to_string(),
        other => other.to_json().to_string(),
    }
}

fn reconstruct_unary(node: Node<'_>, source: &str) -> LiteralValue {
    let operator = node.child(0).map(|op| text_of(op, source)).unwrap_or_default();
    let operand = node
        .child_by_field_name("argument")
        .or_else(|| node.named_child(0))
        .map_or(LiteralValue::Null, |arg| reconstruct(arg, source));

    match (operator, operand) {
        ("-", LiteralValue::Int(n)) => LiteralValue::Int(-n),
        ("-", LiteralValue::Float(f)) => LiteralValue::Float(-f),
        ("+", LiteralValue::Int(n)) => LiteralValue::Int(n),
        ("+", LiteralValue::Float(f)) => LiteralValue::Float(f),
        _ => LiteralValue::Null,
    }
}

fn reconstruct_integer(text: &str) -> LiteralValue {
    let cleaned = text.replace('_', "");
    let lower = cleaned.to_ascii_lowercase();

    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        i64::from_str_radix(oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i64::from_str_radix(bin, 2)
    } else {
        cleaned.parse::<i64>()
    };

    match parsed {
        Ok(n) => LiteralValue::Int(n),
        // Out-of-range integers fall back to an approximate float
        Err(_) => cleaned
            .parse::<f64>()
            .map_or(LiteralValue::Null, LiteralValue::Float),
    }
}

fn reconstruct_string(node: Node<'_>, source: &str) -> LiteralValue {
    // f-string interpolation would require evaluation; degrade to null
    if contains_kind(node, "interpolation") {
        return LiteralValue::Null;
    }

    let raw = text_of(node, source);
    let (prefix, quoted) = split_string_prefix(raw);
    let inner = strip_quotes(quoted);

    if prefix.contains('r') {
        LiteralValue::Str(inner.to_string())
    } else {
        LiteralValue::Str(decode_escapes(inner))
    }
}

fn reconstruct_concatenated(node: Node<'_>, source: &str) -> LiteralValue {
    let mut joined = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match reconstruct(child, source) {
            LiteralValue::Str(part) => joined.push_str(&part),
            // Adjacent f-strings make the whole literal non-reconstructable
            _ => return LiteralValue::Null,
        }
    }
    LiteralValue::Str(joined)
}

fn contains_kind(node: Node<'_>, kind: &str) -> bool {
    if node.kind() == kind {
        return true;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if contains_kind(child, kind) {
            return true;
        }
    }
    false
}

fn split_string_prefix(raw: &str) -> (String, &str) {
    let quote_at = raw
        .find(['"', '\''])
        .unwrap_or(0);
    let prefix = raw[..quote_at].to_ascii_lowercase();
    (prefix, &raw[quote_at..])
}

fn strip_quotes(quoted: &str) -> &str {
    for delim in ["\"\"\"", "'''", "\"", "'"] {
        if quoted.len() >= delim.len() * 2
            && quoted.starts_with(delim)
            && quoted.ends_with(delim)
        {
            return &quoted[delim.len()..quoted.len() - delim.len()];
        }
    }
    quoted
}

fn decode_escapes(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('f') => out.push('\x0c'),
            Some('v') => out.push('\x0b'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            // Backslash-newline is a line continuation inside a literal
            Some('\n') => {}
            Some('x') => push_hex_escape(&mut out, &mut chars, 2),
            Some('u') => push_hex_escape(&mut out, &mut chars, 4),
            Some('U') => push_hex_escape(&mut out, &mut chars, 8),
            // Unknown escapes keep the backslash, as the source language does
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn push_hex_escape(out: &mut String, chars: &mut std::str::Chars<'_>, digits: usize) {
    let hex: String = chars.by_ref().take(digits).collect();
    match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
        Some(decoded) => out.push(decoded),
        None => {
            out.push('\\');
            out.push_str(&hex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_unit::SourceUnit;

    /// Parse a single expression and reconstruct its value
    fn reconstruct_expr(expr: &str) -> LiteralValue {
        let unit = SourceUnit::parse(expr, "test.py").unwrap();
        let statement = unit.root().named_child(0).unwrap();
        let node = statement.named_child(0).unwrap();
        reconstruct(node, unit.source())
    }

    fn s(text: &str) -> LiteralValue {
        LiteralValue::Str(text.to_string())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(reconstruct_expr("42"), LiteralValue::Int(42));
        assert_eq!(reconstruct_expr("1_000"), LiteralValue::Int(1000));
        assert_eq!(reconstruct_expr("0x1f"), LiteralValue::Int(31));
        assert_eq!(reconstruct_expr("2.5"), LiteralValue::Float(2.5));
        assert_eq!(reconstruct_expr("True"), LiteralValue::Bool(true));
        assert_eq!(reconstruct_expr("False"), LiteralValue::Bool(false));
        assert_eq!(reconstruct_expr("None"), LiteralValue::None);
        assert_eq!(reconstruct_expr("'hello'"), s("hello"));
        assert_eq!(reconstruct_expr(r#""a\nb""#), s("a\nb"));
        assert_eq!(reconstruct_expr(r#"r"a\nb""#), s(r"a\nb"));
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(reconstruct_expr("-3"), LiteralValue::Int(-3));
        assert_eq!(reconstruct_expr("-2.5"), LiteralValue::Float(-2.5));
    }

    #[test]
    fn test_symbolic_names_and_attributes() {
        assert_eq!(
            reconstruct_expr("location"),
            LiteralValue::Symbol("location".into())
        );
        assert_eq!(
            reconstruct_expr("self.name"),
            LiteralValue::Symbol("self.name".into())
        );
        assert_eq!(
            reconstruct_expr("a.b.c"),
            LiteralValue::Symbol("a.b.c".into())
        );
    }

    #[test]
    fn test_sequences() {
        assert_eq!(
            reconstruct_expr("[1, 'two', True]"),
            LiteralValue::List(vec![LiteralValue::Int(1), s("two"), LiteralValue::Bool(true)])
        );
        assert_eq!(
            reconstruct_expr("(1, 2)"),
            LiteralValue::Tuple(vec![LiteralValue::Int(1), LiteralValue::Int(2)])
        );
    }

    #[test]
    fn test_set_collapses_duplicates() {
        assert_eq!(
            reconstruct_expr("{1, 2, 1}"),
            LiteralValue::Set(vec![LiteralValue::Int(1), LiteralValue::Int(2)])
        );
    }

    #[test]
    fn test_nested_mapping_round_trips() {
        // Three levels deep with mixed scalar and sequence values
        let value = reconstruct_expr(
            r#"{
    "type": "function",
    "function": {
        "name": "get_weather",
        "parameters": {
            "type": "object",
            "required": ["location"],
            "count": 3,
            "strict": True,
        },
    },
}"#,
        );

        let parameters = LiteralValue::Map(vec![
            (s("type"), s("object")),
            (s("required"), LiteralValue::List(vec![s("location")])),
            (s("count"), LiteralValue::Int(3)),
            (s("strict"), LiteralValue::Bool(true)),
        ]);
        let function = LiteralValue::Map(vec![
            (s("name"), s("get_weather")),
            (s("parameters"), parameters),
        ]);
        let expected = LiteralValue::Map(vec![
            (s("type"), s("function")),
            (s("function"), function),
        ]);

        assert_eq!(value, expected);
    }

    #[test]
    fn test_mapping_preserves_insertion_order() {
        let value = reconstruct_expr("{'z': 1, 'a': 2}");
        let entries = value.as_map().unwrap();
        assert_eq!(entries[0].0, s("z"));
        assert_eq!(entries[1].0, s("a"));
    }

    #[test]
    fn test_unsupported_nodes_degrade_to_null() {
        assert_eq!(reconstruct_expr("do_thing()"), LiteralValue::Null);
        assert_eq!(reconstruct_expr("[x for x in y]"), LiteralValue::Null);
        assert_eq!(reconstruct_expr("1 + 2"), LiteralValue::Null);
        assert_eq!(reconstruct_expr("f'{name}'"), LiteralValue::Null);
    }

    #[test]
    fn test_unsupported_value_degrades_inline_not_whole_walk() {
        let value = reconstruct_expr("{'ok': 1, 'bad': f(), 'more': 2}");
        assert_eq!(value.get("ok"), Some(&LiteralValue::Int(1)));
        assert_eq!(value.get("bad"), Some(&LiteralValue::Null));
        assert_eq!(value.get("more"), Some(&LiteralValue::Int(2)));
    }

    #[test]
    fn test_concatenated_string_literals_join() {
        assert_eq!(reconstruct_expr("'a' 'b' 'c'"), s("abc"));
    }
}
