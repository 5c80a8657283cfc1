//! The structural rule set for function-calling schemas
//!
//! Required shape:
//! - top-level `type` equal to the string `"function"`;
//! - top-level `function` mapping with `name` (string), `description`
//!   (string), `parameters` (mapping), and `strict` equal to `true`;
//! - `parameters` with `type` equal to `"object"`, a `properties` mapping,
//!   a `required` list naming only keys of `properties`, and
//!   `additionalProperties` equal to `false`;
//! - every property spec with `type` and `description` strings and an
//!   optional `enum` sequence;
//! - no markdown formatting inside any description.
//!
//! Absent required keys land in `missing_fields` as dotted paths from the
//! definition root; everything else lands in `errors`. Both lists are
//! complete so a caller can present the full remediation list at once.

use tracing::debug;

use toolgate_domain::constants::{DEFINITION_TYPE, PARAMETERS_TYPE};
use toolgate_domain::{LiteralValue, ValidationVerdict};

use crate::markdown::contains_markdown;

/// Violations accumulated across the whole rule walk
#[derive(Debug, Default)]
struct Findings {
    errors: Vec<String>,
    missing_fields: Vec<String>,
}

impl Findings {
    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn missing(&mut self, path: impl Into<String>) {
        self.missing_fields.push(path.into());
    }
}

/// Validate one extracted definition against the structural rule set
pub fn validate_definition(definition: &LiteralValue) -> ValidationVerdict {
    let mut findings = Findings::default();

    if definition.as_map().is_none() {
        findings.error("definition must be a mapping");
        findings.missing("type");
        findings.missing("function");
        return ValidationVerdict::from_violations(findings.errors, findings.missing_fields);
    }

    check_type(definition, &mut findings);
    check_function(definition, &mut findings);

    debug!(
        errors = findings.errors.len(),
        missing = findings.missing_fields.len(),
        "definition validated"
    );
    ValidationVerdict::from_violations(findings.errors, findings.missing_fields)
}

fn check_type(definition: &LiteralValue, findings: &mut Findings) {
    match definition.get("type") {
        None => findings.missing("type"),
        Some(LiteralValue::Str(s)) if s == DEFINITION_TYPE => {}
        Some(_) => findings.error(format!("'type' must be the string \"{DEFINITION_TYPE}\"")),
    }
}

fn check_function(definition: &LiteralValue, findings: &mut Findings) {
    let function = match definition.get("function") {
        None => {
            findings.missing("function");
            return;
        }
        Some(value) => value,
    };
    if function.as_map().is_none() {
        findings.error("'function' must be a mapping");
        return;
    }

    match function.get("name") {
        None => findings.missing("function.name"),
        Some(LiteralValue::Str(_)) => {}
        Some(_) => findings.error("'function.name' must be a string"),
    }

    check_description(function, "function.description", findings);

    match function.get("strict") {
        None => findings.missing("function.strict"),
        Some(LiteralValue::Bool(true)) => {}
        Some(_) => findings.error("'function.strict' must be boolean true"),
    }

    match function.get("parameters") {
        None => findings.missing("function.parameters"),
        Some(parameters) if parameters.as_map().is_some() => {
            check_parameters(parameters, findings);
        }
        Some(_) => findings.error("'function.parameters' must be a mapping"),
    }
}

fn check_parameters(parameters: &LiteralValue, findings: &mut Findings) {
    match parameters.get("type") {
        None => findings.missing("function.parameters.type"),
        Some(LiteralValue::Str(s)) if s == PARAMETERS_TYPE => {}
        Some(_) => findings.error(format!(
            "'function.parameters.type' must be the string \"{PARAMETERS_TYPE}\""
        )),
    }

    let properties = match parameters.get("properties") {
        None => {
            findings.missing("function.parameters.properties");
            None
        }
        Some(props) if props.as_map().is_some() => {
            check_properties(props, findings);
            Some(props)
        }
        Some(_) => {
            findings.error("'function.parameters.properties' must be a mapping");
            None
        }
    };

    check_required(parameters, properties, findings);

    match parameters.get("additionalProperties") {
        None => findings.missing("function.parameters.additionalProperties"),
        Some(LiteralValue::Bool(false)) => {}
        Some(_) => {
            findings.error("'function.parameters.additionalProperties' must be boolean false");
        }
    }
}

fn check_properties(properties: &LiteralValue, findings: &mut Findings) {
    for (key, spec) in properties.as_map().unwrap_or_default() {
        let LiteralValue::Str(name) = key else {
            findings.error("property names must be strings");
            continue;
        };
        check_property(name, spec, findings);
    }
}

fn check_property(name: &str, spec: &LiteralValue, findings: &mut Findings) {
    let path = format!("function.parameters.properties.{name}");

    if spec.as_map().is_none() {
        findings.error(format!("'{path}' must be a mapping"));
        return;
    }

    match spec.get("type") {
        None => findings.missing(format!("{path}.type")),
        Some(LiteralValue::Str(_)) => {}
        Some(_) => findings.error(format!("'{path}.type' must be a string")),
    }

    check_description(spec, &format!("{path}.description"), findings);

    // `enum` is optional, but must be a sequence when present
    if let Some(options) = spec.get("enum") {
        if options.as_sequence().is_none() {
            findings.error(format!("'{path}.enum' must be a sequence"));
        }
    }
}

fn check_required(
    parameters: &LiteralValue,
    properties: Option<&LiteralValue>,
    findings: &mut Findings,
) {
    let required = match parameters.get("required") {
        None => {
            findings.missing("function.parameters.required");
            return;
        }
        Some(value) => value,
    };
    let Some(entries) = required.as_sequence() else {
        findings.error("'function.parameters.required' must be a sequence");
        return;
    };

    for entry in entries {
        let LiteralValue::Str(name) = entry else {
            findings.error("'function.parameters.required' entries must be strings");
            continue;
        };
        // A required name with no matching property is an absent field
        if let Some(props) = properties {
            if props.get(name).is_none() {
                findings.missing(format!("function.parameters.properties.{name}"));
            }
        }
    }
}

fn check_description(container: &LiteralValue, path: &str, findings: &mut Findings) {
    match container.get("description") {
        None => findings.missing(path.to_string()),
        Some(LiteralValue::Str(text)) => {
            if contains_markdown(text) {
                findings.error(format!("markdown formatting in '{path}'"));
            }
        }
        Some(_) => findings.error(format!("'{path}' must be a string")),
    }
}
