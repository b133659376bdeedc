//! TypeScript declaration inference from JSON values
//!
//! The engine is a pure function of one JSON document: it performs no
//! I/O, allocates its declaration registry fresh per call, and is total
//! over the JSON value domain.

use super::types::{Descriptor, Primitive};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Declaration name for an object document root
pub const ROOT_NAME: &str = "ApiResponse";

/// Declaration name for the element of an array document root
pub const ROOT_ITEM_NAME: &str = "ApiResponseItem";

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9]").expect("static pattern")
});

/// Generate a declaration name from a key hint.
///
/// Strips every character outside `[A-Za-z0-9]`, uppercases the first
/// remaining character, and appends `Type`. When nothing survives the
/// strip, `fallback` supplies the base (`Object` for objects, `Item`
/// for array elements). Same hint always yields the same name, which is
/// what makes registry de-duplication meaningful across recursive calls.
pub fn declaration_name(hint: &str, fallback: &str) -> String {
    let cleaned = NON_ALPHANUMERIC.replace_all(hint, "");
    let base = if cleaned.is_empty() {
        fallback
    } else {
        cleaned.as_ref()
    };

    let mut chars = base.chars();
    match chars.next() {
        Some(first) => format!("{}{}Type", first.to_uppercase(), chars.as_str()),
        None => "Type".to_string(),
    }
}

/// Strip one trailing plural `s`, for naming array element declarations
fn singular(hint: &str) -> &str {
    hint.strip_suffix('s').unwrap_or(hint)
}

/// Infer a descriptor for a JSON value.
///
/// `hint` is the key the value was found under; object shapes derive
/// their declaration name from it. Array elements are classified
/// hint-less, so anonymous object elements name themselves from the
/// enclosing array's hint instead.
pub fn infer_descriptor(value: &Value, hint: Option<&str>) -> Descriptor {
    match value {
        Value::Null => Descriptor::Primitive(Primitive::Null),
        Value::Bool(_) => Descriptor::Primitive(Primitive::Boolean),
        Value::Number(_) => Descriptor::Primitive(Primitive::Number),
        Value::String(_) => Descriptor::Primitive(Primitive::String),
        Value::Array(items) => infer_array_descriptor(items, hint),
        Value::Object(_) => Descriptor::Named(declaration_name(hint.unwrap_or(""), "Object")),
    }
}

/// Classify an array by the distinct shapes of its elements.
///
/// A single object shape becomes a named reference derived from the
/// singular form of the hint. A single primitive (or array-of-primitive)
/// shape is carried through as-is. Everything else degrades to `any[]`:
/// heterogeneous arrays intentionally lose precision rather than grow
/// union types, and arrays nested directly inside arrays have no hint to
/// name an element declaration from.
fn infer_array_descriptor(items: &[Value], hint: Option<&str>) -> Descriptor {
    let Some(first) = items.first() else {
        return Descriptor::any_array();
    };

    let element = infer_descriptor(first, None);
    let mut forms: HashSet<String> = HashSet::new();
    forms.insert(element.to_string());
    for item in &items[1..] {
        forms.insert(infer_descriptor(item, None).to_string());
    }

    if forms.len() > 1 {
        return Descriptor::any_array();
    }

    match element {
        Descriptor::Named(_) => {
            let name = declaration_name(singular(hint.unwrap_or("")), "Item");
            Descriptor::Named(name).into_array()
        }
        element if element.mentions_named() => Descriptor::any_array(),
        element => element.into_array(),
    }
}

/// Build the `interface` declaration for `object` under `name`,
/// together with every nested declaration it depends on.
///
/// Nested declarations are emitted textually before the declaration
/// that references them, blank-line separated. A name is claimed in
/// `registry` before recursing, so repeated key names neither
/// regenerate a declaration nor recurse forever; an already-registered
/// name is referenced as-is even when the shapes differ.
pub fn build_declaration(
    object: &Map<String, Value>,
    name: &str,
    registry: &mut HashSet<String>,
) -> String {
    let mut nested: Vec<String> = Vec::new();
    let mut body = format!("interface {name} {{\n");

    for (key, value) in object {
        let descriptor = infer_descriptor(value, Some(key));

        if let Value::Object(map) = value {
            let nested_name = declaration_name(key, "Object");
            if registry.insert(nested_name.clone()) {
                nested.push(build_declaration(map, &nested_name, registry));
            }
        }

        if let Descriptor::Array(element) = &descriptor {
            if let Descriptor::Named(item_name) = element.as_ref() {
                if let Some(Value::Object(map)) = value.as_array().and_then(|a| a.first()) {
                    if registry.insert(item_name.clone()) {
                        nested.push(build_declaration(map, item_name, registry));
                    }
                }
            }
        }

        body.push_str(&format!("  {key}: {descriptor};\n"));
    }

    body.push('}');

    if nested.is_empty() {
        body
    } else {
        format!("{}\n\n{}", nested.join("\n\n"), body)
    }
}

/// Convert a parsed JSON document into TypeScript declaration text.
///
/// Object documents produce an `ApiResponse` interface; array documents
/// whose first element is an object produce an `ApiResponseItem`
/// interface plus a `type ApiResponse = ApiResponseItem[];` alias;
/// everything else produces a single `type ApiResponse = ...;` alias.
/// Generated names always end in `Type`, so they cannot collide with
/// the two root names.
pub fn declarations_for(document: &Value) -> String {
    let mut registry: HashSet<String> = HashSet::new();

    match document {
        Value::Array(items) if items.is_empty() => {
            format!("// API returned an empty array\ntype {ROOT_NAME} = any[];")
        }
        Value::Array(items) => match items.first() {
            Some(Value::Object(map)) => {
                let item = build_declaration(map, ROOT_ITEM_NAME, &mut registry);
                format!("{item}\n\ntype {ROOT_NAME} = {ROOT_ITEM_NAME}[];")
            }
            _ => {
                let descriptor = infer_descriptor(document, None);
                format!("type {ROOT_NAME} = {descriptor};")
            }
        },
        Value::Object(map) => build_declaration(map, ROOT_NAME, &mut registry),
        primitive => {
            let descriptor = infer_descriptor(primitive, None);
            format!("type {ROOT_NAME} = {descriptor};")
        }
    }
}
