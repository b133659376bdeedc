//! Type inference tests

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Name generation
// ============================================================================

#[test_case("user", "UserType"; "lowercase key")]
#[test_case("User", "UserType"; "capitalized key")]
#[test_case("user_profile", "UserprofileType"; "underscore stripped")]
#[test_case("user-name", "UsernameType"; "hyphen stripped")]
#[test_case("userName", "UserNameType"; "camel case kept")]
#[test_case("items", "ItemsType"; "no singularization here")]
#[test_case("123abc", "123abcType"; "leading digit kept")]
#[test_case("!!!", "ObjectType"; "empty after strip falls back")]
#[test_case("", "ObjectType"; "empty hint falls back")]
fn test_declaration_name(hint: &str, expected: &str) {
    assert_eq!(declaration_name(hint, "Object"), expected);
}

#[test]
fn test_declaration_name_item_fallback() {
    assert_eq!(declaration_name("", "Item"), "ItemType");
}

#[test]
fn test_declaration_name_is_deterministic() {
    assert_eq!(
        declaration_name("user_profile", "Object"),
        declaration_name("user_profile", "Object")
    );
}

// ============================================================================
// Descriptor rendering
// ============================================================================

#[test]
fn test_primitive_display() {
    assert_eq!(Primitive::String.to_string(), "string");
    assert_eq!(Primitive::Number.to_string(), "number");
    assert_eq!(Primitive::Boolean.to_string(), "boolean");
    assert_eq!(Primitive::Null.to_string(), "null");
    assert_eq!(Primitive::Undefined.to_string(), "undefined");
    assert_eq!(Primitive::Any.to_string(), "any");
}

#[test]
fn test_descriptor_display() {
    assert_eq!(
        Descriptor::Named("UserType".to_string()).to_string(),
        "UserType"
    );
    assert_eq!(
        Descriptor::Primitive(Primitive::String)
            .into_array()
            .into_array()
            .to_string(),
        "string[][]"
    );
    assert_eq!(Descriptor::any_array().to_string(), "any[]");
}

// ============================================================================
// Shape classification
// ============================================================================

#[test]
fn test_classify_primitives() {
    assert_eq!(
        infer_descriptor(&json!(null), None),
        Descriptor::Primitive(Primitive::Null)
    );
    assert_eq!(
        infer_descriptor(&json!(true), None),
        Descriptor::Primitive(Primitive::Boolean)
    );
    assert_eq!(
        infer_descriptor(&json!(1.5), None),
        Descriptor::Primitive(Primitive::Number)
    );
    assert_eq!(
        infer_descriptor(&json!("hi"), None),
        Descriptor::Primitive(Primitive::String)
    );
}

#[test]
fn test_classify_object_uses_hint() {
    let descriptor = infer_descriptor(&json!({"a": 1}), Some("user"));
    assert_eq!(descriptor, Descriptor::Named("UserType".to_string()));
}

#[test]
fn test_classify_object_without_hint() {
    let descriptor = infer_descriptor(&json!({"a": 1}), None);
    assert_eq!(descriptor, Descriptor::Named("ObjectType".to_string()));
}

#[test]
fn test_classify_empty_array() {
    assert_eq!(
        infer_descriptor(&json!([]), Some("tags")),
        Descriptor::any_array()
    );
}

#[test]
fn test_classify_homogeneous_primitive_array() {
    assert_eq!(
        infer_descriptor(&json!(["x", "y"]), Some("tags")).to_string(),
        "string[]"
    );
}

#[test]
fn test_classify_array_of_objects_singularizes_hint() {
    assert_eq!(
        infer_descriptor(&json!([{"id": 1}, {"id": 2}]), Some("users")).to_string(),
        "UserType[]"
    );
}

#[test]
fn test_classify_heterogeneous_array_degrades_to_any() {
    assert_eq!(
        infer_descriptor(&json!([1, "a"]), Some("mixed")),
        Descriptor::any_array()
    );
}

#[test]
fn test_classify_array_of_arrays_of_primitives() {
    assert_eq!(
        infer_descriptor(&json!([[1, 2], [3]]), Some("grid")).to_string(),
        "number[][]"
    );
}

#[test]
fn test_classify_array_of_arrays_of_objects_degrades_to_any() {
    // No hint reaches the inner elements, so there is no name to declare
    // them under; the whole shape degrades like a mixed array.
    assert_eq!(
        infer_descriptor(&json!([[{"a": 1}]]), Some("weird")),
        Descriptor::any_array()
    );
}

// ============================================================================
// Top-level conversion
// ============================================================================

#[test]
fn test_convert_flat_object() {
    let value = json!({"id": 1, "name": "a", "tags": ["x", "y"]});
    assert_eq!(
        declarations_for(&value),
        "interface ApiResponse {\n  id: number;\n  name: string;\n  tags: string[];\n}"
    );
}

#[test]
fn test_convert_array_of_objects() {
    let value = json!([{"id": 1}, {"id": 2}]);
    assert_eq!(
        declarations_for(&value),
        "interface ApiResponseItem {\n  id: number;\n}\n\ntype ApiResponse = ApiResponseItem[];"
    );
}

#[test]
fn test_convert_empty_array() {
    assert_eq!(
        declarations_for(&json!([])),
        "// API returned an empty array\ntype ApiResponse = any[];"
    );
}

#[test]
fn test_convert_primitive_document() {
    assert_eq!(declarations_for(&json!(42)), "type ApiResponse = number;");
    assert_eq!(declarations_for(&json!("x")), "type ApiResponse = string;");
    assert_eq!(declarations_for(&json!(true)), "type ApiResponse = boolean;");
    assert_eq!(declarations_for(&json!(null)), "type ApiResponse = null;");
}

#[test]
fn test_convert_array_of_primitives() {
    assert_eq!(
        declarations_for(&json!([1, 2, 3])),
        "type ApiResponse = number[];"
    );
}

#[test]
fn test_convert_mixed_array_uses_first_object_element() {
    let value = json!([{"id": 1}, "stray"]);
    assert_eq!(
        declarations_for(&value),
        "interface ApiResponseItem {\n  id: number;\n}\n\ntype ApiResponse = ApiResponseItem[];"
    );
}

#[test]
fn test_convert_nested_objects_innermost_first() {
    let value = json!({"user": {"id": 1, "address": {"city": "x"}}});
    assert_eq!(
        declarations_for(&value),
        "interface AddressType {\n  city: string;\n}\n\n\
         interface UserType {\n  id: number;\n  address: AddressType;\n}\n\n\
         interface ApiResponse {\n  user: UserType;\n}"
    );
}

#[test]
fn test_convert_array_field_emits_single_item_declaration() {
    // Uniform arrays of objects never emit per-element declarations
    let value = json!({"users": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]});
    assert_eq!(
        declarations_for(&value),
        "interface UserType {\n  id: number;\n  name: string;\n}\n\n\
         interface ApiResponse {\n  users: UserType[];\n}"
    );
}

#[test]
fn test_convert_singularizes_array_field_name() {
    let value = json!({"tags": [{"label": "x"}]});
    assert_eq!(
        declarations_for(&value),
        "interface TagType {\n  label: string;\n}\n\n\
         interface ApiResponse {\n  tags: TagType[];\n}"
    );
}

#[test]
fn test_convert_heterogeneous_array_field() {
    let value = json!({"mixed": [1, "a"], "empty": []});
    assert_eq!(
        declarations_for(&value),
        "interface ApiResponse {\n  mixed: any[];\n  empty: any[];\n}"
    );
}

#[test]
fn test_convert_null_field() {
    let value = json!({"deleted_at": null});
    assert_eq!(
        declarations_for(&value),
        "interface ApiResponse {\n  deleted_at: null;\n}"
    );
}

#[test]
fn test_colliding_names_reuse_first_declaration() {
    // "user-name" and "user_name" both clean to UsernameType; the second
    // shape silently reuses the first declaration.
    let value = json!({
        "user-name": {"first": "a"},
        "user_name": {"last": "b"}
    });
    let output = declarations_for(&value);

    assert_eq!(output.matches("interface UsernameType").count(), 1);
    assert!(output.contains("  user-name: UsernameType;\n"));
    assert!(output.contains("  user_name: UsernameType;\n"));
    assert!(output.contains("  first: string;\n"));
    assert!(!output.contains("last"));
}

#[test]
fn test_object_field_and_array_field_share_declaration() {
    let value = json!({
        "users": [{"id": 1}],
        "user": {"id": 2}
    });
    let output = declarations_for(&value);

    assert_eq!(output.matches("interface UserType").count(), 1);
    assert!(output.contains("  users: UserType[];\n"));
    assert!(output.contains("  user: UserType;\n"));
}

#[test]
fn test_nested_declarations_precede_parent() {
    let value = json!({"outer": {"inner": {"leaf": 1}}});
    let output = declarations_for(&value);

    let inner = output.find("interface InnerType").unwrap();
    let outer = output.find("interface OuterType").unwrap();
    let root = output.find("interface ApiResponse").unwrap();
    assert!(inner < outer);
    assert!(outer < root);
}

#[test]
fn test_conversion_is_pure() {
    let value = json!({"user": {"id": 1}, "users": [{"id": 2}]});
    assert_eq!(declarations_for(&value), declarations_for(&value));
}
