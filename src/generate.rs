//! Recursive declaration generation.
//!
//! Depth-first walk over a parsed document. Every non-array object visited
//! becomes one declaration in the run's registry; arrays and scalars compose
//! into type references without a declaration of their own.
//!
//! Design goals:
//! - One registry per run, insertion-ordered; a name lands in it only after
//!   its declaration text is fully composed (never reserved-then-filled).
//! - No shape interning: structurally identical objects still get their own,
//!   differently-named declarations.
//! - Array typing is bounded: a sample window decides homogeneity, a hard
//!   kind cutoff keeps unions readable.

pub mod classify;
pub mod name;

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde_json::Value;

use crate::ConvertOptions;
use crate::render;
use classify::{Kind, classify, kind_of};

// ------------------------------- Policy ---------------------------------- //

const ARRAY_SAMPLE_LIMIT: usize = 10; // leading elements that decide homogeneity
const UNION_MAX_KINDS: usize = 3; // widest union before degrading to any[]

// ------------------------------ Generator --------------------------------- //

/// One conversion run: owns the declaration registry, borrows the options.
pub struct Generator<'a> {
    registry: IndexMap<String, String>,
    options: &'a ConvertOptions,
}

impl<'a> Generator<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self {
            registry: IndexMap::new(),
            options,
        }
    }

    /// Emit a declaration for `value` under (a collision-resolved version of)
    /// `name` and return the resolved name as a type reference. Null, scalars
    /// and arrays produce no declaration; their type reference is returned
    /// directly.
    pub fn generate(&mut self, name: &str, value: &Value) -> String {
        let Value::Object(map) = value else {
            return self.type_of(value, name::FALLBACK_NAME);
        };

        let unique_name = name::reserve(name, &self.registry);

        let mut properties = Vec::with_capacity(map.len());
        for (key, child) in map {
            let ty = self.type_of(child, &name::suggest(key));
            properties.push(render::property_line(key, &ty, self.options));
        }

        // Nested declarations produced while resolving the properties are
        // already in the registry; this one lands after them.
        let text = render::declaration(&unique_name, &properties, self.options);
        self.registry.insert(unique_name.clone(), text);
        unique_name
    }

    /// Type reference for an arbitrary value. `suggested` names any object
    /// declaration this forces into existence.
    pub fn type_of(&mut self, value: &Value, suggested: &str) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => classify(value).to_string(),
            Value::Array(elements) => self.unify_array(elements, suggested),
            Value::Object(_) => self.generate(suggested, value),
        }
    }

    /// Decide an array's rendered type from its element kinds.
    ///
    /// A homogeneous sample window elects the first element as the
    /// representative shape; later elements with extra fields are not
    /// reconciled. Heterogeneous arrays of up to three coarse kinds become a
    /// union of refined primitive types in first-occurrence order; anything
    /// wider degrades to `any[]`.
    pub fn unify_array(&mut self, elements: &[Value], suggested: &str) -> String {
        let Some(first) = elements.first() else {
            return "any[]".to_string();
        };

        let sampled: BTreeSet<Kind> = elements
            .iter()
            .take(ARRAY_SAMPLE_LIMIT)
            .map(kind_of)
            .collect();

        if sampled.len() == 1 {
            let element = match kind_of(first) {
                // Nested arrays route back through the generator's array
                // branch under the fallback name.
                Kind::Object | Kind::Array => self.generate(suggested, first),
                _ => classify(first).to_string(),
            };
            return format!("{element}[]");
        }

        // The union decision looks at the whole array, not the sample window.
        let distinct: BTreeSet<Kind> = elements.iter().map(kind_of).collect();
        if distinct.len() <= UNION_MAX_KINDS {
            let mut members: Vec<&'static str> = Vec::new();
            for element in elements {
                let ty = classify(element);
                if !members.contains(&ty) {
                    members.push(ty);
                }
            }
            return format!("({})[]", members.join(" | "));
        }

        "any[]".to_string()
    }

    /// The declarations accumulated so far, keyed by their unique names.
    pub fn registry(&self) -> &IndexMap<String, String> {
        &self.registry
    }

    /// Render the run's registry and drop it.
    pub fn into_output(self) -> String {
        render::output(&self.registry)
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn type_of(value: &Value) -> String {
        let options = ConvertOptions::default();
        let mut generator = Generator::new(&options);
        generator.type_of(value, "Item")
    }

    #[test]
    fn homogeneous_number_arrays_unify_to_number_array() {
        assert_eq!(type_of(&json!([1, 2, 3])), "number[]");
    }

    #[test]
    fn empty_arrays_stay_unconstrained() {
        assert_eq!(type_of(&json!([])), "any[]");
    }

    #[test]
    fn two_kinds_form_a_union_in_first_occurrence_order() {
        assert_eq!(type_of(&json!([1, "a"])), "(number | string)[]");
        assert_eq!(type_of(&json!(["a", 1])), "(string | number)[]");
    }

    #[test]
    fn unions_carry_refined_primitive_types() {
        assert_eq!(
            type_of(&json!([1, "2025-03-30T12:00:00Z"])),
            "(number | Date)[]"
        );
        // date strings and plain strings are one coarse kind but two members
        assert_eq!(
            type_of(&json!([1, "2025-03-30T12:00:00Z", "plain"])),
            "(number | Date | string)[]"
        );
    }

    #[test]
    fn objects_inside_unions_degrade_to_any() {
        assert_eq!(type_of(&json!([null, {"a": 1}])), "(null | any)[]");
    }

    #[test]
    fn four_coarse_kinds_degrade_to_any_array() {
        assert_eq!(type_of(&json!([1, "a", true, null])), "any[]");
    }

    #[test]
    fn only_the_sample_window_decides_homogeneity() {
        // ten leading numbers elect number[] even though a string follows
        assert_eq!(
            type_of(&json!([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, "late"])),
            "number[]"
        );
    }

    #[test]
    fn object_arrays_declare_their_element_type() {
        let options = ConvertOptions::default();
        let mut generator = Generator::new(&options);
        let ty = generator.type_of(&json!([{"id": 1}, {"id": 2}]), "Tag");
        assert_eq!(ty, "Tag[]");
        assert_eq!(
            generator.registry().get("Tag").map(String::as_str),
            Some("export interface Tag {\n  id: number;\n}")
        );
    }

    #[test]
    fn only_the_first_element_shapes_an_object_array() {
        let options = ConvertOptions::default();
        let mut generator = Generator::new(&options);
        let ty = generator.type_of(&json!([{"id": 1}, {"id": 2, "extra": true}]), "Tag");
        assert_eq!(ty, "Tag[]");
        // the second element's extra field is not reconciled in
        assert!(!generator.registry()["Tag"].contains("extra"));
    }

    #[test]
    fn nested_arrays_compose_suffixes() {
        assert_eq!(type_of(&json!([[1, 2], [3]])), "number[][]");
    }

    #[test]
    fn objects_in_nested_arrays_fall_back_to_item() {
        let options = ConvertOptions::default();
        let mut generator = Generator::new(&options);
        let ty = generator.type_of(&json!([[{"a": 1}]]), "Matrix");
        assert_eq!(ty, "Item[][]");
        assert!(generator.registry().contains_key("Item"));
    }

    #[test]
    fn null_only_arrays_are_null_arrays() {
        assert_eq!(type_of(&json!([null, null])), "null[]");
    }

    #[test]
    fn scalars_produce_no_declarations() {
        let options = ConvertOptions::default();
        let mut generator = Generator::new(&options);
        assert_eq!(generator.generate("Root", &json!(42)), "number");
        assert_eq!(generator.generate("Root", &json!("x")), "string");
        assert_eq!(generator.generate("Root", &json!(null)), "null");
        assert!(generator.registry().is_empty());
    }

    #[test]
    fn empty_objects_still_declare() {
        let options = ConvertOptions::default();
        let mut generator = Generator::new(&options);
        assert_eq!(generator.generate("Root", &json!({})), "Root");
        assert_eq!(
            generator.registry().get("Root").map(String::as_str),
            Some("export interface Root {\n}")
        );
    }

    #[test]
    fn identical_shapes_still_get_their_own_declarations() {
        let options = ConvertOptions::default();
        let mut generator = Generator::new(&options);
        generator.generate("Root", &json!({"item": {"x": 1}, "items": {"x": 1}}));
        let names: Vec<&str> = generator.registry().keys().map(String::as_str).collect();
        assert_eq!(names, ["Item", "Item1", "Root"]);
    }
}
