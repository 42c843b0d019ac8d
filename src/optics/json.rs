//! Leaf optics over [`serde_json::Value`].
//!
//! | Optic | Kind | Missing part |
//! |---|---|---|
//! | [`prop`] | lens | [`OpticError::NotFound`] |
//! | [`index`] | lens | [`OpticError::NotFound`] |
//! | [`maybe_prop`] | traversal (0 or 1 focus) | untouched |
//! | [`at_prop`] | lens | absent reads as `Null`; setting `Null` removes |
//! | [`each`] | traversal | [`OpticError::NotFound`] for a non-array |
//! | [`parsed`] | iso | [`OpticError::Decode`] |
//! | [`maybe_parsed`] | prism | miss |
//! | [`decoded`] | iso | [`OpticError::Decode`] |
//!
//! Strict optics move the focused part out of the whole instead of cloning
//! it, and put the new part back in the same slot.
//!
//! # Examples
//!
//! ```rust
//! use kaleido::compose;
//! use kaleido::optics::{json, over, to_list};
//! use serde_json::json;
//!
//! let doc = json!({ "tags": [{ "name": "a" }, { "name": "b" }] });
//! let names = compose!(json::prop("tags"), json::each(), json::prop("name"));
//!
//! assert_eq!(to_list(&names, doc.clone()).unwrap(), vec![json!("a"), json!("b")]);
//!
//! let upper = over(&names, |name| json!(name.as_str().unwrap_or("").to_uppercase()), doc);
//! assert_eq!(upper.unwrap(), json!({ "tags": [{ "name": "A" }, { "name": "B" }] }));
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{
    Optic, OpticError, OpticKind, SimpleOptic, filtered_by, path::Navigable, simple_prism,
    try_iso,
};

/// Strict lens onto the property `name` of an object.
///
/// # Errors
///
/// Applying it to a non-object, or an object without `name`, reports
/// [`OpticError::NotFound`].
pub fn prop(name: impl Into<String>) -> SimpleOptic<Value, Value> {
    let name = name.into();
    Optic::from_rule(OpticKind::Lens, move |interpreter, transform, mut whole: Value| {
        let part = whole
            .as_object_mut()
            .and_then(|object| object.get_mut(&name))
            .map(Value::take)
            .ok_or_else(|| OpticError::not_found(format!("field `{name}`")))?;
        let applied = transform(part)?;
        interpreter.map(
            |value| {
                if let Some(object) = whole.as_object_mut() {
                    object.insert(name.clone(), value);
                }
                Ok(whole)
            },
            applied,
        )
    })
}

/// Strict lens onto element `position` of an array.
///
/// # Errors
///
/// Applying it to a non-array, or past the end, reports
/// [`OpticError::NotFound`].
pub fn index(position: usize) -> SimpleOptic<Value, Value> {
    Optic::from_rule(OpticKind::Lens, move |interpreter, transform, mut whole: Value| {
        let part = whole
            .as_array_mut()
            .and_then(|items| items.get_mut(position))
            .map(Value::take)
            .ok_or_else(|| OpticError::not_found(format!("index {position}")))?;
        let applied = transform(part)?;
        interpreter.map(
            |value| {
                if let Some(slot) = whole.as_array_mut().and_then(|items| items.get_mut(position)) {
                    *slot = value;
                }
                Ok(whole)
            },
            applied,
        )
    })
}

/// Affine traversal onto the property `name`: no focus when it is absent.
pub fn maybe_prop(name: impl Into<String>) -> SimpleOptic<Value, Value> {
    let name = name.into();
    Optic::from_rule(OpticKind::Traversal, move |interpreter, transform, mut whole: Value| {
        let Some(part) = whole
            .as_object_mut()
            .and_then(|object| object.get_mut(&name))
            .map(Value::take)
        else {
            return interpreter.pure(whole);
        };
        let applied = transform(part)?;
        interpreter.map(
            |value| {
                if let Some(object) = whole.as_object_mut() {
                    object.insert(name.clone(), value);
                }
                Ok(whole)
            },
            applied,
        )
    })
}

/// Lens onto the property `name`, treating an absent property as `Null`.
///
/// Setting `Null` removes a non-null property and leaves a `null` one in
/// place; setting anything else on a `Null` whole creates an object.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{json, set, view};
/// use serde_json::{json, Value};
///
/// let nickname = json::at_prop("nickname");
/// assert_eq!(view(&nickname, json!({})).unwrap(), Value::Null);
/// assert_eq!(set(&nickname, json!("Al"), Value::Null).unwrap(), json!({ "nickname": "Al" }));
/// assert_eq!(set(&nickname, Value::Null, json!({ "nickname": "Al" })).unwrap(), json!({}));
/// ```
///
/// # Errors
///
/// Applying it to a value that is neither an object nor `Null` reports
/// [`OpticError::NotFound`].
pub fn at_prop(name: impl Into<String>) -> SimpleOptic<Value, Value> {
    let name = name.into();
    Optic::from_rule(OpticKind::Lens, move |interpreter, transform, mut whole: Value| {
        // Taking the slot leaves `Null` behind, so a `Null` write-back over
        // a `Null` or absent property returns the whole untouched.
        let part = match &mut whole {
            Value::Object(object) => object.get_mut(&name).map_or(Value::Null, Value::take),
            Value::Null => Value::Null,
            _ => return Err(OpticError::not_found(format!("object holding `{name}`"))),
        };
        let was_null = part.is_null();
        let applied = transform(part)?;
        interpreter.map(
            |value: Value| {
                if value.is_null() {
                    if let Value::Object(object) = &mut whole
                        && !was_null
                    {
                        object.remove(&name);
                    }
                    return Ok(whole);
                }
                Ok(match whole {
                    Value::Object(mut object) => {
                        object.insert(name.clone(), value);
                        Value::Object(object)
                    }
                    _ => Value::Object(Map::from_iter([(name.clone(), value)])),
                })
            },
            applied,
        )
    })
}

/// Traversal over the elements of an array.
///
/// # Errors
///
/// Applying it to a non-array reports [`OpticError::NotFound`].
pub fn each() -> SimpleOptic<Value, Value> {
    Optic::from_rule(OpticKind::Traversal, |interpreter, transform, whole: Value| {
        let Value::Array(items) = whole else {
            return Err(OpticError::not_found("array elements"));
        };
        let parts = items
            .into_iter()
            .map(|item| transform(item))
            .collect::<Result<Vec<_>, _>>()?;
        interpreter.combine(|values: Vec<Value>| Ok(Value::Array(values)), parts)
    })
}

/// Traversal over the array elements that satisfy `predicate`.
pub fn filtered<P>(predicate: P) -> SimpleOptic<Value, Value>
where
    P: Fn(&Value) -> bool + 'static,
{
    filtered_by(predicate, &each())
}

/// Iso between a JSON string and the document it encodes.
///
/// # Errors
///
/// A non-string, or a string that is not valid JSON, reports
/// [`OpticError::Decode`].
pub fn parsed() -> SimpleOptic<Value, Value> {
    try_iso(
        |encoded: Value| match encoded {
            Value::String(text) => serde_json::from_str(&text).map_err(OpticError::decode),
            other => Err(OpticError::decode(format!("expected a JSON string, found {other}"))),
        },
        |document: Value| Ok(Value::String(document.to_string())),
    )
}

/// Prism onto the document encoded in a JSON string.
///
/// A non-string, or a string that is not valid JSON, is a miss.
pub fn maybe_parsed() -> SimpleOptic<Value, Value> {
    simple_prism(
        |encoded: &Value| {
            encoded
                .as_str()
                .and_then(|text| serde_json::from_str(text).ok())
        },
        |document: Value| Value::String(document.to_string()),
    )
}

/// Iso between a JSON value and a typed value.
///
/// # Errors
///
/// Deserialization or serialization failures report [`OpticError::Decode`].
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{json, over};
/// use serde_json::json;
///
/// let as_pair = json::decoded::<(String, u32)>();
/// let bumped = over(&as_pair, |(name, level)| (name, level + 1), json!(["zoro", 3]));
/// assert_eq!(bumped.unwrap(), json!(["zoro", 4]));
/// ```
pub fn decoded<A>() -> SimpleOptic<Value, A>
where
    A: DeserializeOwned + Serialize + 'static,
{
    try_iso(
        |value: Value| serde_json::from_value(value).map_err(OpticError::decode),
        |typed: A| serde_json::to_value(typed).map_err(OpticError::decode),
    )
}

impl Navigable for Value {
    fn field(name: &str) -> SimpleOptic<Self, Self> {
        prop(name)
    }

    fn index(position: usize) -> SimpleOptic<Self, Self> {
        index(position)
    }

    fn maybe_field(name: &str) -> SimpleOptic<Self, Self> {
        maybe_prop(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{has, over, preview, set, to_list, view};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn prop_views_and_sets() {
        let doc = json!({ "a": 1, "b": 2 });
        assert_eq!(view(&prop("a"), doc.clone()), Ok(json!(1)));
        assert_eq!(set(&prop("b"), json!(5), doc), Ok(json!({ "a": 1, "b": 5 })));
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!([1]))]
    #[case(json!("a"))]
    fn prop_missing_is_not_found(#[case] doc: Value) {
        assert_eq!(
            view(&prop("a"), doc),
            Err(OpticError::not_found("field `a`"))
        );
    }

    #[rstest]
    fn index_reads_and_writes() {
        let doc = json!([10, 20]);
        assert_eq!(view(&index(1), doc.clone()), Ok(json!(20)));
        assert_eq!(set(&index(0), json!(0), doc.clone()), Ok(json!([0, 20])));
        assert_eq!(view(&index(2), doc), Err(OpticError::not_found("index 2")));
    }

    #[rstest]
    fn maybe_prop_skips_missing() {
        let doc = json!({ "a": 1 });
        assert_eq!(preview(&maybe_prop("b"), doc.clone()), Ok(None));
        assert_eq!(over(&maybe_prop("b"), |_| json!(9), doc.clone()), Ok(doc.clone()));
        assert_eq!(set(&maybe_prop("a"), json!(2), doc), Ok(json!({ "a": 2 })));
    }

    #[rstest]
    fn at_prop_rejects_scalars() {
        assert!(matches!(
            view(&at_prop("a"), json!(3)),
            Err(OpticError::NotFound { .. })
        ));
    }

    #[rstest]
    fn at_prop_leaves_null_when_clearing_null() {
        assert_eq!(set(&at_prop("a"), Value::Null, Value::Null), Ok(Value::Null));
    }

    #[rstest]
    #[case(json!({ "a": null, "b": 1 }))]
    #[case(json!({ "b": 1 }))]
    #[case(json!({ "a": [1, 2], "b": 1 }))]
    fn at_prop_identity_update_keeps_whole(#[case] doc: Value) {
        assert_eq!(over(&at_prop("a"), |value| value, doc.clone()), Ok(doc.clone()));
        let current = view(&at_prop("a"), doc.clone()).expect("view");
        assert_eq!(set(&at_prop("a"), current, doc.clone()), Ok(doc));
    }

    #[rstest]
    fn at_prop_clearing_removes_present_value() {
        let doc = json!({ "a": 1, "b": 2 });
        assert_eq!(set(&at_prop("a"), Value::Null, doc), Ok(json!({ "b": 2 })));
    }

    #[rstest]
    fn each_requires_array() {
        assert_eq!(to_list(&each(), json!([1, 2])), Ok(vec![json!(1), json!(2)]));
        assert_eq!(
            has(&each(), json!({})),
            Err(OpticError::not_found("array elements"))
        );
    }

    #[rstest]
    fn filtered_selects_matching_elements() {
        let big = filtered(|value: &Value| value.as_i64().is_some_and(|n| n > 1));
        assert_eq!(set(&big, json!(0), json!([1, 2, 3])), Ok(json!([1, 0, 0])));
    }

    #[rstest]
    fn parsed_round_trips() {
        let encoded = json!("{\"version\":\"1.2.3\"}");
        assert_eq!(
            view(&parsed(), encoded.clone()),
            Ok(json!({ "version": "1.2.3" }))
        );
        let updated = set(&parsed().compose(&prop("version")), json!("2.0.0"), encoded);
        assert_eq!(updated, Ok(json!("{\"version\":\"2.0.0\"}")));
    }

    #[rstest]
    #[case(json!("not json"))]
    #[case(json!(4))]
    fn parsed_rejects_bad_input(#[case] encoded: Value) {
        assert!(matches!(
            view(&parsed(), encoded),
            Err(OpticError::Decode { .. })
        ));
    }

    #[rstest]
    fn maybe_parsed_misses_bad_input() {
        let bad = json!("{oops");
        assert_eq!(over(&maybe_parsed(), |_| json!(1), bad.clone()), Ok(bad));
        assert_eq!(preview(&maybe_parsed(), json!("[1]")), Ok(Some(json!([1]))));
    }

    #[rstest]
    fn decoded_reports_type_mismatch() {
        assert!(matches!(
            view(&decoded::<u8>(), json!("x")),
            Err(OpticError::Decode { .. })
        ));
    }
}
