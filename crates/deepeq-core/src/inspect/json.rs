//! `Inspect` for `serde_json::Value`.
//!
//! JSON carries no declared types, so each variant is treated as a type of
//! its own: `null` is an absent value, booleans, numbers and strings are
//! scalars, arrays are sequences and objects are composites whose field
//! table is built from their keys. A JSON field's declared type is the
//! runtime type of the value found on the left-hand document.
//!
//! As a declared type `serde_json::Value` is dynamic, so a JSON field of a
//! Rust struct is walked the same way as a whole document.

use super::{FieldDescriptor, Inspect, Scalar};
use crate::classify::{Capabilities, TypeInfo, TypeKind};
use serde_json::Value;
use std::borrow::Cow;

pub const JSON_NULL: TypeInfo = TypeInfo::new("json::null", TypeKind::Scalar);
pub const JSON_BOOL: TypeInfo = TypeInfo::new("json::bool", TypeKind::Scalar);
pub const JSON_NUMBER: TypeInfo = TypeInfo::new("json::number", TypeKind::Scalar);
pub const JSON_STRING: TypeInfo = TypeInfo::new("json::string", TypeKind::Scalar);
pub const JSON_ARRAY: TypeInfo = TypeInfo::new("json::array", TypeKind::Sequence);
pub const JSON_OBJECT: TypeInfo = TypeInfo::new("json::object", TypeKind::Composite);

impl Inspect for Value {
    fn capabilities() -> Capabilities {
        Capabilities::DYNAMIC
    }

    fn type_info(&self) -> TypeInfo {
        match self {
            Value::Null => JSON_NULL,
            Value::Bool(_) => JSON_BOOL,
            Value::Number(_) => JSON_NUMBER,
            Value::String(_) => JSON_STRING,
            Value::Array(_) => JSON_ARRAY,
            Value::Object(_) => JSON_OBJECT,
        }
    }

    fn present(&self) -> Option<&dyn Inspect> {
        match self {
            Value::Null => None,
            _ => Some(self),
        }
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(|v| Scalar::Int(i128::from(v)))
                .or_else(|| n.as_u64().map(|v| Scalar::Int(i128::from(v))))
                .or_else(|| n.as_f64().map(Scalar::Float)),
            Value::String(s) => Some(Scalar::Str(s)),
            Value::Array(_) | Value::Object(_) | Value::Null => None,
        }
    }

    fn elements(&self) -> Option<Vec<&dyn Inspect>> {
        match self {
            Value::Array(items) => Some(items.iter().map(|v| v as &dyn Inspect).collect()),
            _ => None,
        }
    }

    fn fields(&self) -> Cow<'_, [FieldDescriptor<'_>]> {
        match self {
            Value::Object(map) => Cow::Owned(
                map.iter()
                    .map(|(name, value)| FieldDescriptor::new(name, value.type_info()))
                    .collect(),
            ),
            _ => Cow::Borrowed(&[]),
        }
    }

    fn field(&self, name: &str) -> Option<&dyn Inspect> {
        match self {
            Value::Object(map) => map.get(name).map(|v| v as &dyn Inspect),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variants_classify_independently() {
        assert_eq!(json!(1).type_info().kind, TypeKind::Scalar);
        assert_eq!(json!("a").type_info().kind, TypeKind::Scalar);
        assert_eq!(json!([1, 2]).type_info().kind, TypeKind::Sequence);
        assert_eq!(json!({"a": 1}).type_info().kind, TypeKind::Composite);
    }

    #[test]
    fn test_null_is_absent() {
        assert!(Value::Null.present().is_none());
        assert!(json!(0).present().is_some());
    }

    #[test]
    fn test_numbers_keep_their_representation() {
        assert!(matches!(json!(3).as_scalar(), Some(Scalar::Int(3))));
        assert!(matches!(json!(u64::MAX).as_scalar(), Some(Scalar::Int(v)) if v == i128::from(u64::MAX)));
        assert!(matches!(json!(1.5).as_scalar(), Some(Scalar::Float(f)) if f == 1.5));
    }

    #[test]
    fn test_object_field_table_follows_keys() {
        let doc = json!({"id": 1, "name": "x", "tags": []});
        let fields = doc.fields();
        let mut names: Vec<_> = fields.iter().map(|f| f.name).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["id", "name", "tags"]);
        assert!(doc.field("tags").is_some());
        assert!(doc.field("missing").is_none());
    }

    #[test]
    fn test_json_as_declared_type_is_dynamic() {
        assert_eq!(TypeInfo::of::<Value>().kind, TypeKind::Dynamic);
        assert_eq!(TypeInfo::of::<Option<Value>>().kind, TypeKind::Dynamic);
        assert!(json!({"a": 1}).as_scalar().is_none());
    }
}
