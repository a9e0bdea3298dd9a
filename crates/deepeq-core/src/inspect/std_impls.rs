//! `Inspect` for standard library types.

use super::{Inspect, Scalar};
use crate::classify::{Capabilities, TypeInfo};
use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

macro_rules! inspect_primitive {
    ($($ty:ty => |$v:ident| $scalar:expr),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn capabilities() -> Capabilities {
                    Capabilities::PRIMITIVE
                }

                fn type_info(&self) -> TypeInfo {
                    TypeInfo::of::<Self>()
                }

                fn present(&self) -> Option<&dyn Inspect> {
                    Some(self)
                }

                fn as_scalar(&self) -> Option<Scalar<'_>> {
                    let $v = *self;
                    Some($scalar)
                }
            }
        )*
    };
}

inspect_primitive! {
    i8 => |v| Scalar::Int(i128::from(v)),
    i16 => |v| Scalar::Int(i128::from(v)),
    i32 => |v| Scalar::Int(i128::from(v)),
    i64 => |v| Scalar::Int(i128::from(v)),
    i128 => |v| Scalar::Int(v),
    isize => |v| Scalar::Int(v as i128),
    u8 => |v| Scalar::Int(i128::from(v)),
    u16 => |v| Scalar::Int(i128::from(v)),
    u32 => |v| Scalar::Int(i128::from(v)),
    u64 => |v| Scalar::Int(i128::from(v)),
    u128 => |v| Scalar::UInt(v),
    usize => |v| Scalar::Int(v as i128),
    f32 => |v| Scalar::Float(f64::from(v)),
    f64 => |v| Scalar::Float(v),
    bool => |v| Scalar::Bool(v),
    char => |v| Scalar::Char(v),
}

impl Inspect for () {
    fn capabilities() -> Capabilities {
        Capabilities::VALUE
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn present(&self) -> Option<&dyn Inspect> {
        Some(self)
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Equatable(self))
    }
}

// Strings are iterable too; classification precedence keeps them scalar.
impl Inspect for String {
    fn capabilities() -> Capabilities {
        Capabilities::COMPARABLE.with_iterable()
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn present(&self) -> Option<&dyn Inspect> {
        Some(self)
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Str(self))
    }
}

impl Inspect for &'static str {
    fn capabilities() -> Capabilities {
        Capabilities::COMPARABLE.with_iterable()
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn present(&self) -> Option<&dyn Inspect> {
        Some(self)
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Str(self))
    }
}

macro_rules! inspect_sequence {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Inspect for $ty {
                fn capabilities() -> Capabilities {
                    Capabilities::SEQUENCE
                }

                fn type_info(&self) -> TypeInfo {
                    TypeInfo::of::<Self>()
                }

                fn present(&self) -> Option<&dyn Inspect> {
                    Some(self)
                }

                fn elements(&self) -> Option<Vec<&dyn Inspect>> {
                    Some(self.iter().map(|e| e as &dyn Inspect).collect())
                }
            }
        )*
    };
}

inspect_sequence! {
    [T: Inspect] Vec<T>,
    [T: Inspect] VecDeque<T>,
    [T: Inspect] Box<[T]>,
    [T: Inspect] BTreeSet<T>,
    [T: Inspect, const N: usize] [T; N],
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn capabilities() -> Capabilities {
        Capabilities::SEQUENCE
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn present(&self) -> Option<&dyn Inspect> {
        Some(self)
    }

    fn entries(&self) -> Option<Vec<(&dyn Inspect, &dyn Inspect)>> {
        Some(
            self.iter()
                .map(|(k, v)| (k as &dyn Inspect, v as &dyn Inspect))
                .collect(),
        )
    }
}

// Tuples are fixed-length sequences of possibly different element types.
macro_rules! inspect_tuple {
    ($(($($idx:tt $name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: Inspect),+> Inspect for ($($name,)+) {
                fn capabilities() -> Capabilities {
                    Capabilities::SEQUENCE
                }

                fn type_info(&self) -> TypeInfo {
                    TypeInfo::of::<Self>()
                }

                fn present(&self) -> Option<&dyn Inspect> {
                    Some(self)
                }

                fn elements(&self) -> Option<Vec<&dyn Inspect>> {
                    Some(vec![$(&self.$idx as &dyn Inspect),+])
                }
            }
        )*
    };
}

inspect_tuple! {
    (0 A),
    (0 A, 1 B),
    (0 A, 1 B, 2 C),
    (0 A, 1 B, 2 C, 3 D),
    (0 A, 1 B, 2 C, 3 D, 4 E),
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F),
}

impl<T: Inspect> Inspect for Option<T> {
    fn capabilities() -> Capabilities {
        T::capabilities()
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn present(&self) -> Option<&dyn Inspect> {
        self.as_ref().and_then(|v| v.present())
    }
}

impl<T: Inspect> Inspect for OnceCell<T> {
    fn capabilities() -> Capabilities {
        T::capabilities()
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn present(&self) -> Option<&dyn Inspect> {
        self.get().and_then(|v| v.present())
    }
}

macro_rules! inspect_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Inspect> Inspect for $ptr<T> {
                fn capabilities() -> Capabilities {
                    T::capabilities()
                }

                fn type_info(&self) -> TypeInfo {
                    TypeInfo::of::<Self>()
                }

                fn present(&self) -> Option<&dyn Inspect> {
                    (**self).present()
                }
            }
        )*
    };
}

inspect_pointer!(Box, Rc, Arc);

/// A trait object declares nothing about itself, so as a declared type it
/// is unclassifiable. Its runtime value is still reachable through
/// [`Inspect::present`], which is how sequence elements get classified.
impl Inspect for Box<dyn Inspect> {
    fn capabilities() -> Capabilities {
        Capabilities::NONE
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn present(&self) -> Option<&dyn Inspect> {
        (**self).present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::TypeKind;

    #[test]
    fn test_primitives_are_scalars() {
        assert_eq!(TypeInfo::of::<i64>().kind, TypeKind::Scalar);
        assert_eq!(TypeInfo::of::<f32>().kind, TypeKind::Scalar);
        assert_eq!(TypeInfo::of::<char>().kind, TypeKind::Scalar);
        assert_eq!(TypeInfo::of::<()>().kind, TypeKind::Scalar);
    }

    #[test]
    fn test_strings_are_scalars_not_sequences() {
        assert_eq!(TypeInfo::of::<String>().kind, TypeKind::Scalar);
        assert_eq!(TypeInfo::of::<&'static str>().kind, TypeKind::Scalar);
    }

    #[test]
    fn test_collections_are_sequences() {
        assert_eq!(TypeInfo::of::<Vec<u8>>().kind, TypeKind::Sequence);
        assert_eq!(TypeInfo::of::<VecDeque<u8>>().kind, TypeKind::Sequence);
        assert_eq!(TypeInfo::of::<[u8; 4]>().kind, TypeKind::Sequence);
        assert_eq!(TypeInfo::of::<BTreeSet<String>>().kind, TypeKind::Sequence);
        assert_eq!(TypeInfo::of::<BTreeMap<String, u8>>().kind, TypeKind::Sequence);
        assert_eq!(TypeInfo::of::<(u8, String)>().kind, TypeKind::Sequence);
    }

    #[test]
    fn test_map_entries_follow_key_order() {
        let map: BTreeMap<String, u8> = [("b".to_string(), 2), ("a".to_string(), 1)]
            .into_iter()
            .collect();
        let keys: Vec<_> = map
            .entries()
            .unwrap_or_default()
            .iter()
            .filter_map(|(k, _)| match k.as_scalar() {
                Some(Scalar::Str(s)) => Some(s.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(map.elements().is_none());
    }

    #[test]
    fn test_tuple_elements_keep_position() {
        let pair = (7u8, "x".to_string());
        let elements = pair.elements().unwrap_or_default();
        assert_eq!(elements.len(), 2);
        assert!(matches!(elements[0].as_scalar(), Some(Scalar::Int(7))));
        assert!(matches!(elements[1].as_scalar(), Some(Scalar::Str("x"))));
    }

    #[test]
    fn test_wrappers_take_the_inner_classification() {
        assert_eq!(TypeInfo::of::<Option<i32>>().kind, TypeKind::Scalar);
        assert_eq!(TypeInfo::of::<Box<Vec<i32>>>().kind, TypeKind::Sequence);
        assert_eq!(TypeInfo::of::<Rc<Option<String>>>().kind, TypeKind::Scalar);
    }

    #[test]
    fn test_option_presence() {
        let none: Option<i32> = None;
        let some = Some(3);
        let nested: Option<Option<i32>> = Some(None);
        assert!(none.present().is_none());
        assert!(some.present().is_some());
        assert!(nested.present().is_none());
    }

    #[test]
    fn test_once_cell_presence() {
        let cell: OnceCell<u8> = OnceCell::new();
        assert!(cell.present().is_none());
        let _ = cell.set(1);
        assert!(cell.present().is_some());
    }

    #[test]
    fn test_boxed_trait_object_resolves_runtime_value() {
        let boxed: Box<dyn Inspect> = Box::new(42u16);
        let inner = boxed.present().map(|v| v.type_info());
        assert_eq!(inner.map(|i| i.kind), Some(TypeKind::Scalar));
        assert_eq!(
            TypeInfo::of::<Box<dyn Inspect>>().kind,
            TypeKind::Unclassifiable
        );
    }

    #[test]
    fn test_sequence_elements_are_materialized_in_order() {
        let values = vec![3, 1, 2];
        let elements = values.elements().unwrap_or_default();
        let ints: Vec<_> = elements
            .iter()
            .filter_map(|e| match e.as_scalar() {
                Some(Scalar::Int(v)) => Some(v),
                _ => None,
            })
            .collect();
        assert_eq!(ints, vec![3, 1, 2]);
    }
}
