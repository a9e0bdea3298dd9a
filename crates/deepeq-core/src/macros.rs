//! Declarative macros for implementing [`Inspect`](crate::Inspect) and for
//! asserting structural equality in tests.

/// Implement `Inspect` for a composite type.
///
/// Lists the readable fields together with their declared types. Fields
/// left out of the list do not take part in comparisons. The field table is
/// built on first use and cached for the lifetime of the process.
///
/// ```
/// use deepeq_core::inspect_composite;
///
/// #[derive(Debug)]
/// struct Address {
///     city: String,
/// }
///
/// #[derive(Debug)]
/// struct Person {
///     id: u64,
///     name: String,
///     address: Option<Address>,
///     cache_key: u64,
/// }
///
/// inspect_composite!(Address { city: String });
/// inspect_composite!(Person {
///     id: u64,
///     name: String,
///     address: Option<Address>,
/// });
/// ```
#[macro_export]
macro_rules! inspect_composite {
    ($ty:ty { $($field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::Inspect for $ty {
            fn capabilities() -> $crate::Capabilities {
                $crate::Capabilities::COMPOSITE
            }

            fn type_info(&self) -> $crate::TypeInfo {
                $crate::TypeInfo::of::<Self>()
            }

            fn present(&self) -> ::std::option::Option<&dyn $crate::Inspect> {
                ::std::option::Option::Some(self)
            }

            fn fields(&self) -> ::std::borrow::Cow<'_, [$crate::FieldDescriptor<'_>]> {
                static FIELDS: ::std::sync::OnceLock<
                    ::std::vec::Vec<$crate::FieldDescriptor<'static>>,
                > = ::std::sync::OnceLock::new();
                let table = FIELDS.get_or_init(|| {
                    ::std::vec![
                        $(
                            $crate::FieldDescriptor::new(
                                ::std::stringify!($field),
                                $crate::TypeInfo::of::<$fty>(),
                            ),
                        )*
                    ]
                });
                ::std::borrow::Cow::Borrowed(table.as_slice())
            }

            #[allow(unused_variables)]
            fn field(&self, name: &str) -> ::std::option::Option<&dyn $crate::Inspect> {
                match name {
                    $(
                        ::std::stringify!($field) => {
                            let value: &$fty = &self.$field;
                            ::std::option::Option::Some(value)
                        }
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}

/// Implement `Inspect` for types with a natural ordering (`Ord`).
///
/// Such types are scalars; equality is decided by `cmp(..) == Equal`.
#[macro_export]
macro_rules! inspect_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Inspect for $ty {
                fn capabilities() -> $crate::Capabilities {
                    $crate::Capabilities::COMPARABLE
                }

                fn type_info(&self) -> $crate::TypeInfo {
                    $crate::TypeInfo::of::<Self>()
                }

                fn present(&self) -> ::std::option::Option<&dyn $crate::Inspect> {
                    ::std::option::Option::Some(self)
                }

                fn as_scalar(&self) -> ::std::option::Option<$crate::Scalar<'_>> {
                    ::std::option::Option::Some($crate::Scalar::Ordered(self))
                }
            }
        )+
    };
}

/// Implement `Inspect` for value types compared with `PartialEq` only.
#[macro_export]
macro_rules! inspect_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Inspect for $ty {
                fn capabilities() -> $crate::Capabilities {
                    $crate::Capabilities::VALUE
                }

                fn type_info(&self) -> $crate::TypeInfo {
                    $crate::TypeInfo::of::<Self>()
                }

                fn present(&self) -> ::std::option::Option<&dyn $crate::Inspect> {
                    ::std::option::Option::Some(self)
                }

                fn as_scalar(&self) -> ::std::option::Option<$crate::Scalar<'_>> {
                    ::std::option::Option::Some($crate::Scalar::Equatable(self))
                }
            }
        )+
    };
}

/// Assert that two values are structurally equal.
///
/// ```
/// use deepeq_core::{assert_deep_eq, inspect_composite};
///
/// #[derive(Debug)]
/// struct Event {
///     id: u32,
///     kind: String,
/// }
/// inspect_composite!(Event { id: u32, kind: String });
///
/// let a = Event { id: 1, kind: "created".into() };
/// let b = Event { id: 2, kind: "created".into() };
/// assert_deep_eq!(a, b, ignore = ["id"]);
/// ```
#[macro_export]
macro_rules! assert_deep_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_deep_eq!($left, $right, ignore = [])
    };
    ($left:expr, $right:expr, ignore = [$($field:expr),* $(,)?] $(,)?) => {{
        #[allow(unused_mut)]
        let mut ignore = $crate::IgnoreSet::new();
        $( ignore.insert($field); )*
        let (left, right) = (&$left, &$right);
        if !$crate::compare_objects(left, right, &ignore) {
            ::std::panic!(
                "assertion failed: values are not structurally equal\n  left: {:?}\n right: {:?}",
                left,
                right,
            );
        }
    }};
}
