//! Type-to-encoder registry layering hook encoders over structural encoding.
//!
//! A [`Registry`] is an immutable set of type-keyed hook encoders consulted
//! before the structural (serde-driven) path. Encoding a value whose type has
//! a registered hook goes through the hook; every other value falls through
//! to field-by-field structural encoding, so hooks are additive, not
//! exclusive.
//!
//! Registries are built once, up front, and shared read-only afterwards; see
//! [`default_registry`](crate::default_registry) for the process-wide default.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ejson::{to_string_with_registry, BoxError, MarshalText, Registry};
//!
//! #[derive(serde::Serialize)]
//! struct Ref;
//!
//! impl MarshalText for Ref {
//!     fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
//!         Ok(b"ref".to_vec())
//!     }
//! }
//!
//! let registry = Registry::builder().text_marshaler::<Ref>().build();
//!
//! assert_eq!(to_string_with_registry(&registry, &Ref).unwrap(), r#""ref""#);
//! assert_eq!(to_string_with_registry(&registry, &None::<Ref>).unwrap(), "null");
//! // Unregistered types fall through to structural encoding
//! assert_eq!(to_string_with_registry(&registry, &vec![1, 2]).unwrap(), "[1,2]");
//! ```

use crate::ser::Serializer;
use crate::{EjsonOptions, Error, MarshalText, Result};
use serde::Serialize;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

/// A type-erased borrowed value handed to hook encoders, carrying the
/// concrete type name for diagnostics.
pub struct AnyValue<'a> {
    value: &'a dyn Any,
    type_name: &'static str,
}

impl<'a> AnyValue<'a> {
    /// Erases a reference, remembering its concrete type name.
    pub fn new<T: Any>(value: &'a T) -> Self {
        AnyValue {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Attempts to view the erased value as a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.value.downcast_ref()
    }

    /// The concrete type name of the erased value.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

type Hook = Box<dyn Fn(AnyValue<'_>, &mut Serializer) -> Result<()> + Send + Sync>;

/// An immutable set of type-to-encoder rules consulted before structural
/// encoding.
///
/// Built via [`Registry::builder`]; never mutated after [`build`](RegistryBuilder::build),
/// so it can be shared freely across threads.
pub struct Registry {
    hooks: HashMap<TypeId, Hook>,
}

impl Registry {
    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            hooks: HashMap::new(),
        }
    }

    /// Returns `true` if a hook is registered for `T`.
    #[must_use]
    pub fn has_hook<T: Any>(&self) -> bool {
        self.hooks.contains_key(&TypeId::of::<T>())
    }

    /// Encodes a value, consulting hooks before the structural path.
    pub fn encode_to_string<T>(&self, value: &T, options: EjsonOptions) -> Result<String>
    where
        T: Serialize + Any,
    {
        let mut serializer = Serializer::new(options);
        match self.hooks.get(&TypeId::of::<T>()) {
            Some(hook) => hook(AnyValue::new(value), &mut serializer)?,
            None => value.serialize(&mut serializer)?,
        }
        Ok(serializer.into_inner())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builder().build()
    }
}

/// Builder for [`Registry`].
pub struct RegistryBuilder {
    hooks: HashMap<TypeId, Hook>,
}

impl RegistryBuilder {
    /// Registers the text-marshal encoding rule for `T` and its pointer
    /// shells (`Box<T>`, `Option<T>`, `Option<Box<T>>`).
    ///
    /// The `MarshalText` bound is the capability check: only implementors can
    /// be registered. Registering the same type again replaces the hook with
    /// an identical one and does not change output.
    #[must_use]
    pub fn text_marshaler<T: MarshalText + Any>(mut self) -> Self {
        self.hooks
            .insert(TypeId::of::<T>(), Box::new(encode_text_value::<T>));
        self.hooks
            .insert(TypeId::of::<Box<T>>(), Box::new(encode_text_value::<T>));
        self.hooks
            .insert(TypeId::of::<Option<T>>(), Box::new(encode_text_value::<T>));
        self.hooks.insert(
            TypeId::of::<Option<Box<T>>>(),
            Box::new(encode_text_value::<T>),
        );
        self
    }

    /// Finalizes the registry.
    #[must_use]
    pub fn build(self) -> Registry {
        Registry { hooks: self.hooks }
    }
}

/// The hook encoder for [`MarshalText`] implementors.
///
/// The received value must be a `T` or one of its pointer shells. A `None`
/// shell encodes as `null` without invoking the marshaler; any other type
/// mismatch is a no-encoder error naming the candidate types tried and the
/// value received. Marshal failures propagate unchanged as the encoding
/// error; successful output is written as a string scalar, with escaping
/// left to the writer.
pub fn encode_text_value<T: MarshalText + Any>(
    val: AnyValue<'_>,
    vw: &mut Serializer,
) -> Result<()> {
    let marshaler: &T = if let Some(v) = val.downcast_ref::<T>() {
        v
    } else if let Some(boxed) = val.downcast_ref::<Box<T>>() {
        boxed
    } else if let Some(opt) = val.downcast_ref::<Option<T>>() {
        match opt {
            Some(v) => v,
            None => {
                vw.write_null();
                return Ok(());
            }
        }
    } else if let Some(opt) = val.downcast_ref::<Option<Box<T>>>() {
        match opt {
            Some(boxed) => boxed,
            None => {
                vw.write_null();
                return Ok(());
            }
        }
    } else {
        return Err(Error::no_encoder(
            "encode_text_value",
            vec![
                type_name::<T>(),
                type_name::<Box<T>>(),
                type_name::<Option<T>>(),
                type_name::<Option<Box<T>>>(),
            ],
            val.type_name(),
        ));
    };

    let bytes = marshaler.marshal_text().map_err(Error::text_marshal)?;
    let text = String::from_utf8(bytes).map_err(|_| Error::invalid_utf8(type_name::<T>()))?;
    vw.write_string(&text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper(&'static str);

    impl MarshalText for Upper {
        fn marshal_text(&self) -> std::result::Result<Vec<u8>, crate::BoxError> {
            Ok(self.0.to_uppercase().into_bytes())
        }
    }

    #[test]
    fn hook_shells_are_registered() {
        let registry = Registry::builder().text_marshaler::<Upper>().build();
        assert!(registry.has_hook::<Upper>());
        assert!(registry.has_hook::<Box<Upper>>());
        assert!(registry.has_hook::<Option<Upper>>());
        assert!(registry.has_hook::<Option<Box<Upper>>>());
        assert!(!registry.has_hook::<i32>());
    }

    #[test]
    fn mismatched_value_is_no_encoder() {
        let mut serializer = Serializer::new(EjsonOptions::new());
        let err = encode_text_value::<Upper>(AnyValue::new(&7i32), &mut serializer).unwrap_err();
        match err {
            Error::NoEncoder { rule, received, .. } => {
                assert_eq!(rule, "encode_text_value");
                assert_eq!(received, "i32");
            }
            other => panic!("expected NoEncoder, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        #[derive(serde::Serialize)]
        struct Bad;
        impl MarshalText for Bad {
            fn marshal_text(&self) -> std::result::Result<Vec<u8>, crate::BoxError> {
                Ok(vec![0xff, 0xfe])
            }
        }

        let registry = Registry::builder().text_marshaler::<Bad>().build();
        let err = registry
            .encode_to_string(&Bad, EjsonOptions::new())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8 { .. }));
    }
}
