//! String-backed entity IDs.
//!
//! Every entity gets its own ID type via [`define_id!`], so a product ID
//! cannot stand in for an order ID no matter how alike they look on the
//! wire.

/// Define a newtype ID over an owned `String`.
///
/// The generated type serializes transparently as a plain string, hashes
/// and compares by value, and converts to and from strings in the obvious
/// ways (`new()`, `as_str()`, `into_inner()`, `From`, `Display`, `AsRef`).
///
/// ```rust
/// # use parasol_core::define_id;
/// define_id!(ShelfId);
/// define_id!(BinId);
///
/// let shelf = ShelfId::new("A-7");
/// assert_eq!(shelf.as_str(), "A-7");
/// // A BinId with the same text is still a different type:
/// // let _: ShelfId = BinId::new("A-7"); // does not compile
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the ID text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the owned string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);
define_id!(OrderId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_render_as_their_text() {
        let id = ProductId::new("P1000");
        assert_eq!(id.to_string(), "P1000");
        assert_eq!(id.as_str(), "P1000");
        assert_eq!(id.clone().into_inner(), "P1000");
    }

    #[test]
    fn test_string_conversions_round_trip() {
        let id = CategoryId::from("shoes");
        assert_eq!(id, CategoryId::from(String::from("shoes")));
        assert_eq!(String::from(id), "shoes");
    }

    #[test]
    fn test_ids_serialize_as_bare_strings() {
        let id = OrderId::new("PS-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"PS-123\"");
        assert_eq!(serde_json::from_str::<OrderId>(&json).unwrap(), id);
    }
}
