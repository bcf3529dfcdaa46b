//! Macro for defining catalog identifier newtypes.
//!
//! Every identifier shares one invariant: it is non-blank and carries no
//! surrounding whitespace. Serialization is a bare JSON string so the
//! document format stays stable.

/// Define a non-blank, trimmed string identifier.
///
/// The generated type serializes as a bare string, refuses blank input on
/// deserialize, derefs to `str` and compares directly against `str` and
/// `String`.
macro_rules! define_identifier {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $Name::try_new(s).ok_or_else(|| {
                    serde::de::Error::custom(concat!(stringify!($Name), " must not be blank"))
                })
            }
        }

        impl $Name {
            /// Create a new identifier, panicking if the trimmed input is empty.
            ///
            /// Prefer [`try_new`](Self::try_new) for user input.
            pub fn new(name: impl Into<String>) -> Self {
                Self::try_new(name).expect(concat!(stringify!($Name), " must not be blank"))
            }

            /// Trim the input and wrap it, returning `None` when nothing is left.
            pub fn try_new(name: impl Into<String>) -> Option<Self> {
                let s = name.into();
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.len() == s.len() {
                    Some(Self(s))
                } else {
                    Some(Self(trimmed.to_string()))
                }
            }

            /// Return the underlying name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str { &self.0 }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str { &self.0 }
        }

        impl PartialEq<str> for $Name {
            fn eq(&self, other: &str) -> bool { self.0 == other }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool { self.0 == *other }
        }

        impl PartialEq<String> for $Name {
            fn eq(&self, other: &String) -> bool { self.0 == *other }
        }
    };
}

pub(crate) use define_identifier;
