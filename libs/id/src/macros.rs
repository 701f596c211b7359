//! Macro for wiring the trait surface shared by both identifier types.

/// Implements the common trait surface for an identifier value type.
///
/// The type must be a newtype over its canonical cleaned `String` and
/// provide `parse()` and `as_str()`. This generates:
/// - `Display` (canonical, unmasked form)
/// - `FromStr` via `parse()`
/// - `AsRef<str>`
/// - `Serialize` as the canonical string
/// - `Deserialize` through strict parsing
///
/// # Example
///
/// ```ignore
/// define_document!(Cpf);
///
/// let cpf: Cpf = "293.043.766-96".parse()?;
/// assert_eq!(cpf.to_string(), "29304376696");
/// ```
#[macro_export]
macro_rules! define_document {
    ($name:ident) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
