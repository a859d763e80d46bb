//! Closed name sets backing the seeded lookup tables.

/// A persisted lookup string that matches no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} name: {value:?}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a lookup-name enum with an explicit raw string per variant.
///
/// Generates `ALL`, `as_str`, `FromStr`, `Display` and string-based serde impls,
/// so unknown strings are rejected at every deserialization boundary.
macro_rules! lookup_name {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $raw:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in seeding order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string persisted in the lookup table.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $raw, )+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::lookup::UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $raw => Ok($name::$variant), )+
                    _ => Err($crate::lookup::UnknownName {
                        kind: stringify!($name),
                        value: s.to_owned(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(d)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use lookup_name;
