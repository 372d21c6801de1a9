//! Typed identifier newtypes backed by the registry's string ids.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a registry identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Identifier of an [`Entity`](crate::entity::Entity), e.g. `fan.living_room`.
    EntityId
);

define_id!(
    /// Identifier of a [`Device`](crate::device::Device) in the device registry.
    DeviceId
);

define_id!(
    /// Identifier of an [`Area`](crate::area::Area) in the area registry.
    AreaId
);

impl EntityId {
    /// Split into `(domain, object_id)` at the first `.`.
    ///
    /// An id without a dot is all domain and has an empty object id.
    #[must_use]
    pub fn split(&self) -> (&str, &str) {
        self.0.split_once('.').unwrap_or((self.0.as_str(), ""))
    }

    /// The domain prefix (`fan`, `sensor`, `switch`, …).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.split().0
    }

    /// Everything after the domain prefix.
    #[must_use]
    pub fn object_id(&self) -> &str {
        self.split().1
    }
}
