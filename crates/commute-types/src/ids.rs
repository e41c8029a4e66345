//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in the simulation has a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time. All IDs use UUID v7
//! (time-ordered) so population registries iterate in creation order when
//! no other ordering is imposed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for an actor in the simulation.
    ActorId
}

define_id! {
    /// Unique identifier for a subculture shared by many actors.
    SubcultureId
}

define_id! {
    /// Unique identifier for a residential neighbourhood.
    NeighbourhoodId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let actor = ActorId::new();
        let neighbourhood = NeighbourhoodId::new();
        // These are different types -- the compiler enforces no mixing.
        assert_ne!(actor.into_inner(), Uuid::nil());
        assert_ne!(neighbourhood.into_inner(), Uuid::nil());
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = ActorId::new();
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<ActorId, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert!(restored.is_ok());
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = SubcultureId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
