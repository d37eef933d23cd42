//! String identifiers. Seed data uses short human-readable ids (`c1`, `s5`,
//! `req-01`), so these wrap `String` rather than `Uuid`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a client record.
    ClientId
);
string_id!(
    /// Identifier of an add-on request.
    RequestId
);
string_id!(
    /// Identifier of a catalog service.
    ServiceId
);

impl RequestId {
    /// Fresh identifier for a newly submitted request.
    pub fn generate() -> Self {
        Self(format!("req-{}", Uuid::new_v4().simple()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_request_ids_are_unique_and_prefixed() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("req-"));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ClientId::from("c1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"c1\"");
        let back: ClientId = serde_json::from_str("\"c1\"").unwrap();
        assert_eq!(back, id);
    }
}
