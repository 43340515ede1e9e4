//! Presence-tagged field values.
//!
//! A partial update has to say three different things about a field: "I did not send
//! it", "clear it", and "set it to this". `Option<T>` can only say two of them, so every
//! mutable field of an [`Offer`](crate::model::Offer) is a [`Field<T>`] instead.
//!
//! | JSON                     | `Field<T>`          |
//! |--------------------------|---------------------|
//! | key omitted              | `Field::Absent`     |
//! | `"key": null`            | `Field::Cleared`    |
//! | `"key": <value>`         | `Field::Present(v)` |
//!
//! Empty strings, empty lists, `0` and `false` are values like any other and decode to
//! `Present`. Containing structs must mark each field
//! `#[serde(default, skip_serializing_if = "Field::is_absent")]` so that an absent field
//! decodes as `Absent` and is left out when encoding.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value together with whether the caller supplied it.
#[derive(Clone, Debug, PartialEq)]
pub enum Field<T> {
    /// Not supplied.
    Absent,
    /// Supplied as an explicit `null`.
    Cleared,
    /// Supplied with a value.
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// True for both `Cleared` and `Present`.
    pub fn is_supplied(&self) -> bool {
        !self.is_absent()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::Cleared => None,
        }
    }

    /// Leaf patch rule: a supplied `incoming` replaces `self` wholesale, an absent one
    /// keeps it.
    pub fn apply(self, incoming: Self) -> Self {
        match incoming {
            Field::Absent => self,
            supplied => supplied,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Absent | Field::Cleared => serializer.serialize_none(),
            Field::Present(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; a missing key takes `Default`.
        let opt = Option::<T>::deserialize(deserializer)?;
        Ok(match opt {
            None => Field::Cleared,
            Some(value) => Field::Present(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Field::is_absent")]
        owner: Field<String>,
    }

    #[test]
    fn test_three_states_decode_distinctly() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        let cleared: Probe = serde_json::from_str(r#"{"owner":null}"#).unwrap();
        let empty: Probe = serde_json::from_str(r#"{"owner":""}"#).unwrap();

        assert_eq!(absent.owner, Field::Absent);
        assert_eq!(cleared.owner, Field::Cleared);
        assert_eq!(empty.owner, Field::Present(String::new()));
    }

    #[test]
    fn test_encoding_keeps_states_apart() {
        let absent = Probe::default();
        let cleared = Probe {
            owner: Field::Cleared,
        };
        let empty = Probe {
            owner: Field::Present(String::new()),
        };

        assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&cleared).unwrap(), r#"{"owner":null}"#);
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"owner":""}"#);
    }

    #[test]
    fn test_apply_keeps_on_absent_and_replaces_otherwise() {
        let stored = Field::Present("alice".to_string());

        assert_eq!(stored.clone().apply(Field::Absent), stored);
        assert_eq!(stored.clone().apply(Field::Cleared), Field::Cleared);
        assert_eq!(
            stored.apply(Field::Present("bob".to_string())),
            Field::Present("bob".to_string())
        );
    }

    #[test]
    fn test_value_ignores_cleared() {
        assert_eq!(Field::<u8>::Cleared.value(), None);
        assert_eq!(Field::from(7u8).value(), Some(&7));
        assert!(Field::<u8>::Cleared.is_supplied());
    }
}
