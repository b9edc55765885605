// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Serialization/Deserialization with serde.
//!
//! A [`Strftime`] serializes as its pattern string. Deserializing compiles the
//! string against the global directive table, so a pattern using custom
//! directives has to be stored as a plain string and compiled by hand.
//!
//! *Available on crate feature 'serde' only.*
use core::fmt;
use serde::{de, ser};

use crate::Strftime;

impl ser::Serialize for Strftime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.pattern())
    }
}

struct StrftimeVisitor;

impl<'de> de::Visitor<'de> for StrftimeVisitor {
    type Value = Strftime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a strftime pattern string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Strftime::new(value).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Strftime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(StrftimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Strftime, Timestamp};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_serde_serialize() {
        let pattern = Strftime::new("%Y-%m-%d %%").unwrap();
        assert_eq!(serde_json::to_string(&pattern).unwrap(), r#""%Y-%m-%d %%""#);
    }

    #[test]
    fn test_serde_deserialize() {
        let pattern: Strftime = serde_json::from_str(r#""%H:%M""#).unwrap();
        let ts = Timestamp::from(&Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap());
        assert_eq!(pattern.render_to_string(&ts), "23:00");

        let err = serde_json::from_str::<Strftime>(r#""%Q""#).unwrap_err();
        assert!(err.to_string().contains("unknown directive `%Q`"), "{}", err);
        assert!(serde_json::from_str::<Strftime>("42").is_err());
    }
}
