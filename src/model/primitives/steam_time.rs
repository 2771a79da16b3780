use std::ops::Deref;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Unix timestamp as the steam api sends it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamTime {
    inner: DateTime<Utc>,
}

impl SteamTime {
    pub const fn into_inner(self) -> DateTime<Utc> {
        self.inner
    }
    pub fn timestamp(&self) -> i64 {
        self.inner.timestamp()
    }
}

impl Default for SteamTime {
    /// The unix epoch, what an absent timestamp decodes to
    fn default() -> Self {
        SteamTime {
            inner: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl Deref for SteamTime {
    type Target = DateTime<Utc>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<DateTime<Utc>> for SteamTime {
    fn from(value: DateTime<Utc>) -> Self {
        SteamTime { inner: value }
    }
}

struct SteamTimeVisitor;

impl<'de> Visitor<'de> for SteamTimeVisitor {
    type Value = SteamTime;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("utc timestamp")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let utc = Utc
            .timestamp_opt(v, 0)
            .single()
            .ok_or_else(|| de::Error::invalid_value(Unexpected::Signed(v), &self))?;

        Ok(SteamTime { inner: utc })
    }
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let signed = i64::try_from(v)
            .map_err(|_| de::Error::invalid_value(Unexpected::Unsigned(v), &self))?;
        self.visit_i64(signed)
    }
}

impl<'de> Deserialize<'de> for SteamTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_i64(SteamTimeVisitor)
    }
}

impl Serialize for SteamTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.timestamp())
    }
}
