use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of an app (game, dlc, software, video or hardware) in the Steam store
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AppId(pub u32);

impl AppId {
    pub const fn as_u32(self) -> u32 {
        self.0
    }
    /// The steam api uses `0` where there is no app
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for AppId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<AppId> for u32 {
    fn from(value: AppId) -> Self {
        value.0
    }
}

impl From<AppId> for String {
    fn from(value: AppId) -> Self {
        value.to_string()
    }
}

impl FromStr for AppId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AppId(s.parse()?))
    }
}
