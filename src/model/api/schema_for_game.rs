use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::constants::{SCHEMA_FOR_GAME_API, SCHEMA_FOR_GAME_LANGUAGE};
use crate::error::Result;
use crate::model::AppId;
use crate::response::ApiResponse;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SchemaForGameStat {
    pub name: String,
    #[serde(rename = "defaultvalue")]
    pub default_value: i64,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SchemaForGameAchievement {
    pub name: String,
    #[serde(rename = "defaultvalue")]
    pub default_value: i64,
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// `1` if the achievement is hidden until unlocked
    pub hidden: u8,
    /// Hidden achievements usually come without one
    pub description: String,
    pub icon: String,
    #[serde(rename = "icongray")]
    pub icon_gray: String,
}

impl SchemaForGameAchievement {
    pub const fn is_hidden(&self) -> bool {
        self.hidden != 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AvailableGameStats {
    pub stats: Vec<SchemaForGameStat>,
    pub achievements: Vec<SchemaForGameAchievement>,
}

/// Every stat and achievement an app defines
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SchemaForGame {
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(rename = "gameVersion")]
    pub game_version: String,
    #[serde(rename = "availableGameStats")]
    pub available_game_stats: AvailableGameStats,
}

impl SchemaForGame {
    pub fn stats(&self) -> &[SchemaForGameStat] {
        &self.available_game_stats.stats
    }
    pub fn achievements(&self) -> &[SchemaForGameAchievement] {
        &self.available_game_stats.achievements
    }
    /// Look up a stat by its api name
    pub fn stat(&self, name: &str) -> Option<&SchemaForGameStat> {
        self.stats().iter().find(|s| s.name == name)
    }
    /// Look up an achievement by its api name
    pub fn achievement(&self, name: &str) -> Option<&SchemaForGameAchievement> {
        self.achievements().iter().find(|a| a.name == name)
    }
}

#[derive(Deserialize, Debug)]
struct Response {
    game: Option<SchemaForGame>,
}

impl From<Response> for SchemaForGame {
    fn from(value: Response) -> Self {
        value.game.unwrap_or_default()
    }
}

fn query(app_id: AppId) -> Vec<(&'static str, String)> {
    vec![
        ("appid", app_id.to_string()),
        ("l", SCHEMA_FOR_GAME_LANGUAGE.to_string()),
    ]
}

impl Client {
    /// Get the stat and achievement definitions of the given [`AppId`].
    ///
    /// Display names and descriptions are always in english.
    ///
    /// Uses [`SCHEMA_FOR_GAME_API`]
    pub async fn get_schema_for_game(&self, app_id: AppId) -> Result<ApiResponse<SchemaForGame>> {
        let query = query(app_id);
        self.get_json::<Response, _>(SCHEMA_FOR_GAME_API, &query)
            .await
    }
}
