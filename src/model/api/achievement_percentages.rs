use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::constants::GLOBAL_ACHIEVEMENT_PERCENTAGES_API;
use crate::error::Result;
use crate::model::{percent, AppId};
use crate::response::ApiResponse;

/// How many players have unlocked an achievement, in percent
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AchievementPercentage {
    pub name: String,
    #[serde(deserialize_with = "percent::deserialize")]
    pub percent: f64,
}

/// Unlock rates of every achievement of an app, in the order the api lists them
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GlobalAchievementPercentages {
    pub achievements: Vec<AchievementPercentage>,
}

impl GlobalAchievementPercentages {
    pub fn find(&self, name: &str) -> Option<&AchievementPercentage> {
        self.achievements.iter().find(|a| a.name == name)
    }
    pub fn into_inner(self) -> Vec<AchievementPercentage> {
        self.achievements
    }
}

impl Deref for GlobalAchievementPercentages {
    type Target = [AchievementPercentage];
    fn deref(&self) -> &Self::Target {
        &self.achievements
    }
}

#[derive(Deserialize, Debug)]
struct Response {
    #[serde(rename = "achievementpercentages")]
    achievement_percentages: Option<GlobalAchievementPercentages>,
}

impl From<Response> for GlobalAchievementPercentages {
    fn from(value: Response) -> Self {
        value.achievement_percentages.unwrap_or_default()
    }
}

fn query(app_id: AppId) -> Vec<(&'static str, String)> {
    vec![("gameid", app_id.to_string())]
}

impl Client {
    /// Get the global unlock rate of every achievement of the given [`AppId`]
    ///
    /// Uses [`GLOBAL_ACHIEVEMENT_PERCENTAGES_API`]
    pub async fn get_global_achievement_percentages_for_app(
        &self,
        app_id: AppId,
    ) -> Result<ApiResponse<GlobalAchievementPercentages>> {
        let query = query(app_id);
        self.get_json::<Response, _>(GLOBAL_ACHIEVEMENT_PERCENTAGES_API, &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::{query, GlobalAchievementPercentages, Response};
    use crate::model::AppId;
    use crate::test_util::{query_map, StubServer};

    #[test]
    fn parses() {
        let json: Response = load_test_json!("global_achievement_percentages.json");
        let percentages: GlobalAchievementPercentages = json.into();

        assert_eq!(percentages.len(), 4);
        assert_eq!(percentages[0].name, "TF_PLAY_GAME_EVERYCLASS");
        assert_eq!(percentages[0].percent, 71.5);
        assert_eq!(percentages[3].name, "TF_GET_HEALPOINTS");
        assert_eq!(percentages.find("TF_WIN_2FORT_NOCAPS").unwrap().percent, 4.3);
        assert!(percentages.find("TF_NOT_AN_ACHIEVEMENT").is_none());
    }

    #[test]
    fn parses_string_percentages() {
        let json = r#"{"achievementpercentages":{"achievements":[{"name":"A","percent":"12.5"}]}}"#;
        let json: Response = serde_json::from_str(json).unwrap();
        let percentages: GlobalAchievementPercentages = json.into();
        assert_eq!(percentages[0].percent, 12.5);
    }

    #[test]
    fn reencodes_payload() {
        let json: serde_json::Value = load_test_json!("global_achievement_percentages.json");
        let inner = json["achievementpercentages"].clone();

        let payload: GlobalAchievementPercentages = serde_json::from_value(inner.clone()).unwrap();
        assert_eq!(serde_json::to_value(&payload).unwrap(), inner);
    }

    #[test]
    fn builds_query() {
        assert_eq!(query(AppId(440)), vec![("gameid", "440".to_string())]);
    }

    #[tokio::test]
    async fn requests_endpoint() {
        let body = test_body!("global_achievement_percentages.json");
        let stub = StubServer::ok(body).await;

        let resp = stub
            .client()
            .get_global_achievement_percentages_for_app(AppId(440))
            .await
            .unwrap();
        assert_eq!(resp.len(), 4);
        assert_eq!(resp.raw(), body.as_bytes());

        let url = stub.last_request();
        assert_eq!(
            url.path(),
            "/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v2/"
        );
        assert_eq!(query_map(&url).get("gameid").map(String::as_str), Some("440"));
    }

    #[tokio::test]
    async fn malformed_body() {
        let body = r#"{"achievementpercentages":{"achievements":[{"name":"#;
        let stub = StubServer::ok(body).await;

        let err = stub
            .client()
            .get_global_achievement_percentages_for_app(AppId(440))
            .await
            .unwrap_err();
        assert!(err.is_decode());
        assert_eq!(err.body(), Some(body.as_bytes()));
    }

    #[tokio::test]
    async fn missing_envelope() {
        let stub = StubServer::ok(r#"{}"#).await;

        let resp = stub
            .client()
            .get_global_achievement_percentages_for_app(AppId(440))
            .await
            .unwrap();
        assert_eq!(*resp.data(), GlobalAchievementPercentages::default());
        assert_eq!(resp.raw(), b"{}");
    }
}
