use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::constants::{APP_LIST_API, APP_LIST_INCLUDES};
use crate::error::Result;
use crate::model::{AppId, SteamTime};
use crate::response::ApiResponse;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct App {
    #[serde(rename = "appid")]
    pub app_id: AppId,
    pub name: String,
    pub last_modified: SteamTime,
    pub price_change_number: u32,
}

/// One page of the store catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppList {
    pub apps: Vec<App>,
    pub have_more_results: bool,
    /// Pass as `offset` to get the next page
    #[serde(rename = "last_appid")]
    pub last_app_id: AppId,
}

impl AppList {
    /// The `offset` for the next page, if there is one
    pub const fn next_cursor(&self) -> Option<AppId> {
        if self.have_more_results {
            Some(self.last_app_id)
        } else {
            None
        }
    }
}

#[derive(Deserialize, Debug)]
struct Response {
    response: Option<AppList>,
}

impl From<Response> for AppList {
    fn from(value: Response) -> Self {
        value.response.unwrap_or_default()
    }
}

/// `0` means unset for both `limit` and `offset`
fn query(limit: u32, offset: u32) -> Vec<(&'static str, String)> {
    let mut query = APP_LIST_INCLUDES
        .iter()
        .map(|&include| (include, "1".to_string()))
        .collect::<Vec<_>>();

    if offset > 0 {
        query.push(("last_appid", offset.to_string()));
    }
    if limit > 0 {
        query.push(("max_results", limit.to_string()));
    }
    query
}

impl Client {
    /// Get a page of the store catalog, starting after the app id `offset`.
    ///
    /// `limit` caps the page size. Pass `0` for either to leave it to the api. To walk the
    /// whole catalog, repeat with [`AppList::next_cursor`] until it returns `None`.
    ///
    /// Uses [`APP_LIST_API`]
    pub async fn get_app_list(&self, limit: u32, offset: u32) -> Result<ApiResponse<AppList>> {
        let query = query(limit, offset);
        self.get_json::<Response, _>(APP_LIST_API, &query).await
    }
}
