use futures::{FutureExt, Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::constants::CURRENT_PLAYERS_API;
use crate::error::Result;
use crate::model::AppId;
use crate::response::ApiResponse;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PlayerCount {
    pub player_count: u32,
    /// `1` on success
    pub result: i32,
}

impl PlayerCount {
    pub const fn is_success(&self) -> bool {
        self.result == 1
    }
}

#[derive(Deserialize, Debug)]
struct Response {
    response: Option<PlayerCount>,
}

impl From<Response> for PlayerCount {
    fn from(value: Response) -> Self {
        value.response.unwrap_or_default()
    }
}

fn query(app_id: AppId) -> Vec<(&'static str, String)> {
    vec![("appid", app_id.to_string())]
}

impl Client {
    /// Get the number of players currently in the given [`AppId`]
    ///
    /// Uses [`CURRENT_PLAYERS_API`]
    pub async fn get_number_of_current_players(
        &self,
        app_id: AppId,
    ) -> Result<ApiResponse<PlayerCount>> {
        let query = query(app_id);
        self.get_json::<Response, _>(CURRENT_PLAYERS_API, &query)
            .await
    }

    /// Get the number of current players for each of the given [`AppId`]s.
    ///
    /// Keeps up to [`Client::concurrent_requests`] requests in flight, results are yielded in
    /// the order they complete.
    pub fn get_number_of_current_players_many<'a, I>(
        &'a self,
        app_ids: I,
    ) -> impl Stream<Item = (AppId, Result<ApiResponse<PlayerCount>>)> + 'a
    where
        I: IntoIterator<Item = AppId>,
        I::IntoIter: 'a,
    {
        futures::stream::iter(app_ids)
            .map(move |id| {
                self.get_number_of_current_players(id)
                    .map(move |r| (id, r))
            })
            .buffer_unordered(self.concurrent_requests())
    }
}
