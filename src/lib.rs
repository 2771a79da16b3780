//! Typed requests to the Steam Web API.
//!
//! # Current state
//!
//! Currently provides abstractions for the following endpoints:
//! - [x] [`api.steampowered.com/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v2/`]
//! - [x] [`api.steampowered.com/ISteamUserStats/GetNumberOfCurrentPlayers/v1/`]
//! - [x] [`api.steampowered.com/ISteamUserStats/GetSchemaForGame/v2/`]
//! - [x] [`api.steampowered.com/IStoreService/GetAppList/v1/`]
//!
//! Every call returns the decoded payload wrapped in an [`ApiResponse`], which also holds the
//! raw body. If the body can't be decoded, [`Error::Decode`] carries it instead.
//!
//! ```no_run
//! # async fn run() -> steam_webapi::Result<()> {
//! use steam_webapi::{AppId, ClientOptions};
//!
//! let client = ClientOptions::from_env().build()?;
//! let players = client.get_number_of_current_players(AppId(440)).await?;
//! println!("{} players", players.player_count);
//! # Ok(())
//! # }
//! ```
//!
//! [`api.steampowered.com/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v2/`]: https://api.steampowered.com/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v2/
//! [`api.steampowered.com/ISteamUserStats/GetNumberOfCurrentPlayers/v1/`]: https://api.steampowered.com/ISteamUserStats/GetNumberOfCurrentPlayers/v1/
//! [`api.steampowered.com/ISteamUserStats/GetSchemaForGame/v2/`]: https://api.steampowered.com/ISteamUserStats/GetSchemaForGame/v2/
//! [`api.steampowered.com/IStoreService/GetAppList/v1/`]: https://api.steampowered.com/IStoreService/GetAppList/v1/

#[cfg(test)]
#[macro_use]
mod test_util;

pub mod constants;

mod client;
pub use client::{Client, ClientOptions};

mod error;
pub use error::{Error, Result};

mod response;
pub use response::ApiResponse;

pub mod model;
pub use model::*;
