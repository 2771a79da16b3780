/// Host every endpoint path is appended to
pub const STEAM_API_BASE_URL: &str = "https://api.steampowered.com";

/// [`/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v2/`](https://partner.steamgames.com/doc/webapi/ISteamUserStats#GetGlobalAchievementPercentagesForApp)
pub const GLOBAL_ACHIEVEMENT_PERCENTAGES_API: &str =
    "ISteamUserStats/GetGlobalAchievementPercentagesForApp/v2";

/// [`/ISteamUserStats/GetNumberOfCurrentPlayers/v1/`](https://partner.steamgames.com/doc/webapi/ISteamUserStats#GetNumberOfCurrentPlayers)
pub const CURRENT_PLAYERS_API: &str = "ISteamUserStats/GetNumberOfCurrentPlayers/v1";

/// [`/ISteamUserStats/GetSchemaForGame/v2/`](https://partner.steamgames.com/doc/webapi/ISteamUserStats#GetSchemaForGame)
pub const SCHEMA_FOR_GAME_API: &str = "ISteamUserStats/GetSchemaForGame/v2";
/// Display names and descriptions are always requested in this language
pub const SCHEMA_FOR_GAME_LANGUAGE: &str = "english";

/// [`/IStoreService/GetAppList/v1/`](https://partner.steamgames.com/doc/webapi/IStoreService#GetAppList)
pub const APP_LIST_API: &str = "IStoreService/GetAppList/v1";
/// Every app type is requested
pub const APP_LIST_INCLUDES: [&str; 5] = [
    "include_games",
    "include_dlc",
    "include_software",
    "include_videos",
    "include_hardware",
];

/// Default upper bound of in-flight requests for the batched endpoints
pub const CONCURRENT_REQUESTS: usize = 100;

/// Environment variable holding the api-key
pub const API_KEY_ENV: &str = "STEAM_API_KEY";
/// Environment variable overriding [`STEAM_API_BASE_URL`]
pub const BASE_URL_ENV: &str = "STEAM_API_BASE_URL";
