mod app_id;
pub use app_id::AppId;

mod steam_time;
pub use steam_time::SteamTime;

pub(crate) mod percent;
