pub mod api;
pub use api::*;

mod primitives;
pub(crate) use primitives::percent;
pub use primitives::{AppId, SteamTime};
