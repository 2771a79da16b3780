mod achievement_percentages;
pub use achievement_percentages::*;

mod app_list;
pub use app_list::*;

mod current_players;
pub use current_players::*;

mod schema_for_game;
pub use schema_for_game::*;
