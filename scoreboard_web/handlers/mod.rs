mod api_handler;
mod helpers;
mod home_handler;

pub use api_handler::{add_entry, delete_entry, leaderboard, update_entry};
pub(crate) use helpers::*;
pub use home_handler::home;
