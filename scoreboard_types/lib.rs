pub mod errors;
pub mod leaderboard;
pub mod requests;

pub use errors::Result;
