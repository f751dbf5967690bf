mod connection;
mod repository;

pub use connection::connect_store;
pub use repository::RestLeaderboardRepository;
