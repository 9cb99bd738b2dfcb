pub mod analysis;
pub mod attendance;
pub mod error;
pub mod fixture;
pub mod league;
pub mod player;
pub mod response;
pub mod team;
