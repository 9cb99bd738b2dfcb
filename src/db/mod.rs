pub mod attendance;
pub mod league;
pub mod matches;
pub mod players;
pub mod reset;
pub mod service;
pub mod teams;
