pub mod analysis;
pub mod time;
pub mod webutils;
