pub mod laws;
pub mod tunnel;
pub mod users;
