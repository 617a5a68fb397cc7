pub mod home;
pub mod matches;
pub mod messages;
pub mod profile;
