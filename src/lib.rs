pub mod check;
pub mod data;
pub mod version;

pub const APP_NAME: &str = "vercheck";
