pub mod date;
pub mod route;
