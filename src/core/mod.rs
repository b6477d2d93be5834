pub mod geo;
pub mod route;
