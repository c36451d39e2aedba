pub mod home;
pub mod routes;

pub use home::HomePage;
