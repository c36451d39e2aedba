pub mod components;
pub mod pages;

// Re-export the root component
pub use pages::routes::App;
