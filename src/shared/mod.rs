pub mod errors;
pub mod format;
pub mod logging;

// Available in fullstack mode (both client and server)
pub mod hooks;
