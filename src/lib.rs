pub mod completion;
pub mod config;
pub mod error;
pub mod prompt;
pub mod routes;
pub mod session;
pub mod speech;
pub mod state;
