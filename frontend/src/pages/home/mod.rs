//! Landing page: replay count, player search and sign-in entry point.

pub mod bootstrap;
mod page;
pub mod state;
pub mod view_model;

pub use page::HomePage;
