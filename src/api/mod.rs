pub mod client;
pub mod drafts;
pub mod endpoints;
pub mod models;
pub mod request;
pub mod validate;

pub use client::{Execute, HttpExecutor};
pub use drafts::{Drafts, Options};
