//! reqwest implementation of [`pos_lib::api::PosApi`].

mod client;
mod config;
pub mod routes;

pub use client::HttpPosApi;
pub use config::ApiConfig;
