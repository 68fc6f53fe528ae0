//! Client library behind the `recotem` command-line tool.
//!
//! [`client::RecotemClient`] talks to the recotem REST API under `/api/v1/`;
//! the [`api`] module adds one typed method per endpoint. Credentials and the
//! server URL live in a YAML file handled by [`config::manager::ConfigManager`].

pub mod api;
pub mod atomic;
pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod fs;
pub mod logging;
pub mod output;
pub mod prompt;
