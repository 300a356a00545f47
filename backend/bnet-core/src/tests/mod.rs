mod auth;
mod config;
mod endpoint;
mod enum_table;
mod error;
mod logger;
mod oauth;
mod tables;
