//! HTTP surface of the gateway: middleware pipeline, routes, error mapping.

pub mod app;
pub mod authz;
pub mod context;
pub mod middleware;
