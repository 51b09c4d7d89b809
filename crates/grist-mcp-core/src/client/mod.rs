//! Grist REST API client

mod http;

pub use http::{GristClient, REQUEST_TIMEOUT};
pub use reqwest::Method;
