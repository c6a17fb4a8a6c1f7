//! Data transfer objects for the Web API.

pub mod request;
pub mod response;
