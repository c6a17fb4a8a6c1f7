//! Web API layer: router, handlers, middleware, and DTOs.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorCode};
pub use handlers::AppState;
pub use middleware::{AuthUser, JwtClaims, JwtState};
pub use router::create_router;
pub use server::WebServer;
