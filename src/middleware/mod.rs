pub mod auth;
pub mod response;
pub mod validate;

pub use auth::{check_authorization, token_middleware};
pub use response::{ApiResponse, ApiResult};
pub use validate::{validate_login_middleware, validate_talker_middleware, ValidatedBody};
