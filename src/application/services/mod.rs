//! Query services for the application layer.

pub mod post_service;
pub mod status_service;
pub mod tag_service;
pub mod user_service;

pub use post_service::PostService;
pub use status_service::StatusService;
pub use tag_service::TagService;
pub use user_service::UserService;
