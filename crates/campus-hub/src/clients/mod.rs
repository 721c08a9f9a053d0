//! Type-safe wrappers around the generic [`ResourceClient`](hub_runtime::ResourceClient)s.

pub mod post_client;
pub mod user_client;

pub use post_client::PostClient;
pub use user_client::UserClient;
