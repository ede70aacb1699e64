mod order;
mod user;

pub use order::OrderRequest;
pub use user::{LoginRequest, UserRequest, UserUpdateRequest, generate_random_email};
