//! Repository Layer
//!
//! REST access to entities over an abstract transport.

mod traits;
mod transport;
mod rest_repo;
mod mutation;


pub use traits::Repository;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
pub use rest_repo::RestRepository;
pub use mutation::{delete_confirmed, delete_prompt, submit_create, submit_update, Confirm};
