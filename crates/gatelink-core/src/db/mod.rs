pub mod models;
pub mod store;

pub use models::{CandidateEmail, EmailAddress, Requester, SocialLogin, User};
pub use store::PolicyStore;
