//! Account and social-login policy layer for gatelink.
//!
//! Two policy objects, both built on a shared [`PolicyContext`]:
//! [`RegistrationGate`] answers whether self-service signup is open, and
//! [`SocialLoginLinker`] decides the disposition of an incoming social
//! login relative to local accounts.

pub mod context;
pub mod linker;
pub mod signup;

pub use context::PolicyContext;
pub use linker::{LinkDecision, SocialLoginLinker};
pub use signup::RegistrationGate;
