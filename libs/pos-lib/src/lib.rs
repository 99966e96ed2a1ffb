//! Core of the iPOS management client: entities, the role policy table, the
//! session handle, the auth guard and one page type per backend resource.
//!
//! Transport lives behind [`api::PosApi`]; the `pos-http` crate provides
//! the reqwest implementation.

pub mod api;
pub mod entities;
pub mod errors;
pub mod guard;
pub mod navigation;
pub mod pages;
pub mod policy;
pub mod session;
pub mod validation;

pub use entities::*;
pub use errors::PosError;
pub use guard::{AuthGuard, AuthState, Redirect};
