pub mod given;
pub mod then_auth;
pub mod when_auth;
pub mod when_pages;
