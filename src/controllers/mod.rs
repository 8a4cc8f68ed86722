pub mod admin;
pub mod auth;
pub mod comics;
pub mod home;
pub mod recommendations;
