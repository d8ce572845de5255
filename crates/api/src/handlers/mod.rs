//! Request handlers

pub mod admin;
pub mod health;
pub mod login;
pub mod papers;
pub mod projects;
pub mod users;
