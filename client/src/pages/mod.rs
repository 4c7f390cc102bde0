//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one route. Access control lives in `router::guard`, not in
//! the pages themselves.

pub mod accounts;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod transfers;
