//! Core browsing logic.

pub mod browse;
pub mod carousel;
pub mod dispatcher;
pub mod pager;
pub mod session;
pub mod validator;
