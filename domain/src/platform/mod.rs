//! Platform subdomain: the named AI chat services and their catalog.

pub mod catalog;
pub mod entities;
