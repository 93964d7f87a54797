//! Progress indicators for outstanding submissions

pub mod reporter;
