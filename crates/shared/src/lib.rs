//! Records and errors shared by the hospital store and the desktop app.

pub mod domain;
pub mod error;
