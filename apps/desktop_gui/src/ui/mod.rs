//! UI layer for the desktop app: app shell, tab panels, widgets, and theme.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::HospitalApp;
