//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `document`, `phishing`, etc.) so
//! individual components can depend on small focused models. Everything here
//! is plain data plus pure transition methods; components hold instances in
//! `RwSignal` contexts and the methods stay unit-testable without a browser.

pub mod analysis;
pub mod auth;
pub mod chat;
pub mod document;
pub mod fake;
pub mod phishing;
pub mod toast;
pub mod ui;
