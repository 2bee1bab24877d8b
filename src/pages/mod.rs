//! Page components, one per route.

pub mod dashboard;
pub mod document_analysis;
pub mod fake_detection;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod phishing_detection;
pub mod profile;
pub mod signup;
