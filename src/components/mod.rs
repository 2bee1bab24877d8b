//! Reusable UI components: layout chrome, toasts, and the presentation
//! widgets shared by the service pages.

pub mod connection_chart;
pub mod layout;
pub mod metric_chart;
pub mod navbar;
pub mod qa_panel;
pub mod report_card;
pub mod service_card;
pub mod theme_toggle;
pub mod toast;
