//! Loan payment estimator and lead-capture form behind the Easyloans
//! terminal landing page.

pub mod app;
pub mod application;
pub mod config;
pub mod content;
pub mod estimator;
pub mod format;
pub mod logging;
pub mod quote;
pub mod ui;
