//! Vision Scan Gateway
//!
//! HTTP gateway that forwards a base64 image to Google Cloud Vision for
//! label and text detection, and classifies where the pictured item
//! belongs ("medical cabinet", "food storage" or "unknown").

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
