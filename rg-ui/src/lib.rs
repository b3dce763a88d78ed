//! Shared Dioxus components for the Generate Reports form.
//!
//! This crate provides:
//! - `state`: `FormState`, the reactive signals shared through context
//! - `actions`: employee loading and report generation against the backend
//! - `components`: the form's selectors, pickers and report list

pub mod actions;
pub mod components;
pub mod state;
