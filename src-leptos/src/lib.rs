//! FAQ Accordion - Leptos Frontend Library

pub mod app;
pub mod components;
pub mod storage;
