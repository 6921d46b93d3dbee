//! CommsAI - Financial Advisor Communication Backend
//!
//! This crate implements the plan/participant directory, value proposition
//! editor, and AI-assisted campaign message generation for the advisor demo.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
