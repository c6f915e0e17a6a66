//! Chaos Check - Conversational business-chaos assessment service.
//!
//! This crate runs a short, multi-turn diagnostic questionnaire over HTTP.
//! A client starts an assessment, answers a sequence of AI-generated
//! multiple-choice questions, and finally receives a "chaos score" report
//! summarizing how disorganized their operations are.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
