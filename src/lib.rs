//! # Respira
//!
//! Terminal symptom checker for common respiratory conditions.
//!
//! This crate provides:
//! - A forward-chaining match engine ranking diseases by the share of their
//!   characteristic symptoms the user reports
//! - A validated, read-only symptom/disease knowledge base
//! - Optional AI-generated home-care advice for the top candidate
//! - Terminal UI for the questionnaire and results
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (Symptom, Disease, KnowledgeBase) and the match engine
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (builtin/JSON catalog, Gemini, log sanitizer)
//! - `application`: Session state machine and advice use case
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{diagnose, DiagnosisResult, Disease, KnowledgeBase, SelectedSymptoms, Symptom};

/// Result type for Respira operations
pub type Result<T> = std::result::Result<T, RespiraError>;

/// Main error type for Respira
#[derive(Debug, thiserror::Error)]
pub enum RespiraError {
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] domain::KnowledgeError),

    #[error("Advice service error: {0}")]
    Advice(#[from] ports::AdviceError),
}
