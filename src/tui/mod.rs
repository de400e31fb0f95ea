//! TUI module: Terminal User Interface using Ratatui.
//!
//! A symptom checklist, the ranked results, and an on-demand advice panel.

mod app;
mod styles;
mod ui;
mod worker;

pub use app::App;
pub use styles::MedicalTheme;
pub use worker::{AdviceProgress, AdviceWorker, AdviceWorkerHandle};
