//! Background advice worker.
//!
//! Runs the blocking advice request on its own thread so the TUI loop keeps
//! drawing. The app holds at most one [`AdviceWorkerHandle`]; while it exists
//! no second request is started. Dropping the handle discards the result.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::application::{AdviceService, FALLBACK_ADVICE};
use crate::domain::Disease;
use crate::ports::AdviceProvider;

/// Progress updates from the advice worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceProgress {
    /// Request sent, waiting for the service
    Requesting,
    /// Finished; holds either generated advice or the fallback text
    Complete(String),
}

/// Handle to a running advice worker.
pub struct AdviceWorkerHandle {
    progress_rx: Receiver<AdviceProgress>,
    _handle: JoinHandle<()>,
}

impl AdviceWorkerHandle {
    /// Try to receive the next progress update (non-blocking).
    ///
    /// A worker that died without reporting counts as completed with the
    /// fallback text.
    #[must_use]
    pub fn try_recv(&self) -> Option<AdviceProgress> {
        match self.progress_rx.try_recv() {
            Ok(progress) => Some(progress),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(AdviceProgress::Complete(FALLBACK_ADVICE.to_string()))
            }
        }
    }

    /// Block until the worker completes. Used by tests and shutdown paths.
    pub fn wait(self) -> String {
        loop {
            match self.progress_rx.recv() {
                Ok(AdviceProgress::Requesting) => continue,
                Ok(AdviceProgress::Complete(text)) => return text,
                Err(_) => return FALLBACK_ADVICE.to_string(),
            }
        }
    }
}

/// Advice worker that runs the request in background.
pub struct AdviceWorker;

impl AdviceWorker {
    /// Spawn a background advice request.
    ///
    /// Returns a handle to receive progress updates.
    pub fn spawn<P>(
        service: Arc<AdviceService<P>>,
        disease: Disease,
        symptom_names: Vec<String>,
    ) -> AdviceWorkerHandle
    where
        P: AdviceProvider + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            Self::run(&service, &disease, &symptom_names, &tx);
        });

        AdviceWorkerHandle {
            progress_rx: rx,
            _handle: handle,
        }
    }

    fn run<P>(
        service: &AdviceService<P>,
        disease: &Disease,
        symptom_names: &[String],
        tx: &Sender<AdviceProgress>,
    ) where
        P: AdviceProvider,
    {
        // Send errors mean the app dropped the handle (reset or quit).
        let _ = tx.send(AdviceProgress::Requesting);
        let text = service.advise(disease, symptom_names);
        let _ = tx.send(AdviceProgress::Complete(text));
    }
}
