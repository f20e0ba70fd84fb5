//! Single-flight request gate
//!
//! A gate admits one request at a time. Entering returns a guard; the gate
//! reopens when the guard drops, so every exit path releases it, including a
//! caller abandoning the future mid-await. A request arriving while the gate
//! is closed is rejected, never queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{AppError, AppResult};

/// The independent request pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    Assessment,
    Chat,
}

impl std::fmt::Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pipeline::Assessment => write!(f, "assessment"),
            Pipeline::Chat => write!(f, "chat"),
        }
    }
}

/// At-most-one in-flight guard for a pipeline
///
/// Clones share the same busy flag.
#[derive(Debug, Clone)]
pub struct RequestGate {
    pipeline: Pipeline,
    busy: Arc<AtomicBool>,
}

impl RequestGate {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Mark the pipeline busy, or reject if a request is already running
    pub fn try_enter(&self) -> AppResult<GateGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                tracing::debug!(pipeline = %self.pipeline, "Request rejected, gate busy");
                AppError::ConcurrentRequestRejected {
                    pipeline: self.pipeline,
                }
            })?;

        Ok(GateGuard {
            busy: Arc::clone(&self.busy),
        })
    }
}

/// Holds a gate closed until dropped
#[must_use = "the gate reopens as soon as the guard is dropped"]
#[derive(Debug)]
pub struct GateGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_entry_rejected_while_held() {
        let gate = RequestGate::new(Pipeline::Assessment);
        assert!(!gate.is_busy());

        let guard = gate.try_enter().unwrap();
        assert!(gate.is_busy());

        let second = gate.try_enter();
        assert!(matches!(
            second,
            Err(AppError::ConcurrentRequestRejected {
                pipeline: Pipeline::Assessment
            })
        ));

        drop(guard);
        assert!(!gate.is_busy());
        assert!(gate.try_enter().is_ok());
    }

    #[test]
    fn test_clones_share_state() {
        let gate = RequestGate::new(Pipeline::Chat);
        let clone = gate.clone();

        let _guard = gate.try_enter().unwrap();
        assert!(clone.is_busy());
        assert!(clone.try_enter().is_err());
    }

    #[test]
    fn test_pipelines_independent() {
        let assessment = RequestGate::new(Pipeline::Assessment);
        let chat = RequestGate::new(Pipeline::Chat);

        let _held = assessment.try_enter().unwrap();
        assert!(!chat.is_busy());
        assert!(chat.try_enter().is_ok());
    }

    #[test]
    fn test_released_when_future_dropped() {
        let gate = RequestGate::new(Pipeline::Chat);
        let task_gate = gate.clone();

        let fut = async move {
            let _guard = task_gate.try_enter()?;
            std::future::pending::<()>().await;
            Ok::<(), AppError>(())
        };

        let mut task = tokio_test::task::spawn(fut);
        assert!(task.poll().is_pending());
        assert!(gate.is_busy());

        drop(task);
        assert!(!gate.is_busy());
    }
}
