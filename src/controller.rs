//! Mode selection with a single-flight guard on `POST /set_exercise`.

use crate::mode::{ExerciseMode, ModeCell};
use crate::service::CountService;
use futures::future::{FutureExt, LocalBoxFuture};
use log::{debug, info, warn};
use std::cell::Cell;
use std::rc::Rc;

/// Clears the in-flight flag when the request future finishes or is dropped.
struct InFlight(Rc<Cell<bool>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Accepts mode changes from the UI and forwards them to the counting service.
///
/// At most one request is in flight. Requests made while one is pending are
/// dropped, not queued. The local mode is updated as soon as a request is
/// accepted and is not rolled back if the request fails.
pub struct ModeController {
    service: Rc<dyn CountService>,
    mode: ModeCell,
    in_flight: Rc<Cell<bool>>,
}

impl ModeController {
    pub fn new(service: Rc<dyn CountService>, mode: ModeCell) -> Self {
        Self {
            service,
            mode,
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    pub fn current_mode(&self) -> ExerciseMode {
        self.mode.get()
    }

    pub fn is_request_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Try to switch to `mode`.
    ///
    /// Returns `None` if a previous request is still pending. Otherwise the
    /// mode cell already holds `mode` when this returns, and the returned
    /// future performs the request; spawn it on the local executor.
    #[must_use = "the request is only sent when the returned future is spawned"]
    pub fn request_mode_change(&self, mode: ExerciseMode) -> Option<LocalBoxFuture<'static, ()>> {
        if self.in_flight.get() {
            debug!("Dropping mode change to {}: request already in flight", mode);
            return None;
        }
        self.in_flight.set(true);
        let guard = InFlight(self.in_flight.clone());

        self.mode.set(mode);
        info!("Exercise mode set to {}", mode);

        let service = self.service.clone();
        Some(
            async move {
                let _guard = guard;
                if let Err(err) = service.set_exercise(mode).await {
                    warn!("Failed to send exercise mode {}: {}", mode, err);
                }
            }
            .boxed_local(),
        )
    }
}
