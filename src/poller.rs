//! Periodic `GET /get_counts` loop driving the counter display.

use crate::display::DisplaySink;
use crate::error::ClientError;
use crate::mode::ModeCell;
use crate::service::CountService;
use crate::snapshot::format_count;
use gloo_timers::callback::Interval;
use log::{debug, info, trace};
use std::rc::Rc;

/// Polls the counting service and renders the count for the current mode.
///
/// Ticks are independent: a slow response does not hold back the next tick,
/// and whichever response completes last is the one left on screen.
pub struct CountPoller {
    service: Rc<dyn CountService>,
    mode: ModeCell,
    display: Rc<dyn DisplaySink>,
}

impl CountPoller {
    pub fn new(service: Rc<dyn CountService>, mode: ModeCell, display: Rc<dyn DisplaySink>) -> Self {
        Self {
            service,
            mode,
            display,
        }
    }

    /// Fetch one snapshot and render it. Returns the count that was rendered.
    ///
    /// The mode is read after the response arrives, so a mode change made
    /// while the fetch was pending is reflected immediately.
    pub async fn poll_once(&self) -> Result<u32, ClientError> {
        let snapshot = self.service.get_counts().await?;
        let count = snapshot.count_for(self.mode.get())?;
        self.display.render(&format_count(count))?;
        Ok(count)
    }

    /// One timer firing. Failures leave the display as it was.
    pub async fn tick(&self) {
        match self.poll_once().await {
            Ok(count) => trace!("Rendered count {}", count),
            Err(err) if err.is_backend_unavailable() => {
                debug!("Waiting for backend... ({})", err)
            }
            Err(err) => trace!("Skipped render: {}", err),
        }
    }

    /// Start ticking every `period_ms`. Polling stops when the handle is dropped.
    pub fn start(self: Rc<Self>, period_ms: u32) -> Interval {
        info!("Polling counts every {} ms", period_ms);
        Interval::new(period_ms, move || {
            let poller = self.clone();
            wasm_bindgen_futures::spawn_local(async move {
                poller.tick().await;
            });
        })
    }
}
