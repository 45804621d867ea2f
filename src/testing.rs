//! Fakes shared by the unit tests.

use crate::display::DisplaySink;
use crate::error::ClientError;
use crate::mode::ExerciseMode;
use crate::service::CountService;
use crate::snapshot::CountSnapshot;
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};

type Gate<T> = oneshot::Sender<Result<T, ClientError>>;

/// A `CountService` whose calls park until the test releases them.
///
/// Each call records itself and waits on its own gate, so tests control
/// exactly when (and in which order) responses arrive.
#[derive(Default)]
pub struct GatedService {
    pub sent_modes: RefCell<Vec<ExerciseMode>>,
    pub count_requests: Cell<usize>,
    set_gates: RefCell<Vec<Option<Gate<()>>>>,
    count_gates: RefCell<Vec<Option<Gate<CountSnapshot>>>>,
    sets_in_flight: Cell<usize>,
    pub max_sets_in_flight: Cell<usize>,
}

impl GatedService {
    pub fn sets_in_flight(&self) -> usize {
        self.sets_in_flight.get()
    }

    pub fn release_set(&self, idx: usize, result: Result<(), ClientError>) {
        let gate = self.set_gates.borrow_mut()[idx]
            .take()
            .expect("set_exercise call already released");
        let _ = gate.send(result);
    }

    pub fn release_counts(&self, idx: usize, result: Result<CountSnapshot, ClientError>) {
        let gate = self.count_gates.borrow_mut()[idx]
            .take()
            .expect("get_counts call already released");
        let _ = gate.send(result);
    }
}

#[async_trait(?Send)]
impl CountService for GatedService {
    async fn set_exercise(&self, mode: ExerciseMode) -> Result<(), ClientError> {
        let (tx, rx) = oneshot::channel();
        self.sent_modes.borrow_mut().push(mode);
        self.set_gates.borrow_mut().push(Some(tx));

        let now = self.sets_in_flight.get() + 1;
        self.sets_in_flight.set(now);
        self.max_sets_in_flight
            .set(self.max_sets_in_flight.get().max(now));

        let result = rx.await.unwrap_or(Err(ClientError::Service { status: 499 }));
        self.sets_in_flight.set(self.sets_in_flight.get() - 1);
        result
    }

    async fn get_counts(&self) -> Result<CountSnapshot, ClientError> {
        let (tx, rx) = oneshot::channel();
        self.count_requests.set(self.count_requests.get() + 1);
        self.count_gates.borrow_mut().push(Some(tx));
        rx.await.unwrap_or(Err(ClientError::Service { status: 499 }))
    }
}

/// A display that remembers every render; can be toggled unmounted.
pub struct RecordingDisplay {
    pub renders: RefCell<Vec<String>>,
    pub mounted: Cell<bool>,
}

impl RecordingDisplay {
    pub fn mounted() -> Self {
        Self {
            renders: RefCell::new(Vec::new()),
            mounted: Cell::new(true),
        }
    }

    pub fn unmounted() -> Self {
        let display = Self::mounted();
        display.mounted.set(false);
        display
    }

    pub fn last(&self) -> Option<String> {
        self.renders.borrow().last().cloned()
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(&self, text: &str) -> Result<(), ClientError> {
        if !self.mounted.get() {
            return Err(ClientError::BindingAbsent {
                key: "counter".to_string(),
            });
        }
        self.renders.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// A real `reqwest::Error`, produced without touching the network.
pub fn transport_error() -> ClientError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("relative URL must not build");
    ClientError::Transport(err)
}

pub fn snapshot(left: u32, squat: u32, pushup: u32, jumping_jack: u32) -> CountSnapshot {
    let body = format!(
        r#"{{"bicep_curl_left":{},"squat":{},"pushup":{},"jumping_jack":{}}}"#,
        left, squat, pushup, jumping_jack
    );
    CountSnapshot::from_json(&body).expect("valid counts body")
}
