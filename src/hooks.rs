use std::rc::Rc;
use workinout::config::{ServiceConfig, COUNTER_ELEMENT_ID};
use workinout::{
    CountPoller, CountService, DomDisplay, ExerciseMode, HttpCountService, ModeCell,
    ModeController,
};
use yew::prelude::*;

/// Client objects that live as long as the page.
#[derive(Clone)]
pub struct Client {
    pub config: ServiceConfig,
    pub controller: Rc<ModeController>,
    pub poller: Rc<CountPoller>,
}

impl Client {
    /// Wire one service, one mode cell, and both components around them.
    fn connect() -> Self {
        let config = ServiceConfig::from_window();
        let service: Rc<dyn CountService> = Rc::new(HttpCountService::new(config.clone()));
        let mode = ModeCell::default();

        let controller = Rc::new(ModeController::new(service.clone(), mode.clone()));
        let poller = Rc::new(CountPoller::new(
            service,
            mode,
            Rc::new(DomDisplay::new(COUNTER_ELEMENT_ID)),
        ));

        Self {
            config,
            controller,
            poller,
        }
    }
}

/// Build the client once per mount.
#[hook]
pub fn use_client() -> Client {
    let client = use_state(Client::connect);
    (*client).clone()
}

/// Run the poller while the calling component is mounted.
#[hook]
pub fn use_count_polling(poller: Rc<CountPoller>, period_ms: u32) {
    use_effect_with(period_ms, move |&period| {
        let interval = poller.start(period);
        // Dropping the interval cancels the timer.
        move || drop(interval)
    });
}

/// State for the mode buttons.
#[derive(Clone)]
pub struct ModeSelection {
    /// Mode last accepted by the controller.
    pub current: ExerciseMode,
    /// A `set_exercise` request is still pending.
    pub busy: bool,
    pub select: Callback<ExerciseMode>,
}

/// Route button clicks through the controller and mirror its state for rendering.
#[hook]
pub fn use_mode_selection(controller: Rc<ModeController>) -> ModeSelection {
    let current = use_state({
        let controller = controller.clone();
        move || controller.current_mode()
    });
    let busy = use_state(|| false);

    let select = {
        let current = current.clone();
        let busy = busy.clone();
        Callback::from(move |mode: ExerciseMode| {
            // Dropped clicks change nothing, not even the highlight.
            let Some(send) = controller.request_mode_change(mode) else {
                return;
            };
            current.set(mode);
            busy.set(controller.is_request_in_flight());

            let busy = busy.clone();
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                send.await;
                busy.set(controller.is_request_in_flight());
            });
        })
    };

    ModeSelection {
        current: *current,
        busy: *busy,
        select,
    }
}
