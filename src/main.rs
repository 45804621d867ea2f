//! Main module for the Workinout page using Yew.
//! Wires the client core into the view components.

use workinout::config::{COUNTER_ELEMENT_ID, POLL_INTERVAL_MS, VIDEO_FEED_PATH};
use yew::prelude::*;

mod components;
mod hooks;

use components::{Counter, ModeButtons, VideoFeed};
use hooks::{use_client, use_count_polling, use_mode_selection};

/// Top-level page: video feed, exercise picker, live count.
#[function_component]
pub fn App() -> Html {
    let client = use_client();
    use_count_polling(client.poller.clone(), POLL_INTERVAL_MS);
    let selection = use_mode_selection(client.controller.clone());

    html! {
        <div class="container">
            <h1>{ "Workinout" }</h1>
            <VideoFeed src={client.config.url(VIDEO_FEED_PATH)} />
            <ModeButtons
                current={selection.current}
                busy={selection.busy}
                onselect={selection.select}
            />
            <Counter element_id={COUNTER_ELEMENT_ID} />
        </div>
    }
}

/// Entry point: installs console logging and mounts the App.
fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
