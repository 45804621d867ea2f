//! Pure Yew view components for the Workinout page.

use workinout::{format_count, ExerciseMode};
use yew::prelude::*;

/// One button per exercise; the selected one is highlighted.
#[derive(Properties, PartialEq)]
pub struct ModeButtonsProps {
    pub current: ExerciseMode,
    pub busy: bool,
    pub onselect: Callback<ExerciseMode>,
}

#[function_component(ModeButtons)]
pub fn mode_buttons(props: &ModeButtonsProps) -> Html {
    html! {
        <div class={classes!("mode-buttons", props.busy.then_some("busy"))}>
            { ExerciseMode::ALL.into_iter().map(|mode| {
                let onclick = props.onselect.reform(move |_: MouseEvent| mode);
                let selected = mode == props.current;
                html! {
                    <button
                        key={mode.label()}
                        class={classes!("btn-mode", selected.then_some("selected"))}
                        aria-pressed={selected.to_string()}
                        {onclick}
                    >
                        { mode.label() }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// MJPEG stream from the counting service's camera.
#[derive(Properties, PartialEq)]
pub struct VideoFeedProps {
    pub src: AttrValue,
}

#[function_component(VideoFeed)]
pub fn video_feed(props: &VideoFeedProps) -> Html {
    html! {
        <div class="video-container">
            <img class="video-feed" src={props.src.clone()} alt="Live camera feed" />
        </div>
    }
}

/// Mount point for the count. Only the initial text comes from here; the
/// poller writes the element directly afterwards.
#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub element_id: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    html! {
        <h2 id={props.element_id.clone()} class="counter">
            { format_count(0) }
        </h2>
    }
}
