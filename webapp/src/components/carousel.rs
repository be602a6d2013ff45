use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_timers::callback::Interval;
use tracing::debug;

use site::{
    SiteConfig,
    carousel::{Autoplay, CarouselState, IntervalScheduler, SlideGeometry, dot_label},
    config::Slide,
};

// browser timers; dropping the Interval clears it
struct GlooScheduler;

impl IntervalScheduler for GlooScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

#[component]
pub fn Carousel() -> Element {
    let config = use_context::<SiteConfig>().carousel;

    match CarouselState::new(config.slides.len()) {
        Some(state) => rsx! {
            CarouselTrack {
                state,
                slides: config.slides,
                geometry: config.geometry,
                autoplay_ms: config.autoplay_ms,
            }
        },
        None => {
            debug!("no carousel slides configured, carousel disabled");
            rsx! {}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CarouselTrackProps {
    state: CarouselState,
    slides: Vec<Slide>,
    geometry: SlideGeometry,
    autoplay_ms: u32,
}

#[component]
fn CarouselTrack(props: CarouselTrackProps) -> Element {
    let initial = props.state;
    let autoplay_ms = props.autoplay_ms;
    let mut state = use_signal(move || initial);

    // lives as long as the component; dropping it cancels the timer
    let autoplay = use_hook(move || {
        let mut autoplay = Autoplay::new(GlooScheduler, autoplay_ms, move || {
            let mut state = state;
            state.with_mut(CarouselState::next);
        });
        autoplay.start();

        Rc::new(RefCell::new(autoplay))
    });

    let pause = Rc::clone(&autoplay);
    let resume = Rc::clone(&autoplay);

    let current = *state.read();
    let transform = current.track_transform(props.geometry);

    rsx! {
        div {
            class: "carousel-container",
            onmouseenter: move |_| pause.borrow_mut().pause(),
            onmouseleave: move |_| resume.borrow_mut().resume(),

            div { class: "carousel-slide", style: "transform: {transform};",
                for slide in props.slides.iter() {
                    div { class: "carousel-item",
                        img { src: "{slide.src}", alt: "{slide.alt}" }
                    }
                }
            }

            button {
                class: "carousel-prev",
                aria_label: "Imagem anterior",
                onclick: move |_| state.with_mut(CarouselState::prev),
                "‹"
            }
            button {
                class: "carousel-next",
                aria_label: "Próxima imagem",
                onclick: move |_| state.with_mut(CarouselState::next),
                "›"
            }
        }

        div { class: "carousel-dots",
            for dot in 0..current.len() {
                button {
                    class: if current.is_active(dot) { "carousel-dot active" } else { "carousel-dot" },
                    aria_label: dot_label(dot),
                    onclick: move |_| state.with_mut(|s| s.go_to(dot)),
                }
            }
        }
    }
}
