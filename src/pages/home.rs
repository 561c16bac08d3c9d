use log::{debug, info};
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::document_title::use_document_title;
use crate::components::intro_overlay::IntroOverlay;
use crate::config::{self, ScrollConfig};
use crate::motion::frame_loop::{FrameControl, FrameLoop};
use crate::motion::intro::IntroController;
use crate::motion::scroll_controller::ScrollFrame;
use crate::motion::scroll_mapper::ScrollMapper;
use crate::storage::open_session;
use crate::Route;

/// `HTMLMediaElement.HAVE_CURRENT_DATA`: the first frame is decoded.
const HAVE_CURRENT_DATA: u16 = 2;

#[function_component(Home)]
pub fn home() -> Html {
    use_document_title(None);

    let frame = use_context::<ScrollFrame>().unwrap_or_default();
    let video_ref = use_node_ref();
    let intro = use_mut_ref(|| IntroController::new(open_session()));
    let redraw = use_force_update();

    // Intro: start the progress animation on first mount, cancel it on teardown.
    {
        let intro = intro.clone();
        let redraw = redraw.clone();
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut frames = None;
                if intro.borrow().show_overlay() {
                    info!("Playing intro");
                    intro.borrow_mut().start();

                    // The video may have decoded its first frame before we got here.
                    if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                        if video.ready_state() >= HAVE_CURRENT_DATA {
                            intro.borrow_mut().mark_asset_ready();
                        }
                    }

                    let intro = intro.clone();
                    frames = FrameLoop::start(move |timestamp| {
                        let more = {
                            let mut intro = intro.borrow_mut();
                            intro.tick(timestamp);
                            intro.wants_frames()
                        };
                        redraw.force_update();
                        if more {
                            FrameControl::Continue
                        } else {
                            FrameControl::Stop
                        }
                    });
                }
                move || {
                    if let Some(frames) = frames {
                        debug!("Cancelling intro frames");
                        frames.cancel();
                    }
                }
            },
            (),
        );
    }

    // Scrub the background video to the scroll position once its duration is known.
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |(offset, viewport_height)| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    let mapper = ScrollMapper::new(*viewport_height, &ScrollConfig::default());
                    if let Some(time) = mapper.scrub_time(*offset, video.duration()) {
                        video.set_current_time(time);
                    }
                }
                || ()
            },
            (frame.offset, frame.viewport_height),
        );
    }

    let on_video_ready = {
        let intro = intro.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: Event| {
            intro.borrow_mut().mark_asset_ready();
            redraw.force_update();
        })
    };

    let (bypassed, show_overlay, revealed, progress) = {
        let intro = intro.borrow();
        (
            intro.is_bypassed(),
            intro.show_overlay(),
            intro.content_revealed(),
            intro.progress(),
        )
    };

    html! {
        <>
            if !bypassed {
                <IntroOverlay progress={progress} visible={show_overlay} />
            }

            <main class={classes!(
                "home-main",
                (!bypassed).then(|| "home-main-intro"),
                revealed.then(|| "home-main-revealed")
            )}>
                <video
                    ref={video_ref}
                    class="home-video"
                    src={config::BACKGROUND_VIDEO_SRC}
                    muted=true
                    playsinline=true
                    preload="metadata"
                    onloadeddata={on_video_ready}
                />

                <div class="home-content">
                    <section class="home-hero">
                        <h1 class="home-title">
                            {"I design & build clean, minimal web experiences."}
                        </h1>
                        <p class="home-subtitle">
                            {"A modern portfolio with scroll-controlled motion."}
                        </p>
                        <div class="home-cta">
                            <Link<Route> to={Route::Projects} classes="home-cta-button">
                                {"View projects"}
                            </Link<Route>>
                        </div>

                        <div class="home-hint" style={frame.hint.to_css()}>
                            <span class="home-hint-label">{"Scroll for more"}</span>
                            <div class="home-hint-wobble">
                                <div class="home-hint-arrow"></div>
                            </div>
                        </div>
                    </section>
                </div>

                <div class="home-scroll-area"></div>
            </main>

            <style>
                {r#"
                .home-main {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: hidden;
                    color: #fff;
                }
                .home-main-intro {
                    transform: scale(0.8);
                    border-radius: 32px;
                    opacity: 0;
                    transition: transform 0.6s ease-out, border-radius 0.6s ease-out, opacity 0.6s ease-out;
                }
                .home-main-intro.home-main-revealed {
                    transform: none;
                    border-radius: 0;
                    opacity: 1;
                }
                .home-video {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100vw;
                    height: 100vh;
                    object-fit: cover;
                    z-index: -10;
                }
                .home-content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    min-height: 100vh;
                }
                .home-hero {
                    display: flex;
                    flex: 1;
                    flex-direction: column;
                    justify-content: center;
                    padding: 6rem 1.5rem 3rem;
                    text-align: center;
                    animation: hero-rise 1.2s cubic-bezier(0.215, 0.61, 0.355, 1) backwards;
                }
                @keyframes hero-rise {
                    from { opacity: 0; visibility: hidden; transform: translateY(40px); }
                    to { opacity: 1; visibility: visible; transform: translateY(0); }
                }
                .home-title {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: 2.25rem;
                    font-weight: bold;
                }
                .home-subtitle {
                    max-width: 36rem;
                    margin: 1rem auto 0;
                    font-size: 1rem;
                    color: rgba(243, 244, 246, 0.9);
                }
                .home-cta {
                    display: flex;
                    justify-content: center;
                    margin-top: 2rem;
                }
                .home-cta-button {
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    background: #fff;
                    color: #000;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .home-cta-button:hover {
                    background: #f3f4f6;
                }
                .home-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    transition: opacity 0.2s;
                }
                .home-hint-label {
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.025em;
                }
                .home-hint-wobble {
                    animation: wobble 1.6s ease-in-out infinite;
                }
                .home-hint-arrow {
                    width: 2rem;
                    height: 2rem;
                    border-bottom: 2px solid #fff;
                    border-right: 2px solid #fff;
                    transform: rotate(45deg);
                }
                @keyframes wobble {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(8px); }
                }
                .home-scroll-area {
                    height: 800vh;
                }
                @media (min-width: 768px) {
                    .home-hero {
                        padding: 6rem 2.5rem 3rem;
                        text-align: left;
                    }
                    .home-title {
                        margin: 0;
                        font-size: 3.75rem;
                    }
                    .home-subtitle {
                        margin: 1rem 0 0;
                        font-size: 1.125rem;
                    }
                    .home-cta {
                        justify-content: flex-start;
                    }
                }
                @media (min-width: 1024px) {
                    .home-hero {
                        padding: 6rem 10rem 3rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
