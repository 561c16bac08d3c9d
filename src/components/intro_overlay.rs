use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub progress: u8,
    /// Fades out and stops taking input when false.
    pub visible: bool,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    html! {
        <div class={classes!("intro-overlay", (!props.visible).then(|| "intro-overlay-done"))}>
            <div class="intro-overlay-badge">
                <span class="intro-overlay-progress">{format!("{}%", props.progress)}</span>
            </div>
            <style>
                {r#"
                .intro-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #000;
                    opacity: 1;
                    transition: opacity 0.4s;
                }
                .intro-overlay-done {
                    opacity: 0;
                    pointer-events: none;
                }
                .intro-overlay-badge {
                    padding: 1rem 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 24px;
                    background: rgba(0, 0, 0, 0.7);
                    animation: intro-badge-in 0.5s ease-out;
                    transition: transform 0.5s ease-out, opacity 0.5s ease-out;
                }
                .intro-overlay-done .intro-overlay-badge {
                    transform: scale(0.95);
                    opacity: 0;
                }
                .intro-overlay-progress {
                    font-size: 1.875rem;
                    letter-spacing: 0.25em;
                    color: #fff;
                }
                @keyframes intro-badge-in {
                    from { transform: scale(0.8); border-radius: 32px; opacity: 0; }
                    to { transform: scale(1); border-radius: 24px; opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
