use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::scroll_controller::ScrollFrame;
use crate::Route;

const LINKS: &[(Route, &str)] = &[(Route::Projects, "PROJECTS"), (Route::About, "ABOUT")];

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let visible = use_context::<ScrollFrame>()
        .map(|frame| frame.header_visible)
        .unwrap_or(true);

    html! {
        <header class={classes!("site-header", (!visible).then(|| "site-header-hidden"))}>
            <Link<Route> to={Route::Home} classes="site-logo">
                <img src="/logo.png" alt="Logo" />
            </Link<Route>>

            <nav class="site-nav">
                { for LINKS.iter().map(|(target, label)| {
                    let active = route.as_ref() == Some(target);
                    html! {
                        <div class="site-nav-item">
                            <Link<Route> to={target.clone()} classes="site-nav-link">
                                {*label}
                            </Link<Route>>
                            if active {
                                <div class="site-nav-underline"></div>
                            }
                        </div>
                    }
                }) }
            </nav>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 20;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 20px 25px;
                    color: #fff;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.1), transparent);
                    transform: translateY(0);
                    transition: transform 0.3s;
                }
                .site-header-hidden {
                    transform: translateY(-100%);
                }
                .site-logo img {
                    width: 40px;
                    height: auto;
                    margin-left: 0.5rem;
                    object-fit: contain;
                }
                .site-nav {
                    display: flex;
                    gap: 2.5rem;
                    padding-left: 2.5rem;
                    font-size: 12px;
                    letter-spacing: 0.1em;
                }
                .site-nav-item {
                    position: relative;
                }
                .site-nav-link {
                    color: inherit;
                    text-decoration: none;
                }
                .site-nav-link:hover {
                    opacity: 0.5;
                }
                .site-nav-underline {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: -4px;
                    height: 2px;
                    background: #fff;
                    animation: underline-in 0.25s ease-out;
                }
                @keyframes underline-in {
                    from { opacity: 0; transform: translateY(4px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (min-width: 768px) {
                    .site-logo img {
                        width: 64px;
                        margin-left: 3.75rem;
                    }
                    .site-nav {
                        font-size: 16px;
                        letter-spacing: 0.025em;
                        gap: 6.25rem;
                        margin-right: 5rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
