use log::info;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod storage;
mod content {
    pub mod projects;
}
mod motion {
    pub mod frame_loop;
    pub mod header_visibility;
    pub mod intro;
    pub mod scroll_controller;
    pub mod scroll_mapper;
    pub mod scroll_source;
}
mod components {
    pub mod document_title;
    pub mod header;
    pub mod intro_overlay;
    pub mod page_transition;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod not_found;
    pub mod project_detail;
    pub mod projects;
}

use components::{header::Header, page_transition::PageTransition};
use config::ScrollConfig;
use motion::scroll_controller::{ScrollController, ScrollFrame};
use motion::scroll_source::{use_scroll, viewport_height};
use pages::{
    about::About,
    home::Home,
    not_found::NotFound,
    project_detail::ProjectDetail,
    projects::Projects,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/projects/:slug")]
    ProjectDetail { slug: String },
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    let key = route.to_path();
    let page = match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        },
        Route::ProjectDetail { slug } => {
            info!("Rendering project {}", slug);
            html! { <ProjectDetail slug={slug} /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    };

    html! {
        <PageTransition key={key}>
            { page }
        </PageTransition>
    }
}

#[function_component]
fn App() -> Html {
    let frame = use_state_eq(ScrollFrame::default);
    let controller = use_mut_ref(|| ScrollController::new(ScrollConfig::default()));

    // One subscription drives the header, the video scrub and the hint.
    {
        let frame = frame.clone();
        let controller = controller.clone();
        use_scroll(move |offset| {
            let next = controller.borrow_mut().on_scroll(offset, viewport_height());
            frame.set(next);
        });
    }

    {
        let frame = frame.clone();
        let controller = controller.clone();
        use_event_with_window("resize", move |_: Event| {
            let next = controller.borrow_mut().resize(viewport_height());
            frame.set(next);
        });
    }

    html! {
        <BrowserRouter>
            <ContextProvider<ScrollFrame> context={*frame}>
                <Header />
                <Switch<Route> render={switch} />
            </ContextProvider<ScrollFrame>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
