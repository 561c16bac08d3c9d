use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::document_title::use_document_title;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    use_document_title(Some("About".to_string()));

    html! {
        <main class="about-page">
            <div class="about-container">
                <h1>{"About"}</h1>
                <p>
                    {"I'm a designer and developer who likes quiet interfaces: few colours, \
                      honest typography and motion that follows your hand instead of fighting it."}
                </p>
                <p>
                    {"Most of my work sits between product design and frontend engineering. \
                      Have a look at the "}
                    <Link<Route> to={Route::Projects} classes="about-link">{"projects"}</Link<Route>>
                    {" for a few recent examples."}
                </p>
            </div>
            <style>
                {r#"
                .about-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                }
                .about-container {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 3rem;
                }
                .about-container h1 {
                    font-size: 1.875rem;
                    font-weight: bold;
                }
                .about-container p {
                    margin-top: 1.5rem;
                    color: rgba(243, 244, 246, 0.9);
                }
                .about-link {
                    color: inherit;
                    text-decoration: underline;
                }
                "#}
            </style>
        </main>
    }
}
