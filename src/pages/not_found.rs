use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::document_title::use_document_title;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_document_title(Some("Not found".to_string()));

    html! {
        <main class="not-found-page">
            <div>
                <p>{"This page doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="not-found-link">{"Back home"}</Link<Route>>
            </div>
            <style>
                {r#"
                .not-found-page {
                    display: flex;
                    min-height: 100vh;
                    align-items: center;
                    justify-content: center;
                    background: #000;
                    color: #fff;
                    text-align: center;
                }
                .not-found-link {
                    display: inline-block;
                    margin-top: 1rem;
                    color: inherit;
                    text-decoration: underline;
                }
                "#}
            </style>
        </main>
    }
}
