use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::document_title::use_document_title;
use crate::content::projects;
use crate::Route;

#[function_component(Projects)]
pub fn projects_page() -> Html {
    use_document_title(Some("Projects".to_string()));

    html! {
        <main class="projects-page">
            <div class="projects-container">
                <header class="projects-header">
                    <h1>{"Projects"}</h1>
                    <Link<Route> to={Route::Home} classes="projects-back">
                        {"← Back home"}
                    </Link<Route>>
                </header>

                <p class="projects-intro">
                    {"A selection of work across web, crypto, and product experiments."}
                </p>

                <div class="projects-grid">
                    { for projects::list().iter().map(|project| html! {
                        <Link<Route>
                            to={Route::ProjectDetail { slug: project.slug.to_string() }}
                            classes="project-card"
                        >
                            <h2>{project.title}</h2>
                            <p class="project-card-tagline">{project.tagline}</p>
                            <p class="project-card-byline">{project.byline()}</p>
                        </Link<Route>>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .projects-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                }
                .projects-container {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 3rem;
                }
                .projects-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .projects-header h1 {
                    font-size: 1.875rem;
                    font-weight: bold;
                }
                .projects-back {
                    color: inherit;
                    font-size: 0.875rem;
                    text-decoration: underline;
                }
                .projects-intro {
                    margin-top: 0.75rem;
                    font-size: 0.875rem;
                    color: rgba(229, 231, 235, 0.8);
                }
                .projects-grid {
                    display: grid;
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }
                .project-card {
                    display: block;
                    padding: 1.25rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    color: inherit;
                    text-decoration: none;
                    transition: background 0.15s;
                }
                .project-card:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .project-card:hover h2 {
                    text-decoration: underline;
                }
                .project-card h2 {
                    font-size: 1.25rem;
                    font-weight: 600;
                }
                .project-card-tagline {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: rgba(229, 231, 235, 0.8);
                }
                .project-card-byline {
                    margin-top: 0.75rem;
                    font-size: 0.75rem;
                    color: #9ca3af;
                }
                @media (min-width: 768px) {
                    .projects-header h1 {
                        font-size: 2.25rem;
                    }
                    .projects-intro {
                        font-size: 1rem;
                    }
                    .projects-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </main>
    }
}
