use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::document_title::use_document_title;
use crate::content::projects::{self, Project};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub slug: String,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let project = projects::get(&props.slug);
    use_document_title(Some(
        project.map_or("Project not found", |p| p.title).to_string(),
    ));

    let body = match project {
        Some(project) => render_project(project),
        None => {
            info!("No project with slug {:?}", props.slug);
            render_not_found()
        }
    };

    html! {
        <main class="project-page">
            { body }
            <style>
                {r#"
                .project-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                }
                .project-container {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 3rem;
                }
                .project-back {
                    color: inherit;
                    font-size: 0.875rem;
                    text-decoration: underline;
                }
                .project-title {
                    margin-top: 1rem;
                    font-size: 1.875rem;
                    font-weight: bold;
                }
                .project-byline {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: #d1d5db;
                }
                .project-description {
                    margin-top: 1.5rem;
                    color: rgba(243, 244, 246, 0.9);
                }
                .project-missing {
                    display: flex;
                    min-height: 100vh;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .project-missing p {
                    font-size: 1.125rem;
                }
                .project-missing .project-back {
                    display: inline-block;
                    margin-top: 1rem;
                }
                @media (min-width: 768px) {
                    .project-title {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}

fn render_project(project: &Project) -> Html {
    let structured = match projects::structured_data(project) {
        Ok(json) => html! { <script type="application/ld+json">{ json }</script> },
        Err(e) => {
            warn!("Could not serialise structured data for {}: {}", project.slug, e);
            html! {}
        }
    };

    html! {
        <div class="project-container">
            <Link<Route> to={Route::Projects} classes="project-back">
                {"← Back to projects"}
            </Link<Route>>

            <h1 class="project-title">{project.title}</h1>
            <p class="project-byline">{project.byline()}</p>
            <p class="project-description">{project.description}</p>
            { structured }
        </div>
    }
}

fn render_not_found() -> Html {
    html! {
        <div class="project-missing">
            <div>
                <p>{"Project not found."}</p>
                <Link<Route> to={Route::Projects} classes="project-back">
                    {"Back to projects"}
                </Link<Route>>
            </div>
        </div>
    }
}
