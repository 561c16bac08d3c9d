use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageTransitionProps {
    pub children: Children,
}

/// Slides a page in from the right. Give it a `key` per route so the animation
/// replays on navigation.
#[function_component(PageTransition)]
pub fn page_transition(props: &PageTransitionProps) -> Html {
    html! {
        <div class="page-transition">
            { for props.children.iter() }
            <style>
                {r#"
                .page-transition {
                    min-height: 100vh;
                    animation: page-slide-in 0.4s ease-out backwards;
                }
                @keyframes page-slide-in {
                    from { transform: translateX(40px); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
