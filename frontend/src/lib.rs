pub mod animation;
pub mod base;
pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;
pub mod timers;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
    home::Home,
    blog::Blog,
    blog_post::BlogPostPage,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")] Home,
    #[at("/contact")] Contact,
    #[at("/blogi")] Blog,
    #[at("/blogi/:slug")] BlogPost { slug: String },
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Contact => html! { <Home /> },
        Route::Blog => html! { <Blog /> },
        Route::BlogPost { slug } => html! { <BlogPostPage {slug} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
