use shared::blog::find_post;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::MarkdownView;
use crate::styles;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let post = use_memo(props.slug.clone(), |slug| find_post(slug));
    let blocks = use_memo(*post, |post| post.map(|post| post.blocks()).unwrap_or_default());

    let Some(post) = *post else {
        log::info!("No blog post for slug {}", props.slug);
        return html! {
            <Base plain={true}>
                <div class="min-h-[60vh] flex items-center justify-center text-center">
                    <div>
                        <h1 class="text-4xl font-bold mb-4 text-[oklch(0.85_0.15_85)]">{"Artikkelia ei löytynyt"}</h1>
                        <Link<Route> to={Route::Blog} classes={styles::NAV_LINK}>{"← Takaisin blogiin"}</Link<Route>>
                    </div>
                </div>
            </Base>
        };
    };

    html! {
        <Base plain={true}>
            <section class="relative py-20 sm:py-32 px-4 overflow-hidden border-b border-[oklch(0.75_0.15_85)]/10">
                <div class="absolute inset-0 opacity-20">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-[oklch(0.75_0.15_85)] blur-[120px] rounded-full" />
                </div>
                <div class="container max-w-4xl mx-auto relative z-10">
                    <div class="mb-8">
                        <Link<Route> to={Route::Blog} classes={classes!(styles::NAV_LINK, "px-0")}>{"← Takaisin blogiin"}</Link<Route>>
                    </div>
                    <div class="mb-4">
                        <span class={styles::CATEGORY_BADGE}>{post.category}</span>
                    </div>
                    <h1 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-6 font-['Playfair_Display']">{post.title}</h1>
                    <div class={classes!("flex", "items-center", "gap-6", "text-sm", styles::TEXT_MUTED)}>
                        <time datetime={post.date}>{post.formatted_date()}</time>
                        <span>{format!("{} lukuaika", post.read_time)}</span>
                    </div>
                </div>
            </section>

            <div class="py-16 px-4">
                <div class={styles::CONTAINER_NARROW}>
                    <MarkdownView blocks={(*blocks).clone()} />
                </div>
            </div>
        </Base>
    }
}
