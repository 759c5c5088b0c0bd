use shared::blog::all_posts;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::styles;
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    let posts = all_posts();

    html! {
        <Base plain={true}>
            <section class="relative py-20 sm:py-28 px-4 border-b border-[oklch(0.75_0.15_85)]/10">
                <div class={classes!(styles::CONTAINER, "text-center")}>
                    <div class="h-1 w-24 mx-auto bg-gradient-to-r from-transparent via-[oklch(0.75_0.15_85)] to-transparent mb-8" />
                    <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold mb-6 text-[oklch(0.85_0.15_85)] font-['Playfair_Display']">
                        {"Blogi"}
                    </h1>
                    <p class={classes!("text-lg", "sm:text-xl", "max-w-3xl", "mx-auto", "font-light", styles::TEXT_MUTED)}>
                        {"Vinkkejä, strategioita ja näkemyksiä iGaming-median maailmasta"}
                    </p>
                </div>
            </section>

            <section class="py-16 sm:py-24 px-4">
                <div class="container max-w-6xl mx-auto grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for posts.into_iter().map(|post| html! {
                        <Link<Route>
                            key={post.slug}
                            to={Route::BlogPost { slug: post.slug.to_string() }}
                            classes={classes!(styles::BLOG_CARD, "group", "flex", "flex-col")}
                        >
                            <div class="flex items-center justify-between mb-4 text-sm">
                                <span class={classes!("font-medium", styles::GOLD)}>{post.category}</span>
                                <span class={styles::TEXT_FAINT}>{post.read_time}</span>
                            </div>
                            <h3 class="text-xl sm:text-2xl font-bold mb-3 group-hover:text-[oklch(0.85_0.15_85)] transition-colors font-['Playfair_Display']">
                                {post.title}
                            </h3>
                            <p class={classes!("font-light", "mb-6", "flex-grow", styles::TEXT_MUTED)}>{post.excerpt}</p>
                            <div class="flex items-center justify-between pt-4 border-t border-[oklch(0.75_0.15_85)]/10 text-sm">
                                <time datetime={post.date} class={styles::TEXT_FAINT}>{post.formatted_date()}</time>
                                <span class={classes!("group-hover:translate-x-1", "transition-transform", styles::GOLD)}>{"→"}</span>
                            </div>
                        </Link<Route>>
                    }) }
                </div>
            </section>
        </Base>
    }
}
