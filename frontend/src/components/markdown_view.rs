use shared::markdown::{Block, Inline};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MarkdownViewProps {
    pub blocks: Vec<Block>,
}

fn render_inline(span: &Inline) -> Html {
    match span {
        Inline::Text(text) => html! { {text.clone()} },
        Inline::Strong(text) => html! { <strong class={styles::PROSE_STRONG}>{text.clone()}</strong> },
        Inline::Link { text, href } => match Route::recognize(href) {
            // Site paths stay inside the router.
            Some(route) if href.starts_with('/') => html! {
                <Link<Route> to={route} classes={classes!(styles::PROSE_LINK)}>{text.clone()}</Link<Route>>
            },
            _ => html! {
                <a href={href.clone()} class={styles::PROSE_LINK} target="_blank" rel="noopener noreferrer">{text.clone()}</a>
            },
        },
    }
}

fn render_spans(spans: &[Inline]) -> Html {
    spans.iter().map(render_inline).collect::<Html>()
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading { level, content } if *level <= 2 => html! {
            <h2 class={styles::PROSE_H2}>{render_spans(content)}</h2>
        },
        Block::Heading { content, .. } => html! {
            <h3 class={styles::PROSE_H3}>{render_spans(content)}</h3>
        },
        Block::Paragraph(content) => html! {
            <p class={styles::PROSE_P}>{render_spans(content)}</p>
        },
        Block::List(items) => html! {
            <ul class={styles::PROSE_LIST}>
                { for items.iter().map(|item| html! { <li>{render_spans(item)}</li> }) }
            </ul>
        },
        Block::OrderedList(items) => html! {
            <ol class={styles::PROSE_ORDERED}>
                { for items.iter().map(|item| html! { <li>{render_spans(item)}</li> }) }
            </ol>
        },
    }
}

#[function_component(MarkdownView)]
pub fn markdown_view(props: &MarkdownViewProps) -> Html {
    html! {
        <article>
            { for props.blocks.iter().map(render_block) }
        </article>
    }
}
