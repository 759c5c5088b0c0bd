use shared::shared_slot_game::ReelFace;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SlotReelProps {
    pub face: ReelFace,
    pub spinning: bool,
}

#[function_component(SlotReel)]
pub fn slot_reel(props: &SlotReelProps) -> Html {
    let lucky = !props.spinning && props.face.is_seven();

    let background = if props.spinning {
        "bg-[oklch(0.10_0.02_250)] animate-pulse"
    } else if lucky {
        "bg-gradient-to-b from-red-600/30 to-red-800/30 shadow-[0_0_20px_rgba(220,38,38,0.5)]"
    } else {
        "bg-[oklch(0.10_0.02_250)]"
    };
    let glyph = if lucky { "text-red-500 animate-pulse" } else { styles::GOLD };

    html! {
        <div class={classes!(styles::REEL, background)}>
            <span class={glyph}>{props.face.glyph()}</span>
        </div>
    }
}
