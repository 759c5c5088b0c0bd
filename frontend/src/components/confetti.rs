use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::confetti::{ConfettiField, FrameStatus, Particle};
use shared::constants::CONFETTI_WAVE_OFFSETS_MS;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::animation::FrameLoop;

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Each change starts a new burst. Zero means none yet.
    pub runs: u32,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_particle(context: &CanvasRenderingContext2d, particle: &Particle, alpha: f64) {
    context.save();
    let _ = context.translate(particle.x, particle.y);
    let _ = context.rotate(particle.rotation * PI / 180.0);
    context.set_global_alpha(alpha);
    context.set_fill_style_str(particle.color);
    context.fill_rect(-particle.width / 2.0, -particle.height / 2.0, particle.width, particle.height);
    context.restore();
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let canvas_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        let visible = visible.clone();
        use_effect_with(props.runs, move |&runs| {
            let mut burst = None;

            if runs > 0 {
                visible.set(true);
                match (canvas_ref.cast::<HtmlCanvasElement>(), window()) {
                    (Some(canvas), Some(window)) => {
                        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(1280.0);
                        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(720.0);
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);

                        let field = Rc::new(RefCell::new(ConfettiField::new(width, height)));
                        let rng = Rc::new(RefCell::new(SmallRng::from_entropy()));

                        let waves: Vec<Timeout> = CONFETTI_WAVE_OFFSETS_MS
                            .iter()
                            .map(|&offset| {
                                let field = field.clone();
                                let rng = rng.clone();
                                Timeout::new(offset, move || {
                                    field.borrow_mut().spawn_wave(&mut *rng.borrow_mut());
                                })
                            })
                            .collect();

                        let frames = context_2d(&canvas).map(|context| {
                            let field = field.clone();
                            let visible = visible.clone();
                            FrameLoop::start(move |elapsed_ms| {
                                let mut field = field.borrow_mut();
                                context.clear_rect(0.0, 0.0, field.width, field.height);
                                match field.step(elapsed_ms) {
                                    FrameStatus::Running { alpha } => {
                                        for particle in field.particles() {
                                            draw_particle(&context, particle, alpha);
                                        }
                                        true
                                    }
                                    FrameStatus::Finished => {
                                        log::debug!("Confetti finished after {:.0}ms", elapsed_ms);
                                        visible.set(false);
                                        false
                                    }
                                }
                            })
                        });
                        if frames.is_none() {
                            log::warn!("Confetti canvas has no 2d context");
                        }
                        burst = Some((field, waves, frames));
                    }
                    _ => log::warn!("Confetti canvas is not mounted"),
                }
            }

            move || {
                if let Some((field, waves, frames)) = burst {
                    drop(frames);
                    drop(waves);
                    field.borrow_mut().deactivate();
                }
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class={classes!("fixed", "inset-0", "pointer-events-none", "z-[100]", (!*visible).then_some("hidden"))}
        />
    }
}
