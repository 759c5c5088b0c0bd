use std::f64::consts::PI;

use shared::shared_wheel_game::{Segment, WheelGeometry};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const WIN_COLOR: &str = "#16a34a";
const LOSE_COLOR: &str = "#dc2626";
const RIM_COLOR: &str = "#d4af37";
const HUB_COLOR: &str = "#1a1c2e";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Accumulated clockwise rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
    pub geometry: WheelGeometry,
}

fn draw_segment(context: &CanvasRenderingContext2d, geometry: &WheelGeometry, segment: Segment, center: (f64, f64), radius: f64) {
    let (start, end) = geometry.arc_radians(segment);
    context.begin_path();
    context.set_fill_style_str(if segment.is_win() { WIN_COLOR } else { LOSE_COLOR });
    context.move_to(center.0, center.1);
    let _ = context.arc(center.0, center.1, radius, start, end);
    context.close_path();
    context.fill();
}

fn draw_label(context: &CanvasRenderingContext2d, geometry: &WheelGeometry, segment: Segment, center: (f64, f64), radius: f64) {
    let (start, span) = geometry.band(segment);
    let middle = (start + span / 2.0).to_radians();
    context.save();
    let _ = context.translate(center.0 + radius * 0.62 * middle.cos(), center.1 + radius * 0.62 * middle.sin());
    let _ = context.rotate(middle + PI / 2.0);
    context.set_fill_style_str("#ffffff");
    context.set_font("bold 18px Montserrat, sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    let _ = context.fill_text(if segment.is_win() { "VOITTO" } else { "HÄVIÖ" }, 0.0, 0.0);
    context.restore();
}

/// Pointer fixed above the wheel, tip pointing down at `pointer_deg`.
fn draw_pointer(context: &CanvasRenderingContext2d, geometry: &WheelGeometry, center: (f64, f64), radius: f64) {
    let angle = geometry.pointer_deg.to_radians();
    let tip = (center.0 + (radius - 6.0) * angle.cos(), center.1 + (radius - 6.0) * angle.sin());
    let base = radius + 14.0;
    let half_width = 0.09;

    context.begin_path();
    context.set_fill_style_str(RIM_COLOR);
    context.move_to(tip.0, tip.1);
    context.line_to(center.0 + base * (angle - half_width).cos(), center.1 + base * (angle - half_width).sin());
    context.line_to(center.0 + base * (angle + half_width).cos(), center.1 + base * (angle + half_width).sin());
    context.close_path();
    context.fill();
}

fn draw_wheel(canvas: &HtmlCanvasElement, props: &WheelCanvasProps) -> Option<()> {
    let context = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - 24.0;
    let geometry = &props.geometry;

    context.clear_rect(0.0, 0.0, width, height);

    // Glow, stronger while spinning
    context.begin_path();
    context.set_fill_style_str(if props.is_spinning { "rgba(212, 175, 55, 0.25)" } else { "rgba(212, 175, 55, 0.12)" });
    let _ = context.arc(center.0, center.1, radius + 12.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center.0, center.1);
    let _ = context.rotate(props.rotation.to_radians());
    let _ = context.translate(-center.0, -center.1);

    draw_segment(&context, geometry, Segment::Win, center, radius);
    draw_segment(&context, geometry, Segment::Lose, center, radius);
    draw_label(&context, geometry, Segment::Win, center, radius);
    draw_label(&context, geometry, Segment::Lose, center, radius);

    // Dividers
    for angle in [geometry.win_start_deg, geometry.win_end_deg] {
        let angle = angle.to_radians();
        context.begin_path();
        context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        context.set_line_width(2.5);
        context.move_to(center.0, center.1);
        context.line_to(center.0 + radius * angle.cos(), center.1 + radius * angle.sin());
        context.stroke();
    }
    context.restore();

    // Rim
    context.begin_path();
    context.set_stroke_style_str(RIM_COLOR);
    context.set_line_width(6.0);
    let _ = context.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
    context.stroke();

    // Hub
    context.begin_path();
    context.set_fill_style_str(HUB_COLOR);
    let _ = context.arc(center.0, center.1, radius * 0.18, 0.0, 2.0 * PI);
    context.fill();
    context.begin_path();
    context.set_stroke_style_str(RIM_COLOR);
    context.set_line_width(3.0);
    let _ = context.arc(center.0, center.1, radius * 0.18, 0.0, 2.0 * PI);
    context.stroke();

    draw_pointer(&context, geometry, center, radius);
    Some(())
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let snapshot = WheelCanvasProps {
            rotation: props.rotation,
            is_spinning: props.is_spinning,
            geometry: props.geometry,
        };
        use_effect_with((props.rotation, props.is_spinning, props.geometry), move |_| {
            match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => {
                    if draw_wheel(&canvas, &snapshot).is_none() {
                        log::warn!("Wheel canvas has no 2d context");
                    }
                }
                None => log::debug!("Wheel canvas not mounted yet"),
            }
            || ()
        });
    }

    html! {
        <canvas ref={canvas_ref} width="320" height="320" class="w-72 h-72 sm:w-80 sm:h-80 mx-auto" />
    }
}
