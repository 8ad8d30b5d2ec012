use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::color::Hsl;
use crate::animation::easing::Easing;

/// Elements whose clicks produce sparks.
pub const SPARK_SELECTOR: &str = "button, a, [role=\"button\"], .cursor-pointer, .cursor-hover, [onclick], input[type=\"button\"], input[type=\"submit\"], .work-card";

const RESIZE_DEBOUNCE_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct SparkConfig {
    pub base: Hsl,
    pub size: f64,
    pub radius: f64,
    pub count: usize,
    pub duration_ms: f64,
    pub easing: Easing,
    pub extra_scale: f64,
}

impl SparkConfig {
    pub fn with_color(base: Hsl) -> Self {
        Self {
            base,
            size: 10.0,
            radius: 15.0,
            count: 8,
            duration_ms: 400.0,
            easing: Easing::EaseOut,
            extra_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub started_at: f64,
    pub hue: f64,
}

/// One line to stroke this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkSegment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: String,
}

/// Live sparks plus the rules that age them out.
#[derive(Debug, Clone)]
pub struct SparkField {
    config: SparkConfig,
    sparks: Vec<Spark>,
}

impl SparkField {
    pub fn new(config: SparkConfig) -> Self {
        Self { config, sparks: Vec::new() }
    }

    pub fn live(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn is_idle(&self) -> bool {
        self.sparks.is_empty()
    }

    /// Spawns `count` sparks evenly spaced around `(x, y)`. `next_hue` yields
    /// a value in `[0, 1)` per spark.
    pub fn burst(&mut self, x: f64, y: f64, now: f64, mut next_hue: impl FnMut() -> f64) {
        let count = self.config.count;
        self.sparks.extend((0..count).map(|i| Spark {
            x,
            y,
            angle: 2.0 * PI * i as f64 / count as f64,
            started_at: now,
            hue: (next_hue() * 360.0).floor(),
        }));
    }

    /// Drops expired sparks and returns the segments of the live ones.
    pub fn frame(&mut self, now: f64) -> Vec<SparkSegment> {
        let config = &self.config;
        self.sparks.retain(|spark| now - spark.started_at < config.duration_ms);
        self.sparks
            .iter()
            .map(|spark| {
                let elapsed = (now - spark.started_at).max(0.0);
                let eased = config.easing.apply(elapsed / config.duration_ms);
                let distance = eased * config.radius * config.extra_scale;
                let length = config.size * (1.0 - eased);
                let (sin, cos) = spark.angle.sin_cos();
                SparkSegment {
                    from: (spark.x + distance * cos, spark.y + distance * sin),
                    to: (
                        spark.x + (distance + length) * cos,
                        spark.y + (distance + length) * sin,
                    ),
                    color: config.base.css_with_hue(spark.hue),
                }
            })
            .collect()
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0) as u32;
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0) as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
}

#[allow(deprecated)]
fn draw(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, segments: &[SparkSegment]) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.set_line_width(2.0);
    for segment in segments {
        ctx.set_stroke_style(&JsValue::from_str(&segment.color));
        ctx.begin_path();
        ctx.move_to(segment.from.0, segment.from.1);
        ctx.line_to(segment.to.0, segment.to.1);
        ctx.stroke();
    }
}

struct SparkLoop {
    field: SparkField,
    frame: Option<AnimationFrame>,
}

/// Keeps redrawing until every spark has expired, then stops asking for frames.
fn run_frames(state: Rc<RefCell<SparkLoop>>, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) {
    let next_state = state.clone();
    let handle = request_animation_frame(move |now| {
        let (segments, idle) = {
            let mut spark_loop = next_state.borrow_mut();
            let segments = spark_loop.field.frame(now);
            (segments, spark_loop.field.is_idle())
        };
        draw(&ctx, &canvas, &segments);
        if idle {
            next_state.borrow_mut().frame = None;
        } else {
            run_frames(next_state, canvas, ctx);
        }
    });
    state.borrow_mut().frame = Some(handle);
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
pub struct ClickSparkProps {
    pub config: SparkConfig,
    #[prop_or_default]
    pub children: Children,
}

/// Full-viewport canvas that bursts sparks on clicks of interactive elements.
#[function_component(ClickSpark)]
pub fn click_spark(props: &ClickSparkProps) -> Html {
    let canvas_ref = use_node_ref();
    let state = {
        let config = props.config.clone();
        use_mut_ref(move || SparkLoop {
            field: SparkField::new(config),
            frame: None,
        })
    };

    // Size the canvas now and after resizes settle.
    let resize_timer = use_mut_ref(|| None::<Timeout>);
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    fit_to_viewport(&canvas);
                }
                || ()
            },
            (),
        );
    }
    {
        let canvas_ref = canvas_ref.clone();
        let resize_timer = resize_timer.clone();
        use_event_with_window("resize", move |_: web_sys::Event| {
            let canvas_ref = canvas_ref.clone();
            *resize_timer.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    fit_to_viewport(&canvas);
                }
            }));
        });
    }

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let mut spark_loop = state.borrow_mut();
                    spark_loop.frame = None;
                    resize_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onclick = {
        let canvas_ref = canvas_ref.clone();
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if target.tag_name().eq_ignore_ascii_case("canvas") {
                return;
            }
            if !matches!(target.closest(SPARK_SELECTOR), Ok(Some(_))) {
                return;
            }
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let Some(ctx) = context_2d(&canvas) else {
                log::debug!("Canvas 2d context unavailable, skipping sparks");
                return;
            };
            let rect = canvas.get_bounding_client_rect();
            let x = e.client_x() as f64 - rect.left();
            let y = e.client_y() as f64 - rect.top();

            let start_loop = {
                let mut spark_loop = state.borrow_mut();
                spark_loop
                    .field
                    .burst(x, y, now_ms(), web_sys::js_sys::Math::random);
                spark_loop.frame.is_none()
            };
            if start_loop {
                run_frames(state.clone(), canvas, ctx);
            }
        })
    };

    html! {
        <div class="click-spark" {onclick}>
            <canvas ref={canvas_ref} class="click-spark-canvas"></canvas>
            { for props.children.iter() }
            <style>
                {r#"
                .click-spark {
                    position: relative;
                    min-height: 100vh;
                }
                .click-spark-canvas {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 9999;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(count: usize) -> SparkField {
        let mut config = SparkConfig::with_color(Hsl::from_hex("#A8FFDC").unwrap());
        config.count = count;
        SparkField::new(config)
    }

    #[test]
    fn burst_spawns_evenly_spaced_sparks() {
        let mut field = field(8);
        field.burst(120.0, 80.0, 1_000.0, || 0.5);
        assert_eq!(field.live().len(), 8);
        for (i, spark) in field.live().iter().enumerate() {
            assert!((spark.angle - 2.0 * PI * i as f64 / 8.0).abs() < 1e-12);
            assert_eq!((spark.x, spark.y), (120.0, 80.0));
            assert_eq!(spark.hue, 180.0);
        }
    }

    #[test]
    fn sparks_expire_after_duration() {
        let mut field = field(8);
        field.burst(0.0, 0.0, 1_000.0, || 0.0);
        assert_eq!(field.frame(1_200.0).len(), 8);
        assert_eq!(field.frame(1_399.0).len(), 8);
        assert!(field.frame(1_401.0).is_empty());
        assert!(field.is_idle());
    }

    #[test]
    fn segments_move_outward_and_shrink() {
        let mut field = field(1);
        field.burst(0.0, 0.0, 0.0, || 0.0);
        let start = field.frame(0.0);
        assert_eq!(start[0].from, (0.0, 0.0));
        assert!((start[0].to.0 - 10.0).abs() < 1e-9);

        let later = field.frame(200.0);
        // ease-out at t = 0.5 is 0.75
        assert!((later[0].from.0 - 0.75 * 15.0).abs() < 1e-9);
        assert!((later[0].to.0 - later[0].from.0 - 0.25 * 10.0).abs() < 1e-9);
    }

    #[test]
    fn overlapping_bursts_age_independently() {
        let mut field = field(4);
        field.burst(0.0, 0.0, 0.0, || 0.1);
        field.burst(50.0, 50.0, 300.0, || 0.9);
        assert_eq!(field.frame(350.0).len(), 8);
        assert_eq!(field.frame(450.0).len(), 4);
        assert!(field.live().iter().all(|s| s.started_at == 300.0));
    }
}
