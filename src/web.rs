//! Browser bindings: canvas drawing, DOM overlays, input listeners and the
//! interval timer. Everything here is thin glue around [`Session`].
use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Window, window};

use crate::color::Rgb;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::geometry::Vector2;
use crate::render::{Gradient, RenderSink, ShapeStyle};
use crate::scheduler::{Scheduler, TickFn};
use crate::session::{CounterText, Presentation, Session};

/// Class toggled on the win panel to hide it.
const INACTIVE_CLASS: &str = "inactive";

// --- Render sink -------------------------------------------------------------

pub struct CanvasSink {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSink {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl RenderSink for CanvasSink {
    fn surface_size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn fill_gradient_rect(&mut self, width: f64, height: f64, gradient: &Gradient) {
        let canvas_gradient = match gradient {
            Gradient::Linear { from, to, .. } => {
                self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y)
            }
            Gradient::Radial {
                center,
                inner_radius,
                outer_radius,
                ..
            } => match self.ctx.create_radial_gradient(
                center.x,
                center.y,
                *inner_radius,
                center.x,
                center.y,
                *outer_radius,
            ) {
                Ok(g) => g,
                Err(e) => {
                    log::warn!("radial gradient failed: {:?}", e);
                    return;
                }
            },
        };
        for stop in gradient.stops() {
            if let Err(e) =
                canvas_gradient.add_color_stop(stop.offset as f32, &stop.color.to_css(stop.alpha))
            {
                log::warn!("color stop {} rejected: {:?}", stop.offset, e);
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&canvas_gradient);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn draw_polygon(&mut self, points: &[Vector2], style: &ShapeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_line_width(style.line_width);
        self.ctx.set_stroke_style_str(&style.stroke.to_css(1.0));
        self.ctx.set_fill_style_str(&style.fill.to_css(1.0));
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.ctx.stroke();
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vector2, radius: f64, line_width: f64, color: Rgb) {
        self.ctx.set_line_width(line_width);
        self.ctx.set_stroke_style_str(&color.to_css(1.0));
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius.max(0.0), 0.0, std::f64::consts::TAU)
            .ok();
        self.ctx.stroke();
    }
}

// --- DOM overlays ------------------------------------------------------------

pub struct DomPresentation {
    counter: Element,
    win_panel: Element,
    canvas: HtmlCanvasElement,
}

impl Presentation for DomPresentation {
    fn show_win(&mut self) {
        if let Err(e) = self.win_panel.class_list().remove_1(INACTIVE_CLASS) {
            log::warn!("could not show win panel: {:?}", e);
        }
    }

    fn hide_win(&mut self) {
        if let Err(e) = self.win_panel.class_list().add_1(INACTIVE_CLASS) {
            log::warn!("could not hide win panel: {:?}", e);
        }
    }

    fn set_counter(&mut self, text: CounterText) {
        self.counter.set_text_content(Some(&text.to_string()));
    }

    fn set_pointer_cursor(&mut self, pointer: bool) {
        let cursor = if pointer { "pointer" } else { "default" };
        self.canvas.style().set_property("cursor", cursor).ok();
    }
}

// --- Interval timer ----------------------------------------------------------

/// `setInterval` tick source; the interval is cleared when dropped.
pub struct IntervalScheduler {
    window: Window,
    handle: Option<i32>,
    _callback: Option<Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            handle: None,
            _callback: None,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, delay_ms: i32, tick: TickFn) -> Result<(), GameError> {
        if self.handle.is_some() {
            return Err(GameError::AlreadyStarted);
        }
        let closure = Closure::wrap(tick);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )?;
        self.handle = Some(handle);
        self._callback = Some(closure);
        Ok(())
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }
}

// --- Session wiring ----------------------------------------------------------

struct WebGame {
    session: Session<DomPresentation>,
    sink: CanvasSink,
    _scheduler: IntervalScheduler,
}

thread_local! {
    static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
}

fn with_game<R>(f: impl FnOnce(&mut WebGame) -> R) -> Option<R> {
    GAME.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn element_by_id(doc: &Document, id: &str) -> Result<Element, GameError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| GameError::MissingElement(id.to_string()))
}

/// Stretch the canvas over the whole window, minus its border.
fn resize_canvas(win: &Window, canvas: &HtmlCanvasElement, border_px: u32) {
    let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let border = border_px as f64 * 2.0;
    canvas.set_width((size(win.inner_width()) - border).max(0.0) as u32);
    canvas.set_height((size(win.inner_height()) - border).max(0.0) as u32);
}

fn browser_seed(win: &Window) -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    win.performance().map(|p| p.now().to_bits()).unwrap_or(0)
}

/// Look up the page elements, create the session and start ticking.
pub fn start(config: GameConfig) -> Result<(), GameError> {
    config.validate()?;
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    let canvas: HtmlCanvasElement = element_by_id(&doc, &config.canvas_id)?
        .dyn_into()
        .map_err(|_| GameError::WrongElementType {
            id: config.canvas_id.clone(),
            expected: "canvas",
        })?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext2d)?
        .dyn_into()
        .map_err(|_| GameError::NoContext2d)?;
    let counter = element_by_id(&doc, &config.counter_id)?;
    let win_panel = element_by_id(&doc, &config.win_panel_id)?;
    if GAME.with(|cell| cell.borrow().is_some()) {
        return Err(GameError::AlreadyStarted);
    }
    canvas.style().set_property(
        "border",
        &format!(
            "{}px solid {}",
            config.canvas_border_px, config.canvas_border_color
        ),
    )?;
    resize_canvas(&win, &canvas, config.canvas_border_px);

    let presentation = DomPresentation {
        counter,
        win_panel,
        canvas: canvas.clone(),
    };
    let session = Session::new(config.clone(), presentation, browser_seed(&win))?;
    // Listeners and the tick closure are no-ops until GAME is stored below, so a
    // failure here leaves nothing running.
    install_listeners(&win, &doc, &canvas, &config)?;

    let mut scheduler = IntervalScheduler::new(win.clone());
    scheduler.start(
        config.tick_delay_ms(),
        Box::new(|| {
            with_game(|game| game.session.tick(&mut game.sink));
        }),
    )?;

    GAME.with(|cell| {
        cell.replace(Some(WebGame {
            session,
            sink: CanvasSink::new(canvas.clone(), ctx),
            _scheduler: scheduler,
        }))
    });
    log::info!(
        "find the stars started ({} ticks/s, {}s half period)",
        config.calls_per_second,
        config.half_period_seconds
    );
    Ok(())
}

fn install_listeners(
    win: &Window,
    doc: &Document,
    canvas: &HtmlCanvasElement,
    config: &GameConfig,
) -> Result<(), GameError> {
    // Click -> star hit-test
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let point = Vector2::new(evt.client_x() as f64, evt.client_y() as f64);
            with_game(|game| game.session.click(point));
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Hover -> cursor
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let point = Vector2::new(evt.client_x() as f64, evt.client_y() as f64);
            with_game(|game| game.session.hover(point));
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Restart key
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let key = evt.key();
            with_game(|game| game.session.handle_key(&key));
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Restart button (optional)
    if let Some(button) = doc.get_element_by_id(&config.restart_button_id) {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            restart();
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        log::debug!("no #{} element, restart via key only", config.restart_button_id);
    }
    // Window resize -> refit canvas
    {
        let resize_win = win.clone();
        let resize_canvas_el = canvas.clone();
        let border_px = config.canvas_border_px;
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            resize_canvas(&resize_win, &resize_canvas_el, border_px);
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Restart after a win; no-op otherwise. Returns whether the restart was accepted.
pub fn restart() -> bool {
    with_game(|game| game.session.restart()).unwrap_or(false)
}
