use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::frame::ScrollSample;

pub const STICKER_SIZE: f64 = 72.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StickerState {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub dragging: bool,
}

/// Draggable decorations, kept inside the viewport at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerBoard {
    stickers: Vec<StickerState>,
    grab_offset: (f64, f64),
    viewport: (f64, f64),
}

impl StickerBoard {
    pub fn new(count: usize, viewport: (f64, f64)) -> Self {
        let mut board = Self {
            stickers: Vec::new(),
            grab_offset: (0.0, 0.0),
            viewport,
        };
        board.stickers = (0..count).map(|id| board.rest_position(id, count)).collect();
        board
    }

    pub fn stickers(&self) -> &[StickerState] {
        &self.stickers
    }

    /// Default layout: spread along the lower right of the viewport.
    fn rest_position(&self, id: usize, count: usize) -> StickerState {
        let (width, height) = self.viewport;
        let column = (id as f64 + 1.0) / (count as f64 + 1.0);
        let x = width * (0.5 + 0.45 * column) - STICKER_SIZE / 2.0;
        let y = height * (0.55 + 0.1 * (id % 2) as f64);
        let (x, y) = self.clamp((x, y));
        StickerState { id, x, y, dragging: false }
    }

    fn clamp(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let max_x = (self.viewport.0 - STICKER_SIZE).max(0.0);
        let max_y = (self.viewport.1 - STICKER_SIZE).max(0.0);
        (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
    }

    pub fn begin_drag(&mut self, id: usize, pointer: (f64, f64)) {
        if let Some(sticker) = self.stickers.iter_mut().find(|s| s.id == id) {
            sticker.dragging = true;
            self.grab_offset = (pointer.0 - sticker.x, pointer.1 - sticker.y);
        }
    }

    /// Returns true when a sticker moved.
    pub fn drag_to(&mut self, pointer: (f64, f64)) -> bool {
        let wanted = (pointer.0 - self.grab_offset.0, pointer.1 - self.grab_offset.1);
        let (x, y) = self.clamp(wanted);
        match self.stickers.iter_mut().find(|s| s.dragging) {
            Some(sticker) => {
                sticker.x = x;
                sticker.y = y;
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        for sticker in &mut self.stickers {
            sticker.dragging = false;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.stickers.iter().any(|s| s.dragging)
    }

    /// Viewport changed: every sticker goes back to its layout position.
    pub fn reset(&mut self, viewport: (f64, f64)) {
        self.viewport = viewport;
        self.grab_offset = (0.0, 0.0);
        let count = self.stickers.len();
        self.stickers = (0..count).map(|id| self.rest_position(id, count)).collect();
    }
}

pub enum StickerAction {
    Grab { id: usize, pointer: (f64, f64) },
    Move((f64, f64)),
    Release,
    Resize((f64, f64)),
}

impl Reducible for StickerBoard {
    type Action = StickerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            StickerAction::Grab { id, pointer } => {
                next.begin_drag(id, pointer);
                true
            }
            StickerAction::Move(pointer) => next.drag_to(pointer),
            StickerAction::Release => {
                let was_dragging = next.is_dragging();
                next.end_drag();
                was_dragging
            }
            StickerAction::Resize(viewport) => {
                next.reset(viewport);
                true
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn viewport() -> (f64, f64) {
    ScrollSample::read()
        .map(|s| (s.viewport_width, s.viewport_height))
        .unwrap_or((1280.0, 800.0))
}

#[derive(Properties, PartialEq)]
pub struct StickersProps {
    pub glyphs: Vec<String>,
}

/// Emoji stickers that can be dragged around the viewport.
#[function_component(Stickers)]
pub fn stickers(props: &StickersProps) -> Html {
    let count = props.glyphs.len();
    let board = use_reducer(|| StickerBoard::new(count, viewport()));

    {
        let board = board.dispatcher();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            board.dispatch(StickerAction::Move((e.client_x() as f64, e.client_y() as f64)));
        });
    }
    {
        let board = board.dispatcher();
        use_event_with_window("mouseup", move |_: MouseEvent| {
            board.dispatch(StickerAction::Release);
        });
    }
    {
        let board = board.dispatcher();
        use_event_with_window("resize", move |_: web_sys::Event| {
            board.dispatch(StickerAction::Resize(viewport()));
        });
    }

    html! {
        <div class="sticker-layer">
            { for board.stickers().iter().zip(props.glyphs.iter()).map(|(sticker, glyph)| {
                let onmousedown = {
                    let board = board.dispatcher();
                    let id = sticker.id;
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        board.dispatch(StickerAction::Grab {
                            id,
                            pointer: (e.client_x() as f64, e.client_y() as f64),
                        });
                    })
                };
                html! {
                    <span
                        key={sticker.id}
                        class={classes!("sticker", "cursor-pointer", sticker.dragging.then(|| "dragging"))}
                        style={format!("left: {:.1}px; top: {:.1}px;", sticker.x, sticker.y)}
                        {onmousedown}
                    >
                        { glyph }
                    </span>
                }
            }) }
            <style>
                {r#"
                .sticker-layer {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 30;
                }
                .sticker {
                    position: fixed;
                    width: 72px;
                    height: 72px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3rem;
                    pointer-events: auto;
                    user-select: none;
                    transition: transform 0.2s ease;
                }
                .sticker.dragging {
                    transform: scale(1.15) rotate(-6deg);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: (f64, f64) = (1000.0, 800.0);

    #[test]
    fn starts_inside_viewport() {
        let board = StickerBoard::new(4, VIEWPORT);
        assert_eq!(board.stickers().len(), 4);
        for sticker in board.stickers() {
            assert!(sticker.x >= 0.0 && sticker.x <= VIEWPORT.0 - STICKER_SIZE);
            assert!(sticker.y >= 0.0 && sticker.y <= VIEWPORT.1 - STICKER_SIZE);
            assert!(!sticker.dragging);
        }
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let mut board = StickerBoard::new(2, VIEWPORT);
        let start = board.stickers()[1].clone();
        board.begin_drag(1, (start.x + 10.0, start.y + 5.0));
        assert!(board.drag_to((start.x + 110.0, start.y - 45.0)));
        let moved = &board.stickers()[1];
        assert!((moved.x - (start.x + 100.0)).abs() < 1e-9);
        assert!((moved.y - (start.y - 50.0)).abs() < 1e-9);
        assert_eq!(board.stickers()[0].x, StickerBoard::new(2, VIEWPORT).stickers()[0].x);
    }

    #[test]
    fn drag_is_clamped_to_viewport() {
        let mut board = StickerBoard::new(1, VIEWPORT);
        let start = board.stickers()[0].clone();
        board.begin_drag(0, (start.x, start.y));
        board.drag_to((-500.0, 5_000.0));
        let sticker = &board.stickers()[0];
        assert_eq!(sticker.x, 0.0);
        assert_eq!(sticker.y, VIEWPORT.1 - STICKER_SIZE);
    }

    #[test]
    fn moves_nothing_without_a_drag() {
        let mut board = StickerBoard::new(1, VIEWPORT);
        assert!(!board.drag_to((10.0, 10.0)));
        board.begin_drag(0, (0.0, 0.0));
        board.end_drag();
        assert!(!board.is_dragging());
        assert!(!board.drag_to((10.0, 10.0)));
    }

    #[test]
    fn resize_resets_positions() {
        let mut board = StickerBoard::new(3, VIEWPORT);
        board.begin_drag(0, (0.0, 0.0));
        board.drag_to((5.0, 5.0));
        board.reset((400.0, 300.0));
        assert_eq!(board, StickerBoard::new(3, (400.0, 300.0)));
    }

    #[test]
    fn release_keeps_the_last_move() {
        let board = Rc::new(StickerBoard::new(1, VIEWPORT));
        let start = board.stickers()[0].clone();
        let board = board.reduce(StickerAction::Grab { id: 0, pointer: (start.x, start.y) });
        let board = board.reduce(StickerAction::Move((start.x - 40.0, start.y - 20.0)));
        let board = board.reduce(StickerAction::Move((start.x - 80.0, start.y - 60.0)));
        let board = board.reduce(StickerAction::Release);

        let sticker = &board.stickers()[0];
        assert!(!sticker.dragging);
        assert!((sticker.x - (start.x - 80.0)).abs() < 1e-9);
        assert!((sticker.y - (start.y - 60.0)).abs() < 1e-9);
    }

    #[test]
    fn idle_moves_keep_the_same_board() {
        let board = Rc::new(StickerBoard::new(2, VIEWPORT));
        let after = board.clone().reduce(StickerAction::Move((10.0, 10.0)));
        assert!(Rc::ptr_eq(&board, &after));
        let after = board.clone().reduce(StickerAction::Release);
        assert!(Rc::ptr_eq(&board, &after));
    }
}
