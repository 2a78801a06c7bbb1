//! Event dispatch and per-frame scene composition.
//!
//! The controller owns all application state: the move history (and through it
//! the rules engine), the selection, the layer toggles and the layout. Every
//! input event is handled synchronously and reports an `EventOutcome`; scenes
//! are composed from scratch after each one.

use std::fmt;

use crate::chess_errors::VisualizerError;
use crate::game_state::chess_types::{Side, Square};
use crate::moves::move_descriptions::ChessMove;
use crate::render::scene_renderer::SceneRenderer;
use crate::rules_engine::rules_engine_trait::RulesEngine;
use crate::visualizer::attack_map::{compute_attack_map, heat_intensity, AttackMap};
use crate::visualizer::board_layout::{BoardLayout, ButtonAction};
use crate::visualizer::display_toggles::DisplayToggles;
use crate::visualizer::move_history::MoveHistory;
use crate::visualizer::scene::{
    heat_color, BoardSquare, ButtonSpec, Overlay, OverlayKind, PiecePlacement, Scene, BUTTON_TEXT,
    DARK_SQUARE, HIGHLIGHT_ALPHA, HISTORY_BUTTON, LIGHT_SQUARE, REDO_LABEL, SELECTION_HIGHLIGHT,
    TARGET_HIGHLIGHT, TOGGLE_BUTTON, UNDO_LABEL,
};
use crate::visualizer::selection::SelectionGate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { x: i32, y: i32 },
    PointerUp { x: i32, y: i32 },
    Quit,
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::PointerDown { x, y } => write!(f, "pointer_down x={x} y={y}"),
            InputEvent::PointerUp { x, y } => write!(f, "pointer_up x={x} y={y}"),
            InputEvent::Quit => write!(f, "quit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Undone(ChessMove),
    Redone(ChessMove),
    /// New state of the white layer.
    ToggledWhite(bool),
    /// New state of the black layer.
    ToggledBlack(bool),
    Selected(Square),
    MoveApplied(ChessMove),
    /// Release off the board (button strip or outside the canvas); the
    /// selection was dropped.
    DragAborted,
    Rejected(VisualizerError),
    Ignored,
    Quit,
}

impl fmt::Display for EventOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventOutcome::Undone(mv) => write!(f, "undone move={mv}"),
            EventOutcome::Redone(mv) => write!(f, "redone move={mv}"),
            EventOutcome::ToggledWhite(on) => write!(f, "toggled_white show={on}"),
            EventOutcome::ToggledBlack(on) => write!(f, "toggled_black show={on}"),
            EventOutcome::Selected(square) => write!(f, "selected square={square}"),
            EventOutcome::MoveApplied(mv) => write!(f, "applied move={mv}"),
            EventOutcome::DragAborted => write!(f, "drag_aborted"),
            EventOutcome::Rejected(err) => write!(f, "rejected reason=\"{err}\""),
            EventOutcome::Ignored => write!(f, "ignored"),
            EventOutcome::Quit => write!(f, "quit"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InteractionController<R> {
    history: MoveHistory<R>,
    selection: SelectionGate,
    toggles: DisplayToggles,
    layout: BoardLayout,
}

impl<R: RulesEngine> InteractionController<R> {
    pub fn new(engine: R) -> Self {
        Self::with_layout(engine, BoardLayout::STANDARD)
    }

    pub fn with_layout(engine: R, layout: BoardLayout) -> Self {
        Self {
            history: MoveHistory::new(engine),
            selection: SelectionGate::default(),
            toggles: DisplayToggles::default(),
            layout,
        }
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory<R> {
        &self.history
    }

    #[inline]
    pub fn engine(&self) -> &R {
        self.history.engine()
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Square> {
        self.selection.selected()
    }

    #[inline]
    pub fn toggles(&self) -> &DisplayToggles {
        &self.toggles
    }

    #[inline]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::Quit => EventOutcome::Quit,
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y),
        }
    }

    fn pointer_down(&mut self, x: i32, y: i32) -> EventOutcome {
        if let Some(action) = self.layout.button_at(x, y) {
            return self.press_button(action);
        }

        let Some(square) = self.layout.square_at(x, y) else {
            return EventOutcome::Ignored;
        };

        match self.selection.select_square(self.history.engine(), square) {
            Ok(square) => EventOutcome::Selected(square),
            Err(err) => EventOutcome::Rejected(err),
        }
    }

    fn press_button(&mut self, action: ButtonAction) -> EventOutcome {
        let result = match action {
            ButtonAction::Undo => self.history.undo().map(EventOutcome::Undone),
            ButtonAction::Redo => self.history.redo().map(EventOutcome::Redone),
            ButtonAction::ToggleWhite => Ok(EventOutcome::ToggledWhite(self.toggles.toggle_white())),
            ButtonAction::ToggleBlack => Ok(EventOutcome::ToggledBlack(self.toggles.toggle_black())),
        };
        result.unwrap_or_else(EventOutcome::Rejected)
    }

    fn pointer_up(&mut self, x: i32, y: i32) -> EventOutcome {
        if self.selection.selected().is_none() {
            return EventOutcome::Ignored;
        }

        let outcome = match self.layout.square_at(x, y) {
            None => EventOutcome::DragAborted,
            Some(target) => match self.selection.candidate_move(self.history.engine(), target) {
                None => EventOutcome::Ignored,
                Some(mv) => match self.history.apply_move(mv) {
                    Ok(()) => EventOutcome::MoveApplied(mv),
                    Err(err) => EventOutcome::Rejected(err),
                },
            },
        };

        self.selection.clear_selection();
        outcome
    }

    /// Attack maps for the current position, white then black.
    pub fn attack_maps(&self) -> [AttackMap; 2] {
        let engine = self.history.engine();
        Side::BOTH.map(|side| compute_attack_map(engine, side))
    }

    pub fn compose_scene(&self) -> Scene {
        let engine = self.history.engine();
        let layout = &self.layout;
        let maps = self.attack_maps();

        let mut scene = Scene {
            width: layout.canvas_width(),
            height: layout.canvas_height(),
            ..Scene::default()
        };

        for square in Square::all() {
            let light = (square.display_row() + square.file()) % 2 == 0;
            scene.squares.push(BoardSquare {
                square,
                rect: layout.square_rect(square),
                color: if light { LIGHT_SQUARE } else { DARK_SQUARE },
            });
        }

        for square in Square::all() {
            for side in Side::BOTH {
                if !self.toggles.shows(side) {
                    continue;
                }
                let count = maps[side.index()].count_on(square);
                let alpha = heat_intensity(count);
                if alpha == 0 {
                    continue;
                }
                scene.overlays.push(Overlay {
                    square,
                    rect: layout.square_rect(square),
                    color: heat_color(side),
                    alpha,
                    kind: OverlayKind::Heat { side, count },
                });
            }
        }

        if let Some(selected) = self.selection.selected() {
            scene.overlays.push(Overlay {
                square: selected,
                rect: layout.square_rect(selected),
                color: SELECTION_HIGHLIGHT,
                alpha: HIGHLIGHT_ALPHA,
                kind: OverlayKind::Selection,
            });
            for target in self.selection.legal_targets_from(engine, selected) {
                scene.overlays.push(Overlay {
                    square: target,
                    rect: layout.square_rect(target),
                    color: TARGET_HIGHLIGHT,
                    alpha: HIGHLIGHT_ALPHA,
                    kind: OverlayKind::Target,
                });
            }
        }

        for square in Square::all() {
            if let Some(piece) = engine.piece_at(square) {
                scene.pieces.push(PiecePlacement {
                    square,
                    rect: layout.square_rect(square),
                    piece,
                });
            }
        }

        for action in ButtonAction::ALL {
            let (label, color, enabled) = match action {
                ButtonAction::Undo => (UNDO_LABEL.to_string(), HISTORY_BUTTON, self.history.can_undo()),
                ButtonAction::Redo => (REDO_LABEL.to_string(), HISTORY_BUTTON, self.history.can_redo()),
                ButtonAction::ToggleWhite => (self.toggles.label_for(Side::White), TOGGLE_BUTTON, true),
                ButtonAction::ToggleBlack => (self.toggles.label_for(Side::Black), TOGGLE_BUTTON, true),
            };
            scene.buttons.push(ButtonSpec {
                action,
                rect: layout.button_rect(action),
                label,
                color,
                text_color: BUTTON_TEXT,
                enabled,
            });
        }

        scene
    }

    /// Compose the current frame and hand it to `renderer`.
    pub fn present_frame<S: SceneRenderer>(&self, renderer: &mut S) -> Result<(), S::Error> {
        renderer.present(&self.compose_scene())
    }
}
