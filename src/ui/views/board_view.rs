//! Chess board view - the main board with click-to-select, click-to-move input.

use gpui::{
    App, Context, Entity, MouseButton, MouseDownEvent, Pixels, Subscription, Window, canvas, div,
    prelude::*, px, rgb, rgba,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::resizable::{h_resizable, resizable_panel};

use crate::domain::{InteractionState, PromotionPiece};
use crate::models::GameModel;
use crate::ui::components::render_square;
use crate::ui::display::board_display;
use crate::ui::theme::{
    BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, OVERLAY_BG, PANEL_BG, TEXT_PRIMARY,
};
use crate::ui::views::render_status_pane;

/// The main chess board view that observes a GameModel
pub struct ChessBoardView {
    model: Entity<GameModel>,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(model: Entity<GameModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            _subscription,
        }
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model = self.model.clone();
        let model_down = model.clone();
        let model_measure = model.clone();

        let game = self.model.read(cx);
        let layout = game.layout();
        let squares = board_display(game.session());
        let choosing_promotion =
            game.session().state() == InteractionState::AwaitingPromotionChoice;

        // Board element with fixed size - always maintains 1:1 aspect ratio
        let board_total_size = layout.board_total_size();
        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children(squares.chunks(8).map(|rank| {
                div()
                    .flex()
                    .flex_shrink_0()
                    .children(rank.iter().map(|view| render_square(*view, layout)))
            }));

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            .when(choosing_promotion, |el| {
                el.child(render_promotion_chooser(&model, board_total_size))
            })
            // Mouse down: hand the clicked square to the session
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |game, cx| {
                        let pos = ev.position;
                        if let Some((row, col)) =
                            game.layout().pos_to_square(pos.x.into(), pos.y.into())
                        {
                            game.click(row, col);
                            cx.notify();
                        }
                    });
                },
            );

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                model_measure.update(cx, |game, cx| {
                    if game.panel_size != bounds.size {
                        game.panel_size = bounds.size;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        // Wrap board panel content with measuring canvas
        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        let status_panel_content = render_status_pane(&model, cx);

        // Main resizable layout
        div().size_full().child(
            h_resizable("chess-layout")
                .child(
                    resizable_panel()
                        .size(px(INITIAL_LEFT_PANEL))
                        .size_range(px(320.)..px(1200.))
                        .child(board_panel_with_measure),
                )
                .child(
                    resizable_panel()
                        .size(px(INITIAL_RIGHT_PANEL))
                        .size_range(px(200.)..Pixels::MAX)
                        .child(status_panel_content),
                ),
        )
    }
}

fn promotion_button_id(piece: PromotionPiece) -> &'static str {
    match piece {
        PromotionPiece::Queen => "promote-queen",
        PromotionPiece::Rook => "promote-rook",
        PromotionPiece::Bishop => "promote-bishop",
        PromotionPiece::Knight => "promote-knight",
    }
}

fn promotion_label(piece: PromotionPiece) -> &'static str {
    match piece {
        PromotionPiece::Queen => "Queen",
        PromotionPiece::Rook => "Rook",
        PromotionPiece::Bishop => "Bishop",
        PromotionPiece::Knight => "Knight",
    }
}

/// Modal chooser covering the board while a promotion is pending
fn render_promotion_chooser(model: &Entity<GameModel>, board_size: f32) -> impl IntoElement {
    let model_cancel = model.clone();
    let cancel = Button::new("promote-cancel")
        .label("Cancel")
        .danger()
        .compact()
        .on_click(move |_, _, cx: &mut App| {
            model_cancel.update(cx, |game, cx| {
                game.cancel_promotion();
                cx.notify();
            });
        });

    div()
        .absolute()
        .top(px(BOARD_PADDING))
        .left(px(BOARD_PADDING))
        .size(px(board_size))
        .bg(rgba(OVERLAY_BG))
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap_2()
        .child(
            div()
                .text_color(rgb(TEXT_PRIMARY))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child("Promote to"),
        )
        .child(
            div()
                .flex()
                .gap_2()
                .children(PromotionPiece::ALL.into_iter().map(|piece| {
                    let model = model.clone();
                    Button::new(promotion_button_id(piece))
                        .label(promotion_label(piece))
                        .primary()
                        .on_click(move |_, _, cx: &mut App| {
                            model.update(cx, |game, cx| {
                                game.choose_promotion(piece);
                                cx.notify();
                            });
                        })
                })),
        )
        .child(cancel)
}
