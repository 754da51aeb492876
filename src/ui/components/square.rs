//! Square rendering component.

use crate::ui::BoardLayout;
use crate::ui::components::render_piece;
use crate::ui::theme::{
    CHECK_SQUARE, PROMOTION_MARK, SELECTED_SQUARE, TARGET_MARK, square_color,
};
use crate::ui::view_models::{SquareView, TargetMark};
use gpui::{div, prelude::*, px, rgb};

/// Render a single board square with its piece and highlights
pub fn render_square(view: SquareView, layout: BoardLayout) -> impl IntoElement {
    let background = if view.in_check {
        rgb(CHECK_SQUARE)
    } else if view.selected {
        rgb(SELECTED_SQUARE)
    } else {
        square_color(view.row, view.col)
    };
    let square_size = layout.square_size();
    let target_size = layout.target_size();

    div()
        .relative()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(background)
        .flex()
        .items_center()
        .justify_center()
        .when_some(view.piece, |el, p| {
            el.child(render_piece(p, layout.piece_size()))
        })
        .when_some(view.target, |el, mark| {
            // destination marker drawn over the piece (captures included)
            let marker = match mark {
                TargetMark::Move => div().size(px(target_size)).bg(rgb(TARGET_MARK)),
                TargetMark::Promotion => div()
                    .size(px(target_size))
                    .border_2()
                    .border_color(rgb(PROMOTION_MARK)),
            };
            el.child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(marker.rounded_full().opacity(0.7)),
            )
        })
}
