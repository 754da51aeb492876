//! Status pane - game state, notices and new-game controls.

use gpui::{App, Entity, div, prelude::*, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::PieceColor;
use crate::models::GameModel;
use crate::ui::display::status_display;
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, PANEL_BG, STATUS_BG, TEXT_ALERT, TEXT_GOOD, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

fn new_game_button(
    id: &'static str,
    label: &'static str,
    player: PieceColor,
    model: &Entity<GameModel>,
) -> Button {
    let model = model.clone();
    Button::new(id)
        .label(label)
        .primary()
        .compact()
        .on_click(move |_, _, cx| {
            model.update(cx, |game, cx| {
                game.new_game(player);
                cx.notify();
            });
        })
}

/// Render the status pane.
/// Shows whose turn it is, the last cue and any notice from the server.
pub fn render_status_pane(model: &Entity<GameModel>, cx: &App) -> impl IntoElement {
    let game = model.read(cx);
    let status = status_display(game.session(), game.cues());

    let headline_color = if status.alert {
        TEXT_ALERT
    } else if status.busy {
        TEXT_SECONDARY
    } else {
        TEXT_GOOD
    };

    let model_retry = model.clone();
    let retry_button = Button::new("retry-bot")
        .label("Retry bot move")
        .danger()
        .compact()
        .on_click(move |_, _, cx| {
            model_retry.update(cx, |game, cx| {
                game.retry_bot_move();
                cx.notify();
            });
        });

    let status_box = div()
        .flex_shrink_0()
        .flex()
        .flex_col()
        .gap_2()
        .p_4()
        .bg(rgb(STATUS_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .child(
            div()
                .text_color(rgb(headline_color))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child(status.headline.clone()),
        )
        .child(
            div()
                .text_xs()
                .text_color(rgb(TEXT_SECONDARY))
                .child(format!(
                    "You play {} · bot depth {}",
                    status.player.name(),
                    status.depth
                )),
        )
        .when(status.loading_moves, |el| {
            el.child(
                div()
                    .text_xs()
                    .text_color(rgb(TEXT_SECONDARY))
                    .child("Loading moves..."),
            )
        })
        .when_some(status.notice.clone(), |el, notice| {
            el.child(div().text_sm().text_color(rgb(TEXT_ALERT)).child(notice))
        })
        .when_some(status.last_cue, |el, cue| {
            el.child(
                div()
                    .text_xs()
                    .text_color(rgb(TEXT_SECONDARY))
                    .child(format!("cue: {}", cue)),
            )
        })
        .when(status.can_retry_bot, |el| el.child(retry_button));

    let controls = div()
        .flex_shrink_0()
        .flex()
        .gap_2()
        .child(new_game_button(
            "new-game-white",
            "Play White",
            PieceColor::White,
            model,
        ))
        .child(new_game_button(
            "new-game-black",
            "Play Black",
            PieceColor::Black,
            model,
        ));

    div()
        .size_full()
        .flex()
        .flex_col()
        .gap_4()
        .bg(rgb(PANEL_BG))
        .p(gpui::px(BOARD_PADDING))
        .child(
            div()
                .text_color(rgb(TEXT_PRIMARY))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child("Game"),
        )
        .child(controls)
        .child(status_box)
}
