mod board_view;
mod status_pane;

pub use board_view::ChessBoardView;
pub use status_pane::render_status_pane;
