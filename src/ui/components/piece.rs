//! Piece rendering component.

use crate::domain::{Piece, PieceColor, PieceKind};
use gpui::{div, img, prelude::*, px};

/// Asset path of a piece's SVG
pub fn piece_svg_path(piece: Piece) -> &'static str {
    match (piece.kind, piece.color) {
        (PieceKind::Pawn, PieceColor::White) => "assets/pawn-white.svg",
        (PieceKind::Pawn, PieceColor::Black) => "assets/pawn-black.svg",
        (PieceKind::Rook, PieceColor::White) => "assets/rook-white.svg",
        (PieceKind::Rook, PieceColor::Black) => "assets/rook-black.svg",
        (PieceKind::Knight, PieceColor::White) => "assets/knight-white.svg",
        (PieceKind::Knight, PieceColor::Black) => "assets/knight-black.svg",
        (PieceKind::Bishop, PieceColor::White) => "assets/bishop-white.svg",
        (PieceKind::Bishop, PieceColor::Black) => "assets/bishop-black.svg",
        (PieceKind::Queen, PieceColor::White) => "assets/queen-white.svg",
        (PieceKind::Queen, PieceColor::Black) => "assets/queen-black.svg",
        (PieceKind::King, PieceColor::White) => "assets/king-white.svg",
        (PieceKind::King, PieceColor::Black) => "assets/king-black.svg",
    }
}

/// Render a chess piece centered in its container
pub fn render_piece(piece: Piece, piece_size: f32) -> impl IntoElement {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(img(piece_svg_path(piece)).size(px(piece_size)))
}
