use std::fmt::Write;

use sweeper_core::*;

/// Draws a snapshot as a text grid with a header line.
///
/// `#` is a covered cell, `.` an open cell without neighbors, `*` a mine (detonated or highlighted).
pub(crate) fn render(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();
    let status = match snapshot.outcome {
        GameOutcome::InProgress => "playing",
        GameOutcome::Won => "won",
        GameOutcome::Lost => "lost",
    };
    let _ = writeln!(out, "score: {}  [{}]", snapshot.score, status);

    let _ = write!(out, "    ");
    for x in 0..snapshot.size {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');

    for y in 0..snapshot.size {
        let _ = write!(out, "{:>3} ", y);
        for x in 0..snapshot.size {
            let _ = write!(out, "{:>3}", glyph(snapshot, (x, y)));
        }
        out.push('\n');
    }
    out
}

/// Footer shown once a game has ended, won or lost, listing the mines that stayed covered.
pub(crate) fn game_over(remaining_mines: &[Coord2]) -> String {
    let mut out = String::new();
    if !remaining_mines.is_empty() {
        let _ = writeln!(out, "mines: {:?}", remaining_mines);
    }
    out.push_str("r to play again, q to quit\n");
    out
}

fn glyph(snapshot: &BoardSnapshot, coords: Coord2) -> char {
    if snapshot.shows_mine_at(coords) {
        return '*';
    }
    match snapshot.cell_at(coords) {
        Some(Cell::Revealed(0)) => '.',
        Some(Cell::Revealed(count)) => char::from_digit(count.into(), 10).unwrap_or('?'),
        Some(Cell::Exploded) => '*',
        Some(Cell::Hidden) | None => '#',
    }
}
