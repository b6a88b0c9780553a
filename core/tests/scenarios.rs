use sweeper_core::*;

fn scripted(
    size: Coord,
    mines: &'static [Coord2],
) -> Session<impl LayoutSource> {
    let config = BoardConfig::new(size, 1).unwrap();
    Session::with_source(config, move |_: &BoardConfig| {
        MineLayout::from_mine_coords(size, mines).unwrap()
    })
}

#[test]
fn single_cell_without_mines_is_won_in_one_click() {
    let mut session = Session::new_game(BoardConfig::new(1, 0).unwrap(), 17);

    assert_eq!(session.board().mine_count(), 0);
    assert_eq!(session.select_cell(0, 0), Ok(RevealOutcome::SafeEmpty));
    assert_eq!(session.board().revealed_coords(), vec![(0, 0)]);
    assert_eq!(session.outcome(), GameOutcome::Won);
    assert_eq!(session.score(), 1);
}

#[test]
fn corner_next_to_center_mine_shows_one() {
    let mut session = scripted(3, &[(1, 1)]);

    assert_eq!(session.select_cell(0, 0), Ok(RevealOutcome::SafeNumber(1)));
    assert_eq!(session.outcome(), GameOutcome::InProgress);
    assert_eq!(session.board().revealed_coords(), vec![(0, 0)]);
}

#[test]
fn clicking_center_mine_loses_and_restart_keeps_score() {
    let mut session = scripted(3, &[(1, 1)]);

    assert_eq!(session.select_cell(1, 1), Ok(RevealOutcome::MineHit));
    assert_eq!(session.outcome(), GameOutcome::Lost);
    assert_eq!(session.board().revealed_coords(), vec![(1, 1)]);
    assert_eq!(session.score(), 0);

    session.restart();

    assert_eq!(session.score(), 0);
    assert_eq!(session.outcome(), GameOutcome::InProgress);
    assert!(session.board().revealed_coords().is_empty());
    assert_eq!(session.board().triggered_mine(), None);
}

#[test]
fn mine_free_board_opens_completely() {
    let mut session = Session::new_game(BoardConfig::new(2, 0).unwrap(), 5);

    assert_eq!(session.select_cell(0, 0), Ok(RevealOutcome::SafeEmpty));
    assert_eq!(session.board().revealed_count(), 4);
    assert_eq!(session.outcome(), GameOutcome::Won);
}

#[test]
fn restart_draws_a_new_layout_and_keeps_score() {
    let mut session = Session::new_game(BoardConfig::new(12, 3).unwrap(), 2024);
    let first_layout = session.board().mine_layout().clone();

    // play until something ends the round
    for (x, y) in iter_coords(12) {
        if session.board().is_finished() {
            break;
        }
        session.select_cell(x, y).unwrap();
    }
    let score = session.score();

    session.restart();

    assert_eq!(session.score(), score);
    assert_eq!(session.board().revealed_count(), 0);
    assert_ne!(session.board().mine_layout(), &first_layout);
}

#[test]
fn nothing_changes_after_game_end() {
    let mut session = scripted(4, &[(0, 0), (3, 3)]);
    session.select_cell(3, 3).unwrap();
    let before = session.snapshot();

    for (x, y) in iter_coords(4) {
        assert_eq!(session.select_cell(x, y), Ok(RevealOutcome::AlreadyRevealed));
    }

    assert_eq!(session.snapshot(), before);
}

#[test]
fn generated_games_are_consistent() {
    for seed in 0..32 {
        let mut session = Session::new_game(BoardConfig::new(9, 2).unwrap(), seed);
        let layout = session.board().mine_layout().clone();
        let safe_cells = layout.safe_cell_count();

        for (x, y) in iter_coords(9) {
            if layout.contains_mine((x, y)) {
                continue;
            }
            let before = session.board().revealed_count();
            let outcome = session.select_cell(x, y).unwrap();
            assert!(outcome.is_safe() || outcome == RevealOutcome::AlreadyRevealed);
            assert!(session.board().revealed_count() >= before);
        }

        // every safe cell opened, no mine touched
        assert_eq!(session.board().revealed_count(), safe_cells);
        assert_eq!(session.outcome(), GameOutcome::Won, "seed {seed}");
        assert_eq!(session.score(), 1);
        assert_eq!(session.remaining_mines(), Some(layout.mine_coords()));

        for (x, y) in iter_coords(9) {
            let cell = session.board().cell_at((x, y)).unwrap();
            if layout.contains_mine((x, y)) {
                assert_eq!(cell, Cell::Hidden);
            } else {
                assert_eq!(cell, Cell::Revealed(layout.adjacent_mine_count((x, y))));
            }
        }
    }
}
