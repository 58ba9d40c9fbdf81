use super::*;
use crate::board::{BoardSize, Player, Pos, Stone};
use crate::error::Swap2Error;
use crate::rules::Illegal;

fn p(row: u8, col: u8) -> Pos {
    Pos::new(row, col)
}

/// Scattered cells on the last row that never line up into a five
const FILLERS: [(u8, u8); 5] = [(14, 0), (14, 3), (14, 6), (14, 9), (14, 12)];

/// Play `stones` for `color`, with the other side answering on filler cells.
/// Returns the status after each of `color`'s stones.
fn play_line(session: &mut GameSession, color: Player, stones: &[Pos]) -> Vec<Status> {
    let mut statuses = Vec::new();
    let mut fillers = FILLERS.iter().map(|&(r, c)| p(r, c));
    for &pos in stones {
        if session.current_player() != color {
            let filler = fillers.next().expect("enough filler cells");
            assert!(session.play(filler).is_accepted());
        }
        assert!(session.play(pos).is_accepted(), "{pos} should be accepted");
        statuses.push(session.status());
    }
    statuses
}

#[test]
fn test_new_session() {
    let session = GameSession::new(Variant::Standard, BoardSize::Fifteen);
    assert_eq!(session.current_player(), Player::Black);
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(session.winner(), None);
    assert_eq!(session.board_size(), BoardSize::Fifteen);
    assert!(session.board().is_board_empty());
    assert!(session.move_history().is_empty());
    assert!(!session.is_swap2_phase());
    assert!(session.swap2_moves().is_empty());

    let swap2 = GameSession::new(Variant::Swap2, BoardSize::Nineteen);
    assert!(swap2.is_swap2_phase());
    assert_eq!(swap2.variant(), Variant::Swap2);
}

#[test]
fn test_with_side_rejects_unsupported_size() {
    assert!(GameSession::with_side(Variant::Pro, 17).is_ok());
    assert!(matches!(
        GameSession::with_side(Variant::Pro, 16),
        Err(crate::error::ConfigError::UnsupportedBoardSize(16))
    ));
}

#[test]
fn test_concrete_horizontal_win() {
    let mut session = GameSession::new(Variant::Standard, BoardSize::Fifteen);
    let line = [p(7, 3), p(7, 4), p(7, 5), p(7, 6), p(7, 7)];
    let statuses = play_line(&mut session, Player::Black, &line);

    assert_eq!(
        statuses,
        vec![
            Status::InProgress,
            Status::InProgress,
            Status::InProgress,
            Status::InProgress,
            Status::Completed,
        ]
    );
    assert_eq!(session.winner(), Some(Player::Black));
    // Winner keeps the turn marker
    assert_eq!(session.current_player(), Player::Black);
    assert_eq!(session.winning_line(), Some(line.to_vec()));
}

#[test]
fn test_win_regardless_of_fill_order() {
    let axes: [[Pos; 5]; 4] = [
        [p(5, 2), p(5, 3), p(5, 4), p(5, 5), p(5, 6)],
        [p(2, 8), p(3, 8), p(4, 8), p(5, 8), p(6, 8)],
        [p(1, 1), p(2, 2), p(3, 3), p(4, 4), p(5, 5)],
        [p(2, 12), p(3, 11), p(4, 10), p(5, 9), p(6, 8)],
    ];

    for (variant, line) in [Variant::Freestyle, Variant::Pro]
        .into_iter()
        .flat_map(|variant| axes.map(|line| (variant, line)))
    {
        for last in 0..5 {
            for color in [Player::Black, Player::White] {
                let mut order: Vec<Pos> = line
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != last)
                    .map(|(_, &pos)| pos)
                    .rev()
                    .collect();
                order.push(line[last]);

                let mut session = GameSession::new(variant, BoardSize::Fifteen);
                let statuses = play_line(&mut session, color, &order);

                assert!(statuses[..4].iter().all(|s| *s == Status::InProgress));
                assert_eq!(statuses[4], Status::Completed, "{variant} {line:?} last={last}");
                assert_eq!(session.winner(), Some(color));
            }
        }
    }
}

#[test]
fn test_overline_wins() {
    let mut session = GameSession::new(Variant::Standard, BoardSize::Fifteen);
    // X X X _ X X then fill the gap: six in a row
    let stones = [p(7, 1), p(7, 2), p(7, 3), p(7, 5), p(7, 6), p(7, 4)];
    let statuses = play_line(&mut session, Player::Black, &stones);
    assert_eq!(statuses[5], Status::Completed);
    assert_eq!(session.winning_line().map(|l| l.len()), Some(6));
}

#[test]
fn test_fours_never_complete() {
    let mut session = GameSession::new(Variant::Standard, BoardSize::Fifteen);
    // Black: a four on row 3 and a four on column 10; white: a four on row 9
    let moves = [
        p(3, 0), p(9, 0),
        p(3, 1), p(9, 1),
        p(3, 2), p(9, 2),
        p(3, 3), p(9, 3),
        p(0, 10), p(11, 11),
        p(1, 10), p(12, 12),
        p(2, 10), p(13, 13),
        p(4, 10), p(0, 0),
    ];
    for pos in moves {
        let outcome = session.play(pos);
        assert_eq!(outcome, MoveOutcome::Placed, "{pos}");
    }
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(session.winner(), None);
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut session = GameSession::new(Variant::Standard, BoardSize::Fifteen);
    session.play(p(0, 0));
    session.play(p(7, 3)); // white
    assert_eq!(session.board().get(p(7, 3)), Stone::White);

    let after = session.make_move(p(7, 3));
    assert_eq!(after, session);
    assert_eq!(after.move_history().len(), 2);
    assert_eq!(after.current_player(), Player::Black);

    assert_eq!(
        session.play(p(7, 3)),
        MoveOutcome::Rejected(Rejection::Illegal(Illegal::Occupied))
    );
}

#[test]
fn test_occupied_rejected_in_every_variant() {
    for variant in Variant::ALL {
        let mut session = GameSession::new(variant, BoardSize::Thirteen);
        session.play(p(6, 6));
        assert!(!session.is_valid_move(p(6, 6)), "{variant}");
        assert!(session.is_valid_move(p(6, 7)), "{variant}");
    }
}

#[test]
fn test_off_board_is_rejected() {
    let session = GameSession::new(Variant::Standard, BoardSize::Thirteen);
    assert!(!session.is_valid_move(p(13, 0)));
    assert_eq!(session.make_move(p(0, 13)), session);
}

#[test]
fn test_make_move_leaves_input_untouched() {
    let session = GameSession::new(Variant::Standard, BoardSize::Fifteen);
    let next = session.make_move(p(7, 7));
    assert!(session.board().is_board_empty());
    assert_eq!(next.board().get(p(7, 7)), Stone::Black);
    assert_eq!(next.current_player(), Player::White);
}

fn cross_moves() -> [Pos; 8] {
    // Black builds _ X ? X _ both ways around (7,7); white stays on row 0
    [
        p(7, 6), p(0, 0),
        p(7, 8), p(0, 2),
        p(6, 7), p(0, 4),
        p(8, 7), p(0, 6),
    ]
}

#[test]
fn test_pro_forbids_double_three_only_in_pro() {
    let pro = GameSession::replay(Variant::Pro, BoardSize::Fifteen, &cross_moves()).unwrap();
    assert_eq!(pro.current_player(), Player::Black);
    assert!(!pro.is_valid_move(p(7, 7)));
    assert_eq!(
        pro.clone().play(p(7, 7)),
        MoveOutcome::Rejected(Rejection::Illegal(Illegal::Forbidden))
    );
    assert!(!pro.legal_moves().contains(&p(7, 7)));

    let standard =
        GameSession::replay(Variant::Standard, BoardSize::Fifteen, &cross_moves()).unwrap();
    assert_eq!(standard.board(), pro.board());
    assert!(standard.is_valid_move(p(7, 7)));
}

#[test]
fn test_pro_black_completes_split_five() {
    // X X ? X X on row 7, white answers on row 0
    let moves = [
        p(7, 3), p(0, 0),
        p(7, 4), p(0, 2),
        p(7, 6), p(0, 4),
        p(7, 7), p(0, 6),
    ];
    let mut session = GameSession::replay(Variant::Pro, BoardSize::Fifteen, &moves).unwrap();
    assert!(session.is_valid_move(p(7, 5)));
    assert_eq!(session.play(p(7, 5)), MoveOutcome::Won(Player::Black));
}

#[test]
fn test_pro_black_may_build_open_four() {
    // _ X X X ? _ is a single four, then the five
    let moves = [
        p(7, 3), p(0, 0),
        p(7, 4), p(0, 2),
        p(7, 5), p(0, 4),
    ];
    let mut session = GameSession::replay(Variant::Pro, BoardSize::Fifteen, &moves).unwrap();
    assert_eq!(session.play(p(7, 6)), MoveOutcome::Placed);
    assert_eq!(session.play(p(0, 6)), MoveOutcome::Placed);
    assert_eq!(session.play(p(7, 7)), MoveOutcome::Won(Player::Black));
}

#[test]
fn test_pro_allows_white_the_same_shape() {
    // Mirror of the cross with colors exchanged; white is never restricted
    let moves = [
        p(0, 0), p(7, 6),
        p(0, 2), p(7, 8),
        p(0, 4), p(6, 7),
        p(0, 6), p(8, 7),
        p(0, 8),
    ];
    let session = GameSession::replay(Variant::Pro, BoardSize::Fifteen, &moves).unwrap();
    assert_eq!(session.current_player(), Player::White);
    assert!(session.is_valid_move(p(7, 7)));
}

#[test]
fn test_swap2_opening_boundary() {
    let mut session = GameSession::new(Variant::Swap2, BoardSize::Fifteen);
    let opening = [p(7, 7), p(7, 8), p(8, 7)];

    for (i, &pos) in opening.iter().enumerate() {
        assert_eq!(session.play(pos), MoveOutcome::Opening(Player::Black));
        assert_eq!(session.board().get(pos), Stone::Black);
        assert!(session.is_swap2_phase());
        assert_eq!(session.swap2_moves(), &opening[..=i]);
    }
    assert_eq!(session.current_player(), Player::White);
    assert!(session.move_history().is_empty());

    assert_eq!(session.play(p(6, 6)), MoveOutcome::Opening(Player::White));
    assert_eq!(session.board().get(p(6, 6)), Stone::White);
    assert!(!session.is_swap2_phase());
    assert!(session.swap2_moves().is_empty());
    assert_eq!(session.current_player(), Player::Black);
    assert!(session.move_history().is_empty());
    assert!(!session.colors_swapped());

    // Regular alternation from here on
    assert_eq!(session.play(p(9, 9)), MoveOutcome::Placed);
    assert_eq!(session.move_history(), &[p(9, 9)]);
    assert_eq!(session.current_player(), Player::White);
}

#[test]
fn test_swap2_explicit_choice() {
    let opening = [p(7, 7), p(7, 8), p(8, 7)];
    let mut session = GameSession::replay(Variant::Swap2, BoardSize::Fifteen, &opening).unwrap();

    session.choose_swap2(Swap2Choice::SwapColors).unwrap();
    assert!(!session.is_swap2_phase());
    assert!(session.colors_swapped());
    assert_eq!(session.current_player(), Player::White);
    assert_eq!(session.board().stone_count(), 3);

    assert_eq!(
        session.choose_swap2(Swap2Choice::KeepColors),
        Err(Swap2Error::NotDeciding)
    );
    assert_eq!(session.play(p(6, 6)), MoveOutcome::Placed);
    assert_eq!(session.board().get(p(6, 6)), Stone::White);
    assert_eq!(session.move_history(), &[p(6, 6)]);
}

#[test]
fn test_swap2_choice_errors() {
    let mut standard = GameSession::new(Variant::Standard, BoardSize::Fifteen);
    assert_eq!(
        standard.choose_swap2(Swap2Choice::KeepColors),
        Err(Swap2Error::NotSwap2)
    );

    let mut early = GameSession::new(Variant::Swap2, BoardSize::Fifteen);
    early.play(p(7, 7));
    assert_eq!(
        early.choose_swap2(Swap2Choice::KeepColors),
        Err(Swap2Error::NotDeciding)
    );
    assert!(early.is_swap2_phase());
}

#[test]
fn test_history_is_append_only() {
    let mut session = GameSession::new(Variant::Standard, BoardSize::Fifteen);
    let moves = [p(7, 7), p(7, 8), p(7, 7), p(8, 8), p(20, 1), p(6, 6)];
    let mut seen: Vec<Pos> = Vec::new();

    for pos in moves {
        let before = session.move_history().to_vec();
        let accepted = session.play(pos).is_accepted();
        let after = session.move_history();

        assert!(after.starts_with(&before));
        if accepted {
            seen.push(pos);
            assert_eq!(after.len(), before.len() + 1);
        } else {
            assert_eq!(after.len(), before.len());
        }
    }
    assert_eq!(session.move_history(), seen.as_slice());
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_completed_session_ignores_moves() {
    let moves = [
        p(7, 3), p(0, 0),
        p(7, 4), p(0, 2),
        p(7, 5), p(0, 4),
        p(7, 6), p(0, 6),
        p(7, 7),
    ];
    let mut session = GameSession::replay(Variant::Standard, BoardSize::Fifteen, &moves).unwrap();
    assert_eq!(session.status(), Status::Completed);

    let frozen = session.clone();
    assert_eq!(session.play(p(10, 10)), MoveOutcome::Rejected(Rejection::GameOver));
    assert_eq!(session, frozen);
    assert_eq!(session.make_move(p(11, 11)), frozen);
}

#[test]
fn test_full_board_draw() {
    // (row + 2*col) % 4 < 2 is black: runs never exceed two stones on any
    // axis, and the 13x13 board splits 85 black / 84 white.
    let mut black = Vec::new();
    let mut white = Vec::new();
    for row in 0..13u8 {
        for col in 0..13u8 {
            if (row as u32 + 2 * col as u32) % 4 < 2 {
                black.push(p(row, col));
            } else {
                white.push(p(row, col));
            }
        }
    }
    assert_eq!((black.len(), white.len()), (85, 84));

    let mut session = GameSession::new(Variant::Standard, BoardSize::Thirteen);
    let mut last = MoveOutcome::Placed;
    for i in 0..black.len() {
        last = session.play(black[i]);
        if let Some(&w) = white.get(i) {
            assert_eq!(session.play(w), MoveOutcome::Placed);
        }
    }

    assert_eq!(last, MoveOutcome::Draw);
    assert_eq!(session.status(), Status::Completed);
    assert_eq!(session.winner(), None);
    assert!(session.board().is_full());
    assert_eq!(session.move_history().len(), 169);
}

#[test]
fn test_replay_reports_first_rejected_move() {
    let moves = [p(7, 7), p(7, 8), p(7, 7)];
    let err = GameSession::replay(Variant::Standard, BoardSize::Fifteen, &moves).unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.pos, p(7, 7));
    assert_eq!(err.reason, Rejection::Illegal(Illegal::Occupied));
    assert_eq!(err.to_string(), "move 3 at 7,7 rejected: cell is occupied");
}

#[test]
fn test_session_json_round_trip() {
    let opening = [p(7, 7), p(7, 8), p(8, 7)];
    let session = GameSession::replay(Variant::Swap2, BoardSize::Seventeen, &opening).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    assert!(json.contains("\"variant\":\"swap2\""));
    assert!(json.contains("\"phase\":\"deciding\""));
    assert!(json.contains("\"status\":\"in_progress\""));

    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
    assert_eq!(restored.board_size().side(), 17);
}

#[test]
fn test_json_rejects_unsupported_board_size() {
    let session = GameSession::new(Variant::Standard, BoardSize::Thirteen);
    let json = serde_json::to_string(&session).unwrap();
    let tampered = json.replace("\"size\":13", "\"size\":14");
    assert_ne!(json, tampered);
    assert!(serde_json::from_str::<GameSession>(&tampered).is_err());
}

#[test]
fn test_from_config() {
    let config = crate::config::GameConfig::new(Variant::Renju, BoardSize::Nineteen);
    let session = GameSession::from_config(&config);
    assert_eq!(session.variant(), Variant::Renju);
    assert_eq!(session.board_size(), BoardSize::Nineteen);
    assert_eq!(session, GameSession::new(Variant::Renju, BoardSize::Nineteen));
}

#[test]
fn test_legal_moves_on_small_board() {
    let session = GameSession::new(Variant::Standard, BoardSize::Thirteen);
    assert_eq!(session.legal_moves().len(), 169);

    let session = session.make_move(p(0, 0));
    let legal = session.legal_moves();
    assert_eq!(legal.len(), 168);
    assert_eq!(legal[0], p(0, 1));
}
