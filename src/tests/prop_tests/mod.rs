mod generator;
use generator::*;

use proptest::prelude::*;

use crate::prelude::*;

proptest! {
    #[test]
    fn literal_round_trips_through_parse(board in arb_board()) {
        let literal = board.to_literal();
        prop_assert_eq!(board, literal.parse::<Board>().expect("literal is valid"));
    }

    #[test]
    fn apply_changes_exactly_one_cell(board in arb_board(), index in 0u8..9, mark in arb_mark()) {
        let mv = Move::new(index).expect("index is in range");
        match board.apply(mv, mark) {
            Ok(next) => {
                prop_assert_eq!(None, board.get(mv));
                prop_assert_eq!(Some(mark), next.get(mv));
                prop_assert_eq!(board.mark_count() + 1, next.mark_count());
                for i in 0..Board::SIZE as u8 {
                    let other = Move::new(i).expect("index is in range");
                    if other != mv {
                        prop_assert_eq!(board.get(other), next.get(other));
                    }
                }
            }
            Err(e) => {
                prop_assert!(board.get(mv).is_some());
                prop_assert_eq!(BoardError::CellOccupied(index), e);
            }
        }
    }

    #[test]
    fn available_moves_are_the_empty_cells_in_order(board in arb_board()) {
        let moves = board.available_moves();
        let expected: Vec<usize> = board
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect();
        let actual: Vec<usize> = moves.iter().map(|mv| mv.index()).collect();
        prop_assert_eq!(expected, actual);
        prop_assert_eq!(moves.is_empty(), board.is_full());
    }

    #[test]
    fn winner_implies_a_completed_line(board in arb_board()) {
        match board.winner() {
            Some(mark) => {
                prop_assert!(WIN_LINES
                    .iter()
                    .any(|line| line.iter().all(|&i| board.cells()[i] == Some(mark))));
            }
            None => {
                prop_assert!(!board.is_win_for(Mark::X));
                prop_assert!(!board.is_win_for(Mark::O));
            }
        }
    }
}
