use proptest::prelude::*;

use ttt_sim::prelude::*;

pub fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

/// Boards reachable by alternating legal moves from the empty board.
///
/// Play stops at the requested ply, or earlier as soon as either mark has
/// completed a line, so no board contains moves played past a win.
pub fn arb_reachable_board() -> impl Strategy<Value = Board> {
    let order = Just((0u8..9).collect::<Vec<_>>()).prop_shuffle();
    (order, 0usize..=9, arb_mark()).prop_map(|(order, plies, first)| {
        let mut board = Board::empty();
        let mut mark = first;
        for &index in order.iter().take(plies) {
            if board.winner().is_some() {
                break;
            }
            let mv = Move::new(index).expect("generated index is in range");
            board = board.apply(mv, mark).expect("generated cell is empty");
            mark = mark.opposite();
        }
        board
    })
}
