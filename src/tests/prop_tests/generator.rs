use proptest::prelude::*;

use crate::prelude::*;

pub fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

/// Arbitrary cell contents, no turn-alternation constraint: the board
/// type itself places none, so its operations must hold on any filling.
/// Boards are built through the literal parser, which gets exercised on
/// every case.
pub fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(prop_oneof![Just('.'), Just('X'), Just('O')]).prop_map(|cells| {
        cells
            .iter()
            .collect::<String>()
            .parse()
            .expect("generated literal is valid")
    })
}
