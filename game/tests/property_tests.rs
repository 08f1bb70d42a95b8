use game::bag::Bag;
use game::field::{FIELD_H, FIELD_W, Field, Row};
use game::game::Game;
use game::input::InputEvent;
use game::mode::Mode;
use game::piece::Piece;
use game::shapes::Shape;
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        Just(InputEvent::Left),
        Just(InputEvent::Right),
        Just(InputEvent::Down),
        Just(InputEvent::Up),
    ]
}

fn row_strategy() -> impl Strategy<Value = Row> {
    prop_oneof![
        Just([1u8; FIELD_W]),
        prop::array::uniform10(0u8..=7),
    ]
}

proptest! {
    #[test]
    fn bag_windows_contain_every_shape_once(seed in any::<u64>(), windows in 1usize..6) {
        let mut bag = Bag::new(seed);
        for _ in 0..windows {
            let mut drawn: Vec<Shape> = (0..7).map(|_| bag.next_shape()).collect();
            drawn.sort();
            prop_assert_eq!(drawn, Shape::ALL.to_vec());
        }
    }

    #[test]
    fn rotation_has_period_four(shape_idx in 0usize..7, turns in 0usize..12) {
        let mut piece = Piece::new(Shape::ALL[shape_idx]);
        let original = piece.matrix;
        for _ in 0..turns {
            piece.rotate();
        }
        prop_assert_eq!(piece.matrix.cell_count(), 4);
        for _ in 0..(4 - turns % 4) % 4 {
            piece.rotate();
        }
        prop_assert_eq!(piece.matrix, original);
    }

    #[test]
    fn clearing_compacts_and_keeps_order(rows in prop::collection::vec(row_strategy(), FIELD_H)) {
        let mut field = Field::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                field.set(x, y, cell);
            }
        }

        let survivors: Vec<Row> = rows
            .iter()
            .copied()
            .filter(|row| row.iter().any(|&c| c == 0))
            .collect();
        let cleared = field.clear_full_rows();

        prop_assert_eq!(cleared, FIELD_H - survivors.len());
        prop_assert_eq!(field.rows().len(), FIELD_H);
        prop_assert!(field.rows()[..cleared].iter().all(|row| row == &[0; FIELD_W]));
        prop_assert_eq!(&field.rows()[cleared..], &survivors[..]);
    }

    #[test]
    fn active_piece_never_overlaps(seed in any::<u64>(), inputs in prop::collection::vec(input_strategy(), 0..200)) {
        let mut game = Game::new(seed);
        game.handle_input(InputEvent::Confirm);
        game.handle_input(InputEvent::Confirm);
        let mut last_score = 0;

        for input in inputs {
            game.handle_input(input);
            game.update(60);
            if game.mode() != Mode::Playing {
                break;
            }
            prop_assert!(!game.field().collides(game.current(), 0, 0));
            prop_assert!(game.score() >= last_score);
            prop_assert!(game.field().rows().iter().flatten().all(|&c| c <= 7));
            last_score = game.score();
        }
    }
}
