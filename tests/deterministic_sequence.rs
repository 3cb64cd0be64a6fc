use tile_snake::config::GridSize;
use tile_snake::game::{GameEngine, TickOutcome};
use tile_snake::grid::Cell;
use tile_snake::input::Direction;
use tile_snake::render_sink::BoardView;
use tile_snake::snake::Position;

fn size(width: u16, height: u16) -> GridSize {
    GridSize::new(width, height).expect("valid size")
}

#[test]
fn rightward_run_stops_at_the_edge_without_growing() {
    let mut engine = GameEngine::from_layout(
        size(5, 5),
        vec![Position::new(2, 2)],
        Some(Position::new(0, 0)),
        Direction::Right,
        42,
    );

    assert!(matches!(engine.tick(), TickOutcome::Moved(_)));
    assert_eq!(engine.snake().head(), Position::new(3, 2));

    assert!(matches!(engine.tick(), TickOutcome::Moved(_)));
    assert_eq!(engine.snake().head(), Position::new(4, 2));

    let grid_before = engine.grid().clone();
    for _ in 0..3 {
        assert_eq!(
            engine.tick(),
            TickOutcome::Blocked {
                attempted: Position::new(5, 2)
            }
        );
    }

    assert_eq!(engine.snake().head(), Position::new(4, 2));
    assert_eq!(engine.snake().len(), 1);
    assert_eq!(engine.grid(), &grid_before);
    assert_eq!(engine.food(), Some(Position::new(0, 0)));
}

#[test]
fn eating_adjacent_food_grows_by_one() {
    let mut engine = GameEngine::from_layout(
        size(5, 5),
        vec![Position::new(2, 2)],
        Some(Position::new(2, 1)),
        Direction::Up,
        7,
    );

    let TickOutcome::Moved(report) = engine.tick() else {
        panic!("move onto food should not be blocked");
    };

    assert!(report.grew);
    assert_eq!(engine.snake().len(), 2);
    assert_eq!(engine.grid().get(Position::new(2, 1)), Some(Cell::Occupied));
    assert_eq!(engine.grid().count(Cell::Food), 1);

    let food = engine.food().expect("board still has room");
    assert_ne!(food, Position::new(2, 1));
    assert!(!engine.snake().occupies(food));
}

#[test]
fn snake_can_fill_a_single_row_board() {
    // 4x1 board: the snake starts at x = 2 and sweeps back and forth, turning at
    // each edge and eating until no free cell remains.
    let mut engine = GameEngine::new_with_seed(size(4, 1), 3);
    let mut view = BoardView::from_grid(engine.grid());
    engine.set_direction(Direction::Left);

    for _ in 0..60 {
        if engine.is_board_full() {
            break;
        }
        match engine.tick() {
            TickOutcome::Moved(report) => view.apply(&report.changes),
            TickOutcome::Blocked { .. } => {
                let reversed = match engine.direction() {
                    Direction::Left => Direction::Right,
                    _ => Direction::Left,
                };
                engine.set_direction(reversed);
            }
        }
    }

    assert!(engine.is_board_full());
    assert_eq!(engine.food(), None);
    assert_eq!(engine.grid().count(Cell::Food), 0);
    for x in 0..4 {
        assert!(view.markers(Position::new(x, 0)).player);
    }
}

#[test]
fn occupancy_and_food_stay_consistent_over_a_long_run() {
    let mut engine = GameEngine::new_with_seed(size(9, 7), 99);
    let turns = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    for step in 0..400 {
        if step % 3 == 0 {
            engine.set_direction(turns[(step / 3) % turns.len()]);
        }

        let length_before = engine.snake().len();
        let food_before = engine.food();
        let outcome = engine.tick();

        if let TickOutcome::Moved(report) = outcome {
            let expected = if report.grew { length_before + 1 } else { length_before };
            assert_eq!(engine.snake().len(), expected);
            assert_eq!(report.grew, Some(engine.snake().head()) == food_before);
        }

        let food_cells = engine.grid().count(Cell::Food);
        match engine.food() {
            Some(food) => {
                assert_eq!(food_cells, 1);
                assert_eq!(engine.grid().get(food), Some(Cell::Food));
            }
            None => assert_eq!(food_cells, 0),
        }
        for segment in engine.snake().segments() {
            assert_eq!(engine.grid().get(*segment), Some(Cell::Occupied));
        }
    }
}

#[test]
fn full_board_reversing_into_its_neck_places_food_again() {
    let mut engine = GameEngine::from_layout(
        size(3, 1),
        vec![Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)],
        None,
        Direction::Left,
        5,
    );
    let mut view = BoardView::from_grid(engine.grid());
    assert!(engine.is_board_full());

    let TickOutcome::Moved(report) = engine.tick() else {
        panic!("the neck is on the board");
    };
    view.apply(&report.changes);

    assert!(!report.grew);
    assert_eq!(engine.food(), Some(Position::new(0, 0)));
    assert_eq!(engine.grid().get(Position::new(0, 0)), Some(Cell::Food));
    assert!(!engine.snake().occupies(Position::new(0, 0)));
    assert!(!engine.is_board_full());
    assert!(view.markers(Position::new(0, 0)).food);
    assert!(!view.markers(Position::new(0, 0)).player);
}
