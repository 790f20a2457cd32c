//! End-to-end scenarios through the public `Player` API.

use nogo_agent::Player;
use nogo_core::{Board, Color, Legality, Placement};
use nogo_mcts::{PlayoutPolicy, SearchConfig};

// Black's only legal move is the top-left corner: the other empty point is
// the white group's last liberty, so taking it would capture. White has no
// legal move at all.
const ONE_MOVE_FOR_BLACK: &str = "\
    . X X X X X X X X\n\
    X X X X X X X X X\n\
    X X X X X X X X X\n\
    X X X X X X X X X\n\
    X X X X . X X X X\n\
    O O O O O O O O O\n\
    O O O O O O O O O\n\
    O O O O O O O O O\n\
    O O O O O O O O O\n";

#[test]
fn single_legal_move_is_found_regardless_of_settings() {
    let board = Board::from_diagram(ONE_MOVE_FOR_BLACK).unwrap();

    for args in [
        "role=black ploy=mcts T=20 seed=1",
        "role=black ploy=mcts T=20 seed=2 testId=1",
        "role=black ploy=mcts T=200 seed=3",
    ] {
        let mut player = Player::new(args).unwrap();
        let placement = player.take_action(&board).unwrap();
        assert_eq!(placement, Placement::new(0, Color::Black), "args: {args}");
    }
}

#[test]
fn no_legal_move_returns_the_sentinel() {
    let board = Board::from_diagram(ONE_MOVE_FOR_BLACK).unwrap();

    let mut searcher = Player::new("role=white ploy=mcts T=20 seed=1").unwrap();
    assert_eq!(searcher.take_action(&board), None);

    let mut baseline = Player::new("role=white seed=1").unwrap();
    assert_eq!(baseline.take_action(&board), None);
}

#[test]
fn identical_seed_and_cap_give_identical_moves() {
    let board = Board::new();
    let config = SearchConfig::for_testing()
        .with_max_simulations(1000)
        .with_playout(PlayoutPolicy::MobilityScore);

    let mut moves = Vec::new();
    for _ in 0..2 {
        let mut player = Player::new("role=black ploy=mcts T=1000 seed=42")
            .unwrap()
            .with_search_config(config.clone());
        moves.push(player.take_action(&board));
    }

    assert!(moves[0].is_some());
    assert_eq!(moves[0], moves[1]);
}

#[test]
fn episode_hooks_bound_the_tree() {
    let config = SearchConfig::for_testing()
        .with_max_simulations(100)
        .with_playout(PlayoutPolicy::MobilityScore);
    let mut player = Player::new("role=black ploy=mcts T=1000 seed=9")
        .unwrap()
        .with_search_config(config);

    player.open_episode("B:searcher W:random");
    player.take_action(&Board::new()).unwrap();
    assert!(player.engine().unwrap().stats().total_nodes > 1);

    player.close_episode("B:searcher W:random");
    assert_eq!(player.engine().unwrap().stats().total_nodes, 1);
}

#[test]
fn random_game_runs_to_a_loss_for_the_stuck_side() {
    let mut black = Player::new("role=black seed=7").unwrap();
    let mut white = Player::new("role=white seed=8").unwrap();

    let mut board = Board::new();
    let mut to_move = Color::Black;
    let mut moves = 0;

    let loser = loop {
        let player = match to_move {
            Color::Black => &mut black,
            Color::White => &mut white,
        };
        match player.take_action(&board) {
            Some(placement) => {
                assert_eq!(placement.color, to_move);
                assert_eq!(
                    board.try_place(placement.cell, placement.color),
                    Legality::Legal
                );
                moves += 1;
                assert!(moves <= 81, "more moves than cells");
                to_move = to_move.opponent();
            }
            None => break to_move,
        }
    };

    // The stuck side really has no legal placement.
    assert_eq!(board.count_legal(loser), 0);
    // NoGo self-destructs long before the board fills.
    assert!(moves > 10);
}

#[test]
fn mcts_versus_random_stays_legal_across_turns() {
    // Every MCTS move must be legal on the board it was asked about, and
    // the retained tree must survive into the next turn.
    let config = SearchConfig::for_testing()
        .with_max_simulations(150)
        .with_playout(PlayoutPolicy::MobilityScore);
    let mut searcher = Player::new("role=black ploy=mcts T=1000 seed=3")
        .unwrap()
        .with_search_config(config);
    let mut opponent = Player::new("role=white seed=4").unwrap();

    let mut board = Board::new();
    for _ in 0..4 {
        let own = searcher.take_action(&board).unwrap();
        assert_eq!(board.try_place(own.cell, own.color), Legality::Legal);

        let reply = opponent.take_action(&board).unwrap();
        assert_eq!(board.try_place(reply.cell, reply.color), Legality::Legal);
    }
    assert!(searcher.engine().unwrap().stats().total_nodes >= 1);
}
