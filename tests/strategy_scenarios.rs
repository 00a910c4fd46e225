//! Behavioral checks for the move-selection strategies

mod common;

use rand::{SeedableRng, rngs::StdRng};
use tictactoe_ai::{
    config::Difficulty,
    ports::Strategy,
    strategy::{self, HeuristicStrategy, MinimaxStrategy, WIN_SCORE},
    tictactoe::{Board, BoardSize, Move, Symbol},
};

fn impossible() -> MinimaxStrategy {
    MinimaxStrategy::new("impossible".to_string())
}

mod make_unmake {
    use super::*;

    #[test]
    fn every_difficulty_leaves_the_board_untouched() {
        let mut rng = StdRng::seed_from_u64(21);
        for size in [BoardSize::Three, BoardSize::Five] {
            for difficulty in Difficulty::ALL {
                let mut strategy = strategy::from_difficulty(difficulty, Some(4), Some(2));
                for _ in 0..10 {
                    let mut board = Board::new(size);
                    let to_move = common::random_playout(&mut rng, &mut board, 4);
                    if board.is_terminal() {
                        continue;
                    }
                    let before = board.clone();
                    let mv = strategy.select_move(&mut board, to_move).unwrap();
                    assert_eq!(board, before, "{difficulty} changed the board");
                    assert!(board.is_cell_empty(mv.row, mv.col));
                }
            }
        }
    }

    #[test]
    fn default_depth_search_on_nine_by_nine() {
        let mut board = Board::new(BoardSize::Nine);
        board.place(Move::new(4, 4), Symbol::X).unwrap();
        board.place(Move::new(3, 3), Symbol::O).unwrap();
        let before = board.clone();

        let mut search = impossible();
        search.select_move(&mut board, Symbol::X).unwrap();
        assert_eq!(board, before);
        assert_eq!(search.stats().depth_cap, 2);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn same_board_same_move() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..10 {
            let mut board = Board::new(BoardSize::Three);
            let to_move = common::random_playout(&mut rng, &mut board, 3);
            if board.is_terminal() {
                continue;
            }
            let first = impossible().select_move(&mut board, to_move).unwrap();
            let mut reused = impossible();
            for _ in 0..3 {
                assert_eq!(reused.select_move(&mut board, to_move).unwrap(), first);
            }
        }
    }

    #[test]
    fn seeded_random_levels_repeat() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let play = || {
                let mut strategy = strategy::from_difficulty(difficulty, Some(99), None);
                let mut board = Board::new(BoardSize::Five);
                let mut moves = Vec::new();
                let mut to_move = Symbol::X;
                for _ in 0..8 {
                    let mv = strategy.select_move(&mut board, to_move).unwrap();
                    board.place(mv, to_move).unwrap();
                    moves.push(mv);
                    to_move = to_move.opponent();
                }
                moves
            };
            assert_eq!(play(), play());
        }
    }
}

mod alpha_beta_equivalence {
    use super::*;

    fn assert_same_scores(board: &mut Board, me: Symbol, depth: Option<u32>) {
        let mut pruned = impossible();
        let mut plain = impossible().without_pruning();
        if let Some(depth) = depth {
            pruned = pruned.with_depth(depth);
            plain = plain.with_depth(depth);
        }

        let a = pruned.evaluate_moves(board, me);
        let b = plain.evaluate_moves(board, me);
        assert_eq!(a, b, "scores differ on\n{board}");
        assert!(pruned.stats().nodes <= plain.stats().nodes);

        assert_eq!(
            pruned.select_move(board, me).unwrap(),
            plain.select_move(board, me).unwrap()
        );
        assert_eq!(pruned.stats().best_score, plain.stats().best_score);
    }

    #[test]
    fn three_by_three_positions() {
        let mut rng = StdRng::seed_from_u64(5);
        for plies in [0, 1, 2, 3, 4, 5] {
            let mut board = Board::new(BoardSize::Three);
            let to_move = common::random_playout(&mut rng, &mut board, plies);
            if board.is_terminal() {
                continue;
            }
            assert_same_scores(&mut board, to_move, None);
        }
    }

    #[test]
    fn five_by_five_positions() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..3 {
            let mut board = Board::new(BoardSize::Five);
            let to_move = common::random_playout(&mut rng, &mut board, 8);
            if board.is_terminal() {
                continue;
            }
            assert_same_scores(&mut board, to_move, Some(3));
        }
    }
}

mod scoring {
    use super::*;

    #[test]
    fn shallower_win_scores_higher() {
        // O wins on the spot at (1,2).
        let mut now = Board::from_rows(&["X.X", "OO.", "X.."], 3).unwrap();
        let immediate = impossible()
            .evaluate_moves(&mut now, Symbol::O)
            .into_iter()
            .find(|&(mv, _)| mv == Move::new(1, 2))
            .map(|(_, score)| score);
        assert_eq!(immediate, Some(WIN_SCORE - 1));

        // X must block at (0,2), which also forks (0,1) and (1,2): win at ply 3.
        let mut fork = Board::from_rows(&["X..", ".O.", "O.X"], 3).unwrap();
        let scores = impossible().evaluate_moves(&mut fork, Symbol::X);
        let best = scores.iter().max_by_key(|&&(_, score)| score).copied();
        assert_eq!(best, Some((Move::new(0, 2), WIN_SCORE - 3)));
        assert!(
            scores
                .iter()
                .filter(|&&(mv, _)| mv != Move::new(0, 2))
                .all(|&(_, score)| score == 2 - WIN_SCORE)
        );
    }

    #[test]
    fn ties_go_to_the_first_move() {
        // Nothing can be decided within one ply: every move scores 0.
        let mut board = Board::new(BoardSize::Three);
        let mut shallow = impossible().with_depth(1);
        assert_eq!(shallow.select_move(&mut board, Symbol::X).unwrap(), Move::new(0, 0));
        assert_eq!(shallow.stats().best_score, Some(0));
    }
}

mod never_loses {
    use super::*;

    /// Explore every human reply; the AI answers with the default search.
    /// Returns the number of finished games.
    fn explore(
        board: &mut Board,
        ai: Symbol,
        to_move: Symbol,
        search: &mut MinimaxStrategy,
    ) -> usize {
        assert!(!board.has_won(ai.opponent()), "AI lost on\n{board}");
        if board.has_won(ai) || board.is_full() {
            return 1;
        }

        if to_move == ai {
            let mv = search.select_move(board, ai).unwrap();
            board.probe(mv, ai, |b| explore(b, ai, ai.opponent(), search))
        } else {
            board
                .available_moves()
                .into_iter()
                .map(|mv| board.probe(mv, to_move, |b| explore(b, ai, ai, search)))
                .sum()
        }
    }

    #[test]
    fn impossible_moving_first() {
        let mut board = Board::new(BoardSize::Three);
        let mut search = impossible();
        let games = explore(&mut board, Symbol::X, Symbol::X, &mut search);
        assert!(games > 0);
        assert_eq!(search.stats().depth_cap, 6);
    }

    #[test]
    fn impossible_moving_second() {
        let mut board = Board::new(BoardSize::Three);
        let mut search = impossible();
        let games = explore(&mut board, Symbol::O, Symbol::X, &mut search);
        assert!(games > 0);
    }
}

mod medium {
    use super::*;

    #[test]
    fn wins_before_blocking() {
        let mut board = Board::from_rows(&["XX.", "OO.", "..."], 3).unwrap();
        let mut strategy = HeuristicStrategy::with_seed("medium".to_string(), 0);
        assert_eq!(strategy.select_move(&mut board, Symbol::O).unwrap(), Move::new(1, 2));
    }

    #[test]
    fn blocks_when_it_cannot_win() {
        let mut board = Board::from_rows(&["XX.", "O..", "..."], 3).unwrap();
        let mut strategy = HeuristicStrategy::with_seed("medium".to_string(), 0);
        assert_eq!(strategy.select_move(&mut board, Symbol::O).unwrap(), Move::new(0, 2));
    }
}
