use super::*;

fn board(placement: &str) -> Board {
    Board::from_placement(placement).unwrap()
}

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::seeded(7);
    let b = Board::initial();
    let limits = SearchLimits::depth(1);

    let result = engine.search(&b, Color::White, limits);

    let mv = result.best_move.unwrap();
    assert!(all_legal_moves(&b, Color::White).contains(&mv));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::seeded(7);
    let b = board("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR");
    let limits = SearchLimits::depth(1);

    let result = engine.search(&b, Color::Black, limits);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::seeded(7);
    let b = board("k7/8/1Q6/8/8/8/8/1K6");
    let limits = SearchLimits::depth(1);

    let result = engine.search(&b, Color::Black, limits);

    assert!(result.best_move.is_none());
}

#[test]
fn same_seed_same_moves() {
    let b = Board::initial();
    let mut a = StdRng::seed_from_u64(42);
    let mut c = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        assert_eq!(
            random_move(&b, Color::Black, &mut a),
            random_move(&b, Color::Black, &mut c)
        );
    }
}

#[test]
fn every_legal_move_gets_picked() {
    let b = board("4k3/8/8/8/8/8/8/R3K3");
    let legal = all_legal_moves(&b, Color::White);
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2_000 {
        seen.insert(random_move(&b, Color::White, &mut rng).unwrap());
    }
    assert_eq!(seen.len(), legal.len());
}
