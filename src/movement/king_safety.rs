//! King safety: the enemy threat union and the candidate filter built on it.

use std::collections::HashSet;

use crate::arena::arena_types::{PlayerId, Square};
use crate::arena::snapshot::Snapshot;
use crate::movement::movement_rules;

/// Drop every candidate square that some enemy of `owner` covers.
///
/// The threat union is rebuilt from the snapshot on every call by walking
/// the threat range of each enemy unit on the board. Candidates that
/// survive keep their original order.
pub fn exclude_enemy_threats(
    candidates: Vec<Square>,
    owner: PlayerId,
    snapshot: &Snapshot,
) -> Vec<Square> {
    let mut threatened: HashSet<Square> = HashSet::new();
    for y in 0..snapshot.ymax() {
        for x in 0..snapshot.xmax() {
            let square = Square::new(x, y);
            let Some(node) = snapshot.node(square) else { continue; };
            let Some(unit) = node.unit else { continue; };
            if unit.owner == owner {
                continue;
            }
            threatened.extend(movement_rules::threat_range(unit, square, snapshot));
        }
    }

    candidates
        .into_iter()
        .filter(|square| !threatened.contains(square))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::exclude_enemy_threats;
    use crate::arena::arena_types::{Square, Vector};
    use crate::arena::game_arena::GameArena;
    use crate::arena::unit::UnitKind;

    #[test]
    fn candidates_survive_in_order_on_a_safe_board() {
        let mut arena = GameArena::new(8, 8);
        arena
            .recruit(1, Some(Square::new(4, 4)), UnitKind::King)
            .expect("recruit should succeed");
        let snapshot = arena.take_snapshot();

        let candidates = vec![Square::new(5, 4), Square::new(4, 5), Square::new(3, 3)];
        let kept = exclude_enemy_threats(candidates.clone(), 1, &snapshot);
        assert_eq!(kept, candidates);
    }

    #[test]
    fn rook_on_the_kings_file_denies_the_exposed_square() {
        let mut arena = GameArena::new(8, 8);
        let king = arena
            .recruit(1, Some(Square::new(4, 4)), UnitKind::King)
            .expect("recruit should succeed");
        arena
            .recruit(2, Some(Square::new(4, 0)), UnitKind::Rook)
            .expect("recruit should succeed");

        // The square between rook and king is covered. The square behind
        // the king is not: the rook's walk stops at the king itself.
        let moves = arena.valid_moves(king);
        assert!(!moves.contains(&Square::new(4, 3)));
        assert!(moves.contains(&Square::new(4, 5)));
        assert_eq!(
            moves,
            vec![
                Square::new(5, 4),
                Square::new(5, 5),
                Square::new(4, 5),
                Square::new(3, 5),
                Square::new(3, 4),
                Square::new(3, 3),
                Square::new(5, 3),
            ]
        );
    }

    #[test]
    fn king_may_capture_an_undefended_attacker() {
        let mut arena = GameArena::new(8, 8);
        let king = arena
            .recruit(1, Some(Square::new(4, 4)), UnitKind::King)
            .expect("recruit should succeed");
        arena
            .recruit(2, Some(Square::new(4, 5)), UnitKind::Rook)
            .expect("recruit should succeed");

        let moves = arena.valid_moves(king);
        assert!(moves.contains(&Square::new(4, 5)));
    }

    #[test]
    fn king_may_not_capture_a_defended_attacker() {
        let mut arena = GameArena::new(8, 8);
        let king = arena
            .recruit(1, Some(Square::new(4, 4)), UnitKind::King)
            .expect("recruit should succeed");
        arena
            .recruit(2, Some(Square::new(4, 5)), UnitKind::Rook)
            .expect("recruit should succeed");
        arena
            .recruit(2, Some(Square::new(0, 5)), UnitKind::Rook)
            .expect("recruit should succeed");

        // The second rook covers its colleague along the open rank, so the
        // adjacent rook is no longer capturable.
        let moves = arena.valid_moves(king);
        assert!(!moves.contains(&Square::new(4, 5)));
        assert_eq!(
            moves,
            vec![
                Square::new(5, 4),
                Square::new(3, 4),
                Square::new(3, 3),
                Square::new(4, 3),
                Square::new(5, 3),
            ]
        );
    }

    #[test]
    fn pawns_deny_their_diagonals_but_not_their_march_path() {
        let mut arena = GameArena::new(8, 8);
        let king = arena
            .recruit(1, Some(Square::new(4, 4)), UnitKind::King)
            .expect("recruit should succeed");
        arena
            .recruit(
                2,
                Some(Square::new(5, 6)),
                UnitKind::Pawn {
                    forward: Vector::new(0, -1),
                },
            )
            .expect("recruit should succeed");

        let moves = arena.valid_moves(king);
        assert!(!moves.contains(&Square::new(4, 5)));
        assert!(moves.contains(&Square::new(5, 5)));
        assert_eq!(moves.len(), 7);
    }
}
