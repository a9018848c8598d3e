//! Tests for arrangement construction, rotated views and scoring

#[cfg(test)]
mod tests {
    use tilefit::algorithm::arrangement::{Arrangement, Evaluation, Placement};
    use tilefit::algorithm::rules::Rule;
    use tilefit::spatial::{Direction, Place, Rotation, Tile};

    fn tiles() -> Vec<Tile> {
        vec![
            Tile::parse("full", &["XXX", "XXX", "XXX"]).expect("valid tile"),
            Tile::parse("open", &["   ", "   ", "   "]).expect("valid tile"),
            Tile::parse("bar", &["X  ", "X  ", "X  "]).expect("valid tile"),
        ]
    }

    // Tests the identity arrangement fills places in tile order unrotated
    // Verified by reversing the placement order
    #[test]
    fn test_identity() {
        let tiles = tiles();
        let arrangement = Arrangement::identity(&tiles);

        assert_eq!(arrangement.place_count(), 3);
        let names: Vec<&str> = arrangement
            .placements()
            .iter()
            .map(|placement| placement.tile.name())
            .collect();
        assert_eq!(names, ["full", "open", "bar"]);
        assert!(
            arrangement
                .placements()
                .iter()
                .all(|placement| placement.rotation == Rotation::None)
        );
        assert!(arrangement.placement(Place::D).is_none());
    }

    // Tests explicit orders pick tiles by index and skip unknown indices
    // Verified by indexing tiles by slot instead of order
    #[test]
    fn test_from_order() {
        let tiles = tiles();
        let arrangement = Arrangement::from_order(
            &tiles,
            &[2, 0, 9],
            &[Rotation::Half, Rotation::Clockwise, Rotation::None],
        );

        assert_eq!(arrangement.place_count(), 2);
        let first = arrangement.placement(Place::A).expect("slot A is filled");
        assert_eq!(first.tile.name(), "bar");
        assert_eq!(first.rotation, Rotation::Half);

        let short = Arrangement::from_order(&tiles, &[1, 2], &[]);
        let second = short.placement(Place::B).expect("slot B is filled");
        assert_eq!(second.rotation, Rotation::None);
    }

    // Tests views compose the base rotation with the requested one
    // Verified by returning the base rotation only
    #[test]
    fn test_get_place_composes_rotations() {
        let tiles = tiles();
        let bar = tiles.get(2).expect("bar tile");
        let arrangement = Arrangement::new(vec![Placement {
            tile: bar,
            rotation: Rotation::Clockwise,
        }]);

        let view = arrangement
            .get_place(Place::A, Rotation::Counterclockwise)
            .expect("place A is filled");
        assert_eq!(view.rotation(), Rotation::None);
        assert_eq!(view.edges(), bar.edges());

        let turned = arrangement
            .get_place(Place::A, Rotation::None)
            .expect("place A is filled");
        assert_eq!(turned.edge(Direction::Top).to_string(), "XXX");
        assert!(arrangement.get_place(Place::B, Rotation::None).is_none());
    }

    // Tests full scoring counts every satisfied rule and lists every violation
    // Verified by stopping at the first violation regardless of the flag
    #[test]
    fn test_check_exhaustive() {
        let tiles = tiles();
        let arrangement = Arrangement::identity(&tiles);
        let rules = [
            Rule::vertical(Place::A, Place::A),
            Rule::vertical(Place::A, Place::B),
            Rule::vertical(Place::B, Place::C),
            Rule::vertical(Place::C, Place::C),
        ];

        let evaluation = arrangement.check(&rules, false);
        assert_eq!(evaluation.score, 2);
        assert_eq!(
            evaluation.violations,
            vec![Rule::vertical(Place::A, Place::A), Rule::vertical(Place::C, Place::C)]
        );
        assert!(!evaluation.is_perfect(rules.len()));
    }

    // Tests early abort stops at the first violation
    // Verified by continuing after a violation
    #[test]
    fn test_check_early_abort() {
        let tiles = tiles();
        let arrangement = Arrangement::identity(&tiles);
        let rules = [
            Rule::vertical(Place::A, Place::B),
            Rule::vertical(Place::A, Place::A),
            Rule::vertical(Place::B, Place::C),
        ];

        let evaluation = arrangement.check(&rules, true);
        assert!(arrangement.check(&rules, false).score >= evaluation.score);
        assert_eq!(
            evaluation,
            Evaluation {
                score: 1,
                violations: vec![Rule::vertical(Place::A, Place::A)],
            }
        );
    }

    // Tests an empty rule set is trivially perfect
    // Verified by requiring at least one rule for a perfect score
    #[test]
    fn test_no_rules_is_perfect() {
        let tiles = tiles();
        let evaluation = Arrangement::identity(&tiles).check(&[], false);
        assert_eq!(evaluation.score, 0);
        assert!(evaluation.is_perfect(0));
    }
}
