//! Tests for side cycling and the pixel-order tables

#[cfg(test)]
mod tests {
    use tilefit::spatial::{Direction, Orientation, Rotation};

    // Tests the clockwise cycle visits every side and closes after four steps
    // Verified by swapping Bottom and Left in the index table
    #[test]
    fn test_clockwise_cycle() {
        assert_eq!(Direction::Top.clockwise(), Direction::Right);
        assert_eq!(Direction::Right.clockwise(), Direction::Bottom);
        assert_eq!(Direction::Bottom.clockwise(), Direction::Left);
        assert_eq!(Direction::Left.clockwise(), Direction::Top);

        for direction in Direction::ALL {
            let mut walked = direction;
            for _ in 0..4 {
                walked = walked.clockwise();
            }
            assert_eq!(walked, direction);
            assert_eq!(direction.clockwise().counterclockwise(), direction);
            assert_eq!(direction.opposite(), direction.clockwise().clockwise());
        }
    }

    // Tests each side reports the axis its pixels run along
    // Verified by assigning Left to the horizontal axis
    #[test]
    fn test_orientation() {
        assert_eq!(Direction::Top.orientation(), Orientation::Horizontal);
        assert_eq!(Direction::Bottom.orientation(), Orientation::Horizontal);
        assert_eq!(Direction::Left.orientation(), Orientation::Vertical);
        assert_eq!(Direction::Right.orientation(), Orientation::Vertical);
    }

    // Tests a side moves by the rotation's number of quarter turns
    // Verified by rotating counterclockwise instead
    #[test]
    fn test_rotated_follows_quarter_turns() {
        assert_eq!(Direction::Top.rotated(Rotation::None), Direction::Top);
        assert_eq!(Direction::Top.rotated(Rotation::Clockwise), Direction::Right);
        assert_eq!(Direction::Top.rotated(Rotation::Half), Direction::Bottom);
        assert_eq!(
            Direction::Top.rotated(Rotation::Counterclockwise),
            Direction::Left
        );
        assert_eq!(Direction::Left.rotated(Rotation::Clockwise), Direction::Top);
    }

    // Tests a clockwise step reverses the edges arriving on top and bottom only
    // Verified by marking Top to Right as reversing
    #[test]
    fn test_clockwise_transitions() {
        assert!(Direction::transition_reverses(Direction::Left, Direction::Top));
        assert!(!Direction::transition_reverses(Direction::Top, Direction::Right));
        assert!(Direction::transition_reverses(Direction::Right, Direction::Bottom));
        assert!(!Direction::transition_reverses(Direction::Bottom, Direction::Left));
    }

    // Tests counterclockwise and opposite moves, and staying put
    // Verified by dropping the opposite-side entries from the table
    #[test]
    fn test_other_transitions() {
        assert!(Direction::transition_reverses(Direction::Top, Direction::Left));
        assert!(Direction::transition_reverses(Direction::Bottom, Direction::Right));
        assert!(!Direction::transition_reverses(Direction::Right, Direction::Top));
        assert!(!Direction::transition_reverses(Direction::Left, Direction::Bottom));

        for direction in Direction::ALL {
            assert!(Direction::transition_reverses(direction, direction.opposite()));
            assert!(!Direction::transition_reverses(direction, direction));
        }
    }

    // Tests only the four cross-axis pairs reverse during comparison
    // Verified by making comparison symmetric
    #[test]
    fn test_comparison_reversal_pairs() {
        let reversing = [
            (Direction::Top, Direction::Left),
            (Direction::Right, Direction::Top),
            (Direction::Bottom, Direction::Right),
            (Direction::Left, Direction::Bottom),
        ];

        for first in Direction::ALL {
            for second in Direction::ALL {
                let expected = reversing.contains(&(first, second));
                if first.orientation() == second.orientation() {
                    assert!(!expected, "{first} and {second} share an axis");
                }
                assert_eq!(
                    first.comparison_reverses(second),
                    expected,
                    "{first} against {second}"
                );
            }
        }
    }

    // Tests index and from_index agree and wrap modulo four
    // Verified by removing the modulo
    #[test]
    fn test_index_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_index(direction.index()), direction);
            assert_eq!(Direction::from_index(direction.index() + 4), direction);
        }
    }

    // Tests display names
    // Verified by printing lowercase names
    #[test]
    fn test_display() {
        assert_eq!(Direction::Top.to_string(), "TOP");
        assert_eq!(Direction::Left.to_string(), "LEFT");
    }
}
