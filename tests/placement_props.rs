use battleship_solo::{
    place_ship, Cell, Field, FieldError, Orientation, PlacementSource, RandomPlacement,
    ScriptedPlacement,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Records the anchor bounds the placer asks for.
struct Recording {
    orientation: Orientation,
    bounds: Option<(usize, usize)>,
}

impl PlacementSource for Recording {
    fn pick_orientation(&mut self) -> Orientation {
        self.orientation
    }

    fn pick_anchor(&mut self, max_row: usize, max_col: usize) -> (usize, usize) {
        self.bounds = Some((max_row, max_col));
        (max_row, max_col)
    }
}

fn ship_cells(field: &Field) -> Vec<(usize, usize)> {
    field
        .cells()
        .filter(|&(_, _, c)| c == Cell::Ship)
        .map(|(r, c, _)| (r, c))
        .collect()
}

#[test]
fn test_scripted_placement() {
    let mut field = Field::new(5).unwrap();
    let mut source = ScriptedPlacement::new([(Orientation::Horizontal, 2, 1)]);
    let ship = place_ship(&mut field, &mut source, 3).unwrap();
    assert_eq!(ship.origin(), (2, 1));
    assert_eq!(ship_cells(&field), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_scripted_out_of_range_anchor() {
    let mut field = Field::new(5).unwrap();
    let mut source = ScriptedPlacement::new([(Orientation::Vertical, 3, 0)]);
    assert_eq!(
        place_ship(&mut field, &mut source, 3).unwrap_err(),
        FieldError::ShipOutOfBounds
    );
    assert!(field.ship().is_none());
    assert!(ship_cells(&field).is_empty());
}

#[test]
fn test_anchor_bounds_follow_orientation() {
    let mut field = Field::new(5).unwrap();
    let mut source = Recording {
        orientation: Orientation::Horizontal,
        bounds: None,
    };
    let ship = place_ship(&mut field, &mut source, 3).unwrap();
    assert_eq!(source.bounds, Some((4, 2)));
    assert_eq!(ship.origin(), (4, 2));

    let mut field = Field::new(5).unwrap();
    let mut source = Recording {
        orientation: Orientation::Vertical,
        bounds: None,
    };
    place_ship(&mut field, &mut source, 3).unwrap();
    assert_eq!(source.bounds, Some((2, 4)));
    assert_eq!(ship_cells(&field), vec![(2, 4), (3, 4), (4, 4)]);
}

#[test]
fn test_invalid_lengths() {
    let mut field = Field::new(5).unwrap();
    let mut source = RandomPlacement::new(SmallRng::seed_from_u64(7));
    assert_eq!(
        place_ship(&mut field, &mut source, 6).unwrap_err(),
        FieldError::InvalidShipLength {
            length: 6,
            dimension: 5
        }
    );
    assert_eq!(
        place_ship(&mut field, &mut source, 0).unwrap_err(),
        FieldError::InvalidShipLength {
            length: 0,
            dimension: 5
        }
    );
}

#[test]
fn test_second_placement_rejected() {
    let mut field = Field::new(5).unwrap();
    let mut source = RandomPlacement::new(SmallRng::seed_from_u64(42));
    place_ship(&mut field, &mut source, 3).unwrap();
    assert_eq!(
        place_ship(&mut field, &mut source, 3).unwrap_err(),
        FieldError::ShipAlreadyPlaced
    );
    assert_eq!(ship_cells(&field).len(), 3);
}

#[test]
fn test_reproducible_rng() {
    let mut a = RandomPlacement::new(SmallRng::seed_from_u64(12345));
    let mut b = RandomPlacement::new(SmallRng::seed_from_u64(12345));
    let mut fa = Field::new(5).unwrap();
    let mut fb = Field::new(5).unwrap();
    let sa = place_ship(&mut fa, &mut a, 3).unwrap();
    let sb = place_ship(&mut fb, &mut b, 3).unwrap();
    assert_eq!(sa, sb);
    // both generators consumed the same draws
    assert_eq!(
        a.into_inner().random::<u64>(),
        b.into_inner().random::<u64>()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn random_placement_is_collinear_and_in_bounds(
        seed in any::<u64>(),
        dim in 2usize..=11,
        len_pick in any::<usize>(),
    ) {
        let length = 1 + len_pick % dim;
        let mut field = Field::new(dim).unwrap();
        let mut source = RandomPlacement::new(SmallRng::seed_from_u64(seed));
        let ship = place_ship(&mut field, &mut source, length).unwrap();

        let cells = ship_cells(&field);
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells.clone(), ship.cells().collect::<Vec<_>>());

        let (r0, c0) = cells[0];
        for (i, &(r, c)) in cells.iter().enumerate() {
            prop_assert!(r < dim && c < dim);
            match ship.orientation() {
                Orientation::Horizontal => prop_assert_eq!((r, c), (r0, c0 + i)),
                Orientation::Vertical => prop_assert_eq!((r, c), (r0 + i, c0)),
            }
        }

        let water = field.cells().filter(|&(_, _, c)| c == Cell::Water).count();
        prop_assert_eq!(water, dim * dim - length);
    }
}
