use seabattle::{BoardError, Coordinate, Orientation, Ship};

#[test]
fn test_cells_horizontal() -> Result<(), BoardError> {
    let ship = Ship::new(Coordinate::new(2, 1), 3, Orientation::Horizontal)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(2, 1),
            Coordinate::new(2, 2),
            Coordinate::new(2, 3)
        ]
    );
    Ok(())
}

#[test]
fn test_cells_vertical_and_hit() -> Result<(), BoardError> {
    let ship = Ship::new(Coordinate::new(0, 0), 4, Orientation::Vertical)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0], ship.bow());
    for (i, c) in cells.iter().enumerate() {
        assert_eq!(*c, Coordinate::new(i as i32, 0));
        assert!(ship.is_hit_by(*c));
    }
    assert!(!ship.is_hit_by(Coordinate::new(4, 0)));
    assert!(!ship.is_hit_by(Coordinate::new(0, 1)));
    Ok(())
}

#[test]
fn test_cells_may_leave_grid() -> Result<(), BoardError> {
    // geometry does not know about the board
    let ship = Ship::new(Coordinate::new(-1, 5), 2, Orientation::Horizontal)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(-1, 5), Coordinate::new(-1, 6)]);
    Ok(())
}

#[test]
fn test_new_ship_is_afloat() -> Result<(), BoardError> {
    let ship = Ship::new(Coordinate::new(1, 1), 2, Orientation::Vertical)?;
    assert_eq!(ship.lives(), 2);
    assert_eq!(ship.length(), 2);
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert!(!ship.is_sunk());
    Ok(())
}

#[test]
fn test_zero_length_rejected() {
    let err = Ship::new(Coordinate::new(0, 0), 0, Orientation::Horizontal).unwrap_err();
    assert_eq!(err, BoardError::InvalidShipLength);
}

#[test]
fn test_orientation_codes() {
    assert_eq!(Orientation::from_code(0), Some(Orientation::Horizontal));
    assert_eq!(Orientation::from_code(1), Some(Orientation::Vertical));
    assert_eq!(Orientation::from_code(2), None);
}

#[test]
fn test_neighborhood_is_three_by_three() {
    let around: Vec<_> = Coordinate::new(0, 0).neighborhood().collect();
    assert_eq!(around.len(), 9);
    assert_eq!(around[0], Coordinate::new(-1, -1));
    assert_eq!(around[4], Coordinate::new(0, 0));
    assert_eq!(around[8], Coordinate::new(1, 1));
}

#[test]
fn test_coordinate_display_is_one_indexed() {
    assert_eq!(Coordinate::new(2, 3).to_string(), "3 4");
}

#[test]
fn test_cells_saturate_at_integer_limit() -> Result<(), BoardError> {
    let ship = Ship::new(Coordinate::new(i32::MAX - 1, 0), 3, Orientation::Vertical)?;
    let rows: Vec<i32> = ship.cells().map(|c| c.row).collect();
    assert_eq!(rows, vec![i32::MAX - 1, i32::MAX, i32::MAX]);
    assert_eq!(
        Coordinate::new(i32::MAX, i32::MIN).to_string(),
        "2147483648 -2147483647"
    );
    Ok(())
}
