use seabattle::{BitBoard, BitBoardError, Coordinate};

#[test]
fn test_insert_and_contains() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert_eq!(bb.len(), 0);

    let at = Coordinate::new(1, 2);
    assert_eq!(bb.insert(at), Ok(true));
    assert_eq!(bb.insert(at), Ok(false));
    assert!(bb.contains(at));
    assert!(!bb.contains(Coordinate::new(2, 1)));
    assert_eq!(bb.len(), 1);

    bb.clear();
    assert!(!bb.contains(at));
    assert_eq!(bb.len(), 0);
}

#[test]
fn test_off_grid_coordinates() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(!bb.contains(Coordinate::new(-1, 0)));
    assert!(!bb.contains(Coordinate::new(0, 4)));
    assert_eq!(
        bb.insert(Coordinate::new(4, 0)),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
    assert_eq!(bb.len(), 0);
}

#[test]
fn test_full_grid() {
    let mut bb = BitBoard::<u16, 4>::new();
    for r in 0..4 {
        for c in 0..4 {
            assert!(!bb.is_full());
            bb.insert(Coordinate::new(r, c)).unwrap();
        }
    }
    assert!(bb.is_full());
    assert_eq!(bb.len(), 16);
}
