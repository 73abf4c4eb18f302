#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use log::LevelFilter;
    use seabattle::{
        parse_coord, parse_level, Board, BoardError, CliPlayer, Coordinate, Orientation, Player,
        Ship, ShotOutcome,
    };

    fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).expect("non utf8 output")
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3 4"), Ok(Coordinate::new(2, 3)));
        assert_eq!(parse_coord("  1\t6 \n"), Ok(Coordinate::new(0, 5)));
        // range is the board's business
        assert_eq!(parse_coord("0 7"), Ok(Coordinate::new(-1, 6)));
        assert!(parse_coord("").is_err());
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("1 2 3").is_err());
        assert!(parse_coord("a b").is_err());
        assert!(parse_coord("3,4").is_err());
        assert!(parse_coord("-2147483648 1").is_err());
        assert!(parse_coord("1 -2147483648").is_err());
    }

    #[test]
    fn test_select_target_reprompts_on_overflowing_input() {
        let mut p = player("-2147483648 1\n1 1\n");
        assert_eq!(p.select_target(6).unwrap(), Coordinate::new(0, 0));
        let out = output(p);
        assert_eq!(out.matches("out of range").count(), 1);
    }

    #[test]
    fn test_select_target_reprompts_on_bad_input() {
        let mut p = player("hello\n2\n5 x\n2 5\n");
        assert_eq!(p.select_target(6).unwrap(), Coordinate::new(1, 4));
        let out = output(p);
        assert_eq!(out.matches("Your move: ").count(), 4);
        assert_eq!(out.matches("Invalid input").count(), 3);
    }

    #[test]
    fn test_select_target_fails_on_closed_input() {
        let mut p = player("oops\n");
        assert!(p.select_target(6).is_err());
    }

    #[test]
    fn test_messages() {
        let mut p = player("");
        let at = Coordinate::new(0, 0);
        p.handle_rejected_target(at, &BoardError::OutOfBounds { row: 9, col: 9 });
        p.handle_rejected_target(at, &BoardError::AlreadyTargeted { row: 0, col: 0 });
        p.handle_shot_result(at, ShotOutcome::Hit);
        p.handle_shot_result(at, ShotOutcome::Sunk);
        p.handle_shot_result(at, ShotOutcome::Miss);
        p.handle_opponent_shot(Coordinate::new(2, 3), ShotOutcome::Miss);
        p.handle_match_end(true);
        let out = output(p);
        assert!(out.contains("off the board"));
        assert!(out.contains("already fired"));
        assert!(out.contains("1 1: ship hit!"));
        assert!(out.contains("1 1: ship sunk!"));
        assert!(out.contains("1 1: miss."));
        assert!(out.contains("Computer fires at 3 4: miss."));
        assert!(out.contains("You win!"));
    }

    #[test]
    fn test_show_boards_hides_enemy_fleet() {
        let mut own: Board = Board::new();
        own.add_ship(Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal).unwrap())
            .unwrap();
        let mut enemy = own.clone();
        enemy.set_hidden(true);

        let mut p = player("");
        p.show_boards(&own, &enemy);
        let out = output(p);
        let (mine, theirs) = out.split_once("Enemy board:").unwrap();
        assert!(mine.contains("Your board:"));
        assert!(mine.contains("1 | ■ | ■ | O"));
        assert!(!theirs.contains('■'));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
        assert_eq!(parse_level(None), LevelFilter::Warn);
    }
}
