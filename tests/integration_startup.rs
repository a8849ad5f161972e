//! Integration test to ensure a session can start up and be played without errors.

use waypoint::{
    GameStatus, Grid, MoveOutcome, PixelPoint, Region, Session, SessionConfig, TileCoord,
    WaypointResult,
};

#[test]
fn test_basic_startup() -> WaypointResult<()> {
    let session = Session::new(SessionConfig::for_testing(12345))?;

    assert_eq!(session.grid().size(), 20);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.player_tile(), session.start());
    assert!(session.grid().is_open(session.start()));
    assert!(session.grid().is_open(session.goal()));
    assert!(session.start().manhattan_distance(session.goal()) >= 20 / 3);

    Ok(())
}

#[test]
fn test_seeded_sessions_are_identical() -> WaypointResult<()> {
    let a = Session::new(SessionConfig::for_testing(424242))?;
    let b = Session::new(SessionConfig::for_testing(424242))?;

    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.start(), b.start());
    assert_eq!(a.goal(), b.goal());

    Ok(())
}

#[test]
fn test_regenerated_maps_follow_the_seed() -> WaypointResult<()> {
    let mut a = Session::new(SessionConfig::for_testing(31337))?;
    let mut b = Session::new(SessionConfig::for_testing(31337))?;

    for _ in 0..5 {
        a.regenerate()?;
        b.regenerate()?;
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.goal(), b.goal());
    }

    Ok(())
}

#[test]
fn test_walk_to_goal_on_handmade_map() -> WaypointResult<()> {
    #[rustfmt::skip]
    let rows = [
        "##########",
        "##########",
        "##......##",
        "#######.##",
        "#######.##",
        "#######.##",
        "#######.##",
        "##########",
        "##########",
        "##########",
    ];
    let grid = Grid::from_ascii(&rows)?;
    let config = SessionConfig::new(10, 40, 40.0);
    let mut session = Session::from_parts(grid, TileCoord::new(2, 2), TileCoord::new(7, 6), config)?;

    // East along the corridor; the sixth step would hit the wall at column 8
    session.set_movement(1, 0);
    for _ in 0..5 {
        assert!(matches!(session.advance(), MoveOutcome::Moved(_)));
    }
    assert!(matches!(session.advance(), MoveOutcome::Blocked(_)));
    assert_eq!(session.player_tile(), TileCoord::new(7, 2));

    // South down the shaft to the goal
    session.set_movement(0, 1);
    for _ in 0..3 {
        assert!(matches!(session.advance(), MoveOutcome::Moved(_)));
    }
    assert_eq!(
        session.advance(),
        MoveOutcome::ReachedGoal(TileCoord::new(7, 6))
    );
    assert_eq!(session.status(), GameStatus::Won);

    session.reset_player();
    assert_eq!(session.player_position(), PixelPoint::new(100.0, 100.0));
    assert_eq!(session.status(), GameStatus::InProgress);

    Ok(())
}

#[test]
fn test_corner_cutting_is_checked_against_the_destination_only() -> WaypointResult<()> {
    // Only the destination tile is tested, so a diagonal step may pass a
    // blocked corner as long as it lands on an open tile.
    let mut grid = Grid::new(20);
    grid.carve(&Region::new(TileCoord::new(2, 2), 1, 1));
    grid.carve(&Region::new(TileCoord::new(3, 3), 8, 8));
    let config = SessionConfig::new(20, 40, 40.0);
    let mut session = Session::from_parts(grid, TileCoord::new(2, 2), TileCoord::new(10, 10), config)?;

    session.set_movement(1, 1);
    assert_eq!(session.advance(), MoveOutcome::Moved(TileCoord::new(3, 3)));

    Ok(())
}
