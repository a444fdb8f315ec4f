use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn next_prev_wrap_around() {
    let mut app = App::new(3, 20);
    app.prev();
    assert_eq!(app.cursor, 2);
    app.next();
    assert_eq!(app.cursor, 0);
    app.next();
    app.next();
    assert_eq!(app.cursor, 2);
}

#[test]
fn top_and_bottom() {
    let mut app = App::new(5, 20);
    app.bottom();
    assert_eq!(app.cursor, 4);
    app.top();
    assert_eq!(app.cursor, 0);
}

#[test]
fn set_cursor_ignores_out_of_range() {
    let mut app = App::new(5, 20);
    app.set_cursor(3);
    app.set_cursor(5);
    assert_eq!(app.cursor, 3);
}

#[test]
fn sync_cursor_respects_follow_mode() {
    let mut app = App::new(5, 20);
    app.sync_cursor(2);
    assert_eq!(app.cursor, 2);

    app.follow_current_off();
    app.sync_cursor(4);
    assert_eq!(app.cursor, 2);

    app.follow_current_on();
    app.sync_cursor(4);
    assert_eq!(app.cursor, 4);
}

#[test]
fn metadata_window_toggles() {
    let mut app = App::new(1, 20);
    assert!(!app.metadata_window);
    app.toggle_metadata_window();
    assert!(app.metadata_window);
    app.toggle_metadata_window();
    assert!(!app.metadata_window);
}

#[test]
fn visualizer_moves_only_while_playing() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut app = App::new(5, 20);
    assert_eq!(app.levels.len(), 20);

    app.refresh_visualizer(true, &mut rng);
    assert!(app.levels.iter().all(|l| VISUALIZER_PLAYING.contains(l)));

    app.refresh_visualizer(false, &mut rng);
    assert!(app.levels.iter().all(|&l| l == VISUALIZER_IDLE));
}
