use debris_shooter::projection::Projection;

fn terminal_80x24() -> Projection {
    Projection::new(80, 24, 800, 600)
}

#[test]
fn corners_map_to_terminal_corners() {
    let p = terminal_80x24();
    assert_eq!(p.to_cell(0, 600), Some((0, 0))); // top-left
    assert_eq!(p.to_cell(0, 0), Some((0, 23))); // bottom-left, clamped to last row
    assert_eq!(p.to_cell(800, 0), Some((79, 23))); // bottom-right, clamped to last column
    assert_eq!(p.to_cell(800, 600), Some((79, 0)));
}

#[test]
fn centre_maps_to_centre() {
    let p = terminal_80x24();
    assert_eq!(p.to_cell(400, 300), Some((40, 12)));
}

#[test]
fn y_axis_is_flipped() {
    let p = terminal_80x24();
    let (_, high) = p.to_cell(100, 500).unwrap();
    let (_, low) = p.to_cell(100, 100).unwrap();
    assert!(high < low);
}

#[test]
fn points_outside_playfield_are_hidden() {
    let p = terminal_80x24();
    assert_eq!(p.to_cell(-1, 300), None);
    assert_eq!(p.to_cell(801, 300), None);
    assert_eq!(p.to_cell(400, -1), None);
    assert_eq!(p.to_cell(400, 601), None);
}

#[test]
fn zero_sized_terminal_hides_everything() {
    let p = Projection::new(0, 0, 800, 600);
    assert_eq!(p.to_cell(400, 300), None);
    assert_eq!(p.to_cell_rect(0, 0, 800, 600), None);
}

#[test]
fn resize_changes_cells_not_playfield() {
    let mut p = terminal_80x24();
    p.resize(160, 48);
    assert_eq!(p.cols, 160);
    assert_eq!(p.rows, 48);
    assert_eq!(p.width, 800);
    assert_eq!(p.height, 600);
    assert_eq!(p.to_cell(400, 300), Some((80, 24)));
}

#[test]
fn rect_covers_box_top_to_bottom() {
    let p = terminal_80x24();
    // 20 × 20 box centred on (100, 500)
    assert_eq!(p.to_cell_rect(90, 490, 110, 510), Some((9, 3, 11, 4)));
}

#[test]
fn rect_is_clipped_to_playfield() {
    let p = terminal_80x24();
    assert_eq!(p.to_cell_rect(790, 590, 810, 610), Some((79, 0, 79, 0)));
    assert_eq!(p.to_cell_rect(-30, -30, -10, -10), None);
}
