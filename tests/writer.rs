use screenwriter::ScreenWriter;
use screenwriter::draw::{
    BLUE, DrawCall, GREEN, RED, RecordingSurface, Rect, RenderStyle, Shape, ShapeId, ShapeKind,
    WHITE,
};

fn session() -> ScreenWriter<RecordingSurface> {
    ScreenWriter::new(RecordingSurface::new(320, 240), RenderStyle::default())
}

fn polygon_points(writer: &ScreenWriter<RecordingSurface>, id: ShapeId) -> Vec<(i32, i32)> {
    match writer.store().get(id) {
        Some(Shape::Polygon { points, .. }) => points.clone(),
        other => panic!("expected polygon at {:?}, got {:?}", id, other),
    }
}

#[test]
fn deleting_first_shape_promotes_the_line() {
    let mut writer = session();
    assert_eq!(writer.draw_rectangle(0, 0, 10, 10, RED), ShapeId(0));
    assert_eq!(writer.draw_line(0, 0, 5, 5, BLUE), ShapeId(1));

    writer.delete_shape(ShapeId(0));

    assert_eq!(writer.store().len(), 1);
    assert_eq!(
        writer.store().get(ShapeId(0)),
        Some(&Shape::Line {
            x1: 0,
            y1: 0,
            x2: 5,
            y2: 5,
            color: BLUE,
        })
    );
}

#[test]
fn moving_a_polygon_shifts_every_point() {
    let mut writer = session();
    writer.draw_line(1, 1, 2, 2, RED);
    let id = writer
        .draw_polygon(&[(0, 0), (1, 1), (2, 0)], GREEN)
        .unwrap();

    writer.move_shape(id, 3, 4);
    assert_eq!(polygon_points(&writer, id), vec![(3, 4), (4, 5), (5, 4)]);

    writer.move_shape(id, -3, -4);
    assert_eq!(polygon_points(&writer, id), vec![(0, 0), (1, 1), (2, 0)]);
}

#[test]
fn move_round_trip_restores_every_kind() {
    let mut writer = session();
    let icon = writer.surface_mut().register_icon();
    let bitmap = writer.surface_mut().register_bitmap();
    writer.draw_rectangle(-5, 7, 3, 2, RED);
    writer.draw_line(0, 0, 100, 50, BLUE);
    writer.draw_polygon(&[(9, 9), (-1, 4)], GREEN).unwrap();
    writer.draw_icon(icon, 12, 34);
    writer.draw_bitmap(bitmap, 0, 0, -10, 0);
    let before = writer.store().shapes().to_vec();

    for index in 0..before.len() {
        writer.move_shape(ShapeId(index), 17, -23);
        assert_ne!(writer.store().shapes()[index], before[index]);
        writer.move_shape(ShapeId(index), -17, 23);
    }
    assert_eq!(writer.store().shapes(), before.as_slice());
}

#[test]
fn out_of_range_move_leaves_store_and_surface_alone() {
    let mut writer = session();
    writer.draw_rectangle(0, 0, 10, 10, RED);
    writer.draw_line(0, 0, 5, 5, BLUE);
    let before = writer.store().shapes().to_vec();
    writer.surface_mut().take_calls();

    writer.move_shape(ShapeId(99), 1, 1);

    assert_eq!(writer.store().shapes(), before.as_slice());
    assert!(writer.surface().calls().is_empty());
}

#[test]
fn delete_on_empty_store_is_a_no_op() {
    let mut writer = session();
    writer.delete_shape(ShapeId(0));
    assert!(writer.store().is_empty());
    assert!(writer.surface().calls().is_empty());
}

#[test]
fn move_redraws_everything_in_insertion_order() {
    let mut writer = session();
    writer.draw_rectangle(0, 0, 10, 10, RED);
    writer.draw_line(0, 0, 5, 5, BLUE);
    writer.surface_mut().take_calls();

    writer.move_shape(ShapeId(0), 10, 0);

    assert_eq!(
        writer.surface().calls(),
        &[
            DrawCall::FillRect {
                rect: Rect::new(0, 0, 320, 240),
                color: WHITE,
            },
            DrawCall::FillRect {
                rect: Rect::new(10, 0, 20, 10),
                color: RED,
            },
            DrawCall::StrokeLine {
                from: (0, 0),
                to: (5, 5),
                color: BLUE,
                width: 2.0,
            },
        ]
    );
}

#[test]
fn redraw_of_empty_session_only_clears() {
    let mut writer = session();
    writer.redraw_screen();
    assert_eq!(
        writer.surface().calls(),
        &[DrawCall::FillRect {
            rect: Rect::new(0, 0, 320, 240),
            color: WHITE,
        }]
    );
}

#[test]
fn stable_keys_track_shapes_across_deletes() {
    let mut writer = session();
    writer.draw_rectangle(0, 0, 1, 1, RED);
    let line = writer.draw_line(0, 0, 1, 1, BLUE);
    let key = writer.store().key_of(line).unwrap();

    writer.delete_shape(ShapeId(0));

    let now = writer.store().position_of(key).unwrap();
    assert_eq!(now, ShapeId(0));
    assert_eq!(writer.store().get(now).unwrap().kind(), ShapeKind::Line);
}
