use sheetpack_core::prelude::*;

fn sheet(w: u32, h: u32, rotate: bool) -> Sheet {
    Sheet::new(
        SheetConfig::builder()
            .with_max_dimensions(w, h)
            .allow_rotation(rotate)
            .build(),
    )
}

#[test]
fn fills_a_row_then_opens_a_new_shelf() {
    let mut layout = ShelfLayout::new(sheet(10, 10, false));
    let out = layout
        .add(vec![Sprite::new(4, 3), Sprite::new(4, 3), Sprite::new(3, 4)])
        .unwrap();

    assert!(out.remaining.is_empty());
    assert_eq!(out.placed.len(), 3);
    assert_eq!((out.placed[0].rect.x, out.placed[0].rect.y), (0, 0));
    assert_eq!((out.placed[1].rect.x, out.placed[1].rect.y), (4, 0));
    assert_eq!((out.placed[2].rect.x, out.placed[2].rect.y), (0, 3));
    assert!(out.placed.iter().all(|s| !s.rotated));

    assert_eq!(layout.shelf_count(), 2);
    let (start0, _) = layout.shelf(0).unwrap();
    let (start1, _) = layout.shelf(1).unwrap();
    assert_eq!(start0, 0);
    assert_eq!(start1, 3);
}

#[test]
fn shelf_rects_share_baseline_and_pack_contiguously() {
    let mut layout = ShelfLayout::new(sheet(10, 10, false));
    let out = layout
        .add(vec![
            Sprite::new(3, 4),
            Sprite::new(3, 4),
            Sprite::new(3, 4),
            Sprite::new(5, 2),
        ])
        .unwrap();
    assert!(out.remaining.is_empty());

    // The flat sprite wastes the least on a fresh shelf, so it takes the
    // bottom row alone; the tall trio shares the shelf above it.
    let (start0, rects0) = layout.shelf(0).unwrap();
    assert_eq!(start0, 0);
    assert_eq!(rects0, &[Rect::new(0, 0, 5, 2)]);

    let (start1, rects1) = layout.shelf(1).unwrap();
    assert_eq!(start1, 2);
    assert_eq!(rects1.len(), 3);
    let mut edge = 0;
    for r in rects1 {
        assert_eq!(r.y, start1);
        assert_eq!(r.x, edge);
        edge = r.right();
    }
}

#[test]
fn wide_sprite_rotates_to_fill_shelf_height() {
    let mut layout = ShelfLayout::new(sheet(10, 10, true));

    // A fresh shelf prefers the shorter edge as its height.
    let first = layout.add(vec![Sprite::new(4, 6)]).unwrap();
    assert!(first.placed[0].rotated);
    assert_eq!(first.placed[0].rect, Rect::new(0, 0, 6, 4));

    // On the established 4-high shelf the 4x3 sprite stands upright to
    // consume the full shelf height.
    let second = layout.add(vec![Sprite::new(4, 3)]).unwrap();
    assert!(second.placed[0].rotated);
    assert_eq!(second.placed[0].rect, Rect::new(6, 0, 3, 4));
}

#[test]
fn best_scoring_sprite_is_placed_first() {
    // The narrow-tall sprite scores worse for a fresh shelf, so the flat one
    // is committed first even though it comes later in the input.
    let mut layout = ShelfLayout::new(sheet(10, 10, false));
    let out = layout
        .add(vec![Sprite::new(2, 6), Sprite::new(6, 2)])
        .unwrap();
    assert!(out.remaining.is_empty());

    // Output stays in input order regardless of placement order.
    assert_eq!(out.placed[0].rect, Rect::new(0, 2, 2, 6));
    assert_eq!(out.placed[1].rect, Rect::new(0, 0, 6, 2));
}
