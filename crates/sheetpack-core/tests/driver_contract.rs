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
fn oversize_sprite_is_left_behind() {
    for name in ["shelf", "stack", "max-rects"] {
        let mut layout = get_layout(name, sheet(5, 5, false)).unwrap();
        let out = layout
            .add(vec![Sprite::new(6, 1), Sprite::new(3, 3)])
            .unwrap();

        assert_eq!(out.placed.len(), 1, "{name}");
        assert_eq!(out.placed[0].rect, Rect::new(0, 0, 3, 3), "{name}");
        assert_eq!(out.remaining.len(), 1, "{name}");
        assert_eq!((out.remaining[0].rect.w, out.remaining[0].rect.h), (6, 1));
    }
}

#[test]
fn outputs_preserve_input_order() {
    // Mixed sizes so the driver commits out of input order; the outputs
    // must still read in input order.
    let sprites = vec![
        Sprite::new(2, 6),
        Sprite::new(9, 9),
        Sprite::new(6, 2),
        Sprite::new(9, 8),
    ];
    for name in ["shelf", "stack", "max-rects"] {
        let mut layout = get_layout(name, sheet(10, 10, false)).unwrap();
        let out = layout.add(sprites.clone()).unwrap();

        assert_eq!(
            out.placed.len() + out.remaining.len(),
            sprites.len(),
            "{name}"
        );

        // Each output sequence is a subsequence of the input.
        let mut cursor = 0;
        for s in &out.placed {
            let found = sprites[cursor..]
                .iter()
                .position(|i| (i.rect.w, i.rect.h) == (s.rect.w, s.rect.h));
            let found = found.unwrap_or_else(|| panic!("{name}: {s:?} out of order"));
            cursor += found + 1;
        }
        let mut cursor = 0;
        for s in &out.remaining {
            let found = sprites[cursor..]
                .iter()
                .position(|i| (i.rect.w, i.rect.h) == (s.rect.w, s.rect.h));
            let found = found.unwrap_or_else(|| panic!("{name}: {s:?} out of order"));
            cursor += found + 1;
        }
    }
}

#[test]
fn clear_is_idempotent_across_strategies() {
    let sprites = vec![
        Sprite::new(4, 3),
        Sprite::new(7, 2),
        Sprite::new(3, 8),
        Sprite::new(5, 5),
        Sprite::new(2, 2),
    ];
    for name in ["shelf", "stack", "max-rects"] {
        let mut reused = get_layout(name, sheet(12, 12, true)).unwrap();
        reused.add(sprites.clone()).unwrap();
        reused.clear();
        let repacked = reused.add(sprites.clone()).unwrap();

        let mut fresh = get_layout(name, sheet(12, 12, true)).unwrap();
        let first = fresh.add(sprites.clone()).unwrap();

        assert_eq!(first.placed, repacked.placed, "{name}");
        assert_eq!(first.remaining, repacked.remaining, "{name}");
    }
}

#[test]
fn mask_rejection_ends_the_run() {
    // The mask refuses everything, so the first chosen candidate fails at
    // commit time and the driver hands the whole input back.
    let cfg = SheetConfig::builder()
        .with_max_dimensions(10, 10)
        .allow_rotation(false)
        .build();
    let masked = Sheet::with_mask(cfg, |_| false);

    let mut layout = ShelfLayout::new(masked);
    let out = layout
        .add(vec![Sprite::new(3, 3), Sprite::new(2, 2)])
        .unwrap();

    assert!(out.placed.is_empty());
    assert_eq!(out.remaining.len(), 2);
}

#[test]
fn mask_carves_out_an_exclusion_zone() {
    // Keep the bottom row free: placements touching y < 2 are refused.
    // MaxRects proposes (0,0) first, so the run stops there.
    let cfg = SheetConfig::builder()
        .with_max_dimensions(10, 10)
        .allow_rotation(false)
        .build();
    let masked = Sheet::with_mask(cfg, |r| r.y >= 2);

    let mut layout = MaxRectsLayout::new(masked);
    let mut spr = Sprite::new(4, 4);
    assert!(layout.get_best(&[spr]).is_none());

    // A direct commit against the mask is refused as well.
    let p = Placement {
        index: 0,
        x: 0,
        y: 0,
        rotated: false,
    };
    assert!(!layout.place(&mut spr, &p));
    assert_eq!((spr.rect.x, spr.rect.y), (0, 0));
    assert!(layout.used_rects().is_empty());
}
