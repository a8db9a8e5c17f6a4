use tetris_hint::engine::Session;
use tetris_hint::term::{FrameBuffer, GameView, Viewport};
use tetris_hint::types::{GameAction, ModeKind, PieceKind, Seat, Settings};

fn session(mode: ModeKind) -> Session {
    Session::new(Settings {
        mode,
        ..Settings::default()
    })
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    // With cell_w=2: board pixels = 10*2 by 20 => 20x20, plus border => 22x22.
    let fb = GameView::default().render(&session(ModeKind::Classic), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_landed_piece_two_chars_wide() {
    let mut s = session(ModeKind::Classic);
    s.apply(Seat::Main, GameAction::HardDrop);
    let piece = *s.player(Seat::Main).unwrap().piece().unwrap();

    let fb = GameView::default().render(&s, Viewport::new(22, 22));
    for (x, y) in piece.cells() {
        let px = 1 + 2 * x as u16;
        let py = 1 + y as u16;
        assert_eq!(fb.get(px, py).unwrap().ch, '█');
        assert_eq!(fb.get(px + 1, py).unwrap().ch, '█');
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let s = session(ModeKind::Classic);
    let narrow = screen_text(&GameView::default().render(&s, Viewport::new(22, 22)));
    assert!(!narrow.contains("NEXT"));

    let wide = screen_text(&GameView::default().render(&s, Viewport::new(60, 24)));
    assert!(wide.contains("MODE"));
    assert!(wide.contains("classic"));
    assert!(wide.contains("LEVEL"));
    assert!(wide.contains("LINES"));
    assert!(wide.contains("NEXT"));
    assert!(!wide.contains("HINT"));
}

/// First seed whose upcoming piece is `kind`
fn seed_with_next(kind: PieceKind) -> u32 {
    (0..10_000)
        .find(|&seed| {
            let s = Session::new(Settings {
                seed,
                ..Settings::default()
            });
            s.next_piece() == kind
        })
        .unwrap()
}

#[test]
fn term_view_previews_every_next_piece() {
    // 80 wide: boards and panel span 40 columns, centred from x=20; the
    // panel starts at x=44.
    for kind in PieceKind::ALL {
        let s = Session::new(Settings {
            seed: seed_with_next(kind),
            ..Settings::default()
        });
        let fb = GameView::default().render(&s, Viewport::new(80, 24));

        let preview: Vec<(u16, u16)> = (0..fb.height())
            .flat_map(|y| (44..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).unwrap().ch == '█')
            .collect();
        assert_eq!(preview.len(), 8, "{kind:?}");

        let next_row = (0..fb.height())
            .find(|&y| fb.row_text(y).contains("NEXT"))
            .unwrap();
        assert!(preview.iter().all(|&(_, y)| y > next_row + 1), "{kind:?}");
        assert!(preview.iter().all(|&(_, y)| y <= next_row + 5), "{kind:?}");
    }
}

#[test]
fn term_view_draws_hint_clue_and_panel_entry() {
    let s = session(ModeKind::Hinted);
    let text = screen_text(&GameView::default().render(&s, Viewport::new(60, 24)));
    assert!(text.contains('▒'));
    assert!(text.contains("HINT"));
    assert!(text.contains("rot"));
}

#[test]
fn term_view_ghost_shown_without_hint() {
    let s = session(ModeKind::Classic);
    let text = screen_text(&GameView::default().render(&s, Viewport::new(22, 22)));
    assert!(text.contains('░'));
    assert!(!text.contains('▒'));
}

#[test]
fn term_view_overlays_pause() {
    let mut s = session(ModeKind::Versus);
    s.apply(Seat::Main, GameAction::Pause);
    let text = screen_text(&GameView::default().render(&s, Viewport::new(80, 24)));
    assert!(text.contains("PAUSED"));
    assert!(text.contains("P1"));
    assert!(text.contains("P2"));
}

#[test]
fn render_into_reuses_buffer_across_sizes() {
    let s = session(ModeKind::Classic);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&s, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    view.render_into(&s, Viewport::new(22, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (22, 22));
}
