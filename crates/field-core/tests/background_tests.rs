mod common;

use common::{DrawCall, FakeHost, RecordingSurface};
use field_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn desktop(width: f32, height: f32) -> ParticleBackground {
    let mut rng = StdRng::seed_from_u64(42);
    ParticleBackground::new(classify("Mozilla/5.0 (Windows NT 10.0)"), width, height, &mut rng)
}

fn fire_pending(bg: &ParticleBackground, host: &mut FakeHost) {
    if let Some(handle) = bg.scheduler().pending() {
        host.fire(handle);
    }
}

#[test]
fn rendered_tick_clears_then_draws_particles_then_links() {
    let mut host = FakeHost::default();
    let mut surface = RecordingSurface::default();
    let mut bg = desktop(300.0, 200.0);
    bg.start(&mut host);

    assert_eq!(bg.tick(Vec2::ZERO, &mut surface, &mut host), TickOutcome::Rendered);
    assert_eq!(surface.calls.first(), Some(&DrawCall::Clear(Vec2::new(300.0, 200.0))));
    assert_eq!(surface.clears(), 1);
    assert_eq!(surface.circles(), 50);
    assert_eq!(surface.lines(), bg.links().len());

    let first_line = surface.calls.iter().position(|c| matches!(c, DrawCall::Line { .. }));
    let last_circle = surface.calls.iter().rposition(|c| matches!(c, DrawCall::Circle { .. }));
    if let (Some(line), Some(circle)) = (first_line, last_circle) {
        assert!(line > circle);
    }
}

#[test]
fn particles_use_fixed_hue_and_own_alpha() {
    let mut host = FakeHost::default();
    let mut surface = RecordingSurface::default();
    let mut bg = desktop(300.0, 200.0);
    bg.tick(Vec2::ZERO, &mut surface, &mut host);

    let circles: Vec<(f32, Rgba)> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Circle { radius, color, .. } => Some((*radius, *color)),
            _ => None,
        })
        .collect();
    for ((radius, color), p) in circles.iter().zip(bg.field().particles()) {
        assert_eq!(*radius, p.size());
        assert_eq!([color.r, color.g, color.b], FIELD_RGB);
        assert_eq!(color.a, p.alpha());
    }
}

#[test]
fn drawn_links_respect_threshold_and_width() {
    let mut host = FakeHost::default();
    let mut surface = RecordingSurface::default();
    let mut bg = desktop(200.0, 200.0);
    bg.tick(Vec2::new(0.5, 0.5), &mut surface, &mut host);

    for link in bg.links() {
        assert!(link.distance < DESKTOP_MAX_DISTANCE);
        assert!(link.alpha > 0.0 && link.alpha <= LINK_BASE_ALPHA);
    }
    for call in &surface.calls {
        if let DrawCall::Line { width, .. } = call {
            assert_eq!(*width, LINK_WIDTH);
        }
    }
}

#[test]
fn mobile_profile_draws_on_even_frames_only() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut host = FakeHost::default();
    let mut bg = ParticleBackground::new(DeviceProfile::MOBILE, 360.0, 640.0, &mut rng);
    bg.start(&mut host);

    let mut surface = RecordingSurface::default();
    fire_pending(&bg, &mut host);
    assert_eq!(bg.tick(Vec2::ZERO, &mut surface, &mut host), TickOutcome::Skipped);
    assert!(surface.calls.is_empty());
    assert_eq!(host.pending_frames(), 1);

    fire_pending(&bg, &mut host);
    assert_eq!(bg.tick(Vec2::ZERO, &mut surface, &mut host), TickOutcome::Rendered);
    assert_eq!(surface.circles(), 25);
}

#[test]
fn skipped_frames_do_not_move_particles() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut host = FakeHost::default();
    let mut bg = ParticleBackground::new(DeviceProfile::MOBILE, 360.0, 640.0, &mut rng);
    let before: Vec<Vec2> = bg.field().particles().iter().map(|p| p.position).collect();
    bg.tick(Vec2::new(1.0, 1.0), &mut RecordingSurface::default(), &mut host);
    let after: Vec<Vec2> = bg.field().particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
}

#[test]
fn canceled_background_ignores_a_late_tick() {
    let mut host = FakeHost::default();
    let mut surface = RecordingSurface::default();
    let mut bg = desktop(100.0, 100.0);
    bg.start(&mut host);
    bg.stop(&mut host);

    assert_eq!(bg.tick(Vec2::ZERO, &mut surface, &mut host), TickOutcome::Canceled);
    assert!(surface.calls.is_empty());
    assert_eq!(host.pending_frames(), 0);
}

#[test]
fn resize_mid_loop_keeps_invariants() {
    let mut host = FakeHost::default();
    let mut surface = RecordingSurface::default();
    let mut bg = desktop(800.0, 600.0);
    bg.start(&mut host);
    for i in 0..100 {
        if i % 10 == 0 {
            let w = 200.0 + (i as f32) * 3.0;
            bg.resize(w, w * 0.5);
        }
        bg.tick(Vec2::new(-1.0, 1.0), &mut surface, &mut host);
    }
    let b = bg.field().bounds();
    assert!(bg
        .field()
        .particles()
        .iter()
        .all(|p| p.position.x >= 0.0 && p.position.x < b.x && p.position.y >= 0.0 && p.position.y < b.y));
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(Rgba::new([0, 212, 170], 0.5).css(), "rgba(0, 212, 170, 0.5)");
}
