use field_core::*;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn ticks_to_settle(config: SpringConfig, start: f32) -> usize {
    let mut s = Spring::with_value(config, start);
    s.set_target(0.0);
    for tick in 1..=2_000 {
        s.update(DT);
        if s.is_at_rest() {
            return tick;
        }
    }
    panic!("spring {config:?} did not settle");
}

#[test]
fn zero_input_settles_within_bounded_ticks() {
    let floating = ticks_to_settle(MotionPreset::FLOATING.spring, 25.0);
    let tilt = ticks_to_settle(MotionPreset::HERO_TILT.spring, 25.0);
    assert!(floating < 600, "floating took {floating} ticks");
    assert!(tilt < 600, "tilt took {tilt} ticks");
}

#[test]
fn stiffer_preset_converges_strictly_faster() {
    let floating = ticks_to_settle(SpringConfig::new(25.0, 150.0), 25.0);
    let tilt = ticks_to_settle(SpringConfig::new(30.0, 100.0), 25.0);
    assert!(floating < tilt, "floating={floating} tilt={tilt}");
}

#[test]
fn output_moves_continuously() {
    let mut s = Spring::new(SpringConfig::new(25.0, 150.0));
    s.set_target(30.0);
    let mut prev = s.value();
    for _ in 0..120 {
        let v = s.update(DT);
        assert!((v - prev).abs() < 5.0, "jump from {prev} to {v}");
        prev = v;
    }
    assert!((prev - 30.0).abs() < 0.5);
}

#[test]
fn presets_do_not_overshoot_noticeably() {
    // both presets are at or above critical damping
    for preset in [MotionPreset::FLOATING, MotionPreset::HERO_TILT] {
        assert!(preset.spring.damping_ratio() >= 1.0);
        let mut s = Spring::new(preset.spring);
        s.set_target(10.0);
        for _ in 0..600 {
            assert!(s.update(DT) <= 10.05);
        }
    }
}

#[test]
fn non_finite_targets_and_dt_are_ignored() {
    let mut s = Spring::with_value(SpringConfig::new(25.0, 150.0), 3.0);
    s.set_target(f32::NAN);
    assert_eq!(s.target(), 3.0);
    s.set_target(5.0);
    assert_eq!(s.update(0.0), 3.0);
    assert_eq!(s.update(-1.0), 3.0);
}

#[test]
fn tilt_inverts_x_for_rotate_y() {
    let t = Tilt::from_offset(Vec2::new(10.0, 4.0));
    assert_eq!(t.rotate_x_deg, 2.0);
    assert_eq!(t.rotate_y_deg, -5.0);
}

#[test]
fn layer_scale_follows_input_source() {
    assert_eq!(MotionLayer::new(MotionPreset::FLOATING, InputSource::Pointer).scale(), 25.0);
    assert_eq!(MotionLayer::new(MotionPreset::FLOATING, InputSource::Orientation).scale(), 30.0);
    assert_eq!(MotionLayer::new(MotionPreset::ABOUT_TILT, InputSource::Orientation).scale(), 15.0);
}

#[test]
fn consumers_share_input_but_respond_differently() {
    let mut rig = MotionRig::new(InputSource::Pointer);
    let input = Vec2::new(1.0, -1.0);
    for _ in 0..600 {
        rig.update(input, DT);
    }
    assert!((rig.floating.offset() - Vec2::new(25.0, -25.0)).length() < 0.05);
    assert!((rig.hero.offset() - Vec2::new(15.0, -15.0)).length() < 0.05);
    assert!((rig.about.offset() - Vec2::new(10.0, -10.0)).length() < 0.05);

    let hero = rig.hero.tilt();
    assert!((hero.rotate_x_deg + 7.5).abs() < 0.05);
    assert!((hero.rotate_y_deg + 7.5).abs() < 0.05);
}

#[test]
fn floating_elements_scale_the_shared_offset() {
    let mut rig = MotionRig::new(InputSource::Orientation);
    for _ in 0..600 {
        rig.update(Vec2::new(1.0, 0.0), DT);
    }
    let base = rig.floating.offset();
    for factor in FLOATING_FACTORS {
        assert_eq!(rig.floating_offset(factor), base * factor);
    }
}

#[test]
fn faster_preset_leads_after_a_step_input() {
    let mut rig = MotionRig::new(InputSource::Pointer);
    for _ in 0..10 {
        rig.update(Vec2::new(1.0, 0.0), DT);
    }
    let floating_progress = rig.floating.offset().x / rig.floating.scale();
    let hero_progress = rig.hero.offset().x / rig.hero.scale();
    assert!(floating_progress > hero_progress);
}
