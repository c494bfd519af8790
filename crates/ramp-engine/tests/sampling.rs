use ramp_engine::gradient::{
    Gradient, GradientError, InterpolationFunction, InterpolationMode, NormalizeMode, SpreadMode, Stop,
};
use ramp_engine::paint::blend::blend2_color;
use ramp_engine::paint::{Color, Colorspace};

fn black_white(spread: SpreadMode) -> Gradient {
    Gradient::new(
        [Stop::new(0.0, Color::black()), Stop::new(1.0, Color::white())],
        InterpolationMode::default(),
        spread,
        NormalizeMode::Normalize,
    )
}

fn red() -> Color { Color::new(1.0, 0.0, 0.0, 1.0) }
fn blue() -> Color { Color::new(0.0, 0.0, 1.0, 1.0) }

// ── totality ──────────────────────────────────────────────────────────────

#[test]
fn at_is_defined_everywhere() {
    let probes = [
        -1e300, -7.25, -1.0, -1e-300, 0.0, 1e-16, 0.5, 1.0 - 1e-16, 1.0, 1.5, 2.0, 1e300,
        f64::MIN_POSITIVE, f64::INFINITY, f64::NEG_INFINITY, f64::NAN,
    ];
    for function in InterpolationFunction::ALL {
        for colorspace in Colorspace::ALL {
            for spread in SpreadMode::ALL {
                let g = Gradient::builder()
                    .stop(0.0, red())
                    .weighted_stop(0.2, Color::white(), 0.1)
                    .weighted_stop(0.7, Color::new(0.1, 0.8, 0.3, 0.5), 0.9)
                    .stop(1.0, blue())
                    .mode(InterpolationMode::new(function, colorspace))
                    .spread(spread)
                    .build();
                for p in probes {
                    let c = g.at(p);
                    assert!(c.is_finite(), "{function:?} {colorspace} {spread} at {p}: {c:?}");
                    assert_eq!(c, c.clamped(), "{function:?} {colorspace} {spread} at {p}: {c:?}");
                }
            }
        }
    }
}

// ── render ────────────────────────────────────────────────────────────────

#[test]
fn render_counts() {
    let g = black_white(SpreadMode::Pad);
    assert!(g.render(0).is_empty());
    for n in [1, 2, 3, 10, 257] {
        assert_eq!(g.render(n).len(), n);
    }
    assert_eq!(g.render(1)[0], g.at(0.0));
}

#[test]
fn render_matches_point_evaluation() {
    let g = black_white(SpreadMode::Pad);
    let r = g.render(11);
    for (i, c) in r.iter().enumerate() {
        assert_eq!(*c, g.at(i as f64 / 10.0));
    }
}

// ── normalization ─────────────────────────────────────────────────────────

#[test]
fn normalization_is_idempotent() {
    let mut g = Gradient::default();
    g.set_stops(
        [Stop::new(-2.0, red()), Stop::new(1.3, Color::white()), Stop::new(6.0, blue())],
        NormalizeMode::Normalize,
    );
    let first: Vec<f64> = g.stops().positions().collect();
    assert_eq!(first.first(), Some(&0.0));
    assert_eq!(first.last(), Some(&1.0));

    g.set_stops(g.stops().to_vec(), NormalizeMode::Normalize);
    let second: Vec<f64> = g.stops().positions().collect();
    assert_eq!(first, second);
}

#[test]
fn truncate_spans_full_domain() {
    let g = Gradient::new(
        [Stop::new(0.3, red()), Stop::new(0.6, blue()), Stop::new(3.0, Color::white())],
        InterpolationMode::default(),
        SpreadMode::Pad,
        NormalizeMode::Truncate,
    );
    let positions: Vec<f64> = g.stops().positions().collect();
    assert_eq!(positions, vec![0.0, 0.3, 0.6, 1.0]);
    assert_eq!(g.at(0.1), red());
    assert_eq!(g.at(0.9), blue());
}

// ── black to white ────────────────────────────────────────────────────────

#[test]
fn black_white_pad() {
    let g = black_white(SpreadMode::Pad);
    assert_eq!(g.at(0.0), Color::black());
    assert_eq!(g.at(1.0), Color::white());
    assert_eq!(g.at(0.5), Color::new(0.5, 0.5, 0.5, 1.0));
    assert_eq!(g.at(0.5).to_srgb_u8(), [128, 128, 128, 255]);
    assert_eq!(g.at(-1.0), Color::black());
    assert_eq!(g.at(2.0), Color::white());
}

#[test]
fn black_white_repeat() {
    let g = black_white(SpreadMode::Repeat);
    assert_eq!(g.at(1.5), g.at(0.5));
    assert_eq!(g.at(-0.5), g.at(0.5));
}

#[test]
fn black_white_reflect() {
    let g = black_white(SpreadMode::Reflect);
    assert_eq!(g.at(1.5), g.at(0.5));
    assert_eq!(g.at(2.0), g.at(0.0));
}

// ── weights ───────────────────────────────────────────────────────────────

#[test]
fn half_weight_linear_is_plain_midpoint() {
    for colorspace in Colorspace::ALL {
        let g = Gradient::builder()
            .weighted_stop(0.0, red(), 0.5)
            .stop(1.0, blue())
            .colorspace(colorspace)
            .build();
        let expected = blend2_color(red(), blue(), 0.5, colorspace);
        assert!(g.at(0.5).approx_eq(expected, 1e-6), "{colorspace}");
    }
}

#[test]
fn discrete_switches_at_weight() {
    let g = Gradient::builder()
        .weighted_stop(0.0, red(), 0.3)
        .stop(1.0, blue())
        .function(InterpolationFunction::Discrete)
        .build();
    assert_eq!(g.at(0.2), red());
    assert_eq!(g.at(0.5), blue());
}

// ── degenerate stop sets ──────────────────────────────────────────────────

#[test]
fn single_stop_gradient() {
    let c = Color::new(0.2, 0.4, 0.6, 0.8);
    for function in InterpolationFunction::ALL {
        let g = Gradient::builder().stop(0.42, c).function(function).build();
        for p in [-3.0, 0.0, 0.42, 1.0, 9.0, f64::NAN] {
            assert_eq!(g.at(p), c);
        }
    }
}

#[test]
fn empty_gradient_is_transparent() {
    let g = Gradient::empty();
    for p in [-1.0, 0.0, 0.5, 1.0, 2.0] {
        assert_eq!(g.at(p), Color::transparent());
    }
    assert_eq!(g.render(3), vec![Color::transparent(); 3]);
}

// ── insert / remove ───────────────────────────────────────────────────────

#[test]
fn insert_rejection_and_retrieval() {
    let mut g = Gradient::default();
    assert_eq!(
        g.insert_stop(Stop::new(0.0, red())),
        Err(GradientError::StopOutOfRange { position: 0.0 })
    );
    assert_eq!(
        g.insert_stop(Stop::new(1.0, red())),
        Err(GradientError::StopOutOfRange { position: 1.0 })
    );
    assert_eq!(g.insert_stop(Stop::new(0.5, red())), Ok(None));
    assert_eq!(g.stops().get(0.5).map(|s| s.color), Some(red()));
    assert_eq!(g.at(0.5), red());
}

#[test]
fn remove_reports_presence() {
    let mut g = Gradient::default();
    g.insert_stop(Stop::new(0.25, red())).unwrap();
    assert!(g.remove_stop(0.25).is_some());
    assert!(g.remove_stop(0.25).is_none());
    assert_eq!(g.stops().len(), 2);
}

// ── colorspaces ───────────────────────────────────────────────────────────

#[test]
fn hsv_red_to_blue_passes_through_magenta() {
    let g = Gradient::builder()
        .stop(0.0, red())
        .stop(1.0, blue())
        .colorspace(Colorspace::Hsv)
        .build();
    // 0° -> 240° is shorter backwards through 300° (magenta) than forwards through green.
    let mid = g.at(0.5);
    assert!(mid.approx_eq(Color::new(1.0, 0.0, 1.0, 1.0), 1e-5), "{mid:?}");
}

#[test]
fn cubic_passes_through_every_stop() {
    let stops = [
        Stop::new(0.0, red()),
        Stop::weighted(0.35, Color::new(0.9, 0.9, 0.1, 1.0), 0.2),
        Stop::weighted(0.6, Color::new(0.1, 0.7, 0.2, 1.0), 0.8),
        Stop::new(1.0, blue()),
    ];
    for colorspace in Colorspace::ALL {
        let g = Gradient::new(
            stops,
            InterpolationMode::new(InterpolationFunction::Cubic, colorspace),
            SpreadMode::Pad,
            NormalizeMode::Normalize,
        );
        for s in stops {
            assert_eq!(g.at(s.position), s.color, "{colorspace} at {}", s.position);
        }
    }
}
