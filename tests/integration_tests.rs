//! Integration Tests
//!
//! End-to-end behavior of the layered strip through its public API.

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use test_case::test_case;

use layerstrip::script::Script;
use layerstrip::{
    IndexAxis, LayeredStrip, MemorySink, Rgb, SetOptions, StripConfig, StripError,
};

/// Helper to create a strip backed by a recording sink
fn create_strip(pixels: usize, layers: usize) -> LayeredStrip<MemorySink> {
    LayeredStrip::with_layers(MemorySink::new(pixels), layers).unwrap()
}

/// Helper to snapshot every cell of a strip
fn snapshot(strip: &LayeredStrip<MemorySink>) -> Vec<(Rgb, f64)> {
    let mut cells = Vec::new();
    for pixel in 0..strip.pixel_count() {
        for layer in 0..strip.layer_count() {
            let cell = strip.cell(pixel, layer).unwrap();
            cells.push((cell.color, cell.alpha));
        }
    }
    cells
}

// === Reference Scenario ===

#[test]
fn test_two_layer_scenario() {
    let mut strip = create_strip(1, 2);

    strip
        .set(0, Rgb::new(0, 255, 0), SetOptions::on_layer(1))
        .unwrap();
    strip
        .set(0, Rgb::new(255, 0, 0), SetOptions::on_layer(0).alpha(0.5))
        .unwrap();
    assert_eq!(strip.composite(0).unwrap(), Rgb::new(128, 128, 0));

    strip.relinquish(0).unwrap();
    assert_eq!(strip.composite(0).unwrap(), Rgb::new(0, 255, 0));

    // layer 1 is the boundary and survives
    strip.relinquishto(1).unwrap();
    assert_eq!(strip.composite(0).unwrap(), Rgb::new(0, 255, 0));

    strip.relinquish(1).unwrap();
    assert_eq!(strip.composite(0).unwrap(), Rgb::BLACK);
    assert_eq!(strip.sink().show_count(), 0);
}

// === Compositing Properties ===

#[test]
fn test_default_background_is_black() {
    let strip = create_strip(5, 4);
    assert_eq!(strip.composite_all(), vec![Rgb::BLACK; 5]);
}

#[test_case(0 ; "top layer")]
#[test_case(1 ; "middle layer")]
#[test_case(3 ; "bottom layer")]
fn test_opaque_layer_overrides_everything_below(k: usize) {
    let mut strip = create_strip(3, 4);
    let pixel = 1;
    strip
        .set(pixel, Rgb::new(10, 200, 30), SetOptions::on_layer(k))
        .unwrap();
    let expected = strip.composite(pixel).unwrap();
    assert_eq!(expected, Rgb::new(10, 200, 30));

    for below in (k + 1)..4 {
        strip
            .set(pixel, Rgb::new(255, 0, 255), SetOptions::on_layer(below).alpha(0.6))
            .unwrap();
        assert_eq!(strip.composite(pixel).unwrap(), expected);
    }
}

#[test]
fn test_decimal_alpha_rounds_ties_away_from_zero() {
    let mut strip = create_strip(1, 1);
    strip
        .setw(0, Rgb::new(5, 15, 105), SetOptions::new().alpha(0.7))
        .unwrap();
    assert_eq!(strip.composite(0).unwrap(), Rgb::new(4, 11, 74));
    assert_eq!(strip.sink().last_frame().unwrap(), &[Rgb::new(4, 11, 74)]);
}

#[test]
fn test_transparent_layer_is_noop() {
    let mut strip = create_strip(2, 3);
    strip
        .set(0, Rgb::new(40, 50, 60), SetOptions::on_layer(2).alpha(0.7))
        .unwrap();
    strip
        .set(0, Rgb::new(90, 10, 10), SetOptions::on_layer(1).alpha(0.3))
        .unwrap();
    let before = strip.composite(0).unwrap();

    strip
        .set(0, Rgb::WHITE, SetOptions::on_layer(0).alpha(0.0))
        .unwrap();
    assert_eq!(strip.composite(0).unwrap(), before);
}

#[test]
fn test_relinquish_matches_never_set() {
    let mut reference = create_strip(4, 3);
    let mut strip = create_strip(4, 3);
    for pixel in 0..4 {
        let shade = (pixel * 60) as u8;
        for s in [&mut reference, &mut strip] {
            s.set(pixel, Rgb::new(shade, 0, 255 - shade), SetOptions::on_layer(2))
                .unwrap();
            s.set(pixel, Rgb::new(0, shade, 0), SetOptions::on_layer(0).alpha(0.4))
                .unwrap();
        }
        strip
            .set(pixel, Rgb::new(200, 200, 200), SetOptions::on_layer(1).alpha(0.5))
            .unwrap();
    }

    strip.relinquish(1).unwrap();
    assert_eq!(strip.composite_all(), reference.composite_all());
}

#[test]
fn test_relinquish_above_boundary() {
    let mut strip = create_strip(3, 4);
    for pixel in 0..3 {
        for layer in 0..4 {
            strip
                .set(
                    pixel,
                    Rgb::new(pixel as u8, layer as u8, 7),
                    SetOptions::on_layer(layer).alpha(0.9),
                )
                .unwrap();
        }
    }
    let before = snapshot(&strip);

    strip.relinquishto(2).unwrap();

    for pixel in 0..3 {
        for layer in 0..4 {
            let cell = strip.cell(pixel, layer).unwrap();
            if layer < 2 {
                assert!(cell.is_transparent());
            } else {
                assert_eq!((cell.color, cell.alpha), before[pixel * 4 + layer]);
            }
        }
    }
}

#[test]
fn test_fade_full_equals_relinquish() {
    let mut faded = create_strip(2, 2);
    let mut cleared = create_strip(2, 2);
    for s in [&mut faded, &mut cleared] {
        s.set(0, Rgb::RED, SetOptions::on_layer(0).alpha(0.8)).unwrap();
        s.set(0, Rgb::BLUE, SetOptions::on_layer(1)).unwrap();
        s.set(1, Rgb::GREEN, SetOptions::on_layer(0)).unwrap();
    }

    faded.fade(0, 1.0).unwrap();
    cleared.relinquish(0).unwrap();
    assert_eq!(faded.composite_all(), cleared.composite_all());
}

#[test]
fn test_fade_halves_alpha() {
    let mut strip = create_strip(1, 2);
    strip
        .set(0, Rgb::WHITE, SetOptions::on_layer(1).alpha(0.6))
        .unwrap();
    strip.fade(1, 0.5).unwrap();
    assert_relative_eq!(strip.cell(0, 1).unwrap().alpha, 0.3, epsilon = 1e-6);
}

// === Range Rejection ===

#[test_case(4, 0, 1.0 ; "pixel equal to N")]
#[test_case(0, 3, 1.0 ; "layer equal to L")]
#[test_case(0, 0, 1.5 ; "alpha above one")]
#[test_case(0, 0, -0.1 ; "alpha below zero")]
fn test_invalid_set_changes_nothing(pixel: usize, layer: usize, alpha: f64) {
    let mut strip = create_strip(4, 3);
    strip
        .set(2, Rgb::new(1, 2, 3), SetOptions::on_layer(1).alpha(0.5))
        .unwrap();
    let before = snapshot(&strip);

    let opts = SetOptions::on_layer(layer).alpha(alpha);
    assert!(strip.set(pixel, Rgb::WHITE, opts).is_err());
    assert!(strip.setw(pixel, Rgb::WHITE, opts).is_err());

    assert_eq!(snapshot(&strip), before);
    assert_eq!(strip.sink().show_count(), 0);
}

#[test]
fn test_error_kinds() {
    let mut strip = create_strip(4, 3);
    match strip.set(4, Rgb::WHITE, SetOptions::new()) {
        Err(StripError::IndexOutOfRange { axis, index, limit }) => {
            assert_eq!((axis, index, limit), (IndexAxis::Pixel, 4, 4));
        }
        other => panic!("expected pixel range error, got {:?}", other),
    }
    match strip.set(0, Rgb::WHITE, SetOptions::on_layer(3)) {
        Err(StripError::IndexOutOfRange { axis, .. }) => assert_eq!(axis, IndexAxis::Layer),
        other => panic!("expected layer range error, got {:?}", other),
    }
    let err = strip
        .set(0, Rgb::WHITE, SetOptions::new().alpha(1.5))
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_ALPHA");
    assert!(err.is_caller_error());

    assert!(strip.relinquish(3).is_err());
    assert!(strip.relinquishto(3).is_err());
}

// === Sink Pushes ===

#[test]
fn test_batched_sets_single_write() {
    let mut strip = create_strip(3, 2);
    strip.set(0, Rgb::RED, SetOptions::new()).unwrap();
    strip.set(1, Rgb::GREEN, SetOptions::new()).unwrap();
    strip.set(2, Rgb::BLUE, SetOptions::on_layer(1)).unwrap();
    assert_eq!(strip.sink().show_count(), 0);

    strip.write();
    assert_eq!(strip.sink().show_count(), 1);
    assert_eq!(
        strip.sink().last_frame().unwrap(),
        &[Rgb::RED, Rgb::GREEN, Rgb::BLUE]
    );
}

#[test]
fn test_setw_updates_only_its_pixel() {
    let mut strip = create_strip(3, 2);
    strip.write();
    strip.set(0, Rgb::RED, SetOptions::new()).unwrap();
    strip.setw(2, Rgb::BLUE, SetOptions::new().alpha(0.5)).unwrap();

    assert_eq!(
        strip.sink().last_frame().unwrap(),
        &[Rgb::BLACK, Rgb::BLACK, Rgb::new(0, 0, 128)]
    );
}

#[test]
fn test_config_default_layer() {
    let config = StripConfig {
        layer_count: 3,
        default_layer: 2,
    };
    let mut strip = LayeredStrip::new(MemorySink::new(1), config).unwrap();
    strip.set(0, Rgb::WHITE, SetOptions::new()).unwrap();
    assert_eq!(strip.cell(0, 2).unwrap().color, Rgb::WHITE);
    assert!(strip.cell(0, 0).unwrap().is_transparent());
}

#[test]
fn test_script_replay() {
    let script = Script::from_json_str(
        r#"[
            { "op": "set", "pixel": 0, "r": 0, "g": 255, "b": 0, "layer": 1 },
            { "op": "set", "pixel": 0, "r": 255, "g": 0, "b": 0, "alpha": 0.5, "layer": 0 },
            { "op": "write" },
            { "op": "relinquishw", "layer": 0 },
            { "op": "fadew", "layer": 1, "scale": 1.0 }
        ]"#,
    )
    .unwrap();

    let mut strip = create_strip(1, 2);
    script.apply(&mut strip).unwrap();

    let frames: Vec<Rgb> = strip.sink().frames().iter().map(|f| f[0]).collect();
    assert_eq!(
        frames,
        vec![Rgb::new(128, 128, 0), Rgb::new(0, 255, 0), Rgb::BLACK]
    );
}
