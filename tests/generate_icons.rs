use std::fs;
use std::path::{Path, PathBuf};

use glyphgen::{generate, generate_all, icons, Error, GeneratorConfig};
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("glyphgen-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn config_for(dir: &Path) -> GeneratorConfig {
    GeneratorConfig {
        output_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

fn load(path: &Path) -> RgbaImage {
    let img = image::open(path).expect("written file should decode");
    assert!(img.color().has_alpha(), "{:?} has no alpha channel", path);
    img.to_rgba8()
}

fn assert_transparent_corners(img: &RgbaImage) {
    assert_eq!(img.dimensions(), (64, 64));
    for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
        assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({}, {}) should be transparent", x, y);
    }
}

#[test]
fn arrow_up_pixels() {
    let dir = scratch_dir("arrow");
    let path = generate(&icons::arrow_up(), &config_for(&dir)).expect("generate");
    assert_eq!(path, dir.join("ic_arrow_up.png"));

    let img = load(&path);
    assert_transparent_corners(&img);
    assert_eq!(*img.get_pixel(32, 10), WHITE, "arrow head");
    assert_eq!(*img.get_pixel(32, 50), WHITE, "arrow shaft");
    assert_eq!(img.get_pixel(2, 2)[3], 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn refresh_pixels() {
    let dir = scratch_dir("refresh");
    let path = generate(&icons::refresh(), &config_for(&dir)).expect("generate");

    let img = load(&path);
    assert_transparent_corners(&img);
    assert_eq!(*img.get_pixel(32, 10), WHITE, "top of the ring");
    assert_eq!(img.get_pixel(32, 32)[3], 0, "centre stays hollow");
    // arrowhead interior
    assert_eq!(*img.get_pixel(52, 20), WHITE);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generate_all_writes_both_icons() {
    let dir = scratch_dir("all");
    let paths = generate_all(&config_for(&dir)).expect("generate_all");
    assert_eq!(
        paths,
        vec![dir.join("ic_arrow_up.png"), dir.join("ic_refresh.png")]
    );
    for p in &paths {
        assert_transparent_corners(&load(p));
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = scratch_dir("idempotent");
    let cfg = config_for(&dir);
    for def in icons::builtin() {
        let path = generate(&def, &cfg).expect("first run");
        let first = fs::read(&path).unwrap();
        generate(&def, &cfg).expect("second run");
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second, "{} changed between runs", def.name);
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generating_one_icon_leaves_the_other_alone() {
    let dir = scratch_dir("independent");
    let cfg = config_for(&dir);

    generate(&icons::arrow_up(), &cfg).expect("arrow");
    assert!(!dir.join("ic_refresh.png").exists());

    fs::write(dir.join("ic_refresh.png"), b"sentinel").unwrap();
    generate(&icons::arrow_up(), &cfg).expect("arrow again");
    assert_eq!(fs::read(dir.join("ic_refresh.png")).unwrap(), b"sentinel");

    fs::write(dir.join("ic_arrow_up.png"), b"sentinel").unwrap();
    generate(&icons::refresh(), &cfg).expect("refresh");
    assert_eq!(fs::read(dir.join("ic_arrow_up.png")).unwrap(), b"sentinel");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_location_fails_with_io_error() {
    let dir = scratch_dir("unwritable");
    fs::create_dir_all(&dir).unwrap();
    // a regular file where the output directory should be
    let blocker = dir.join("assets");
    fs::write(&blocker, b"not a directory").unwrap();

    let cfg = config_for(&blocker);
    let err = generate(&icons::arrow_up(), &cfg).unwrap_err();
    match err {
        Error::Io { ref path, .. } => assert!(path.starts_with(&blocker), "{:?}", path),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(!blocker.join("ic_arrow_up.png").exists());
    assert_eq!(fs::read(&blocker).unwrap(), b"not a directory");

    let _ = fs::remove_dir_all(&dir);
}
