use super::*;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn builtin_has_ten_tracks_with_parseable_labels() {
    let catalog = builtin();
    assert_eq!(catalog.len(), 10);
    for track in catalog.tracks() {
        assert!(
            parse_duration_label(&track.duration_label).is_some(),
            "bad label on {:?}: {:?}",
            track.title,
            track.duration_label
        );
        assert!(!track.title.trim().is_empty());
        assert!(!track.audio.trim().is_empty());
        assert!(!track.artwork.trim().is_empty());
    }
}

#[test]
fn builtin_reference_entry_at_index_three() {
    let catalog = builtin();
    let track = catalog.get(3).unwrap();
    assert_eq!(track.duration_label, "2:58");
}

#[test]
fn next_and_prev_are_inverse_for_every_index() {
    let catalog = builtin();
    for i in 0..catalog.len() {
        assert_eq!(catalog.next_index(catalog.prev_index(i)), i);
        assert_eq!(catalog.prev_index(catalog.next_index(i)), i);
    }
}

#[test]
fn navigation_wraps_at_both_ends() {
    let catalog = builtin();
    assert_eq!(catalog.next_index(9), 0);
    assert_eq!(catalog.prev_index(0), 9);
    assert_eq!(catalog.next_index(4), 5);
    assert_eq!(catalog.prev_index(5), 4);
}

#[test]
fn validate_index_rejects_out_of_range() {
    let catalog = builtin();
    assert_eq!(catalog.validate_index(0).unwrap(), 0);
    assert_eq!(catalog.validate_index(9).unwrap(), 9);
    assert!(catalog.validate_index(10).is_err());
    assert!(catalog.validate_index(usize::MAX).is_err());
}

#[test]
fn wrap_index_folds_into_catalog() {
    let catalog = builtin();
    assert_eq!(catalog.wrap_index(3), 3);
    assert_eq!(catalog.wrap_index(10), 0);
    assert_eq!(catalog.wrap_index(13), 3);
}

#[test]
fn parse_duration_label_accepts_minute_second_form() {
    assert_eq!(parse_duration_label("2:45"), Some(Duration::from_secs(165)));
    assert_eq!(parse_duration_label("0:07"), Some(Duration::from_secs(7)));
    assert_eq!(parse_duration_label("12:00"), Some(Duration::from_secs(720)));
    assert_eq!(parse_duration_label(" 3:10 "), Some(Duration::from_secs(190)));
}

#[test]
fn parse_duration_label_rejects_malformed_labels() {
    assert_eq!(parse_duration_label(""), None);
    assert_eq!(parse_duration_label("245"), None);
    assert_eq!(parse_duration_label("2:5"), None);
    assert_eq!(parse_duration_label("2:75"), None);
    assert_eq!(parse_duration_label("x:30"), None);
    assert_eq!(parse_duration_label("2:4x"), None);
}

#[test]
fn find_asset_matches_stem_and_extension_case_insensitively() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("audio")).unwrap();
    fs::write(dir.path().join("audio").join("zapato.MP3"), b"not real audio").unwrap();
    fs::write(dir.path().join("zapato.txt"), b"ignore me").unwrap();

    let found = find_asset(dir.path(), "zapato", AUDIO_EXTENSIONS).unwrap();
    assert_eq!(found.file_name().unwrap(), "zapato.MP3");

    assert!(find_asset(dir.path(), "missing", AUDIO_EXTENSIONS).is_none());
    assert!(find_asset(Path::new("/definitely/not/here"), "zapato", AUDIO_EXTENSIONS).is_none());
}

#[test]
fn resolve_assets_fills_paths_and_leaves_misses_none() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("zapato.mp3"), b"not real audio").unwrap();
    fs::write(dir.path().join("zapato.png"), b"not a real png").unwrap();

    let mut catalog = builtin();
    catalog.resolve_assets(dir.path());

    let zapato = catalog.get(0).unwrap();
    assert!(zapato.audio_path.is_some());
    assert!(zapato.artwork_path.is_some());

    let mostaza = catalog.get(1).unwrap();
    assert!(mostaza.audio_path.is_none());
    assert!(mostaza.artwork_path.is_none());
}
