use game::sfx::{
    BIG_EVENT_SFX_VOLUME, DROP_SFX_VOLUME, LINE_CLEAR_SFX_VOLUME, MOVE_SFX_VOLUME, MUSIC_VOLUME,
    START_SFX_VOLUME, Sfx,
};

#[test]
fn move_sfx_is_softer_than_other_actions() {
    assert!(
        MOVE_SFX_VOLUME < DROP_SFX_VOLUME,
        "expected MOVE_SFX_VOLUME < DROP_SFX_VOLUME (move should be softer)"
    );
    assert!(DROP_SFX_VOLUME < LINE_CLEAR_SFX_VOLUME);
    assert!(LINE_CLEAR_SFX_VOLUME < BIG_EVENT_SFX_VOLUME);
}

#[test]
fn music_sits_under_line_clears() {
    assert!(
        MUSIC_VOLUME < LINE_CLEAR_SFX_VOLUME,
        "expected MUSIC_VOLUME < LINE_CLEAR_SFX_VOLUME (music should sit under clears)"
    );
}

#[test]
fn sfx_volumes_are_in_valid_range() {
    for (name, v) in [
        ("move", MOVE_SFX_VOLUME),
        ("drop", DROP_SFX_VOLUME),
        ("line_clear", LINE_CLEAR_SFX_VOLUME),
        ("big_event", BIG_EVENT_SFX_VOLUME),
        ("start", START_SFX_VOLUME),
        ("music", MUSIC_VOLUME),
    ] {
        assert!(v > 0.0, "{name} volume must be > 0.0, got {v}");
        assert!(v <= 1.0, "{name} volume must be <= 1.0, got {v}");
    }
}

#[test]
fn every_effect_is_audible_and_short() {
    for sfx in Sfx::ALL {
        let tone = sfx.tone();
        assert!(tone.volume > 0.0, "{sfx:?}");
        assert!(tone.duration_ms > 0 && tone.duration_ms <= 500, "{sfx:?}");
        assert!(tone.sample_count() % 2 == 0, "{sfx:?}");
    }
}
