//! Integration tests for rashi, nakshatra and bhava classification.
//!
//! Pure math, no network or config.

use janma_vedic_base::{
    ALL_RASHIS, Graha, Nakshatra, Rashi, bhava_from_indices, deg_to_dms, dms_to_deg,
    nakshatra_from_longitude, nakshatra_from_tropical, rashi_for_bhava, rashi_from_longitude,
    rashi_from_tropical, whole_sign_bhava,
};

// ---------------------------------------------------------------------------
// Rashi
// ---------------------------------------------------------------------------

#[test]
fn rashi_sweep_all_12() {
    for (i, r) in ALL_RASHIS.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0; // midpoint of each rashi
        let info = rashi_from_longitude(lon);
        assert_eq!(info.rashi, *r, "rashi at {lon} deg");
        assert_eq!(info.rashi_index, i as u8);
    }
}

#[test]
fn rashi_exact_edges_start_next_sign() {
    for i in 1..12u8 {
        let edge = i as f64 * 30.0;
        assert_eq!(rashi_from_longitude(edge).rashi_index, i, "edge {edge}");
        assert_eq!(
            rashi_from_longitude(edge - 1e-9).rashi_index,
            i - 1,
            "just below {edge}"
        );
    }
}

#[test]
fn rashi_names_and_lords_table() {
    let expected = [
        ("Mesha", "Aries", "Mars"),
        ("Vrishabha", "Taurus", "Venus"),
        ("Mithuna", "Gemini", "Mercury"),
        ("Karka", "Cancer", "Moon"),
        ("Simha", "Leo", "Sun"),
        ("Kanya", "Virgo", "Mercury"),
        ("Tula", "Libra", "Venus"),
        ("Vrishchika", "Scorpio", "Mars"),
        ("Dhanu", "Sagittarius", "Jupiter"),
        ("Makara", "Capricorn", "Saturn"),
        ("Kumbha", "Aquarius", "Saturn"),
        ("Meena", "Pisces", "Jupiter"),
    ];
    for (r, (vedic, western, lord)) in ALL_RASHIS.iter().zip(expected) {
        assert_eq!(r.name(), vedic);
        assert_eq!(r.western_name(), western);
        assert_eq!(r.lord().english_name(), lord, "lord of {vedic}");
    }
}

#[test]
fn rashi_dms_precision() {
    // 45 deg 30' 15.5" within Vrishabha → degrees_in_rashi = 15.504306...
    let lon = 45.0 + 30.0 / 60.0 + 15.5 / 3600.0;
    let info = rashi_from_longitude(lon);
    assert_eq!(info.rashi, Rashi::Vrishabha);
    assert_eq!(info.dms.degrees, 15);
    assert_eq!(info.dms.minutes, 30);
    assert!((info.dms.seconds - 15.5).abs() < 0.01, "seconds = {}", info.dms.seconds);
}

#[test]
fn rashi_from_tropical_at_j2000() {
    // Tropical 280.5 − 23.85 → sidereal 256.65 → Dhanu (index 8, starts at 240)
    let info = rashi_from_tropical(280.5, 2_451_545.0);
    assert_eq!(info.rashi, Rashi::Dhanu);
    assert_eq!(info.rashi_index, 8);
    assert!((info.degrees_in_rashi - 16.65).abs() < 1e-9);
}

#[test]
fn dms_round_trip() {
    // 23.853 deg → 23 deg 51' 10.8"
    let d = deg_to_dms(23.853);
    let reconstructed = dms_to_deg(&d);
    assert!((reconstructed - 23.853).abs() < 1e-10, "reconstructed = {reconstructed}");
}

// ---------------------------------------------------------------------------
// Nakshatra
// ---------------------------------------------------------------------------

#[test]
fn nakshatra_sweep_all_27() {
    let span = 360.0 / 27.0;
    for i in 0..27u8 {
        let lon = i as f64 * span + span / 2.0; // midpoint
        let info = nakshatra_from_longitude(lon);
        assert_eq!(info.nakshatra_index, i, "nakshatra at {lon} deg");
    }
}

#[test]
fn nakshatra_exact_edges_start_next_segment() {
    // Every edge is a whole number of arc-minutes.
    for i in 1..27u8 {
        let edge_arcmin = i as f64 * 800.0;
        let info = nakshatra_from_longitude(edge_arcmin / 60.0);
        assert_eq!(info.nakshatra_index, i, "edge {edge_arcmin}'");
        assert_eq!(info.pada, 1, "edge {edge_arcmin}'");
    }
}

#[test]
fn nakshatra_pada_boundaries() {
    let span = 360.0 / 27.0;
    let pada_span = span / 4.0;

    assert_eq!(nakshatra_from_longitude(1.0).pada, 1);
    assert_eq!(nakshatra_from_longitude(pada_span + 0.5).pada, 2);
    assert_eq!(nakshatra_from_longitude(2.0 * pada_span + 0.5).pada, 3);
    assert_eq!(nakshatra_from_longitude(3.0 * pada_span + 0.5).pada, 4);
}

#[test]
fn nakshatra_scenario_95_degrees() {
    let info = nakshatra_from_longitude(95.0);
    assert_eq!(info.nakshatra_index, 7);
    assert_eq!(info.nakshatra, Nakshatra::Pushya);
    assert_eq!(info.pada, 1);
    assert_eq!(info.lord(), Graha::Shani);
    assert_eq!(info.nakshatra.deity(), "Brihaspati");
    assert_eq!(info.nakshatra.animal(), "Sheep");
}

#[test]
fn nakshatra_from_tropical_at_j2000() {
    // 256.65 / 13.333 = 19.25 → index 19 = Purva Ashadha, 3.317 deg in → pada 1
    let info = nakshatra_from_tropical(280.5, 2_451_545.0);
    assert_eq!(info.nakshatra, Nakshatra::PurvaAshadha);
    assert_eq!(info.pada, 1);
}

// ---------------------------------------------------------------------------
// Bhava
// ---------------------------------------------------------------------------

#[test]
fn bhava_scenario_kanya_from_mesha() {
    assert_eq!(bhava_from_indices(5, 0), Some(6));
    assert_eq!(whole_sign_bhava(Rashi::Kanya, Rashi::Mesha), 6);
}

#[test]
fn bhava_layout_labels() {
    // Karka lagna: bhava 1 Karka, bhava 7 Makara, bhava 12 Mithuna.
    assert_eq!(rashi_for_bhava(1, Rashi::Karka), Some(Rashi::Karka));
    assert_eq!(rashi_for_bhava(7, Rashi::Karka), Some(Rashi::Makara));
    assert_eq!(rashi_for_bhava(12, Rashi::Karka), Some(Rashi::Mithuna));
}
