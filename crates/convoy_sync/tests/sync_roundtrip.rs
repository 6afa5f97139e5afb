//! Round-trip and truncation behaviour of every sync packet kind.
//!
//! Run with: cargo test --package convoy_sync --test sync_roundtrip

use convoy_shared::Vec3;
use convoy_sync::protocol::{compress_steering, compress_velocity, decompress_velocity};
use convoy_sync::{
    decode_basic_sync, decode_character_light_sync, decode_character_sync,
    decode_vehicle_light_sync, decode_vehicle_sync, encode_basic_sync,
    encode_character_light_sync, encode_character_sync, encode_vehicle_light_sync,
    encode_vehicle_sync, AimData, BasicSnapshot, CharacterFlags, CharacterLightSnapshot,
    CharacterSnapshot, SyncError, VehicleDynamics, VehicleFlags, VehicleLightSnapshot,
    VehicleSnapshot,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VELOCITY_STEP: f32 = 1.0 / 256.0;
const STEERING_STEP: f32 = 90.0 / 255.0;

fn random_vec3(rng: &mut StdRng, range: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
    )
}

fn random_velocity(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.gen_range(0.0..255.0),
        rng.gen_range(0.0..255.0),
        rng.gen_range(0.0..255.0),
    )
}

fn assert_velocity_close(actual: Vec3, expected: Vec3) {
    assert!(
        actual.approx_eq(expected, VELOCITY_STEP),
        "velocity {actual:?} not within one step of {expected:?}"
    );
}

// ============================================================================
// QUANTIZATION
// ============================================================================

#[test]
fn velocity_quantization_within_one_step() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..10_000 {
        let v: f32 = rng.gen_range(0.0..256.0);
        let back = decompress_velocity(compress_velocity(v));
        assert!((v - back).abs() < VELOCITY_STEP, "v={v} back={back}");
    }
}

#[test]
fn steering_reference_points() {
    assert_eq!(compress_steering(-45.0), 0);
    assert!(compress_steering(0.0).abs_diff(128) <= 1);
    assert_eq!(compress_steering(45.0), 255);
}

// ============================================================================
// CHARACTER
// ============================================================================

#[test]
fn character_sync_randomized_roundtrip() {
    let mut rng = StdRng::seed_from_u64(7);
    let groups = [
        CharacterFlags::NONE,
        CharacterFlags::RAGDOLL,
        CharacterFlags::AIMING,
        CharacterFlags::SHOOTING | CharacterFlags::RAGDOLL,
        CharacterFlags::IN_COVER | CharacterFlags::RELOADING,
    ];

    for flags in groups {
        for _ in 0..200 {
            let pitch_roll = flags.carries_pitch_roll();
            let s = CharacterSnapshot {
                net_handle: Some(rng.gen_range(1..i32::MAX)),
                flags,
                position: random_vec3(&mut rng, 5000.0),
                rotation: Vec3::new(
                    if pitch_roll { rng.gen_range(-180.0..180.0) } else { 0.0 },
                    if pitch_roll { rng.gen_range(-180.0..180.0) } else { 0.0 },
                    rng.gen_range(-180.0..180.0),
                ),
                velocity: random_velocity(&mut rng),
                health: rng.gen(),
                armor: rng.gen(),
                speed: rng.gen_range(0..4),
                aim: flags.carries_aim().then(|| AimData {
                    weapon: rng.gen(),
                    target: random_vec3(&mut rng, 5000.0),
                }),
            };

            let back = decode_character_sync(&encode_character_sync(&s).unwrap()).unwrap();
            assert_velocity_close(back.velocity, s.velocity);
            assert_eq!(back, CharacterSnapshot { velocity: back.velocity, ..s });
        }
    }
}

#[test]
fn character_ragdoll_branch_is_visible_in_length() {
    let base = CharacterSnapshot {
        net_handle: Some(9),
        rotation: Vec3::new(10.0, 20.0, 30.0),
        ..CharacterSnapshot::default()
    };
    let ragdoll = CharacterSnapshot { flags: CharacterFlags::RAGDOLL, ..base };

    let a = encode_character_sync(&base).unwrap();
    let b = encode_character_sync(&ragdoll).unwrap();
    assert_ne!(a.len(), b.len());

    assert_eq!(decode_character_sync(&a).unwrap().rotation, Vec3::new(0.0, 0.0, 30.0));
    assert_eq!(decode_character_sync(&b).unwrap().rotation, Vec3::new(10.0, 20.0, 30.0));
}

#[test]
fn character_light_truncated_latency_decodes() {
    let s = CharacterLightSnapshot {
        net_handle: Some(77),
        model: 0x0B4A_1F32,
        weapon: 0x1B06_D571,
        latency: Some(0.064),
    };
    let bytes = encode_character_light_sync(&s);
    assert_eq!(bytes.len(), 14);

    let back = decode_character_light_sync(&bytes[..12]).unwrap();
    assert_eq!(back, CharacterLightSnapshot { latency: None, ..s });

    // One stray byte is not enough for a latency either.
    let back = decode_character_light_sync(&bytes[..13]).unwrap();
    assert_eq!(back.latency, None);
}

#[test]
fn character_light_truncated_handle_underflows() {
    let bytes = encode_character_light_sync(&CharacterLightSnapshot::default());
    assert_eq!(
        decode_character_light_sync(&bytes[..2]),
        Err(SyncError::Underflow { offset: 0, needed: 4, remaining: 2 })
    );
}

#[test]
fn character_every_prefix_of_mandatory_block_fails() {
    let bytes = encode_character_sync(&CharacterSnapshot::default()).unwrap();
    for len in 0..bytes.len() {
        assert!(
            matches!(decode_character_sync(&bytes[..len]), Err(SyncError::Underflow { .. })),
            "prefix of {len} bytes decoded"
        );
    }
}

#[test]
fn light_latency_wire_value_truncates_toward_zero() {
    let wire_millis = |seconds: f32| {
        let s = CharacterLightSnapshot { latency: Some(seconds), ..CharacterLightSnapshot::default() };
        let bytes = encode_character_light_sync(&s);
        i16::from_le_bytes([bytes[12], bytes[13]])
    };
    assert_eq!((wire_millis(0.0456), wire_millis(-0.0456)), (45, -45));
}

#[test]
fn character_latency_has_millisecond_resolution() {
    let s = CharacterLightSnapshot { latency: Some(0.1234), ..CharacterLightSnapshot::default() };
    let back = decode_character_light_sync(&encode_character_light_sync(&s)).unwrap();
    assert!((back.latency.unwrap() - 0.123).abs() < 1e-6);
}

// ============================================================================
// VEHICLE
// ============================================================================

#[test]
fn vehicle_sync_randomized_roundtrip() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let flags = VehicleFlags::from_bits(rng.gen());
        let s = VehicleSnapshot {
            net_handle: Some(rng.gen_range(1..10_000)),
            health: rng.gen(),
            armor: rng.gen(),
            flags,
            aim: flags.carries_aim().then(|| AimData {
                weapon: rng.gen(),
                target: random_vec3(&mut rng, 3000.0),
            }),
            dynamics: flags.carries_dynamics().then(|| VehicleDynamics {
                position: random_vec3(&mut rng, 3000.0),
                rotation: random_vec3(&mut rng, 180.0),
                velocity: random_velocity(&mut rng),
                health: f32::from(rng.gen_range(-4000i16..1000)),
                rpm: rng.gen_range(0.0..=1.0),
                steering: rng.gen_range(-45.0..=45.0),
            }),
        };

        let back = decode_vehicle_sync(&encode_vehicle_sync(&s).unwrap()).unwrap();
        assert_eq!(back.net_handle, s.net_handle);
        assert_eq!(back.flags, s.flags);
        assert_eq!((back.health, back.armor), (s.health, s.armor));
        assert_eq!(back.aim, s.aim);
        assert_eq!(back.dynamics.is_some(), s.dynamics.is_some());

        if let (Some(got), Some(want)) = (back.dynamics, s.dynamics) {
            assert_eq!(got.position, want.position);
            assert_eq!(got.rotation, want.rotation);
            assert_velocity_close(got.velocity, want.velocity);
            assert_eq!(got.health, want.health);
            assert!((got.rpm - want.rpm).abs() <= 1.0 / 255.0);
            assert!((got.steering - want.steering).abs() <= STEERING_STEP + 1e-4);
        }
    }
}

#[test]
fn vehicle_missing_aim_refused() {
    let s = VehicleSnapshot { flags: VehicleFlags::SHOOTING, ..VehicleSnapshot::default() };
    assert!(matches!(
        encode_vehicle_sync(&s),
        Err(SyncError::MissingField { field: "aim", .. })
    ));
}

#[test]
fn vehicle_light_trailer_marker() {
    let absent = VehicleLightSnapshot {
        net_handle: Some(4),
        vehicle_handle: 900,
        seat: 2,
        ..VehicleLightSnapshot::default()
    };
    let bytes = encode_vehicle_light_sync(&absent);
    assert_eq!(*bytes.last().unwrap(), 0x00);
    assert_eq!(decode_vehicle_light_sync(&bytes).unwrap(), absent);

    let trailer = Vec3::new(-0.0, f32::MIN_POSITIVE, 1.0e9);
    let present = VehicleLightSnapshot { trailer: Some(trailer), ..absent };
    let bytes = encode_vehicle_light_sync(&present);
    assert_eq!(bytes[17], 0x01);
    assert_eq!(bytes.len(), 18 + 12);
    assert!(decode_vehicle_light_sync(&bytes).unwrap().trailer.unwrap().bits_eq(trailer));
}

#[test]
fn vehicle_light_nonzero_marker_means_present() {
    let mut bytes = encode_vehicle_light_sync(&VehicleLightSnapshot {
        trailer: Some(Vec3::new(1.0, 2.0, 3.0)),
        ..VehicleLightSnapshot::default()
    });
    bytes[17] = 0x7F;
    let back = decode_vehicle_light_sync(&bytes).unwrap();
    assert_eq!(back.trailer, Some(Vec3::new(1.0, 2.0, 3.0)));
}

// ============================================================================
// BASIC
// ============================================================================

#[test]
fn basic_sync_exact() {
    let s = BasicSnapshot::new(42, Vec3::new(1.0, 2.0, 3.0));
    let bytes = encode_basic_sync(&s);
    assert_eq!(bytes.len(), 16);

    let back = decode_basic_sync(&bytes).unwrap();
    assert_eq!(back.net_handle, 42);
    assert_eq!(back.position, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn decoders_ignore_newer_trailing_fields() {
    let s = BasicSnapshot::new(3, Vec3::new(4.0, 5.0, 6.0));
    let mut bytes = encode_basic_sync(&s);
    bytes.extend_from_slice(&[0xDE, 0xAD]);
    assert_eq!(decode_basic_sync(&bytes).unwrap(), s);
}
