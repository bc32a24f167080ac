//! Checkpoint Tests - Save/Load Generator State
//!
//! Critical invariants tested:
//! - Determinism: a restored generator continues the original stream
//! - Independence: original and restored generators do not share state
//! - Failed wide draws (`next_long`, `next_double`) consume nothing, so a
//!   retry continues the same stream as a restore

use collatz_rand::{CollatzRand, GeneratorSnapshot, RngError};

#[test]
fn test_fresh_snapshot_is_just_the_seed() {
    let rng = CollatzRand::with_seed(42);
    let snapshot = rng.snapshot().unwrap();

    assert_eq!(snapshot.seed, 42);
    assert!(snapshot.buffered_bits.is_empty());
}

#[test]
fn test_snapshot_captures_buffered_bits() {
    let rng = CollatzRand::with_seed(1);
    rng.next_int().unwrap();

    let snapshot = rng.snapshot().unwrap();
    assert_eq!(snapshot.seed, 0x655F50619);
    assert_eq!(snapshot.buffered_bits.len(), rng.buffered_bits().unwrap());
}

#[test]
fn test_restore_continues_stream() {
    let original = CollatzRand::with_seed(2024);
    for _ in 0..37 {
        original.next_short().unwrap();
    }

    let restored = CollatzRand::from_snapshot(&original.snapshot().unwrap());

    for i in 0..500 {
        assert_eq!(
            original.next_long().unwrap(),
            restored.next_long().unwrap(),
            "restored stream diverged at draw {}",
            i
        );
    }
}

#[test]
fn test_restore_through_json() {
    let original = CollatzRand::with_seed(0xABCDEF);
    original.next_double().unwrap();

    let json = original.snapshot().unwrap().to_json().unwrap();
    let restored = CollatzRand::from_snapshot(&GeneratorSnapshot::from_json(&json).unwrap());

    for _ in 0..100 {
        assert_eq!(original.next_int(), restored.next_int());
    }
}

#[test]
fn test_restored_generator_is_independent() {
    let original = CollatzRand::with_seed(5);
    original.next_int().unwrap();
    let snapshot = original.snapshot().unwrap();

    let restored = CollatzRand::from_snapshot(&snapshot);
    for _ in 0..10 {
        restored.next_long().unwrap();
    }

    assert_eq!(original.snapshot().unwrap(), snapshot);
}

#[test]
fn test_zero_seed_snapshot_with_buffer_drains_then_fails() {
    let snapshot = GeneratorSnapshot {
        seed: 0,
        buffered_bits: vec![true; 96],
    };
    assert!(!snapshot.is_degenerate());

    let rng = CollatzRand::from_snapshot(&snapshot);
    // 48-bit window of ones, top 8 bits kept
    assert_eq!(rng.next_byte().unwrap(), -1);
    // 48 bits left, but a draw needs 48 + width buffered
    assert_eq!(
        rng.next_byte().unwrap_err(),
        RngError::DegenerateSeed
    );
    assert_eq!(rng.buffered_bits().unwrap(), 48);
}

#[test]
fn test_interrupted_next_long_retries_like_a_restore() {
    let rng = CollatzRand::with_seed(1);
    for _ in 0..4 {
        rng.next_int().unwrap();
    }
    let before = rng.snapshot().unwrap();
    assert_eq!(before.buffered_bits.len(), 87);

    // Interrupt lands on the refill both windows need
    rng.interrupt_handle().interrupt();
    assert!(matches!(rng.next_long(), Err(RngError::Interrupted { .. })));
    assert_eq!(rng.buffered_bits().unwrap(), 87);

    let expected = CollatzRand::from_snapshot(&before).next_long().unwrap();
    assert_eq!(rng.next_long().unwrap(), expected);
}

#[test]
fn test_interrupted_next_double_retries_like_a_restore() {
    let rng = CollatzRand::with_seed(1);
    for _ in 0..4 {
        rng.next_int().unwrap();
    }
    let before = rng.snapshot().unwrap();

    // 87 buffered, next_double needs 2 * 48 + 27
    rng.interrupt_handle().interrupt();
    assert!(matches!(rng.next_double(), Err(RngError::Interrupted { .. })));
    assert_eq!(rng.snapshot().unwrap(), before);

    let expected = CollatzRand::from_snapshot(&before).next_double().unwrap();
    assert_eq!(rng.next_double().unwrap(), expected);
}

#[test]
fn test_zero_seed_wide_draws_leave_partial_buffer_intact() {
    let snapshot = GeneratorSnapshot {
        seed: 0,
        buffered_bits: vec![true; 100],
    };

    let rng = CollatzRand::from_snapshot(&snapshot);
    assert_eq!(rng.next_double(), Err(RngError::DegenerateSeed));
    assert_eq!(rng.buffered_bits().unwrap(), 100);

    assert_eq!(rng.next_long(), Err(RngError::DegenerateSeed));
    assert_eq!(rng.buffered_bits().unwrap(), 100);

    // Narrow draws still drain what is there
    assert_eq!(rng.next_int().unwrap(), -1);
    assert_eq!(rng.buffered_bits().unwrap(), 52);
}
