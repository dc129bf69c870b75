//! # Identifier Tests
//!
//! Shape and ordering of random and timestamp-prefixed IDs.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use common::rng;
use dbase32::{
    constants::{RANDOM_B32LEN, RANDOM_BYTES},
    id::{random_id_with, time_id_with},
    Backend, ErrorKind, Timestamp, TimestampPolicy,
};

#[test]
fn test_random_id_default_shape() {
    let id = dbase32::random_id(RANDOM_BYTES).unwrap();
    assert_eq!(id.len(), RANDOM_B32LEN);
    assert!(dbase32::is_valid(&id));
    assert_eq!(dbase32::decode(&id).unwrap().len(), 15);
}

#[test]
fn test_random_ids_are_distinct() {
    let ids: HashSet<String> = (0..1_000)
        .map(|_| dbase32::random_id(RANDOM_BYTES).unwrap())
        .collect();
    assert_eq!(ids.len(), 1_000);
}

#[test]
fn test_random_id_size_errors() {
    let err = dbase32::random_id(61).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Length);
    let err = dbase32::random_id(12).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Alignment);
    assert_eq!(err.to_string(), "size is 12, need a multiple of 5");
}

#[test]
fn test_random_id_backends_agree() {
    for size in [5, 15, 60] {
        let a = random_id_with(Backend::Reference.codec(), &mut rng(5), size).unwrap();
        let b = random_id_with(Backend::Optimized.codec(), &mut rng(5), size).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_time_id_bounds() {
    let id = dbase32::time_id_at(0u32, TimestampPolicy::Reject).unwrap();
    assert_eq!(dbase32::decode(&id).unwrap()[..4], [0, 0, 0, 0]);

    let id = dbase32::time_id_at(u32::MAX, TimestampPolicy::Reject).unwrap();
    assert_eq!(dbase32::decode(&id).unwrap()[..4], [0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn test_time_id_from_datetime() {
    let at = Utc.with_ymd_and_hms(2013, 5, 1, 12, 0, 0).unwrap();
    let id = dbase32::time_id_at(at, TimestampPolicy::Reject).unwrap();
    let data = dbase32::decode(&id).unwrap();
    let secs = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    assert_eq!(i64::from(secs), at.timestamp());
}

#[test]
fn test_time_id_out_of_range() {
    let err = dbase32::time_id_at(-1i64, TimestampPolicy::Reject).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timestamp);

    let id = dbase32::time_id_at(-1i64, TimestampPolicy::Clamp).unwrap();
    assert_eq!(dbase32::decode(&id).unwrap()[..4], [0, 0, 0, 0]);

    let id = dbase32::time_id_at(1e15, TimestampPolicy::Clamp).unwrap();
    assert_eq!(dbase32::decode(&id).unwrap()[..4], [0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn test_time_ids_sort_by_timestamp() {
    let mut rng = rng(6);
    let codec = Backend::Optimized.codec();
    let stamps = [0i64, 1, 255, 256, 65_535, 65_536, 1_368_000_000, 4_294_967_295];
    let ids: Vec<String> = stamps
        .iter()
        .map(|&s| {
            time_id_with(codec, &mut rng, Timestamp::from(s), TimestampPolicy::Reject).unwrap()
        })
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}
