// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Concurrent first use of a record type: every thread must observe one
// retained schema, and pack/unpack must be safe from any thread.

use std::sync::{Arc, Barrier};
use std::thread;
use structpack::{Struct, StructCodec};

const THREADS: usize = 16;

#[derive(Struct, Debug, Clone, Default, PartialEq)]
#[structpack(size = 24)]
struct Position {
    id: u32,
    x: f64,
    y: f64,
}

#[derive(Struct, Debug, Default)]
struct Broken {
    label: String,
}

#[test]
fn parallel_first_use_shares_one_schema() {
    let codec = StructCodec::new();
    let barrier = Barrier::new(THREADS);

    let schemas: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    codec.schema::<Position>().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &schemas[0];
    for schema in &schemas {
        assert!(Arc::ptr_eq(schema, first));
        assert_eq!(**schema, **first);
    }
    assert_eq!(first.total_size(), 24);
    assert_eq!(codec.cache().len(), 1);

    let stats = codec.cache().stats();
    assert_eq!(stats.hits + stats.misses, THREADS as u64);
    assert!(stats.misses >= 1);
}

#[test]
fn parallel_failures_are_consistent() {
    let codec = StructCodec::new();
    let barrier = Barrier::new(THREADS);

    let errors: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    codec.pack(&Broken::default()).unwrap_err()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(errors.iter().all(|e| e == &errors[0]));
    assert!(errors[0].is_schema_error());
}

#[test]
fn parallel_pack_unpack() {
    let codec = Arc::new(StructCodec::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                for i in 0..200u32 {
                    let value = Position {
                        id: ((t as u32) << 16) | i,
                        x: f64::from(i) * 0.25,
                        y: -f64::from(t as u32),
                    };
                    let bytes = codec.pack(&value).unwrap();
                    let back: Position = codec.unpack(&bytes).unwrap();
                    assert_eq!(back, value);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(codec.cache().len(), 1);
}
