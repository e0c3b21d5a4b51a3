// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the range-minimum segment tree.
//!
//! Interleaved updates and queries are replayed against a plain vector.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lcpkit::RangeMin;

#[derive(Debug, Arbitrary)]
enum Op {
    Update { index: u8, value: u16 },
    Query { l: u8, r: u8 },
}

#[derive(Debug, Arbitrary)]
struct RangeMinInput {
    values: Vec<u16>,
    ops: Vec<Op>,
}

fuzz_target!(|input: RangeMinInput| {
    let mut values: Vec<usize> = input.values.iter().map(|&v| usize::from(v)).collect();
    let mut tree = RangeMin::build(&values);

    for op in input.ops {
        match op {
            Op::Update { index, value } => {
                let index = usize::from(index);
                let value = usize::from(value);
                if index < values.len() {
                    tree.update(index, value).expect("in-bounds update");
                    values[index] = values[index].min(value);
                } else {
                    assert!(tree.update(index, value).is_err());
                }
            }
            Op::Query { l, r } => {
                let (l, r) = (usize::from(l), usize::from(r));
                match values.get(l..r).and_then(|range| range.iter().min()) {
                    Some(&expected) => assert_eq!(tree.query(l, r).ok(), Some(expected)),
                    None => assert!(tree.query(l, r).is_err()),
                }
            }
        }
    }
});
