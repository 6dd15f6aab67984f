//! Training time.
//!
//! A character spends at most the face value of the reference die in
//! Development Points per day, so a cost takes `ceil(cost / face)` days.

use crate::value_objects::{DieTier, Points};

/// Days needed to train an upgrade worth `cost` with the `reference` die
pub fn training_days(cost: Points, reference: DieTier) -> u64 {
    training_days_by_face(i128::from(cost), reference.face_value())
}

/// Same as [`training_days`] for callers holding a raw (possibly negative)
/// cost and a face value. Non-positive costs and a zero face take no time.
pub fn training_days_by_face(cost: i128, face_value: u32) -> u64 {
    if cost <= 0 || face_value == 0 {
        return 0;
    }
    let days = (cost as u128).div_ceil(u128::from(face_value));
    u64::try_from(days).unwrap_or(u64::MAX)
}
