//! Orbits and Strides
//!
//! This example drives the value-based sequences.
//!
//! Key concepts:
//! - `iterate` yields the start value, then each application of the rule
//! - `roll` applies the rule before yielding, skipping the start value
//! - `stride` advances by a fixed step, including time-like values
//! - Descriptors are reusable: every pass starts over
//!
//! Run with: cargo run --example orbits

use chrono::{Duration, TimeZone, Utc};
use endless::{iterate, roll, stride, LazySequence};

fn main() {
    println!("=== Orbits and Strides Example ===\n");

    let fibonacci = iterate((0u64, 1u64), |&(a, b)| (b, a + b));
    let first: Vec<u64> = fibonacci.generate().take(10).map(|(a, _)| a).collect();
    println!("Fibonacci: {first:?}");

    // A second pass over the same descriptor starts from the beginning again.
    let again: Vec<u64> = fibonacci.generate().take(5).map(|(a, _)| a).collect();
    println!("Fibonacci again: {again:?}");

    let doubled: Vec<u32> = roll(1u32, |x| x * 2).into_iter().take(5).collect();
    println!("Rolled doubles (start skipped): {doubled:?}");

    let countdown: Vec<u8> = stride(10u8, -2).into_iter().take(6).collect();
    println!("Countdown: {countdown:?}");

    let Some(kickoff) = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single() else {
        println!("Invalid kickoff time");
        return;
    };
    println!("Weekly meetings:");
    for meeting in stride(kickoff, Duration::weeks(1)).into_iter().take(4) {
        println!("  {}", meeting.format("%Y-%m-%d %H:%M"));
    }

    println!("\n=== Example Complete ===");
}
