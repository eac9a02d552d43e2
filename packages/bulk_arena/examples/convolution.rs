//! Signal convolution with multiple allocations of homogeneous types.
//!
//! Two input signals are allocated through the arena as float arrays, their
//! convolution is accumulated into a third tracked block of length
//! `N + M - 1`, and one bulk release frees everything at the end.

#![allow(
    clippy::cast_precision_loss,
    reason = "sample indices are tiny and survive the cast to f32 exactly"
)]

use bulk_arena::BulkArena;

/// Length of the first input signal.
const N: usize = 10;
/// Length of the second input signal.
const M: usize = 5;
/// Length of the resulting convolution.
const C: usize = N + M - 1;

fn main() {
    let mut arena = BulkArena::new();

    let a = arena.alloc_array_of::<f32>(N).expect("allocation failed");
    let b = arena.alloc_array_of::<f32>(M).expect("allocation failed");

    // Fill the input signals with sample data.
    print!("a = [ ");
    for i in 0..N {
        let value = i as f32 * 0.731 + 1.7;

        // SAFETY: `a` holds N properly aligned f32 slots.
        unsafe {
            a.add(i).write(value);
        }
        print!("{value:.2} ");
    }
    println!("]");

    print!("b = [ ");
    for j in 0..M {
        let value = j as f32 * 0.317 + 0.9;

        // SAFETY: `b` holds M properly aligned f32 slots.
        unsafe {
            b.add(j).write(value);
        }
        print!("{value:.2} ");
    }
    println!("]");

    // The output block is uninitialized memory; zero it before accumulating.
    let c = arena.alloc_array_of::<f32>(C).expect("allocation failed");

    // SAFETY: `c` holds C properly aligned f32 slots; `a` and `b` were fully
    // initialized above.
    unsafe {
        for i in 0..C {
            c.add(i).write(0.0);
        }

        for i in 0..C {
            for j in 0..M {
                if let Some(k) = i.checked_sub(j) {
                    if k < N {
                        let sum = c.add(i).read() + a.add(k).read() * b.add(j).read();
                        c.add(i).write(sum);
                    }
                }
            }
        }
    }

    print!("c = [ ");
    for i in 0..C {
        // SAFETY: Every slot of `c` was initialized above.
        let value = unsafe { c.add(i).read() };
        print!("{value:.2} ");
    }
    println!("]");

    // Remember to always release the memory at the end of the scope.
    arena.free_all();
}
