//! End-to-end scenarios exercising the arena the way a numeric computation
//! would: several blocks of mixed shapes feeding one result, torn down by a
//! single bulk release.

#![allow(
    clippy::float_cmp,
    clippy::indexing_slicing,
    clippy::cast_precision_loss,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    reason = "test code doesn't need the same safety rigor as production code"
)]

use bulk_arena::BulkArena;

#[derive(Clone, Copy, Debug)]
#[repr(C)]
struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn vector_scalar_multiply() {
    let mut arena = BulkArena::new();

    let v = arena.alloc_of::<Vec3>().expect("allocation failed");
    let k = arena.alloc_of::<f32>().expect("allocation failed");

    unsafe {
        v.write(Vec3 {
            x: 1.53,
            y: 5.92,
            z: 2.01,
        });
        k.write(2.5);
    }

    let w = arena.alloc_of::<Vec3>().expect("allocation failed");

    unsafe {
        let v = v.read();
        let k = k.read();
        w.write(Vec3 {
            x: v.x * k,
            y: v.y * k,
            z: v.z * k,
        });
    }

    let result = unsafe { w.read() };
    assert!(approx_eq(result.x, 3.825));
    assert!(approx_eq(result.y, 14.8));
    assert!(approx_eq(result.z, 5.025));

    // All three blocks are independently tracked and released together.
    assert_eq!(arena.len(), 3);
    arena.free_all();
    assert!(arena.is_empty());
    assert_eq!(arena.capacity(), 0);
}

#[test]
fn signal_convolution() {
    const N: usize = 10;
    const M: usize = 5;
    const C: usize = N + M - 1;

    let mut arena = BulkArena::new();

    let a = arena.alloc_array_of::<f32>(N).expect("allocation failed");
    let b = arena.alloc_array_of::<f32>(M).expect("allocation failed");

    // Deterministic sample data; the values themselves are arbitrary.
    let a_values: Vec<f32> = (0..N).map(|i| i as f32 * 0.731 + 1.7).collect();
    let b_values: Vec<f32> = (0..M).map(|j| j as f32 * 0.317 + 0.9).collect();

    unsafe {
        for (i, value) in a_values.iter().enumerate() {
            a.add(i).write(*value);
        }
        for (j, value) in b_values.iter().enumerate() {
            b.add(j).write(*value);
        }
    }

    // The output block starts uninitialized and must be zeroed before the
    // accumulation - the arena gives no zero-initialization guarantee.
    let c = arena.alloc_array_of::<f32>(C).expect("allocation failed");

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

    // Check every element against the direct double-summation formula,
    // computed independently of the arena-backed buffers.
    for i in 0..C {
        let mut expected = 0.0_f32;
        for j in 0..M {
            if let Some(k) = i.checked_sub(j) {
                if k < N {
                    expected += a_values[k] * b_values[j];
                }
            }
        }

        let actual = unsafe { c.add(i).read() };
        assert_eq!(actual, expected, "mismatch at output index {i}");
    }

    assert_eq!(arena.len(), 3);
    arena.free_all();
    assert!(arena.is_empty());
}
