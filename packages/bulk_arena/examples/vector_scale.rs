//! Vector-scalar multiplication with single allocations of different types.
//!
//! A 3D vector of floats and a separate scalar are allocated through the
//! arena, their product is written into a third tracked block, and at the end
//! of the program one bulk release frees all of the allocated memory.

use bulk_arena::BulkArena;

#[derive(Clone, Copy, Debug)]
#[repr(C)]
struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

fn format_vec3(v: Vec3) -> String {
    format!("[{:4.2} {:4.2} {:4.2}]", v.x, v.y, v.z)
}

fn main() {
    let mut arena = BulkArena::new();

    let v = arena.alloc_of::<Vec3>().expect("allocation failed");
    let k = arena.alloc_of::<f32>().expect("allocation failed");

    // SAFETY: Both blocks were sized and aligned for their types by
    // alloc_of() and stay valid until free_all().
    unsafe {
        v.write(Vec3 {
            x: 1.53,
            y: 5.92,
            z: 2.01,
        });
        k.write(2.5);
    }

    // Allocate the result block and compute the product component-wise.
    let w = arena.alloc_of::<Vec3>().expect("allocation failed");

    // SAFETY: `v` and `k` were initialized above; `w` is a valid Vec3 slot.
    unsafe {
        let vector = v.read();
        let scalar = k.read();

        w.write(Vec3 {
            x: vector.x * scalar,
            y: vector.y * scalar,
            z: vector.z * scalar,
        });

        println!(
            "{:.2} * {} = {}",
            scalar,
            format_vec3(vector),
            format_vec3(w.read())
        );
    }

    println!(
        "Arena tracks {} blocks with tracking capacity {}",
        arena.len(),
        arena.capacity()
    );

    // Remember to always release the memory at the end of the scope.
    arena.free_all();

    println!("All blocks released in one operation");
}
