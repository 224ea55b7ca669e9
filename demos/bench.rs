use nalgebra as na;
use rand::{rngs::StdRng, Rng, SeedableRng as _};

use hullkit::{max_face_count, HullBuilder};

fn main() {
    let mut rng = StdRng::seed_from_u64(1234567890);
    let size = 1000.0;
    let points: Vec<_> = (0..5_000_000)
        .map(|_| {
            na::Point3::new(
                rng.gen_range(-size..size),
                rng.gen_range(-size..size),
                rng.gen_range(-size..size),
            )
        })
        .collect();

    let mut builder = HullBuilder::new();
    let mut vertex_indices: Vec<usize> = Vec::with_capacity(points.len());
    let mut faces = vec![[0; 3]; max_face_count(points.len())];
    let mut count = 0;
    for _ in 0..10 {
        vertex_indices.clear();
        vertex_indices.extend(0..points.len());
        count += builder
            .build(&points[..], &mut vertex_indices, &mut faces)
            .unwrap()
            .vertex_count;
    }
    println!("Emitted a total of {} vertices", count);
}
