use nalgebra as na;
use rand::Rng;

use hullkit::{ConvexHull, LogObserver};

fn main() {
    let mut rng = rand::thread_rng();
    let size = 1000.0;
    let points: Vec<_> = (0..5_000)
        .map(|_| {
            na::Point3::new(
                rng.gen_range(-size..size),
                rng.gen_range(-size..size),
                rng.gen_range(-size..size),
            )
        })
        .collect();

    let hull = match ConvexHull::from_points(&points) {
        Ok(hull) => hull,
        Err(err) => {
            eprintln!("no hull: {}", err);
            return;
        }
    };
    println!(
        "{} of {} points are on the hull, which has {} faces",
        hull.vertices().len(),
        points.len(),
        hull.faces().len()
    );
    for (i, [a, b, c]) in hull.triangles().take(5).enumerate() {
        println!("face {}: points {} {} {}", i, a, b, c);
    }

    // Events only show up with a logger installed at trace level.
    let mut vertex_indices: Vec<usize> = (0..points.len()).collect();
    let mut faces = vec![[0; 3]; hullkit::max_face_count(points.len())];
    let counts = hullkit::HullBuilder::new()
        .build_observed(&points[..], &mut vertex_indices, &mut faces, &mut LogObserver)
        .expect("random points span a volume");
    println!("rebuilt with an observer: {}", counts);
}
