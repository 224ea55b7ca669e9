use std::f64::consts::PI;

use hullkit::Point;
use nalgebra as na;
use rand::{rngs::StdRng, Rng, SeedableRng as _};

/// Points spread evenly over the unit sphere along a golden-angle spiral.
pub fn fibonacci_sphere(n: usize) -> Vec<Point> {
    let golden_angle = PI * (3.0 - 5.0f64.sqrt());
    (0..n)
        .map(|i| {
            let y = 1.0 - (2.0 * i as f64 + 1.0) / n as f64;
            let radius = (1.0 - y * y).sqrt();
            let theta = golden_angle * i as f64;
            Point::new(radius * theta.cos(), y, radius * theta.sin())
        })
        .collect()
}

pub fn random_cube(n: usize, size: f64, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            na::Point3::new(
                rng.gen_range(-size..size),
                rng.gen_range(-size..size),
                rng.gen_range(-size..size),
            )
        })
        .collect()
}

pub fn random_ball(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let p = na::Point3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if p.coords.norm_squared() <= 1.0 {
            points.push(p);
        }
    }
    points
}

pub fn unit_cube() -> Vec<Point> {
    let mut points = Vec::new();
    for &x in &[0.0, 1.0] {
        for &y in &[0.0, 1.0] {
            for &z in &[0.0, 1.0] {
                points.push(Point::new(x, y, z));
            }
        }
    }
    points
}

/// A needle-shaped cloud of 104 points: 35 on the surface of an ellipsoid
/// stretched 40:1.5:1 along y, x and z, and 69 strictly inside it.
pub fn long_thin() -> Vec<Point> {
    LONG_THIN.iter().map(|&[x, y, z]| Point::new(x, y, z)).collect()
}

#[rustfmt::skip]
const LONG_THIN: [[f64; 3]; 104] = [
    // Surface of the ellipsoid.
    [0.35599816555363184, 38.857142857142854, 0.0],
    [-0.4480289185287701, 36.57142857142857, 0.27362079325740707],
    [0.06754669998462819, 34.28571428571429, -0.5131065381386384],
    [0.5475949748809762, 32.0, 0.47616045077501745],
    [-0.9888246230844521, 29.714285714285715, -0.11660610184275494],
    [0.9212172768300029, 27.42857142857143, -0.39066868326922305],
    [-0.30286159736544, 25.142857142857142, 0.7510866974678222],
    [-0.5673662737918717, 22.857142857142854, -0.7282861567673052],
    [1.208369567072865, 20.57142857142857, 0.29419641855650025],
    [-1.2331600903295732, 18.28571428571429, 0.3393537059933555],
    [0.5826919065932786, 16.0, -0.8301191727003726],
    [0.4217153067712785, 13.714285714285715, 0.8963299006049154],
    [-1.2437171227948187, 11.428571428571427, -0.48050632974405144],
    [1.426230566228054, 9.142857142857142, -0.20903519272934892],
    [-0.8499232952989693, 6.857142857142855, 0.8059522850857306],
    [-0.19150301677648435, 4.571428571428573, -0.9852103756081664],
    [1.1450993522373474, 2.2857142857142865, 0.6433939642344934],
    [-1.4987190810109237, 0.0, 0.04131782619737533],
    [1.0615067932987032, -2.2857142857142865, -0.7042273588062291],
    [-0.06883319403765867, -4.571428571428573, 0.9923875220444734],
    [-0.9468366601066707, -6.857142857142859, -0.7564178416423479],
    [1.447249463803987, -9.142857142857146, 0.12981691228788064],
    [-1.1799610980127389, -11.428571428571432, 0.5473241321958302],
    [0.3092671004298903, -13.71428571428571, -0.916482178931622],
    [0.6835106980838522, -15.999999999999996, 0.7952115373645836],
    [-1.2709778322437852, -18.285714285714285, -0.2703177293583204],
    [1.167808271115201, -20.57142857142857, -0.3597046943743339],
    [-0.47523258688151526, -22.857142857142854, 0.7570293142173508],
    [-0.3948478359502081, -25.142857142857142, -0.7318517137625635],
    [0.9664553313227913, -27.42857142857143, 0.33862789074885014],
    [-0.9710070646937327, -29.714285714285715, 0.17063623068926045],
    [0.486753964522195, -32.0, -0.5046761681280495],
    [0.1308631017438307, -34.28571428571429, 0.5076366259932996],
    [-0.48038648845138954, -36.57142857142858, -0.2480255320035781],
    [0.3547826719307145, -38.85714285714286, -0.019595346105684915],
    // Strictly inside.
    [0.035599816555363185, 3.8857142857142857, 0.0],
    [0.15089105990528692, 0.9672877846790889, -0.022115317491655757],
    [0.13032063315343548, -2.2956521739130435, -0.0401409586475706],
    [-0.11607941227513136, 3.4881987577639757, -0.01368854239023645],
    [-0.18462481432743266, 0.0, 0.005089877140256382],
    [-0.12524583877933654, -3.8327122153209108, 0.022009600770064027],
    [0.16286720251851658, 2.772670807453416, 0.03965256076196308],
    [0.2034539101289663, -1.285300207039338, 0.018249623901339742],
    [0.051931956326090094, -5.687784679089027, -0.0028683042850350384],
    [-0.18926130129486374, 1.7391304347826086, -0.07312052843931217],
    [-0.2007776575573516, -2.888612836438923, -0.042702365942111485],
    [0.08967859733558016, 5.240579710144928, 0.07797989990953186],
    [0.19416902059676763, 0.38757763975155296, 0.10909723741367497],
    [0.16947984795660545, -4.809937888198759, 0.059382572145812856],
    [-0.10278374525215067, 4.140786749482402, -0.13193589796509156],
    [-0.17701728862863841, -1.281987577639752, -0.14141724865487373],
    [-0.09259623617976058, -7.049275362318841, -0.047807819936921576],
    [0.08373187975023935, 2.7229813664596274, 0.1779669512795267],
    [0.13967392526061329, -3.269565217391304, 0.16249974893971927],
    [0.014194596373581286, 7.204968944099379, -0.10782673627551097],
    [-0.04135354999955967, 0.9871635610766049, -0.21274832748640113],
    [-0.08755321579765483, -5.575155279503106, -0.16228016261691625],
    [-0.06891198664691896, 5.720910973084887, 0.1708994369600697],
    [-0.016061078608787024, -1.066666666666667, 0.23155708847704384],
    [0.031293350417003, -8.198757763975157, 0.12139136708535428],
    [0.14271729306415085, 3.9188405797101455, -0.20331904374835214],
    [0.077540881701987, -3.4385093167701855, -0.22978466225387045],
    [-0.11492915736172797, 9.38136645962733, 0.07018968174863921],
    [-0.22295089340451227, 1.7987577639751549, 0.21141646898625688],
    [-0.12741743271460915, -6.128364389233955, 0.2029716277249419],
    [0.25233342800126163, 7.513043478260869, -0.1070092480259176],
    [0.29691421899514453, -0.639337474120083, -0.19697953659362638],
    [0.13897178407372812, -9.13623188405797, -0.1440887030742402],
    [-0.3592248958786148, 5.326708074534161, 0.09885521000676008],
    [-0.3505681523081325, -3.3954451345755703, 0.16261079289876115],
    [0.1078313284068247, 11.769772256728778, 0.0],
    [0.44027117479213845, 2.8223602484472043, -0.06452825514688597],
    [0.36726723888695445, -6.469565217391303, -0.11312451982497167],
    [-0.31671049521980277, 9.517184265010352, -0.03734775145978093],
    [-0.4887127438079099, 0.0, 0.013473204194796305],
    [-0.3222617649490794, -9.861697722567289, 0.05663144467802992],
    [0.4080436364173588, 6.946583850931676, 0.09934458771545589],
    [0.4970987288718043, -3.1403726708074546, 0.04458928726409814],
    [0.12391684628304665, -13.571842650103523, -0.006844171610826181],
    [-0.4416097030213487, 4.057971014492754, -0.1706145663583951],
    [-0.45865721772275736, -6.598757763975154, -0.09754944146408953],
    [0.20078482412302462, 11.733333333333334, 0.17459216528417307],
    [0.4265080196014468, 0.8513457556935822, 0.23964094030183306],
    [0.3655722340220993, -10.375155279503106, 0.1280896804136955],
    [-0.21790153993455944, 8.778467908902691, -0.2797041036859941],
    [-0.3691290747372383, -2.67329192546584, -0.2948933324663647],
    [-0.19006595847424543, -14.469565217391308, -0.09813184092315483],
    [0.16929730431252776, 5.505590062111803, 0.3598309890834226],
    [0.2783572553066123, -6.515942028985506, 0.32384701739050437],
    [0.027899723906694252, 14.161490683229816, -0.21193530923117676],
    [-0.08020923456290431, 1.914699792960663, -0.412646084856174],
    [-0.16766726946871158, -10.676604554865424, -0.31077181468468285],
    [-0.1303621658225155, 10.822360248447206, 0.32329383934484524],
    [-0.03002723392077574, -1.9942028985507256, 0.432911078457082],
    [0.05784528410415706, -15.155279503105595, 0.22439010279413973],
    [0.26094463643090304, 7.165217391304347, -0.37174902081799294],
    [0.14029072816602275, -6.221118012422359, -0.4157375681240547],
    [-0.20583357561394217, 16.80165631469979, 0.1257069441486928],
    [-0.3953990982477814, 3.190062111801242, 0.3749430195833617],
    [-0.22384143584998906, -10.766045548654242, 0.3565717784357087],
    [0.4392470783725666, 13.078260869565216, -0.18627535767474548],
    [0.5122924089398089, -1.1031055900621123, -0.3398662470760497],
    [0.23773345803475318, -15.628985507246377, -0.24648676617268503],
    [-0.6094312910179485, 9.036853002070394, 0.16770958513584672],
];

/// Points spread uniformly over `[-1, 1]² × [-half_thickness, half_thickness]`.
pub fn random_slab(n: usize, half_thickness: f64, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            na::Point3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-half_thickness..half_thickness),
            )
        })
        .collect()
}
