use flatphys::*;
use rand::Rng;

const BODY_COUNT: usize = 10;
const STEPS: usize = 240;
const DT: f32 = 1.0 / 60.0;
const SPEED: f32 = 8.0; // units/s

fn main() {
    env_logger::init();

    let limits = match std::env::args().nth(1) {
        Some(path) => match BodyLimits::from_path(&path) {
            Ok(limits) => limits,
            Err(err) => {
                eprintln!("could not load {path}: {err}");
                std::process::exit(1);
            }
        },
        None => BodyLimits::default(),
    };
    let mut world = FlatWorld::new(limits);

    // Extents of a 1280x768 view at zoom 24, with 5% padding.
    let (left, right, bottom, top) = (-26.6f32, 26.6f32, -16.0f32, 16.0f32);
    let padding = (right - left).abs() * 0.05;
    let mut rng = rand::thread_rng();
    for _ in 0..BODY_COUNT {
        let x = rng.gen_range((left + padding)..(right - padding));
        let y = rng.gen_range((bottom + padding)..(top - padding));
        if let Err(err) = world.add_circle(1.0, FlatVector::new(x, y), 2.0, false, 0.5) {
            eprintln!("body rejected: {err}");
            std::process::exit(1);
        }
    }

    // Drive body 0 diagonally through the crowd.
    let player = BodyId(0);
    let direction = math::normalize(FlatVector::new(1.0, 1.0));
    let mut totals = ResolveStats::default();
    for _ in 0..STEPS {
        world.move_body(player, direction * SPEED * DT);
        let stats = world.resolve_overlaps();
        totals.pairs_tested += stats.pairs_tested;
        totals.contacts += stats.contacts;
        totals.degenerate += stats.degenerate;
    }

    println!(
        "steps={} pairs={} contacts={} degenerate={}",
        STEPS, totals.pairs_tested, totals.contacts, totals.degenerate
    );
    for (i, body) in world.bodies().iter().enumerate() {
        println!("{i}: {} r={} at ({})", body.shape_type(), body.radius(), body.position());
    }
}
