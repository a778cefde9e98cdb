//! Carousel demo entry point
//!
//! Runs a scripted headless session: the entrance choreography, a seeded
//! pointer drag, a hover pause, and a click, printing what a host UI
//! would observe at each step.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("roto-carousel demo starting");
    run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts embed the library crate directly; there is no wasm demo
}

#[cfg(not(target_arch = "wasm32"))]
const MENU_JSON: &str = r#"[
  {
    "title": "Projects",
    "route": "projects",
    "kind": "projects",
    "description": "Explore my portfolio of innovative solutions including AI-powered platforms, mobile applications, and enterprise integrations."
  },
  {
    "title": "Contact",
    "route": "contact",
    "kind": "contact",
    "description": "Get in touch to discuss your next project, collaboration opportunities, or technical consultations."
  },
  {
    "title": "About",
    "route": "about",
    "kind": "about",
    "description": "Learn about my background, experience, and passion for creating technology solutions that make a difference."
  },
  {
    "title": "Consult",
    "route": "consulting",
    "kind": "consulting",
    "description": "Strategic technology consulting for digital transformation, AI implementation, and system optimization."
  }
]"#;

#[cfg(not(target_arch = "wasm32"))]
fn run_demo() {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use roto_carousel::input::{DragTracker, classify_gesture, wheel_force};
    use roto_carousel::pick::{Camera, PickStrategy, Viewport};
    use roto_carousel::sim::{CarouselEvent, FrameInput, collider_offset};
    use roto_carousel::{Carousel, CarouselItem, Tuning, wrap_angle};

    const FRAME_DT: f32 = 1.0 / 60.0;

    let items: Vec<CarouselItem> =
        serde_json::from_str(MENU_JSON).expect("embedded menu json is valid");
    let mut carousel = Carousel::new(items, Tuning::default());

    let viewport = Viewport::new(1280.0, 720.0);
    let camera = Camera::default_framing(viewport);
    let mut input = FrameInput::default();
    let mut accumulator = 0.0f32;

    let snapshot = |carousel: &Carousel, label: &str| {
        println!(
            "t={:5.2}s  phase={:<8}  velocity={:+.3} rad/s  rotation={:.2} rad  {label}",
            carousel.time(),
            format!("{:?}", carousel.phase()),
            carousel.physics().angular_velocity(),
            wrap_angle(carousel.rotation()),
        );
    };

    // Entrance: hands off for three and a half seconds
    println!("== entrance ==");
    for _ in 0..210 {
        step(&mut carousel, &mut input, FRAME_DT, &mut accumulator);
        for event in carousel.drain_events() {
            if let CarouselEvent::PhaseChanged(phase) = event {
                println!("  phase change at t={:.2}s: {phase:?}", carousel.time());
            }
        }
    }
    snapshot(&carousel, "(settled)");

    // Drag: a seeded quarter-second sweep to the right
    println!("== drag ==");
    let mut rng = Pcg32::seed_from_u64(7);
    let mut tracker = DragTracker::default();
    let press_start = Vec2::new(420.0, 380.0);
    let press_time = carousel.time();
    let mut pointer = press_start;
    let mut now = press_time;
    tracker.begin(pointer, press_time);
    for _ in 0..24 {
        pointer.x += 14.0 + rng.random_range(-3.0..3.0);
        pointer.y += rng.random_range(-1.5..1.5);
        now += FRAME_DT;
        tracker.move_to(pointer, now, carousel.physics_mut());
        step(&mut carousel, &mut input, FRAME_DT, &mut accumulator);
    }
    tracker.end();
    if let Some(gesture) = classify_gesture(press_start, pointer, now - press_time) {
        println!("  release classified as {gesture:?}");
    }
    println!("  click suppressed after drag: {}", tracker.suppress_click());
    snapshot(&carousel, "(flung)");

    // Coast: watch the fling bleed off
    println!("== coast ==");
    for _ in 0..120 {
        step(&mut carousel, &mut input, FRAME_DT, &mut accumulator);
    }
    snapshot(&carousel, "(coasting)");

    // A wheel nudge, one-shot through the frame input
    input.force = Some(wheel_force(240.0, &carousel.tuning().interaction));
    step(&mut carousel, &mut input, FRAME_DT, &mut accumulator);

    // Hover: the platter slows toward its crawl
    println!("== hover ==");
    input.hovered = true;
    for _ in 0..240 {
        step(&mut carousel, &mut input, FRAME_DT, &mut accumulator);
    }
    snapshot(&carousel, "(hovering)");

    // Click the item nearest the camera
    println!("== select ==");
    let placements = carousel.placements();
    let front = placements
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.position.x.total_cmp(&b.position.x))
        .map(|(index, _)| index)
        .unwrap_or(0);
    let title_len = carousel.items()[front].title.chars().count();
    let center =
        placements[front].position + collider_offset(title_len, &carousel.tuning().layout);
    let pixel = camera
        .world_to_screen(center, viewport)
        .expect("front item projects on screen");

    match carousel.select_at(pixel, viewport, &camera, PickStrategy::Geometry) {
        Some(index) => {
            let item = &carousel.items()[index];
            println!(
                "  ray pick at ({:.0}, {:.0}) -> '{}'",
                pixel.x, pixel.y, item.title
            );
            println!("  navigate to /{}", item.route);
        }
        None => println!("  ray pick missed"),
    }

    for event in carousel.drain_events() {
        if let CarouselEvent::ItemSelected(index) = event {
            log::info!("selection event for index {index}");
        }
    }
    snapshot(&carousel, "(done)");
}

/// Fixed-step accumulator: render frames in, simulation substeps out
#[cfg(not(target_arch = "wasm32"))]
fn step(
    carousel: &mut roto_carousel::Carousel,
    input: &mut roto_carousel::sim::FrameInput,
    frame_dt: f32,
    accumulator: &mut f32,
) {
    use roto_carousel::consts::{MAX_SUBSTEPS, SIM_DT};
    use roto_carousel::sim::tick;

    // Clamp so a stalled frame cannot spiral the accumulator
    *accumulator += frame_dt.min(0.1);
    let mut substeps = 0;
    while *accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
        tick(carousel, input, SIM_DT);
        // One-shot inputs land on the first substep only
        input.force = None;
        input.touch_velocity = None;
        *accumulator -= SIM_DT;
        substeps += 1;
    }
}
