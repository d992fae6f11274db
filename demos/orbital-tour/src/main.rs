//! Scripted, headless tour of the simulation: speed changes, a pick on
//! Earth, time reversal, and a date jump, with every UI event logged.
//! Run with `RUST_LOG=info` to watch the event stream.

use glam::Vec2;
use log::{info, warn};
use orrery_core::{Date, InputEvent, InputQueue, Intent, MeanLongitudeEphemeris, Orrery};

const FRAME_DT: f64 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let mut app = Orrery::new(
        16.0 / 9.0,
        Date::new(2024, 6, 15),
        Box::new(MeanLongitudeEphemeris::new()),
        7,
    );
    let mut input = InputQueue::new();
    let mut clock_ms = 0.0;

    info!("two seconds at 1x");
    run(&mut app, &mut input, 120, &mut clock_ms);

    info!("stepping up to 4x");
    input.push_intent(Intent::SpeedUp);
    input.push_intent(Intent::SpeedUp);
    run(&mut app, &mut input, 180, &mut clock_ms);

    if let Some(ndc) = ndc_of(&app, "Earth") {
        info!("tapping Earth at ndc {ndc:?}");
        input.push(InputEvent::PointerDown { ndc, time_ms: clock_ms });
        input.push(InputEvent::PointerUp {
            ndc,
            time_ms: clock_ms + 120.0,
        });
    } else {
        warn!("Earth is off-screen, skipping the pick");
    }
    // Long enough for the camera follow to converge.
    run(&mut app, &mut input, 300, &mut clock_ms);

    info!("reversing time");
    input.push_intent(Intent::TimeReverse);
    run(&mut app, &mut input, 180, &mut clock_ms);

    info!("jumping to 1969-07-20");
    input.push_intent(Intent::SetDate(Date::new(1969, 7, 20)));
    input.push_intent(Intent::TimeForward);
    run(&mut app, &mut input, 120, &mut clock_ms);

    info!("releasing focus");
    input.push_intent(Intent::Unfocus);
    run(&mut app, &mut input, 60, &mut clock_ms);

    let instances = app.render_instances().instance_count();
    let minimap = app.minimap().len();
    info!("final frame: {instances} body instances, {minimap} minimap commands");
}

fn run(app: &mut Orrery, input: &mut InputQueue, frames: usize, clock_ms: &mut f64) {
    for _ in 0..frames {
        app.update(FRAME_DT, input);
        *clock_ms += FRAME_DT * 1000.0;
        for event in app.drain_events() {
            match event.to_json() {
                Ok(json) => info!("event: {json}"),
                Err(err) => warn!("event serialization failed: {err}"),
            }
        }
    }
}

/// Screen position of a named body, if it is in front of the camera.
fn ndc_of(app: &Orrery, name: &str) -> Option<Vec2> {
    let id = app.hierarchy().id_of(name)?;
    let world = app.hierarchy().world_position(id, app.clock().time());
    let clip = app.camera().projection_matrix() * app.camera().view_matrix() * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
    (ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0).then_some(ndc)
}
