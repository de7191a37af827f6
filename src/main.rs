//! Headless demo driver
//!
//! Stands in for the browser host: builds a scrolling-variant session, feeds
//! it a scripted input stream for a fixed number of ticks, reports events,
//! and dumps the final state as JSON. Useful for eyeballing tuning changes
//! without a renderer (`RUST_LOG=info cargo run`).

use glam::Vec2;

use icarus_core::sim::Rect;
use icarus_core::{GameEvent, Session, TickInput, Tuning};

/// The layout the browser host computes on resize: a full-width ground strip
/// plus a couple of floating ledges
fn demo_layout(viewport: Vec2) -> Vec<Rect> {
    vec![
        Rect::new(0.0, viewport.y - 40.0, viewport.x, 40.0),
        Rect::new(300.0, viewport.y - 180.0, 160.0, 20.0),
        Rect::new(560.0, viewport.y - 300.0, 140.0, 20.0),
    ]
}

/// Scripted input: run right, sprint in bursts, hop every 1.5 s
fn scripted_input(tick_no: u64) -> TickInput {
    TickInput {
        right: true,
        sprint: (tick_no / 120) % 2 == 1,
        jump: tick_no % 90 == 0 && tick_no > 0,
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let viewport = Vec2::new(960.0, 540.0);
    let mut session = Session::new(Tuning::scrolling(), viewport, demo_layout(viewport))?;
    session.start();

    for tick_no in 0..1800u64 {
        let frame = *session.tick(&scripted_input(tick_no));

        for event in session.drain_events() {
            match event {
                GameEvent::Jumped => log::info!("tick {tick_no}: jumped"),
                GameEvent::Landed => log::info!("tick {tick_no}: landed"),
                GameEvent::GoalReached { distance } => {
                    log::info!("tick {tick_no}: goal reached at distance {distance:.1}");
                }
            }
        }

        if tick_no % 300 == 0 {
            log::info!(
                "tick {tick_no}: x={:.1} dist={:.1} frame={} ({:?})",
                frame.player_bounds.left(),
                frame.distance,
                frame.frame_index,
                frame.frame_set,
            );
        }
    }

    log::info!(
        "demo finished: {:.1} s of play, goal reached: {}",
        session.elapsed_secs(),
        session.goal_reached()
    );
    println!("{}", serde_json::to_string_pretty(session.state())?);

    Ok(())
}
