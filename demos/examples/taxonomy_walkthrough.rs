// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Taxonomy explorer walkthrough.
//!
//! Load a small taxonomy, then replay a scripted session of drags, wheel turns,
//! and shortcuts against a `canopy_explorer::Explorer`, printing every surface
//! write and the visible rows along the way.
//!
//! Run:
//! - `cargo run -p canopy_demos --example taxonomy_walkthrough`
//! - `RUST_LOG=trace cargo run -p canopy_demos --example taxonomy_walkthrough` for the explorer logs

use canopy_demos::{ConsoleSurface, Taxonomy};
use canopy_explorer::{Explorer, InputEvent, Key, Modifiers, PointerButton};
use canopy_viewport::{ViewportConfig, ViewportTransform};
use kurbo::Point;

const TAXONOMY: &str = include_str!("../data/taxonomy.json");

fn main() -> Result<(), serde_json::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Taxonomy { outline, labels } = Taxonomy::from_json(TAXONOMY)?;
    log::info!("loaded {} taxa", labels.len());

    let viewport = ViewportTransform::new(ViewportConfig::default().with_initial_scale(0.66));
    println!("initial paint:");
    let mut explorer = Explorer::new(viewport, outline, ConsoleSurface::default());

    let steps = [
        (
            "press on the canvas",
            InputEvent::PointerDown {
                position: Point::new(10.0, 10.0),
                button: PointerButton::Primary,
            },
        ),
        (
            "drag",
            InputEvent::PointerMove {
                position: Point::new(40.0, 40.0),
            },
        ),
        ("release", InputEvent::PointerUp),
        (
            "wheel up over (320, 200)",
            InputEvent::Wheel {
                position: Point::new(320.0, 200.0),
                delta_y: -100.0,
            },
        ),
        (
            "Ctrl +",
            InputEvent::KeyDown {
                key: Key::Char('+'),
                modifiers: Modifiers::CTRL,
            },
        ),
        (
            "space",
            InputEvent::KeyDown {
                key: Key::Space,
                modifiers: Modifiers::empty(),
            },
        ),
        (
            "pinch (ignored)",
            InputEvent::TouchStart {
                touches: 2,
                position: Point::new(0.0, 0.0),
            },
        ),
        (
            "r",
            InputEvent::KeyDown {
                key: Key::Char('r'),
                modifiers: Modifiers::empty(),
            },
        ),
    ];

    for (label, event) in steps {
        println!("{label}:");
        let outcome = explorer.handle(&event);
        println!("  -> {outcome:?}");
    }

    println!("open eukarya:");
    explorer.toggle_key("eukarya");

    let (_, outline, surface) = explorer.into_parts();
    let taxonomy = Taxonomy { outline, labels };
    println!("visible rows at {}:", surface.readout);
    print!("{}", taxonomy.render_rows());

    Ok(())
}
