//! Flipbook engine demo entry point.
//!
//! A sprite-sheet flipbook animation engine written in Rust using:
//! - **raylib** for windowing and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! This executable runs a small demo: a walking character whose clips are
//! selected with the arrow keys (`Walk` + facing suffix), with the space
//! bar playing a one-shot clip that hands back to walking through a
//! completion event.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world and resources
//! 2. Load (or synthesize) a sheet definition and spawn the demo entities
//! 3. Each frame: update the clock, apply input, advance flipbooks, draw
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --sheet assets/walker.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

use flipbook::game;
use flipbook::resources::flipbookstore::{FlipbookDef, FlipbookStore};
use flipbook::resources::gameconfig::GameConfig;
use flipbook::resources::screensize::ScreenSize;
use flipbook::resources::texturestore::TextureStore;
use flipbook::resources::worldtime::WorldTime;
use flipbook::systems::flipbook::advance_flipbooks;
use flipbook::systems::render::render_pass;
use flipbook::systems::time::update_world_time;

/// Flipbook sprite-animation engine demo
#[derive(Parser)]
#[command(version, about = "Sprite-sheet flipbook animation demo")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Path to a flipbook definition JSON. Uses the built-in demo sheet
    /// when omitted.
    #[arg(long, value_name = "PATH")]
    sheet: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        log::info!("Using default config: {}", e);
    }

    let def = match &cli.sheet {
        Some(path) => {
            let json = match std::fs::read_to_string(path) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            match FlipbookDef::from_json(&json) {
                Ok(def) => def,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => game::default_sheet_def(),
    };

    // --------------- Raylib window ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title("Flipbook");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(config);
    world.insert_resource(TextureStore::new());
    world.insert_resource(FlipbookStore::new());

    if let Err(e) = game::setup(&mut world, &mut rl, &thread, &def) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    world.spawn(Observer::new(game::clip_finished_observer));
    // Ensure the observer is registered before any system triggers events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(advance_flipbooks);
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);

        game::control_player(&mut world, &rl);
        update.run(&mut world);
        world.clear_trackers();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        render_pass(&mut world, &mut d);
    }
}
