//! # Dungeon Preview
//!
//! Command-line tool that generates a dungeon and prints every floor as text.

use delve_procedural::{DungeonGenerator, GeneratorConfig, RoomRole};

/// Value following `flag`, if the flag is present.
fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    let Some(i) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let value = args
        .get(i + 1)
        .ok_or_else(|| format!("{flag} expects a value"))?;
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("invalid value for {flag}: '{value}'"))
}

struct Options {
    width: i32,
    height: i32,
    floors: usize,
    seed: Option<u64>,
    config_path: Option<String>,
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    Ok(Options {
        width: parse_flag(args, "--width")?.unwrap_or(50),
        height: parse_flag(args, "--height")?.unwrap_or(50),
        floors: parse_flag(args, "--floors")?.unwrap_or(3),
        seed: parse_flag(args, "--seed")?,
        config_path: parse_flag(args, "--config")?,
    })
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: dungeon_preview [options]");
        println!();
        println!("Options:");
        println!("  --width <n>       Floor width in tiles (default 50)");
        println!("  --height <n>      Floor height in tiles (default 50)");
        println!("  --floors <n>      Number of floors (default 3)");
        println!("  --seed <n>        Seed (random if omitted)");
        println!("  --config <path>   Generator config TOML file");
        return;
    }

    let Options {
        width,
        height,
        floors,
        seed,
        config_path,
    } = match parse_options(&args) {
        Ok(options) => options,
        Err(e) => {
            println!("Error: {e}");
            println!("Run with --help for usage.");
            return;
        }
    };

    let config = match config_path {
        Some(path) => match GeneratorConfig::from_toml_file(&path) {
            Ok(config) => config,
            Err(e) => {
                println!("Error: {e}");
                return;
            }
        },
        None => GeneratorConfig::default(),
    };

    let dungeon = match DungeonGenerator::with_config(width, height, floors, seed, config) {
        Ok(dungeon) => dungeon,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };

    println!("Dungeon {}x{} - {} floor(s) - seed {}", width, height, dungeon.floor_count(), dungeon.seed());
    println!();

    for floor in dungeon.floors() {
        let count = |role: RoomRole| floor.rooms.iter().filter(|r| r.role == role).count();

        println!("── Floor {} ──", floor.floor_number);
        println!(
            "Rooms: {} ({} {}, {} {}, {} {}) | Corridors: {} | Walkable: {}",
            floor.rooms.len(),
            count(RoomRole::Normal),
            RoomRole::Normal.as_str(),
            count(RoomRole::Treasure),
            RoomRole::Treasure.as_str(),
            count(RoomRole::Boss),
            RoomRole::Boss.as_str(),
            floor.corridors.len(),
            floor.walkable_count()
        );
        match floor.spawn_point {
            Some(spawn) => println!("Spawn: ({}, {})", spawn.x, spawn.y),
            None => println!("Spawn: none"),
        }
        println!();
        print!("{}", floor.render_ascii());
        println!();
    }
}
