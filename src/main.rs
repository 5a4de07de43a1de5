use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use terrain_generator::ascii;
use terrain_generator::basemap;
use terrain_generator::config::MapConfig;
use terrain_generator::edge_noise::{PerlinEdgeNoise, SinusoidNoise};
use terrain_generator::export;
use terrain_generator::mountains::generate_mountains;
use terrain_generator::seeds::MapSeeds;
use terrain_generator::tiles::TileKind;

#[derive(Parser, Debug)]
#[command(name = "terrain_generator")]
#[command(about = "Generate tile maps with procedural mountain formations")]
struct Args {
    /// Map width in tiles (overrides config)
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Map height in tiles (overrides config)
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file with map settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use coherent Perlin edge noise instead of the sinusoid formula
    #[arg(long)]
    perlin_edges: bool,

    /// Export the map to a PNG file (e.g. "map.png")
    #[arg(long)]
    export_png: Option<String>,

    /// Pixel block size per tile for PNG export
    #[arg(long, default_value = "4")]
    export_scale: u32,

    /// Export the map to an ASCII text file
    #[arg(long)]
    export_ascii: Option<String>,

    /// Print the map to the terminal
    #[arg(long)]
    preview: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => match MapConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => MapConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    let seeds = MapSeeds::from_master(args.seed.unwrap_or_else(rand::random));
    println!("Generating map with seed: {}", seeds.master);
    println!("Map size: {}x{}", config.width, config.height);

    println!("Laying base terrain...");
    let mut map = basemap::generate_base_terrain(config.width, config.height, seeds.base_terrain);
    println!("  {} water tiles", map.count(&TileKind::Water));

    println!("Stamping mountain ranges...");
    let mut rng = ChaCha8Rng::seed_from_u64(seeds.mountains);
    if args.perlin_edges {
        let noise = PerlinEdgeNoise::new(seeds.mountains);
        generate_mountains(&mut map, &config.mountains, &noise, &mut rng);
    } else {
        let noise = SinusoidNoise::default();
        generate_mountains(&mut map, &config.mountains, &noise, &mut rng);
    }
    let walls = map.count(&TileKind::Wall);
    println!(
        "  {} wall tiles ({:.1}% of map)",
        walls,
        walls as f64 / (config.width * config.height) as f64 * 100.0
    );

    if args.preview {
        ascii::print_map(&map);
    }

    if let Some(ref path) = args.export_ascii {
        if let Err(e) = ascii::export_ascii(&map, seeds.master, path) {
            eprintln!("Failed to export ASCII map: {}", e);
        } else {
            println!("Exported ASCII map to: {}", path);
        }
    }

    if let Some(ref path) = args.export_png {
        if let Err(e) = export::export_map_scaled(&map, args.export_scale, path) {
            eprintln!("Failed to export PNG: {}", e);
        } else {
            println!("Exported PNG to: {}", path);
        }
    }
}
