//! terrain-bake - bake a block of ground tiles and render it to PNG
//!
//! The heightmap is produced from the baked patches' bilinear queries, so it
//! shows exactly what surface-following props would see at runtime.

mod cli;

use std::time::Instant;

use clap::Parser;
use glam::Vec2;
use image::{GrayImage, Luma, Rgb, RgbImage};
use noise::NoiseFn;

use cli::Args;
use terrain_bake::{CurlWarp, TerrainPatch, Warp};

/// Quads per tile side
const TILE_QUADS: usize = 32;

/// Baked tiles laid out row-major by tile X, then tile Z
struct TileBlock {
    origin: Vec2,
    tiles: usize,
    tile_extent: f32,
    patches: Vec<TerrainPatch<TILE_QUADS>>,
}

impl TileBlock {
    fn offsets(origin: Vec2, tiles: usize, tile_extent: f32) -> Vec<Vec2> {
        (0..tiles)
            .flat_map(|tx| (0..tiles).map(move |tz| (tx, tz)))
            .map(|(tx, tz)| origin + Vec2::new(tx as f32, tz as f32) * tile_extent)
            .collect()
    }

    /// Patch covering a world position (edge positions snap to the last tile)
    fn patch_at(&self, world: Vec2) -> &TerrainPatch<TILE_QUADS> {
        let local = (world - self.origin) / self.tile_extent;
        let last = self.tiles - 1;
        let tx = (local.x.max(0.0) as usize).min(last);
        let tz = (local.y.max(0.0) as usize).min(last);
        &self.patches[tx * self.tiles + tz]
    }
}

/// Pixel grid over the block: pixel x runs along world X, pixel y along world Z
struct Raster {
    origin: Vec2,
    size: u32,
    meters_per_pixel: f32,
}

impl Raster {
    fn world(&self, px: u32, py: u32) -> Vec2 {
        self.origin + (Vec2::new(px as f32, py as f32) + 0.5) * self.meters_per_pixel
    }
}

fn to_gray(value: f32) -> u8 {
    ((value + 1.0) * 127.5).clamp(0.0, 255.0) as u8
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let params = args.to_params();
    params.validate()?;

    let tiles = args.tiles as usize;
    let tile_extent = TILE_QUADS as f32 * params.quad_size_m;

    println!("Terrain Bake");
    println!("  Seed: {}", params.seed);
    println!("  Octaves: {}", params.fractal.octaves);
    println!("  Frequency: {}", params.frequency);
    println!("  Block: {tiles}x{tiles} tiles of {TILE_QUADS}x{TILE_QUADS} quads");

    let start = Instant::now();

    let baker = params.baker()?;
    let offsets = TileBlock::offsets(args.origin(), tiles, tile_extent);
    let block = TileBlock {
        origin: args.origin(),
        tiles,
        tile_extent,
        patches: baker.bake_many::<TILE_QUADS>(&offsets)?,
    };
    let bake_time = start.elapsed();

    let raster = Raster {
        origin: args.origin(),
        size: (tiles * TILE_QUADS) as u32 * args.pixels_per_quad,
        meters_per_pixel: params.quad_size_m / args.pixels_per_quad as f32,
    };

    // Map [-amplitude, amplitude] onto the full gray range
    let height_scale = if params.amplitude_m != 0.0 {
        params.amplitude_m.abs()
    } else {
        1.0
    };
    let mut heightmap = GrayImage::new(raster.size, raster.size);
    for (px, py, pixel) in heightmap.enumerate_pixels_mut() {
        let world = raster.world(px, py);
        let height = block.patch_at(world).world_to_height(world.x, world.y);
        *pixel = Luma([to_gray(height / height_scale)]);
    }
    heightmap.save(&args.output)?;
    println!("  Heightmap: {}", args.output.display());

    if let Some(path) = &args.preview {
        let noise = params.noise()?;
        let frequency = f64::from(params.frequency);
        let mut preview = GrayImage::new(raster.size, raster.size);
        for (px, py, pixel) in preview.enumerate_pixels_mut() {
            let world = raster.world(px, py);
            let value = noise.get([f64::from(world.x) * frequency, f64::from(world.y) * frequency]);
            *pixel = Luma([to_gray(value as f32)]);
        }
        preview.save(path)?;
        println!("  Noise preview: {}", path.display());
    }

    if let Some(path) = &args.flow_map {
        let curl = CurlWarp::new(params.warp()?, params.noise()?);
        let mut flow = RgbImage::new(raster.size, raster.size);
        for (px, py, pixel) in flow.enumerate_pixels_mut() {
            let direction: Vec2 = curl.transform(raster.world(px, py));
            let encoded = (direction * 0.5 + 0.5) * 255.0;
            *pixel = Rgb([encoded.x as u8, encoded.y as u8, 128]);
        }
        flow.save(path)?;
        println!("  Flow map: {}", path.display());
    }

    if let Some(path) = &args.dump_vertices {
        let bytes: Vec<u8> = block
            .patches
            .iter()
            .flat_map(|patch| patch.vertex_bytes().iter().copied())
            .collect();
        std::fs::write(path, &bytes)?;
        log::info!(
            "wrote {} vertices per tile ({} bytes total)",
            TerrainPatch::<TILE_QUADS>::VERTICES_COUNT,
            bytes.len()
        );
        println!("  Vertices: {}", path.display());
    }

    println!("  Bake: {:.2}ms", bake_time.as_secs_f64() * 1000.0);
    println!("  Total: {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
