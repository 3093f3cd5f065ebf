//! Entry point: import one OBJ file and log what came out of it.
//!
//! Usage: app <FILE> [--mode=per-object|single] [--quads=triangulate|truncate|preserve]
//!                   [--uv-rotation=<degrees>] [--anchors] [--strict]

use anyhow::{Context, Result, bail};
use asset::{ImportOptions, QuadPolicy, SectionMode};
use corelib::Axis;

fn parse_mode_arg(args: &[String]) -> SectionMode {
    for arg in args {
        if let Some(val) = arg.strip_prefix("--mode=") {
            return match val.to_ascii_lowercase().as_str() {
                "per-object" | "objects" | "sections" => SectionMode::PerObject,
                "single" | "single-mesh" => SectionMode::SingleMesh,
                other => {
                    log::warn!("Unknown mode '{}', falling back to per-object.", other);
                    SectionMode::PerObject
                }
            };
        }
    }
    SectionMode::default()
}

fn parse_quads_arg(args: &[String]) -> QuadPolicy {
    for arg in args {
        if let Some(val) = arg.strip_prefix("--quads=") {
            return match val.to_ascii_lowercase().as_str() {
                "triangulate" | "split" => QuadPolicy::Triangulate,
                "truncate" => QuadPolicy::Truncate,
                "preserve" | "keep" => QuadPolicy::Preserve,
                other => {
                    log::warn!("Unknown quad policy '{}', falling back to triangulate.", other);
                    QuadPolicy::Triangulate
                }
            };
        }
    }
    QuadPolicy::default()
}

fn parse_uv_rotation_arg(args: &[String]) -> Result<Option<f32>> {
    for arg in args {
        if let Some(val) = arg.strip_prefix("--uv-rotation=") {
            let degrees = val
                .parse::<f32>()
                .with_context(|| format!("Invalid --uv-rotation value '{}'", val))?;
            return Ok(Some(degrees.to_radians()));
        }
    }
    Ok(None)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

const FLAGS: [&str; 2] = ["--anchors", "--strict"];
const VALUE_FLAGS: [&str; 3] = ["--mode=", "--quads=", "--uv-rotation="];

/// `--` arguments this binary does not understand.
fn unknown_flags(args: &[String]) -> Vec<&str> {
    args.iter()
        .map(String::as_str)
        .filter(|a| a.starts_with("--"))
        .filter(|a| !FLAGS.contains(a) && !VALUE_FLAGS.iter().any(|p| a.starts_with(p)))
        .collect()
}

fn print_meshes(path: &str, options: &ImportOptions) -> Result<()> {
    let meshes = asset::load_meshes_from_path(path, options)?;
    for (i, mesh) in meshes.iter().enumerate() {
        let name = mesh.name.as_deref().unwrap_or("<unnamed>");
        let extents = Axis::ALL.map(|a| {
            mesh.extent(a)
                .map(|e| format!("{:?}=[{}, {}]", a, e.min, e.max))
                .unwrap_or_else(|| format!("{:?}=<empty>", a))
        });
        println!(
            "mesh {} '{}': {} vertices, {} triangles, {} quads, {}",
            i,
            name,
            mesh.vertices.len(),
            mesh.triangle_count(),
            mesh.quads.len(),
            extents.join(" ")
        );
    }
    Ok(())
}

fn print_anchors(path: &str, strict: bool) -> Result<()> {
    let pairs = asset::load_anchors_from_path(path, strict)?;
    for (i, pair) in pairs.iter().enumerate() {
        println!(
            "anchor {}: ({}, {}, {}) -> ({}, {}, {}), length {}",
            i,
            pair.first.x,
            pair.first.y,
            pair.first.z,
            pair.second.x,
            pair.second.y,
            pair.second.z,
            pair.length()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        bail!("usage: app <FILE> [--mode=per-object|single] [--quads=triangulate|truncate|preserve] [--uv-rotation=<degrees>] [--anchors] [--strict]");
    };

    for flag in unknown_flags(&args) {
        log::warn!("Unknown flag '{}', ignoring.", flag);
    }
    if has_flag(&args, "--strict") && !has_flag(&args, "--anchors") {
        log::warn!("--strict only applies together with --anchors, ignoring.");
    }

    if has_flag(&args, "--anchors") {
        let strict = has_flag(&args, "--strict");
        log::info!("Reading anchors from {} (strict={})", path, strict);
        return print_anchors(path, strict);
    }

    let options = ImportOptions {
        sections: parse_mode_arg(&args),
        quads: parse_quads_arg(&args),
        uv_rotation: parse_uv_rotation_arg(&args)?,
    };
    log::info!(
        "Importing {}. mode={:?}, quads={:?}, uv_rotation={:?}",
        path,
        options.sections,
        options.quads,
        options.uv_rotation
    );
    print_meshes(path, &options)
}
