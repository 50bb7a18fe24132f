//! # OBJ Inspector
//!
//! Parses an OBJ file, builds a mesh per group and logs what a renderer would
//! receive.
//!
//! ```text
//! RUST_LOG=info cargo run --example inspect -- building.obj [--file|--string] [--strict]
//! ```
//!
//! `--file` (the default) reads the file incrementally; `--string` reads it
//! into memory first.

use anyhow::{bail, Context};
use log::info;
use objscan::prelude::*;

/// Where the parser reads lines from
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SourceMethod {
    File,
    String,
}

struct Args {
    path: String,
    source: SourceMethod,
    options: ParseOptions,
}

impl Args {
    fn parse() -> anyhow::Result<Self> {
        let mut path = None;
        let mut source = SourceMethod::File;
        let mut options = ParseOptions::default();

        for arg in std::env::args().skip(1) {
            if !arg.starts_with("--") {
                path = Some(arg);
                continue;
            }
            match arg.as_str() {
                "--file" => source = SourceMethod::File,
                "--string" => source = SourceMethod::String,
                "--strict" => options = options.with_orphan_faces(OrphanFacePolicy::Reject),
                flag => bail!("unknown flag {}", flag),
            }
        }

        let path = path.context("usage: inspect <model.obj> [--file|--string] [--strict]")?;
        Ok(Self {
            path,
            source,
            options,
        })
    }
}

fn load_model(args: &Args) -> anyhow::Result<(Stats, Model)> {
    match args.source {
        SourceMethod::File => {
            let source = FileSource::open(&args.path)
                .with_context(|| format!("Failed to open {}", args.path))?;
            let mut parser = ObjParser::with_options(source, args.options);
            Ok((parser.count()?, parser.parse()?))
        }
        SourceMethod::String => {
            let text = std::fs::read_to_string(&args.path)
                .with_context(|| format!("Failed to read {}", args.path))?;
            let mut parser = ObjParser::with_options(StrSource::new(&text), args.options);
            Ok((parser.count()?, parser.parse()?))
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse()?;
    let (stats, model) = load_model(&args)?;

    info!(
        "{}: {} v, {} vt, {} vn, {} vp, {} f, {} o",
        args.path,
        stats.vertices,
        stats.tex_coords,
        stats.normals,
        stats.param_vertices,
        stats.faces,
        stats.groups
    );
    if model.dropped_faces > 0 {
        info!("{} faces were outside any group and dropped", model.dropped_faces);
    }

    let scene = Scene::from_model(&model)?;
    for category in Category::ALL {
        for object in scene.objects_in(category) {
            info!(
                "[{}] {}: {} vertices, {} triangles",
                category,
                object.name,
                object.mesh.vertex_count(),
                object.mesh.triangle_count()
            );
        }
    }
    info!("{} triangles in total", scene.total_triangles());

    Ok(())
}
