// backdrop-preview - Run the backdrop headlessly and dump images
//
// Pipeline:
//   1. Build the scene from a seed
//   2. Write each panel texture as PNG
//   3. Run N frames with a fixed pointer target
//   4. Write a software-rendered snapshot of the last frame
//
// Usage: cargo run --bin backdrop-preview -- [--ticks N] [--seed S]
//        [--pointer X,Y] [--out DIR] [--size WxH]

mod snapshot;

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use backdrop_engine::{Controller, SceneConfig, Simulation};
use glam::DVec2;

use snapshot::SnapshotRenderer;

struct Args {
    ticks: usize,
    seed: u32,
    pointer: DVec2,
    out: PathBuf,
    width: u32,
    height: u32,
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args {
        ticks: 600,
        seed: 0xDEADBEEF,
        pointer: DVec2::new(0.5, -0.5),
        out: PathBuf::from("preview"),
        width: 960,
        height: 540,
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).map(String::as_str);
        match (args[i].as_str(), value) {
            ("--ticks", Some(v)) => parsed.ticks = v.parse().context("--ticks")?,
            ("--seed", Some(v)) => parsed.seed = v.parse().context("--seed")?,
            ("--out", Some(v)) => parsed.out = PathBuf::from(v),
            ("--pointer", Some(v)) => {
                let (x, y) = v.split_once(',').context("--pointer expects X,Y")?;
                parsed.pointer = DVec2::new(x.trim().parse()?, y.trim().parse()?);
            }
            ("--size", Some(v)) => {
                let (w, h) = v.split_once('x').context("--size expects WxH")?;
                parsed.width = w.parse()?;
                parsed.height = h.parse()?;
            }
            (flag, _) => bail!("unknown or incomplete argument: {flag}"),
        }
        i += 2;
    }

    if parsed.width == 0 || parsed.height == 0 {
        bail!("--size must be non-zero");
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    println!(
        "Previewing seed {:#x}, {} ticks at {}x{}...",
        args.seed, args.ticks, args.width, args.height
    );

    let sim = Simulation::new(SceneConfig::default(), args.seed, args.width, args.height);
    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;

    println!("  Writing textures...");
    for panel in &sim.scene().panels {
        let path = args.out.join(format!("panel-{}.png", panel.entry.name.to_lowercase()));
        panel.texture.image.save(&path).with_context(|| format!("writing {}", path.display()))?;
    }

    println!("  Simulating...");
    let renderer = SnapshotRenderer::new(args.width, args.height, args.ticks as u64);
    let mut controller = Controller::new(sim, Some(renderer));
    controller.aim_pointer(args.pointer);
    controller.run_for(args.ticks);

    let sim = controller.simulation();
    let cam = sim.camera();
    println!("  Camera at ({:.4}, {:.4}, {:.4})", cam.position.x, cam.position.y, cam.position.z);
    for (panel, motion) in sim.scene().panels.iter().zip(&sim.scene().motion) {
        let p = panel.transform.position;
        let v = motion.velocity;
        println!(
            "    {:<8} pos ({:>7.3}, {:>7.3}, {:>7.3})  vel ({:>+.4}, {:>+.4}, {:>+.4})",
            panel.entry.name, p.x, p.y, p.z, v.x, v.y, v.z
        );
    }

    if args.ticks > 0 {
        if let Some(renderer) = controller.renderer() {
            let path = args.out.join("snapshot.png");
            renderer.image().save(&path).with_context(|| format!("writing {}", path.display()))?;
        }
    }

    println!("Done!");
    Ok(())
}
