/// Diagnostic tool to verify the random tree → prepare → place pipeline
///
/// Usage: debug-layout [seed] [depth] [width] [height] [padding]
use anyhow::{Context, Result};
use treemap_rs::layout::{self, PlaceOptions, Rect};
use treemap_rs::render;
use treemap_rs::tree::random::{random_tree, Xorshift32, DEMO_SEED};
use treemap_rs::tree::{prepare_tree, total_weight};

fn arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid {} argument '{}'", name, raw)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treemap_rs=debug".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed: u32 = arg(&args, 0, "seed", DEMO_SEED)?;
    let depth: u32 = arg(&args, 1, "depth", 3)?;
    let width: f32 = arg(&args, 2, "width", 800.0)?;
    let height: f32 = arg(&args, 3, "height", 600.0)?;
    let padding: f32 = arg(&args, 4, "padding", 1.0)?;

    println!("=== DIAGNOSTIC: Tree → Layout Pipeline ===");
    println!("Seed: {}, depth: {}", seed, depth);

    // Generate
    let mut rng = Xorshift32::new(seed);
    let mut tree = random_tree(&mut rng, depth);
    let root = tree.root;
    println!("\n[1] Tree generated: {} nodes", tree.len());
    print!("{}", tree.outline(root));

    // Prepare
    prepare_tree(&mut tree);
    println!(
        "\n[2] Tree prepared: root weight {:.3} (leaf sum {:.3})",
        tree.get(root).weight(),
        total_weight(&tree, root)
    );

    // Place
    let target = Rect::from_size(width, height);
    let options = PlaceOptions::default().with_padding(padding);
    if let Err(e) = layout::validate(&tree, root, target, &options) {
        tracing::warn!("Input will produce degenerate geometry: {:#}", e);
    }
    layout::place(&mut tree, root, target, &options);

    let mut leaves: Vec<_> = tree.leaves(root).collect();
    println!("\n[3] Layout computed: {} leaves", leaves.len());

    // Show top 10 largest leaves
    println!("\n[4] Top 10 largest leaves by area:");
    leaves.sort_by(|&a, &b| {
        tree.get(b)
            .rect
            .area()
            .total_cmp(&tree.get(a).rect.area())
    });
    for (i, &id) in leaves.iter().take(10).enumerate() {
        let node = tree.get(id);
        let r = node.rect;
        println!(
            "    [{}] '{}' - rect: {:.1}x{:.1} ({:.0}px²) at ({:.1}, {:.1}) - weight: {:.3}",
            i,
            node.payload.label,
            r.width(),
            r.height(),
            r.area(),
            r.min[0],
            r.min[1],
            node.weight()
        );
    }

    // Check for anomalies
    println!("\n[5] Checking for anomalies:");
    let instances = render::leaf_instances(&tree, root, |swatch| swatch.color);
    let area_sum: f32 = instances
        .iter()
        .map(|i| (i.rect[2] - i.rect[0]) * (i.rect[3] - i.rect[1]))
        .sum();
    let viewport_area = target.area();
    println!("    Total leaf area: {:.0}px²", area_sum);
    println!("    Viewport area:   {:.0}px²", viewport_area);
    println!("    Coverage: {:.1}%", (area_sum / viewport_area) * 100.0);
    println!("    Worst leaf aspect: {:.3}", layout::worst_aspect(&tree, root));
    println!(
        "    Instance buffer: {} bytes",
        render::instance_bytes(&instances).len()
    );

    Ok(())
}
