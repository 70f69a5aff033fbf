//! Example: Stylize an image file
//!
//! Loads an image, generates a low-poly rendition, and saves it next to the
//! working directory as `convert.png`.
//!
//! Usage: `cargo run --example stylize_image -- photo.jpg [spacing] [randomness] [--gradient]`

use lowpoly::*;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: stylize_image <image> [spacing] [randomness] [--gradient]");
        std::process::exit(2);
    };

    let mut spacing = 20u32;
    let mut randomness = 10.0f32;
    let mut shading = ShadingMode::Flat;
    let mut numeric = Vec::new();
    for arg in args {
        if arg == "--gradient" {
            shading = ShadingMode::Gradient;
        } else if let Ok(value) = arg.parse::<f32>() {
            numeric.push(value);
        }
    }
    if let Some(&value) = numeric.first() {
        spacing = value.max(0.0) as u32;
    }
    if let Some(&value) = numeric.get(1) {
        randomness = value;
    }

    let mut session = match RenderSession::open(&path) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to open {}: {}", path, err);
            std::process::exit(1);
        }
    };

    let config = RenderConfig::builder()
        .seed(42)
        .spacing(spacing)
        .randomness(randomness)
        .shading(shading)
        .build();

    println!("Source: {} ({}x{})", path, session.source().width(), session.source().height());
    println!(
        "Config: spacing={} randomness={} shading={}",
        config.spacing,
        config.randomness,
        config.shading.name()
    );

    let result = session.generate(&config).expect("generation failed");
    let frame = session.last_frame().expect("frame was just generated");
    println!("Generation: {} ms", result.elapsed_ms());
    println!("Frame: {}", frame.readable_size());

    session.save_to(EXPORT_FILENAME).expect("failed to save frame");
    println!("Saved {}", EXPORT_FILENAME);
}
