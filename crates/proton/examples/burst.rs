//! Renders an explosion burst as coarse ASCII frames on stdout.
//!
//! Run with: cargo run -p proton --example burst

use std::time::Duration;

use proton::prelude::*;

const WIDTH: usize = 72;
const HEIGHT: usize = 24;
const FRAME: Duration = Duration::from_millis(33);

fn main() -> Result<(), proton::Error> {
    let themes = ThemeContext::new(Box::new(MemoryPreferences::new()));
    themes.set_theme(ThemeId::Synthwave)?;
    let palette = themes.current().particle_palette;

    let mut fx = ParticleSystem::new(
        ParticleSystemOptions::new()
            .with_max_particles(192)
            .with_seed(7),
    );
    fx.emit(
        &EmitOptions::new(Vec2::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0))
            .with_count(192)
            .with_preset(EmissionPreset::Explosion)
            .with_palette(palette),
    )?;

    let ramp = b" .:-=+*#%@";
    let mut frame = vec![Rgba::TRANSPARENT; WIDTH * HEIGHT];

    while !fx.is_empty() {
        fx.tick(FRAME);
        frame.fill(Rgba::TRANSPARENT);
        render_into(&fx, &mut frame, WIDTH, HEIGHT)?;

        let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
        for row in frame.chunks(WIDTH) {
            for &cell in row {
                let idx = cell.a() as usize * (ramp.len() - 1) / 255;
                out.push(ramp[idx] as char);
            }
            out.push('\n');
        }
        println!("\x1b[2J\x1b[H{out}");
        std::thread::sleep(FRAME);
    }

    Ok(())
}
