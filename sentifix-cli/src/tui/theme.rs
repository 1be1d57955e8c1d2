use rand::Rng;

pub static SENTIFIX_LOGO: &str = r#"
  ███████╗███████╗███╗   ██╗████████╗██╗███████╗██╗██╗  ██╗
  ██╔════╝██╔════╝████╗  ██║╚══██╔══╝██║██╔════╝██║╚██╗██╔╝
  ███████╗█████╗  ██╔██╗ ██║   ██║   ██║█████╗  ██║ ╚███╔╝
  ╚════██║██╔══╝  ██║╚██╗██║   ██║   ██║██╔══╝  ██║ ██╔██╗
  ███████║███████╗██║ ╚████║   ██║   ██║██║     ██║██╔╝ ██╗
  ╚══════╝╚══════╝╚═╝  ╚═══╝   ╚═╝   ╚═╝╚═╝     ╚═╝╚═╝  ╚═╝
"#;

pub static POSITIVE_GREEN: (u8, u8, u8) = (18, 200, 124);
pub static NEUTRAL_YELLOW: (u8, u8, u8) = (249, 188, 81);
pub static NEGATIVE_RED: (u8, u8, u8) = (235, 87, 87);

fn rgb_to_256_color(r: u8, g: u8, b: u8) -> u8 {
    let r_index = (r as f32 / 255.0 * 5.0).round() as u8;
    let g_index = (g as f32 / 255.0 * 5.0).round() as u8;
    let b_index = (b as f32 / 255.0 * 5.0).round() as u8;
    16 + (36 * r_index) + (6 * g_index) + b_index
}

pub fn apply_gradient(text: &str, from_color: (u8, u8, u8), to_color: (u8, u8, u8)) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let max_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    for line in lines {
        for (col, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                result.push(ch);
                continue;
            }
            let position = if max_width <= 1 { 0.0 } else { col as f32 / (max_width - 1) as f32 };
            let mix = |from: u8, to: u8| (from as f32 + (to as f32 - from as f32) * position) as u8;
            let color_256 = rgb_to_256_color(
                mix(from_color.0, to_color.0),
                mix(from_color.1, to_color.1),
                mix(from_color.2, to_color.2),
            );
            result.push_str(&format!("\x1b[38;5;{}m{}\x1b[0m", color_256, ch));
        }
        result.push('\n');
    }

    result
}

/// The logo in a gradient between two random vivid colors.
pub fn logo() -> String {
    apply_gradient(SENTIFIX_LOGO, generate_nice_color(), generate_nice_color())
}

pub fn generate_nice_color() -> (u8, u8, u8) {
    let mut rng = rand::rng();

    let hue = rng.random_range(0..360);
    let saturation = rng.random_range(70..100);
    let lightness = rng.random_range(40..80);

    hsl_to_rgb(hue, saturation, lightness)
}

fn hsl_to_rgb(h: u32, s: u32, l: u32) -> (u8, u8, u8) {
    let h = h as f32 / 360.0;
    let s = s as f32 / 100.0;
    let l = l as f32 / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r_prime, g_prime, b_prime) = if h < 1.0/6.0 {
        (c, x, 0.0)
    } else if h < 2.0/6.0 {
        (x, c, 0.0)
    } else if h < 3.0/6.0 {
        (0.0, c, x)
    } else if h < 4.0/6.0 {
        (0.0, x, c)
    } else if h < 5.0/6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r_prime + m) * 255.0) as u8,
        ((g_prime + m) * 255.0) as u8,
        ((b_prime + m) * 255.0) as u8,
    )
}

/// ANSI color escape for a sentiment, as used by the scrollback log and the headless output.
pub fn ansi_color(color: (u8, u8, u8)) -> String {
    format!("\x1b[38;5;{}m", rgb_to_256_color(color.0, color.1, color.2))
}
