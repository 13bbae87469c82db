use cube_core::{Color, Face, FaceletCube};
use owo_colors::OwoColorize;

const STICKER_WIDTH: usize = 3;

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::White => (255, 255, 255),
        Color::Yellow => (255, 213, 0),
        Color::Green => (0, 155, 72),
        Color::Blue => (0, 70, 173),
        Color::Orange => (255, 88, 0),
        Color::Red => (183, 18, 52),
    }
}

fn sticker(facelet: Option<Color>, paint: bool) -> String {
    let text = format!(" {} ", facelet.map_or('.', Color::initial));
    match facelet {
        Some(color) if paint => {
            let (r, g, b) = rgb(color);
            text.black().on_truecolor(r, g, b).to_string()
        }
        None if paint => text.on_truecolor(96, 96, 96).to_string(),
        _ => text,
    }
}

fn row(cube: &FaceletCube, face: Face, row: usize, paint: bool) -> String {
    (0..3)
        .map(|column| sticker(cube.get(face, row * 3 + column), paint))
        .collect()
}

/// Render the cube as a flat net:
///
/// ```text
///       U
///     L F R B
///       D
/// ```
pub fn render(cube: &FaceletCube, paint: bool) -> String {
    let indent = " ".repeat(STICKER_WIDTH * 3);
    let mut lines = Vec::with_capacity(9);

    for r in 0..3 {
        lines.push(format!("{indent}{}", row(cube, Face::U, r, paint)));
    }
    for r in 0..3 {
        lines.push(
            [Face::L, Face::F, Face::R, Face::B]
                .into_iter()
                .map(|face| row(cube, face, r, paint))
                .collect::<String>(),
        );
    }
    for r in 0..3 {
        lines.push(format!("{indent}{}", row(cube, Face::D, r, paint)));
    }

    lines.join("\n")
}
