use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use midnight_core::{DrawInstruction, DrawLayer};
use midnight_rendering::{
    normalized_anchor, FrameControl, FrameInput, Presentation, RenderingBackend, Scene,
};

/// Character columns used to draw the panorama.
const VIEW_COLUMNS: usize = 64;
/// Character rows used to draw the panorama.
const VIEW_ROWS: usize = 20;
/// Fraction of the canvas height where the horizon sits.
const HORIZON: f32 = 466.0 / 768.0;

/// Line-oriented backend that paints scenes as text.
///
/// Every character of an input line is delivered as one key press; the scene
/// is repainted after each line. End of input ends the session.
#[derive(Debug)]
pub(crate) struct TerminalBackend<R, W> {
    input: R,
    output: W,
}

impl<R, W> TerminalBackend<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R, W> RenderingBackend for TerminalBackend<R, W>
where
    R: BufRead,
    W: Write,
{
    fn run<F>(mut self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(FrameInput, &mut Scene) -> FrameControl,
    {
        let mut scene = presentation.scene;
        writeln!(self.output, "{}", presentation.window_title).context("failed to write title")?;
        paint(&mut self.output, &scene)?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read player input")?;
            if read == 0 {
                return Ok(());
            }
            for key in line.trim_end_matches(['\r', '\n']).chars() {
                if update_scene(FrameInput { key: Some(key) }, &mut scene) == FrameControl::Exit {
                    return paint(&mut self.output, &scene);
                }
            }
            paint(&mut self.output, &scene)?;
        }
    }
}

fn paint(output: &mut impl Write, scene: &Scene) -> Result<()> {
    let mut text = String::new();
    text.push_str(&format!("== {} ==", scene.lord.name_and_title));
    if let Some(heraldry) = &scene.lord.heraldry {
        text.push_str(&format!(" [{heraldry}]"));
    }
    text.push('\n');
    for row in render_panorama(&scene.panorama) {
        text.push_str(row.trim_end());
        text.push('\n');
    }
    text.push_str(&scene.location);
    text.push('\n');
    text.push_str(&scene.time_and_energy);
    text.push('\n');
    if let Some(status) = &scene.status {
        text.push_str(status);
        text.push('\n');
    }
    output
        .write_all(text.as_bytes())
        .and_then(|()| output.flush())
        .context("failed to paint scene")
}

/// Paints the draw list back to front into a grid of characters.
///
/// Each sprite marks the cell holding its bottom-centre anchor; anchors
/// outside the canvas are clipped.
fn render_panorama(instructions: &[DrawInstruction]) -> Vec<String> {
    let mut cells = vec![vec![' '; VIEW_COLUMNS]; VIEW_ROWS];
    let horizon = (HORIZON * VIEW_ROWS as f32) as usize;
    cells[horizon].fill('.');

    for instruction in instructions {
        let anchor = normalized_anchor(instruction.anchor);
        if !(0.0..=1.0).contains(&anchor.x) || !(0.0..=1.0).contains(&anchor.y) {
            continue;
        }
        let col = ((anchor.x * VIEW_COLUMNS as f32) as usize).min(VIEW_COLUMNS - 1);
        let row = ((anchor.y * VIEW_ROWS as f32) as usize).min(VIEW_ROWS - 1);
        cells[row][col] = glyph(instruction);
    }

    cells.into_iter().map(|row| row.into_iter().collect()).collect()
}

fn glyph(instruction: &DrawInstruction) -> char {
    let glyph = match instruction.asset {
        "terrain_mountains.png" => '^',
        "terrain_forest.png" => 'T',
        "terrain_citadel.png" => 'C',
        "terrain_tower.png" => 'I',
        "terrain_henge.png" => 'n',
        "terrain_village.png" => 'v',
        "terrain_downs.png" => '~',
        "terrain_keep.png" => 'K',
        "terrain_snowhall.png" => 'S',
        "terrain_lake.png" => 'o',
        "terrain_wastes.png" => '*',
        "terrain_ruin.png" => 'r',
        "terrain_lith.png" => '!',
        "terrain_cavern.png" => 'c',
        "wolf.png" => 'w',
        "dragon.png" => 'd',
        "ice_troll.png" => 't',
        "skulkrin.png" => 's',
        "horse.png" => 'h',
        _ => '?',
    };
    match instruction.layer {
        DrawLayer::Terrain => glyph,
        DrawLayer::Occupant => glyph.to_ascii_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::{paint, render_panorama, TerminalBackend, VIEW_COLUMNS, VIEW_ROWS};
    use midnight_core::{DrawInstruction, DrawLayer, ScreenPoint};
    use midnight_rendering::{
        FrameControl, LordPresentation, Presentation, RenderingBackend, Scene,
    };
    use std::io::Cursor;

    fn sprite(asset: &'static str, x: i32, y: i32, layer: DrawLayer) -> DrawInstruction {
        DrawInstruction {
            asset,
            anchor: ScreenPoint::new(x, y),
            scale: 1.0,
            layer,
        }
    }

    fn scene() -> Scene {
        Scene::new(
            LordPresentation {
                name_and_title: "Luxor the Moonprince".to_owned(),
                heraldry: None,
            },
            Vec::new(),
            "Luxor stands at the plains, looking north to the forest.".to_owned(),
            "It is dawn and Luxor is utterly invigorated.".to_owned(),
            None,
        )
    }

    #[test]
    fn later_sprites_cover_earlier_ones() {
        let rows = render_panorama(&[
            sprite("terrain_forest.png", 512, 568, DrawLayer::Terrain),
            sprite("terrain_mountains.png", 512, 568, DrawLayer::Terrain),
            sprite("wolf.png", 512, 768, DrawLayer::Occupant),
        ]);
        assert_eq!(rows.len(), VIEW_ROWS);
        let cell = |row: usize| rows[row].chars().nth(VIEW_COLUMNS / 2);
        assert_eq!(cell(14), Some('^'));
        assert_eq!(cell(VIEW_ROWS - 1), Some('W'));
    }

    #[test]
    fn heraldry_follows_the_name_plate() {
        let mut scene = scene();
        scene.lord.heraldry = Some("shield_luxor.png".to_owned());
        let mut output = Vec::new();
        paint(&mut output, &scene).expect("painting to memory succeeds");
        let text = String::from_utf8(output).expect("output is utf-8");
        assert_eq!(
            text.lines().next(),
            Some("== Luxor the Moonprince == [shield_luxor.png]")
        );
    }

    #[test]
    fn off_canvas_sprites_are_clipped() {
        let rows = render_panorama(&[sprite("terrain_forest.png", -155, 495, DrawLayer::Terrain)]);
        assert!(rows.iter().all(|row| !row.contains('T')));
    }

    #[test]
    fn every_line_of_input_is_replayed_as_keys() {
        let mut output = Vec::new();
        let mut seen = Vec::new();
        let backend = TerminalBackend::new(Cursor::new("ab\ncxd\n"), &mut output);
        backend
            .run(
                Presentation::new("Midnight", scene()),
                |input, scene| {
                    seen.extend(input.key);
                    if input.key == Some('x') {
                        return FrameControl::Exit;
                    }
                    scene.status = Some(format!("pressed {}", seen.len()));
                    FrameControl::Continue
                },
            )
            .expect("in-memory session succeeds");

        assert_eq!(seen, vec!['a', 'b', 'c', 'x']);
        let text = String::from_utf8(output).expect("output is utf-8");
        assert!(text.starts_with("Midnight\n== Luxor the Moonprince =="));
        assert!(text.contains("pressed 2"));
        assert!(text.contains("looking north to the forest"));
    }
}
