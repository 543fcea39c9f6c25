//! Renders a board snapshot as a Unicode diagram for logs and demos.

use crate::arena::arena_types::{PlayerId, Square};
use crate::arena::snapshot::Snapshot;
use crate::arena::unit::UnitKind;

const LIGHT_GLYPHS: [char; 6] = ['♙', '♘', '♗', '♖', '♕', '♔'];
const DARK_GLYPHS: [char; 6] = ['♟', '♞', '♝', '♜', '♛', '♚'];

/// Render the snapshot with the top rank first, files lettered from `a`
/// and ranks numbered from 1 on both edges.
///
/// The first player number encountered takes the light glyph set, the
/// second the dark set; units of any further player render as `?`, as do
/// files beyond `z`. Empty squares render as `·`.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut output = String::new();
    let mut seen_players: Vec<PlayerId> = Vec::new();

    let label_width = snapshot.ymax().max(1).to_string().len();
    let legend = file_legend(snapshot.xmax(), label_width);

    output.push_str(&legend);
    output.push('\n');
    for y in (0..snapshot.ymax()).rev() {
        let label = format!("{:>label_width$}", y + 1);
        output.push_str(&label);
        output.push(' ');
        for x in 0..snapshot.xmax() {
            match snapshot.node(Square::new(x, y)).and_then(|node| node.unit) {
                Some(unit) => {
                    let palette = palette_index(&mut seen_players, unit.owner);
                    output.push(unit_glyph(palette, unit.kind));
                }
                None => output.push('·'),
            }
            output.push(' ');
        }
        output.push_str(&label);
        output.push('\n');
    }
    output.push_str(&legend);
    output
}

fn file_legend(xmax: i32, label_width: usize) -> String {
    let mut legend = " ".repeat(label_width + 1);
    for x in 0..xmax {
        legend.push(file_char(x));
        if x < xmax - 1 {
            legend.push(' ');
        }
    }
    legend
}

fn file_char(x: i32) -> char {
    if (0..26).contains(&x) {
        char::from(b'a' + x as u8)
    } else {
        '?'
    }
}

fn palette_index(seen_players: &mut Vec<PlayerId>, owner: PlayerId) -> usize {
    match seen_players.iter().position(|&player| player == owner) {
        Some(index) => index,
        None => {
            seen_players.push(owner);
            seen_players.len() - 1
        }
    }
}

fn unit_glyph(palette: usize, kind: UnitKind) -> char {
    let glyphs = match palette {
        0 => &LIGHT_GLYPHS,
        1 => &DARK_GLYPHS,
        _ => return '?',
    };
    match kind {
        UnitKind::Pawn { .. } => glyphs[0],
        UnitKind::Knight => glyphs[1],
        UnitKind::Bishop => glyphs[2],
        UnitKind::Rook => glyphs[3],
        UnitKind::Queen => glyphs[4],
        UnitKind::King => glyphs[5],
    }
}
