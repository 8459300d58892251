//! Smooth closed curves from a ring of live sample positions.

use glam::Vec2;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    QuadTo { control: Vec2, to: Vec2 },
    Close,
}

/// Starts at the midpoint of the first two samples, then for every later
/// sample emits a quadratic whose control is the sample and whose end is the
/// midpoint to its cyclic successor. Empty input yields no commands.
pub fn reconstruct(points: &[Vec2]) -> Vec<PathCommand> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(n + 1);
    out.push(PathCommand::MoveTo(midpoint(points[0], points[1 % n])));
    for i in 1..n {
        let curr = points[i];
        let next = points[(i + 1) % n];
        out.push(PathCommand::QuadTo {
            control: curr,
            to: midpoint(curr, next),
        });
    }
    out.push(PathCommand::Close);
    out
}

#[inline]
fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// SVG path data (`M x y Q cx cy x y ... Z`).
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    let mut d = String::with_capacity(commands.len() * 48);
    for cmd in commands {
        if !d.is_empty() {
            d.push(' ');
        }
        // writing into a String cannot fail
        _ = match cmd {
            PathCommand::MoveTo(p) => write!(d, "M {} {}", p.x, p.y),
            PathCommand::QuadTo { control, to } => {
                write!(d, "Q {} {} {} {}", control.x, control.y, to.x, to.y)
            }
            PathCommand::Close => write!(d, "Z"),
        };
    }
    d
}
