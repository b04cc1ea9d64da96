//! Painting frame lines with theme colors and the pointer glow.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use super::glow::Glow;
use super::view::{Line, ORIGIN, Role};
use crate::theme::Palette;

pub fn paint<W: Write>(out: &mut W, lines: &[Line], palette: Palette, glow: &Glow) -> io::Result<()> {
    queue!(out, SetBackgroundColor(palette.bg), Clear(ClearType::All))?;

    for (y, line) in lines.iter().enumerate() {
        let row = ORIGIN.1 + y as u16;
        queue!(out, MoveTo(ORIGIN.0, row))?;

        let mut column = ORIGIN.0;
        let mut current_bg = palette.bg;
        for span in line {
            queue!(out, SetForegroundColor(role_color(span.role, palette)))?;
            for c in span.text.chars() {
                let bg = blend(palette.bg, palette.glow, glow.intensity(column, row));
                if bg != current_bg {
                    queue!(out, SetBackgroundColor(bg))?;
                    current_bg = bg;
                }
                queue!(out, Print(c))?;
                column += 1;
            }
        }
        if current_bg != palette.bg {
            queue!(out, SetBackgroundColor(palette.bg))?;
        }
    }

    queue!(out, ResetColor)?;
    out.flush()
}

fn role_color(role: Role, palette: Palette) -> Color {
    match role {
        Role::Border | Role::Muted => palette.muted,
        Role::Text => palette.fg,
        Role::Accent => palette.accent,
        Role::Confirm => palette.confirm,
        Role::Error => palette.error,
    }
}

/// Linear mix of two RGB colors; non-RGB colors are returned unchanged.
pub fn blend(base: Color, over: Color, t: f32) -> Color {
    if t <= 0.0 {
        return base;
    }
    match (base, over) {
        (Color::Rgb { r: r0, g: g0, b: b0 }, Color::Rgb { r: r1, g: g1, b: b1 }) => {
            let t = t.min(1.0);
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb {
                r: mix(r0, r1),
                g: mix(g0, g1),
                b: mix(b0, b1),
            }
        }
        _ => base,
    }
}
