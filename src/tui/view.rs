//! Frame layout: what goes where, independent of colors.

use crate::controller::{Configuration, CopyFeedback, MAX_LENGTH, MIN_LENGTH};
use crate::pass::{entropy_bits, strength};
use crate::terminal::{BOX_WIDTH, box_bottom, box_rule, box_top, console_width};

use super::Action;

/// Top-left screen cell of the frame.
pub const ORIGIN: (u16, u16) = (2, 1);

const INNER: usize = BOX_WIDTH - 4;
const CONTENT_COL: usize = 2;

pub const PASSWORD_ROW: usize = 3;
pub const SLIDER_ROW: usize = 6;
pub const TOGGLE_ROW: usize = 7;
pub const RESET_ROW: usize = 12;

const TRACK_LEN: usize = MAX_LENGTH - MIN_LENGTH + 1;
/// Frame column of the first slider cell ("8 " precedes it).
const TRACK_COL: usize = CONTENT_COL + 2;
/// Frame column where the symbols checkbox starts.
const SYMBOLS_COL: usize = CONTENT_COL + 20;

/// How a span is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Border,
    Text,
    Muted,
    Accent,
    Confirm,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub role: Role,
    pub text: String,
}

impl Span {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

pub type Line = Vec<Span>;

/// Everything the frame shows.
pub struct ViewModel<'a> {
    pub config: Configuration,
    pub password: &'a str,
    pub feedback: CopyFeedback,
    pub source: &'a str,
    pub status: Option<&'a str>,
}

pub fn frame(view: &ViewModel<'_>) -> Vec<Line> {
    let config = view.config;
    let charset = config.charset_size();
    let bits = entropy_bits(config.length, charset);

    let button = format!("[ {} ]", view.feedback.label());
    let button_role = match view.feedback {
        CopyFeedback::Idle => Role::Text,
        CopyFeedback::Confirmed => Role::Confirm,
    };
    let gap = INNER.saturating_sub(view.password.chars().count() + button.chars().count());

    let mut lines = vec![
        vec![Span::new(Role::Border, box_top("Password Generator"))],
        centered(vec![Span::new(Role::Muted, "Create a strong and secure password.")]),
        vec![Span::new(Role::Border, box_rule())],
        boxed(vec![
            Span::new(Role::Accent, view.password),
            Span::new(Role::Text, " ".repeat(gap)),
            Span::new(button_role, button),
        ]),
        vec![Span::new(Role::Border, box_rule())],
        boxed(vec![
            Span::new(Role::Text, "Password Length: "),
            Span::new(Role::Accent, config.length.to_string()),
        ]),
        boxed(slider(config.length)),
        boxed(vec![
            Span::new(Role::Text, format!("{:<20}", checkbox(config.digits_enabled, "Numbers (d)"))),
            Span::new(Role::Text, checkbox(config.symbols_enabled, "Symbols (s)")),
        ]),
        boxed(vec![]),
        boxed(vec![Span::new(
            Role::Muted,
            format!("Entropy: {:.1} bits ({}) • {} chars", bits, strength(bits), charset),
        )]),
        boxed(vec![Span::new(Role::Muted, format!("Source: {}", view.source))]),
        vec![Span::new(Role::Border, box_rule())],
        centered(vec![Span::new(Role::Error, "[ Reset ]")]),
        vec![Span::new(Role::Border, box_bottom())],
        vec![Span::new(
            Role::Muted,
            " ←/→ length  d/s toggle  c copy  r reset  t theme  q quit",
        )],
    ];

    lines.push(match view.status {
        Some(msg) => vec![Span::new(Role::Error, format!(" {msg}"))],
        None => vec![],
    });

    lines
}

/// Map a click on the frame to the control under it.
pub fn hit_test(column: u16, row: u16) -> Option<Action> {
    let col = column.checked_sub(ORIGIN.0)? as usize;
    let row = row.checked_sub(ORIGIN.1)? as usize;
    if col == 0 || col >= BOX_WIDTH - 1 {
        return None;
    }

    match row {
        PASSWORD_ROW => Some(Action::Copy),
        SLIDER_ROW if (TRACK_COL..TRACK_COL + TRACK_LEN).contains(&col) => {
            Some(Action::LengthTo(MIN_LENGTH + col - TRACK_COL))
        }
        TOGGLE_ROW if col < SYMBOLS_COL => Some(Action::ToggleDigits),
        TOGGLE_ROW => Some(Action::ToggleSymbols),
        RESET_ROW => Some(Action::Reset),
        _ => None,
    }
}

/// Plain text of a line, for tests and logging.
pub fn text(line: &Line) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

fn slider(length: usize) -> Vec<Span> {
    let pos = length.clamp(MIN_LENGTH, MAX_LENGTH) - MIN_LENGTH;
    vec![
        Span::new(Role::Muted, format!("{MIN_LENGTH} ")),
        Span::new(Role::Accent, "━".repeat(pos)),
        Span::new(Role::Accent, "●"),
        Span::new(Role::Muted, "─".repeat(TRACK_LEN - pos - 1)),
        Span::new(Role::Muted, format!(" {MAX_LENGTH}")),
    ]
}

fn checkbox(checked: bool, label: &str) -> String {
    format!("[{}] {}", if checked { 'x' } else { ' ' }, label)
}

fn width(spans: &[Span]) -> usize {
    spans.iter().map(|s| console_width(&s.text)).sum()
}

fn boxed(content: Vec<Span>) -> Line {
    let pad = INNER.saturating_sub(width(&content));
    let mut line = vec![Span::new(Role::Border, "│ ")];
    line.extend(content);
    line.push(Span::new(Role::Text, " ".repeat(pad)));
    line.push(Span::new(Role::Border, " │"));
    line
}

fn centered(content: Vec<Span>) -> Line {
    let total = INNER.saturating_sub(width(&content));
    let left = total / 2;
    let mut inner = vec![Span::new(Role::Text, " ".repeat(left))];
    inner.extend(content);
    boxed(inner)
}
