use crate::settings::{CLASSIC_REVERT_MS, QUICK_REVERT_MS};
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("Livepass"),
        box_line_center("Live password generator widget"),
        box_line(""),
        box_line("USAGE:"),
        box_line("  livepass [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
    ];

    let opts: [(&str, String); 14] = [
        ("  -l, --length <N>", "Initial and reset length (8-32)".into()),
        ("  -d, --digits", "Include digits by default".into()),
        ("      --no-digits", "Letters and symbols only".into()),
        ("  -s, --symbols", "Include symbols by default".into()),
        ("      --no-symbols", "Letters and digits only".into()),
        (
            "      --delay <MS>",
            format!("Copy feedback delay (default: {CLASSIC_REVERT_MS})"),
        ),
        (
            "      --quick",
            format!("Compact preset: {QUICK_REVERT_MS}ms delay, digits on"),
        ),
        ("      --seed <N>", "Reproducible output from a fixed seed".into()),
        ("      --theme <NAME>", "dark or light".into()),
        ("  -p, --print", "Print one password and exit".into()),
        ("  -b, --board", "With --print, copy instead of printing".into()),
        ("      --save", "Store the given preferences".into()),
        ("  -h, --help", "Display this help message".into()),
        ("  -v, --version", "Display version".into()),
    ];
    for (flag, desc) in &opts {
        lines.extend(box_opt(flag, desc));
    }

    lines.extend([
        box_line(""),
        box_line("KEYS:"),
        box_line("  ←/→ -/+       length       Home/End  min/max"),
        box_line("  d  digits     s  symbols   g  regenerate"),
        box_line("  c  copy       r  reset     t  theme"),
        box_line("  q  quit       mouse: click controls"),
        box_line(""),
        box_line("LOGGING:"),
        box_line("  LIVEPASS_LOG=debug livepass"),
        box_line("  LIVEPASS_LOG_FILE=path  log file (default:"),
        box_line("  $TMPDIR/livepass.log when stderr is a tty)"),
        box_line(""),
        box_bottom(),
    ]);
    lines
}

pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
}
