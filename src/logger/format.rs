/// Log formatting and console output with ANSI colors
///
/// Handles the `[TAG] [EVENT] message` layout with a dimmed timestamp prefix
/// and broken-pipe-safe writes for piped commands.
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 8;
const EVENT_WIDTH: usize = 22;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, event: &str, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();

    let tag_str = format!("{:width$}", tag.colored(), width = TAG_WIDTH);
    let event_str = format!("{:width$}", event, width = EVENT_WIDTH);

    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        tag_str,
        event_str.bright_white(),
        message
    );

    print_stdout_safe(&line);
}

/// Print to stdout, swallowing broken pipes (e.g. `nearswap quote | head`)
fn print_stdout_safe(line: &str) {
    let out = stdout();
    let mut handle = out.lock();
    if let Err(e) = writeln!(handle, "{}", line) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
    let _ = handle.flush();
}
