use anstyle::{AnsiColor, Style};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, Write};

const STATUS_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Success,
    Warn,
}

fn style_for(kind: StatusKind) -> Style {
    let style = Style::new().bold();
    match kind {
        StatusKind::Success => style.fg_color(Some(AnsiColor::Green.into())),
        StatusKind::Warn => style.fg_color(Some(AnsiColor::Yellow.into())),
    }
}

fn write_status(kind: StatusKind, label: &str, message: &str) {
    let (mut handle, use_color): (Box<dyn Write>, bool) = match kind {
        StatusKind::Warn => (
            Box::new(io::stderr().lock()),
            io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        ),
        _ => (
            Box::new(io::stdout().lock()),
            io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        ),
    };

    let padded_label = format!("{:>width$}", label, width = STATUS_WIDTH);

    let (prefix, suffix) = if use_color {
        let style = style_for(kind);
        (style.render().to_string(), style.render_reset().to_string())
    } else {
        (String::new(), String::new())
    };

    let _ = writeln!(handle, "{prefix}{padded_label}{suffix} {message}");
    let _ = handle.flush();
}

pub fn warn(message: impl Display) {
    write_status(StatusKind::Warn, "Warning", &message.to_string());
}

pub fn success(label: &str, message: impl Display) {
    write_status(StatusKind::Success, label, &message.to_string());
}
