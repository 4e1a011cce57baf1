use console::{Emoji, style};

pub static WARN_ICON: Emoji<'_, '_> = Emoji("⚠️  ", "");
pub static ERROR_ICON: Emoji<'_, '_> = Emoji("❌ ", "");

// Report output owns stdout, so everything here goes to stderr.

pub fn print_warn(msg: &str) {
    eprintln!("{} {}", WARN_ICON, style(msg).yellow());
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", ERROR_ICON, style(msg).red().bold());
}

/// Prints the top-level error followed by each underlying cause.
pub fn print_error_chain(err: &anyhow::Error) {
    print_error(&format!("Error: {}", err));
    for cause in err.chain().skip(1) {
        eprintln!("   {} {}", style("caused by:").dim(), cause);
    }
}
