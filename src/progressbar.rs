use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar drawn on stdout; invisible when stdout is not a terminal.
pub fn new() -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
    pb.set_style(transfer());
    pb
}

pub fn transfer() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:.bold.dim} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}
