use indicatif::{ProgressBar, ProgressStyle};

/// Terminal progress bar for a pool run. Hidden when disabled so callers never
/// need to branch.
pub struct ProgressMonitor {
    bar: ProgressBar,
    enabled: bool,
}

impl ProgressMonitor {
    pub fn new(total: usize, enabled: bool) -> Self {
        if !enabled {
            return Self {
                bar: ProgressBar::hidden(),
                enabled: false,
            };
        }

        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} sites ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ");
        bar.set_style(style);
        bar.set_message("starting...");

        Self { bar, enabled: true }
    }

    pub fn record_done(&self, ok: bool) {
        if !self.enabled {
            return;
        }
        self.bar.inc(1);
        if !ok {
            self.bar.set_message("some sites failed");
        }
    }

    pub fn finish(&self, failed: usize) {
        if !self.enabled {
            return;
        }
        let msg = if failed == 0 {
            "done".to_string()
        } else {
            format!("done, {} failed", failed)
        };
        self.bar.finish_with_message(msg);
    }
}
