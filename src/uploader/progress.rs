/// Terminal state of one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Uploaded,
    Skipped,
    Cancelled,
}

/// Per-run counters, printed once at the end. Nothing is persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub uploaded: usize,
    pub skipped: usize,
    pub cancelled: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Uploaded => self.uploaded += 1,
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Cancelled => self.cancelled += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.uploaded + self.skipped + self.cancelled
    }

    pub fn print(&self) {
        println!();
        if self.cancelled == 0 {
            println!(
                "Uploaded {} emojis. ({} already existed)",
                self.uploaded, self.skipped
            );
        } else {
            println!(
                "Uploaded {} emojis. ({} already existed, {} cancelled)",
                self.uploaded, self.skipped, self.cancelled
            );
        }
    }
}
