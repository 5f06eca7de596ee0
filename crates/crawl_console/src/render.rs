use crawl_core::StatusUpdate;

/// Turns successive status updates into terminal lines, printing each URL once.
#[derive(Debug, Default)]
pub struct Renderer {
    printed: usize,
}

impl Renderer {
    pub fn render(&mut self, update: &StatusUpdate) -> Vec<String> {
        // Results are the full list each time; a shorter list means a new job.
        if update.results.len() < self.printed {
            self.printed = 0;
        }

        let mut lines = Vec::with_capacity(1 + update.results.len() - self.printed);
        lines.push(format!(
            "Status: {} | URLs: {}",
            update.status,
            update.results.len()
        ));
        for (idx, url) in update.results.iter().enumerate().skip(self.printed) {
            lines.push(format!("  {:>4}. {}", idx + 1, url));
        }
        self.printed = update.results.len();
        lines
    }
}
