use physio_core::models::history::HistoryEntry;
use physio_core::models::quality::ReliabilityReport;

/// Accumulates an answer-reliability signal over a session.
pub trait QualityControl: Send + Sync {
    /// Record one answered step. `history` includes `step`.
    fn analyze_step(&mut self, step: &HistoryEntry, history: &[HistoryEntry]);

    fn reliability_report(&self) -> ReliabilityReport;
}

/// Takes every answer at face value; only blank answers count against
/// reliability.
///
/// The session is unreliable once more than a quarter of the analysed
/// steps were left blank.
#[derive(Debug, Clone, Default)]
pub struct AcceptAllQualityControl {
    steps: usize,
    blank: usize,
}

impl AcceptAllQualityControl {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QualityControl for AcceptAllQualityControl {
    fn analyze_step(&mut self, step: &HistoryEntry, _history: &[HistoryEntry]) {
        self.steps += 1;
        if step.is_blank() {
            self.blank += 1;
            tracing::debug!(id = %step.id, blank = self.blank, "blank answer");
        }
    }

    fn reliability_report(&self) -> ReliabilityReport {
        if self.steps == 0 {
            return ReliabilityReport::default();
        }

        let answered = (self.steps - self.blank) as f64 / self.steps as f64;
        let is_reliable = self.blank * 4 <= self.steps;

        let mut report = ReliabilityReport {
            score: (answered * 100.0).round(),
            is_reliable,
            ..ReliabilityReport::default()
        };
        if self.blank > 0 {
            report
                .warnings
                .push(format!("{} of {} answers left blank", self.blank, self.steps));
        }
        if !is_reliable {
            report.flags.push("low_completion".to_string());
        }
        report
    }
}
