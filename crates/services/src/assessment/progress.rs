/// Position within an assessment, for headers and the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowProgress {
    /// Zero-based index of the displayed question.
    pub index: usize,
    pub total: usize,
}

impl FlowProgress {
    /// One-based number for "Question N of M".
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Share of questions already behind the current one, `index / total`.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        u8::try_from(self.index.min(self.total) * 100 / self.total).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_counts_questions_before_current() {
        let progress = FlowProgress {
            index: 0,
            total: 5,
        };
        assert_eq!(progress.percent(), 0);
        assert_eq!(progress.number(), 1);

        let progress = FlowProgress {
            index: 4,
            total: 5,
        };
        assert_eq!(progress.percent(), 80);
    }
}
