//! Per-round pipe counter, owned by the game and bumped as pipes are cleared.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score(u32);

impl Score {
    pub fn new() -> Self {
        Score(0)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn label(&self) -> String {
        format!("Score: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_reset() {
        let mut score = Score::new();
        score.increment();
        score.increment();
        assert_eq!(score.value(), 2);
        assert_eq!(score.label(), "Score: 2");
        score.reset();
        assert_eq!(score, Score::default());
    }
}
