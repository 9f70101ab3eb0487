//! Completion messages and their selection

use rand::Rng;

/// Encouragement shown when a run completes
pub const ENCOURAGEMENTS: &[&str] = &[
    "お疲れさまでした！",
    "よく頑張りました！",
    "素晴らしい集中力です！",
    "その調子で次もいきましょう！",
    "ひと息ついてから次へ進みましょう。",
    "目標達成です。自分をほめてあげましょう！",
];

/// Source of the random choice used to pick a message
pub trait MessagePicker: Send {
    /// Return an index in `0..len`, or 0 when `len` is zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Picks uniformly at random from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl MessagePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed sequence of picks, cycling when exhausted
///
/// Used where completion output has to be deterministic, mainly tests.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    picks: Vec<usize>,
    cursor: usize,
}

impl SequencePicker {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }
}

impl MessagePicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
    }
}

/// Choose one message from the catalog
pub fn choose_message<P: MessagePicker + ?Sized>(picker: &mut P) -> &'static str {
    let index = picker.pick(ENCOURAGEMENTS.len()) % ENCOURAGEMENTS.len();
    ENCOURAGEMENTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_picker_cycles_and_wraps() {
        let mut picker = SequencePicker::new(vec![1, 7]);
        assert_eq!(picker.pick(6), 1);
        assert_eq!(picker.pick(6), 1);
        assert_eq!(picker.pick(6), 1);
    }

    #[test]
    fn random_picker_stays_in_bounds() {
        let mut picker = RandomPicker;
        for _ in 0..200 {
            assert!(picker.pick(ENCOURAGEMENTS.len()) < ENCOURAGEMENTS.len());
        }
    }

    #[test]
    fn choose_message_draws_from_the_catalog() {
        let mut picker = SequencePicker::new(vec![2]);
        assert_eq!(choose_message(&mut picker), ENCOURAGEMENTS[2]);
    }

    #[test]
    fn pickers_tolerate_an_empty_range() {
        assert_eq!(RandomPicker.pick(0), 0);
        assert_eq!(SequencePicker::new(vec![4]).pick(0), 0);
        assert_eq!(SequencePicker::new(Vec::new()).pick(3), 0);
    }
}
