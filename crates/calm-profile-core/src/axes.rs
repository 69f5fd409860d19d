use std::ops::Range;

use serde::Serialize;

/// Total number of quiz questions.
pub const QUESTION_COUNT: usize = 20;

/// Questions per axis. The quiz is authored so that each axis owns a
/// contiguous block of five questions; the partition is a constant of the
/// system, not derived from input.
pub const QUESTIONS_PER_AXIS: usize = 5;

/// The four latent behavioral dimensions probed by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Structure,
    Collaboration,
    Scope,
    Tempo,
}

impl Axis {
    pub const ALL: [Self; 4] = [
        Self::Structure,
        Self::Collaboration,
        Self::Scope,
        Self::Tempo,
    ];

    /// Fixed question indices probing this axis.
    pub fn question_range(self) -> Range<usize> {
        let start = match self {
            Self::Structure => 0,
            Self::Collaboration => 5,
            Self::Scope => 10,
            Self::Tempo => 15,
        };
        start..start + QUESTIONS_PER_AXIS
    }
}

/// One binary answer. A counts toward the axis, B away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    A,
    B,
}

impl Answer {
    /// Parse a wire answer value. Only the exact strings "A" and "B" count;
    /// anything else, lowercase included, reads as absent, so malformed
    /// submissions score instead of failing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            _ => None,
        }
    }
}

/// Answers keyed by question index. Out-of-range indices are dropped on
/// insert, which keeps every downstream computation total.
#[derive(Debug, Clone, Default)]
pub struct ResponseSet {
    answers: [Option<Answer>; QUESTION_COUNT],
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question: usize, answer: Answer) {
        if let Some(slot) = self.answers.get_mut(question) {
            *slot = Some(answer);
        }
    }

    pub fn answer(&self, question: usize) -> Option<Answer> {
        self.answers.get(question).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }
}

impl FromIterator<(usize, Answer)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (usize, Answer)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (question, answer) in iter {
            set.record(question, answer);
        }
        set
    }
}

/// Normalized per-axis scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisScores {
    pub structure: u8,
    pub collaboration: u8,
    pub scope: u8,
    pub tempo: u8,
}

impl AxisScores {
    pub fn get(self, axis: Axis) -> u8 {
        match axis {
            Axis::Structure => self.structure,
            Axis::Collaboration => self.collaboration,
            Axis::Scope => self.scope,
            Axis::Tempo => self.tempo,
        }
    }

    /// Complement of an axis score, used wherever low discipline on the
    /// axis is what carries the signal.
    pub fn inverted(self, axis: Axis) -> u8 {
        100u8.saturating_sub(self.get(axis))
    }
}

/// Reduce raw answers to per-axis scores.
///
/// Each axis averages only its own answered questions, so a partially
/// completed axis never biases another. An axis with no answered questions
/// scores the neutral midpoint of 50.
pub fn aggregate(responses: &ResponseSet) -> AxisScores {
    AxisScores {
        structure: axis_score(responses, Axis::Structure),
        collaboration: axis_score(responses, Axis::Collaboration),
        scope: axis_score(responses, Axis::Scope),
        tempo: axis_score(responses, Axis::Tempo),
    }
}

fn axis_score(responses: &ResponseSet, axis: Axis) -> u8 {
    let mut answered = 0u32;
    let mut a_count = 0u32;
    for question in axis.question_range() {
        match responses.answer(question) {
            Some(Answer::A) => {
                answered += 1;
                a_count += 1;
            }
            Some(Answer::B) => answered += 1,
            None => {}
        }
    }

    let avg = if answered == 0 {
        0.5
    } else {
        f64::from(a_count) / f64::from(answered)
    };
    (avg * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_answers(answer: Answer) -> ResponseSet {
        (0..QUESTION_COUNT).map(|q| (q, answer)).collect()
    }

    #[test]
    fn axis_partition_covers_all_questions_once() {
        let mut seen = [false; QUESTION_COUNT];
        for axis in Axis::ALL {
            for question in axis.question_range() {
                let slot = seen.get_mut(question);
                assert_eq!(slot.as_deref(), Some(&false), "question {question} claimed twice");
                if let Some(slot) = slot {
                    *slot = true;
                }
            }
        }
        assert!(seen.iter().all(|&claimed| claimed));
    }

    #[test]
    fn all_a_answers_score_one_hundred_on_every_axis() {
        let scores = aggregate(&all_answers(Answer::A));
        assert_eq!(scores.structure, 100);
        assert_eq!(scores.collaboration, 100);
        assert_eq!(scores.scope, 100);
        assert_eq!(scores.tempo, 100);
    }

    #[test]
    fn all_b_answers_score_zero_on_every_axis() {
        let scores = aggregate(&all_answers(Answer::B));
        for axis in Axis::ALL {
            assert_eq!(scores.get(axis), 0);
        }
    }

    #[test]
    fn empty_response_set_scores_neutral_midpoint() {
        let scores = aggregate(&ResponseSet::new());
        for axis in Axis::ALL {
            assert_eq!(scores.get(axis), 50);
        }
    }

    #[test]
    fn partially_answered_axis_normalizes_by_its_own_count() {
        // Two of five structure questions answered, one of them A.
        let responses: ResponseSet = [(0, Answer::A), (1, Answer::B)].into_iter().collect();
        let scores = aggregate(&responses);
        assert_eq!(scores.structure, 50);
        // The untouched axes stay at the neutral default.
        assert_eq!(scores.collaboration, 50);
    }

    #[test]
    fn single_answer_dominates_its_axis() {
        let responses: ResponseSet = [(7, Answer::A)].into_iter().collect();
        let scores = aggregate(&responses);
        assert_eq!(scores.collaboration, 100);
    }

    #[test]
    fn out_of_range_question_indices_are_dropped() {
        let mut responses = ResponseSet::new();
        responses.record(QUESTION_COUNT, Answer::A);
        responses.record(usize::MAX, Answer::A);
        assert_eq!(responses.answered_count(), 0);
        let scores = aggregate(&responses);
        assert_eq!(scores.tempo, 50);
    }

    #[test]
    fn only_exact_upper_case_answer_values_parse() {
        assert_eq!(Answer::parse("A"), Some(Answer::A));
        assert_eq!(Answer::parse("B"), Some(Answer::B));
        assert_eq!(Answer::parse("a"), None);
        assert_eq!(Answer::parse("b"), None);
        assert_eq!(Answer::parse(" B "), None);
        assert_eq!(Answer::parse("C"), None);
        assert_eq!(Answer::parse(""), None);
        assert_eq!(Answer::parse("AB"), None);
    }
}
