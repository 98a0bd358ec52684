//! Three-choice phrase quizzes used by the phrase list and the mini-games.
use super::content::{PHRASES, Phrase};
use rand::Rng;
use rand::seq::SliceRandom;

const DISTRACTORS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizDirection {
    /// Japanese prompt, Korean choices.
    JpToKr,
    /// Korean prompt, Japanese choices.
    KrToJp,
}

impl QuizDirection {
    fn prompt(self, phrase: &Phrase) -> &'static str {
        match self {
            QuizDirection::JpToKr => phrase.jp,
            QuizDirection::KrToJp => phrase.kr,
        }
    }

    fn answer(self, phrase: &Phrase) -> &'static str {
        match self {
            QuizDirection::JpToKr => phrase.kr,
            QuizDirection::KrToJp => phrase.jp,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Quiz {
    pub phrase_id: &'static str,
    pub direction: QuizDirection,
    pub prompt: &'static str,
    pub choices: Vec<&'static str>,
    pub answer_index: usize,
}

impl Quiz {
    /// Quiz on a random phrase.
    pub fn generate<R: Rng + ?Sized>(direction: QuizDirection, rng: &mut R) -> Self {
        let target = PHRASES.choose(rng).unwrap_or(&PHRASES[0]);
        Self::for_phrase(target, direction, rng)
    }

    /// Quiz on `target` with two other phrases as distractors, in shuffled order.
    pub fn for_phrase<R: Rng + ?Sized>(
        target: &'static Phrase,
        direction: QuizDirection,
        rng: &mut R,
    ) -> Self {
        let others: Vec<&Phrase> = PHRASES.iter().filter(|p| p.id != target.id).collect();
        let answer = direction.answer(target);

        let mut choices: Vec<&'static str> = others
            .choose_multiple(rng, DISTRACTORS)
            .map(|p| direction.answer(p))
            .collect();
        choices.push(answer);
        choices.shuffle(rng);

        let answer_index = choices.iter().position(|&c| c == answer).unwrap_or(0);

        Self {
            phrase_id: target.id,
            direction,
            prompt: direction.prompt(target),
            choices,
            answer_index,
        }
    }

    pub fn is_correct(&self, choice_index: usize) -> bool {
        choice_index == self.answer_index
    }

    pub fn answer(&self) -> &'static str {
        self.choices[self.answer_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::find_phrase;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_quiz_has_three_distinct_choices() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let quiz = Quiz::generate(QuizDirection::JpToKr, &mut rng);
            assert_eq!(quiz.choices.len(), 3);

            let mut sorted = quiz.choices.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 3);
        }
    }

    #[test]
    fn test_answer_index_points_at_target() {
        let mut rng = StdRng::seed_from_u64(1);
        let phrase = find_phrase("p7").unwrap();

        let quiz = Quiz::for_phrase(phrase, QuizDirection::JpToKr, &mut rng);
        assert_eq!(quiz.prompt, phrase.jp);
        assert_eq!(quiz.answer(), phrase.kr);
        assert!(quiz.is_correct(quiz.answer_index));
        assert!(!quiz.is_correct((quiz.answer_index + 1) % 3));
    }

    #[test]
    fn test_kr_to_jp_direction() {
        let mut rng = StdRng::seed_from_u64(9);
        let phrase = find_phrase("p14").unwrap();

        let quiz = Quiz::for_phrase(phrase, QuizDirection::KrToJp, &mut rng);
        assert_eq!(quiz.prompt, phrase.kr);
        assert_eq!(quiz.answer(), phrase.jp);
        assert_eq!(quiz.phrase_id, "p14");
    }
}
