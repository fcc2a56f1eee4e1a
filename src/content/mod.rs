//! Static prompt content and random draws from it
//!
//! The [`Library`] holds the question and word banks a game deals from. The
//! built-in banks are used by default; a custom library can be supplied when
//! constructing a game.

pub mod questions;
pub mod words;

use enum_map::EnumMap;
use thiserror::Error;

use crate::rng::RandomSource;

pub use questions::{AnswerType, QUESTIONS, QuestionPair};
pub use words::{Category, WORD_PAIRS, WordPair};

/// Errors building a [`Library`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No question pairs were supplied
    #[error("question bank is empty")]
    NoQuestions,
    /// No word pairs were supplied
    #[error("word bank is empty")]
    NoWords,
}

/// Question and word banks with per-category indices
#[derive(Debug, Clone)]
pub struct Library {
    questions: &'static [QuestionPair],
    words: &'static [WordPair],
    /// Indices into `words` for each category; `RandomMix` lists every pair
    pools: EnumMap<Category, Vec<usize>>,
}

impl Library {
    /// Builds a library over the given banks
    ///
    /// # Errors
    ///
    /// Returns an error if either bank is empty.
    pub fn new(
        questions: &'static [QuestionPair],
        words: &'static [WordPair],
    ) -> Result<Self, Error> {
        if questions.is_empty() {
            return Err(Error::NoQuestions);
        }
        if words.is_empty() {
            return Err(Error::NoWords);
        }

        let pools = EnumMap::from_fn(|category| {
            words
                .iter()
                .enumerate()
                .filter(|(_, pair)| category == Category::RandomMix || pair.category == category)
                .map(|(index, _)| index)
                .collect()
        });

        Ok(Self {
            questions,
            words,
            pools,
        })
    }

    /// Draws one question pair uniformly
    pub fn draw_question<R: RandomSource>(&self, rng: &mut R) -> &'static QuestionPair {
        let questions = self.questions;
        &questions[rng.below(questions.len())]
    }

    /// Draws one word pair uniformly from `category`
    ///
    /// Falls back to the first pair of the bank when the category has none.
    pub fn draw_word<R: RandomSource>(&self, category: Category, rng: &mut R) -> &'static WordPair {
        let words = self.words;
        let index = rng.choose(&self.pools[category]).copied().unwrap_or(0);
        &words[index]
    }

    /// Number of word pairs available for `category`
    pub fn pool_size(&self, category: Category) -> usize {
        self.pools[category].len()
    }
}

impl Default for Library {
    /// The built-in banks
    ///
    /// # Panics
    ///
    /// Never in practice; the built-in banks are non-empty.
    fn default() -> Self {
        Self::new(QUESTIONS, WORD_PAIRS).expect("built-in banks are non-empty")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::rng::Lcg;

    static ONLY_FOOD: &[WordPair] = &[
        WordPair {
            safe: "Pizza",
            impostor: "Burger",
            category: Category::Food,
        },
        WordPair {
            safe: "Sushi",
            impostor: "Tacos",
            category: Category::Food,
        },
    ];

    #[test]
    fn test_empty_banks_rejected() {
        assert_eq!(
            Library::new(&[], WORD_PAIRS).unwrap_err(),
            Error::NoQuestions
        );
        assert_eq!(Library::new(QUESTIONS, &[]).unwrap_err(), Error::NoWords);
    }

    #[test]
    fn test_random_mix_pool_is_whole_bank() {
        let library = Library::default();
        assert_eq!(library.pool_size(Category::RandomMix), WORD_PAIRS.len());
    }

    #[test]
    fn test_draw_word_respects_category() {
        let library = Library::default();
        let mut rng = Lcg::new(11);
        for _ in 0..50 {
            assert_eq!(
                library.draw_word(Category::Animals, &mut rng).category,
                Category::Animals
            );
        }
    }

    #[test]
    fn test_draw_word_empty_pool_falls_back_to_first_pair() {
        let library = Library::new(QUESTIONS, ONLY_FOOD).unwrap();
        let mut rng = Lcg::new(4);
        assert_eq!(library.pool_size(Category::Jobs), 0);
        assert_eq!(library.draw_word(Category::Jobs, &mut rng), &ONLY_FOOD[0]);
    }

    #[test]
    fn test_draw_question_is_reproducible() {
        let library = Library::default();
        let mut a = Lcg::new(123);
        let mut b = Lcg::new(123);
        for _ in 0..10 {
            assert_eq!(library.draw_question(&mut a), library.draw_question(&mut b));
        }
    }
}
