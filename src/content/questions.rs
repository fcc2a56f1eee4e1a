//! Number Justify question bank
//!
//! Each pair asks nearly the same thing twice. The majority answers the safe
//! prompt, impostors answer the impostor prompt, and the answers are then
//! compared out loud.

use serde::{Deserialize, Serialize};

/// The kind of input a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerType {
    /// A number, typed on a numeric keypad
    Number,
    /// Free text
    Text,
}

/// A safe/impostor question pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionPair {
    /// Question shown to everyone who is not an impostor
    pub safe: &'static str,
    /// Question shown to impostors
    pub impostor: &'static str,
    /// Input both questions expect
    pub answer_type: AnswerType,
}

impl QuestionPair {
    const fn number(safe: &'static str, impostor: &'static str) -> Self {
        Self {
            safe,
            impostor,
            answer_type: AnswerType::Number,
        }
    }

    const fn text(safe: &'static str, impostor: &'static str) -> Self {
        Self {
            safe,
            impostor,
            answer_type: AnswerType::Text,
        }
    }

    /// The question a player with the given role sees
    pub fn prompt(&self, impostor: bool) -> &'static str {
        if impostor { self.impostor } else { self.safe }
    }
}

/// Built-in questions
pub static QUESTIONS: &[QuestionPair] = &[
    QuestionPair::number(
        "How many hours of sleep do you need to feel human?",
        "How many hours could you last without your phone?",
    ),
    QuestionPair::number(
        "How many cups of coffee is too many in one day?",
        "How many slices of pizza can you eat in one sitting?",
    ),
    QuestionPair::number(
        "At what age should you be allowed to drive?",
        "At what age did you stop believing in the tooth fairy?",
    ),
    QuestionPair::number(
        "How many close friends does a person really need?",
        "How many pairs of shoes do you own?",
    ),
    QuestionPair::number(
        "On a scale of 1 to 10, how scary are clowns?",
        "On a scale of 1 to 10, how good is pineapple on pizza?",
    ),
    QuestionPair::number(
        "How many minutes is acceptable to be late for a party?",
        "How many minutes does it take you to shower?",
    ),
    QuestionPair::number(
        "How many countries would you like to visit in your life?",
        "How many countries can you name in one minute?",
    ),
    QuestionPair::number(
        "How much would you pay for a concert ticket?",
        "How much would you pay for a really good sandwich?",
    ),
    QuestionPair::number(
        "How many days could you survive on a desert island?",
        "How many days a year do you feel truly rested?",
    ),
    QuestionPair::number(
        "How many times a day do you check social media?",
        "How many times a week do you cook at home?",
    ),
    QuestionPair::number(
        "What is the ideal number of kids to have?",
        "What is the ideal number of pets to have?",
    ),
    QuestionPair::number(
        "How many hours is a good movie?",
        "How many hours is a good road trip?",
    ),
    QuestionPair::text(
        "What is the best food to eat at midnight?",
        "What is the best food to eat at a wedding?",
    ),
    QuestionPair::text(
        "Which animal would make the best roommate?",
        "Which animal would win in a fight against a bear?",
    ),
    QuestionPair::text(
        "What would you bring to a desert island?",
        "What would you bring to a job interview?",
    ),
    QuestionPair::text(
        "Which superpower would be the most useful at work?",
        "Which superpower would be the most fun at a party?",
    ),
    QuestionPair::text(
        "Where would you go on a dream vacation?",
        "Where would you hide if zombies attacked?",
    ),
    QuestionPair::text(
        "What is the worst gift you could receive?",
        "What is the best gift for a five year old?",
    ),
];

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_by_role() {
        let pair = QuestionPair::number("safe?", "impostor?");
        assert_eq!(pair.prompt(false), "safe?");
        assert_eq!(pair.prompt(true), "impostor?");
    }

    #[test]
    fn test_bank_has_both_answer_types() {
        assert!(QUESTIONS.iter().any(|q| q.answer_type == AnswerType::Number));
        assert!(QUESTIONS.iter().any(|q| q.answer_type == AnswerType::Text));
    }

    #[test]
    fn test_bank_prompts_differ() {
        for pair in QUESTIONS {
            assert_ne!(pair.safe, pair.impostor);
        }
    }
}
