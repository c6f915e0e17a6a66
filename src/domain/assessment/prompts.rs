//! Prompt construction for the diagnostic conversation.
//!
//! The layouts requested here are what `parser` expects back; keep the two
//! modules in sync when changing either.

use super::{GeneratedQuestion, QUESTION_PHASE_LIMIT};

/// Output budget for one generated question.
pub const QUESTION_MAX_TOKENS: u32 = 200;

/// Output budget for the final report.
pub const REPORT_MAX_TOKENS: u32 = 300;

/// The fixed opening question. The only question not produced by the model.
pub const FIRST_QUESTION: &str = "What type of business do you run?";

const FIRST_QUESTION_OPTIONS: [&str; 4] = [
    "A. Retail or e-commerce",
    "B. Professional services or consulting",
    "C. Food, hospitality, or events",
    "D. Trades, construction, or field services",
];

/// Returns the hardcoded business-classification question that opens every
/// assessment.
pub fn first_question() -> GeneratedQuestion {
    GeneratedQuestion {
        question: FIRST_QUESTION.to_string(),
        options: FIRST_QUESTION_OPTIONS
            .iter()
            .map(|option| option.to_string())
            .collect(),
        question_number: 1,
        is_complete: false,
    }
}

/// Builds the prompt for the next diagnostic question from the accumulated
/// history.
pub fn question_prompt(business_type: Option<&str>, answers: &[String]) -> String {
    format!(
        "You are a business operations consultant running a short chaos \
         diagnostic ({} questions total).\n\
         Business type: {}\n\n\
         Answers so far:\n{}\n\n\
         Ask the single most revealing next question about how this business \
         runs day to day. Reply with the question on the first line, then \
         exactly four answer options on the following four lines, lettered \
         \"A.\" through \"D.\", ordered from most organized to most chaotic. \
         No other text.",
        QUESTION_PHASE_LIMIT,
        business_type.unwrap_or("unknown"),
        answers.join("\n"),
    )
}

/// Builds the prompt for the final chaos report from the full history.
pub fn report_prompt(answers: &[String]) -> String {
    format!(
        "You are a business operations consultant. A business owner completed \
         this chaos diagnostic:\n\n{}\n\n\
         Assess how chaotic their operations are. Reply in exactly this \
         format:\n\n\
         Chaos score: <number from 1 to 100>\n\
         Top 3 operational issues:\n\
         <one issue per line>\n\
         Recommendations:\n\
         <one recommendation per line, in the same order as the issues>",
        answers.join("\n"),
    )
}
