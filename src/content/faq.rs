// SPDX-License-Identifier: MPL-2.0
//! Frequently asked questions and the search filter over them.

/// One question/answer pair shown as a collapsible card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// All FAQ entries in display order.
pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I enroll for the next semester?",
        answer: "Visit the Registrar's Office or use the online enrollment portal. Make sure \
                 to prepare your requirements including previous semester grades and updated ID.",
    },
    FaqEntry {
        question: "Where can I get my school ID?",
        answer: "School IDs are processed at the Student Affairs Office located at the Main \
                 Building, Ground Floor. Bring 2 1x1 photos and your enrollment receipt.",
    },
    FaqEntry {
        question: "How do I request my Transcript of Records?",
        answer: "Submit a request form at the Registrar's Office. Processing takes 5-7 working \
                 days. Bring a valid ID and payment for the processing fee.",
    },
    FaqEntry {
        question: "What are the library hours?",
        answer: "The library is open Monday to Friday, 8:00 AM to 5:00 PM. Extended hours \
                 during exam week: 7:00 AM to 8:00 PM.",
    },
    FaqEntry {
        question: "How can I apply for a scholarship?",
        answer: "Visit the Scholarship Office for available programs. Requirements include \
                 grades, income certificate, and recommendation letters. Deadline is usually \
                 at the start of each semester.",
    },
];

/// Returns the entries whose question or answer contains `term`,
/// case-insensitively. An empty term matches everything.
pub fn filter(term: &str) -> Vec<&'static FaqEntry> {
    let needle = term.to_lowercase();
    FAQS.iter()
        .filter(|faq| {
            faq.question.to_lowercase().contains(&needle)
                || faq.answer.to_lowercase().contains(&needle)
        })
        .collect()
}
