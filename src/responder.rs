// ABOUTME: Keyword responder that maps free-text questions to pre-approved canned answers
// ABOUTME: Ordered, case-insensitive substring rules; the caller's text is never echoed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Responder Classifier
//!
//! Backs the `ask_about_me` tool. The question is lower-cased and matched
//! against an ordered list of rules; the first rule with any keyword
//! contained in the question wins. Output is always one of the configured
//! strings, so prompt-injection style input has nothing to steer.

/// Answer returned when no rule matches
pub const FALLBACK_ANSWER: &str = "🤔 Sorry, I couldn't find an answer to that.";

/// Who the persona is
pub const INTRO_ANSWER: &str = "👋 Hi, I'm Sam Rivera, a senior infrastructure security engineer focused on cloud identity and Zero Trust.";

/// Current work
pub const PROJECT_ANSWER: &str =
    "🚀 I'm building an identity-admin automation toolkit that agents can drive over MCP.";

/// Employer
pub const COMPANY_ANSWER: &str =
    "🏢 I work on the platform security team at a mid-sized SaaS company in Austin, TX.";

/// Technical background
pub const SKILLS_ANSWER: &str =
    "🛠️ Day to day I work with AWS and GCP, Kubernetes, Terraform and Okta administration.";

/// One ordered rule: any keyword hit selects `answer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponderRule {
    /// Lower-case keywords
    pub keywords: &'static [&'static str],
    /// Canned answer
    pub answer: &'static str,
}

/// Ordered rule table plus a fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderClassifier {
    rules: Vec<ResponderRule>,
    fallback: &'static str,
}

impl Default for ResponderClassifier {
    fn default() -> Self {
        Self::new(
            vec![
                ResponderRule {
                    keywords: &["who is", "about sam", "yourself", "introduce"],
                    answer: INTRO_ANSWER,
                },
                ResponderRule {
                    keywords: &["project"],
                    answer: PROJECT_ANSWER,
                },
                ResponderRule {
                    keywords: &["company", "work at", "do at", "employer"],
                    answer: COMPANY_ANSWER,
                },
                ResponderRule {
                    keywords: &["skill", "cloud", "platform", "aws", "azure", "gcp"],
                    answer: SKILLS_ANSWER,
                },
            ],
            FALLBACK_ANSWER,
        )
    }
}

impl ResponderClassifier {
    /// Build a classifier from rules in priority order.
    ///
    /// Keywords are compared lower-cased, so tables may use any case.
    #[must_use]
    pub fn new(rules: Vec<ResponderRule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Classify a question
    #[must_use]
    pub fn classify(&self, question: &str) -> &'static str {
        let question = question.to_lowercase();
        self.rules
            .iter()
            .find(|rule| {
                rule.keywords
                    .iter()
                    .any(|keyword| question.contains(&keyword.to_lowercase()))
            })
            .map_or(self.fallback, |rule| rule.answer)
    }

    /// Every answer this classifier can produce
    #[must_use]
    pub fn answers(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|rule| rule.answer)
            .chain(std::iter::once(self.fallback))
            .collect()
    }
}
