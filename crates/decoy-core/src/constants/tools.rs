// ABOUTME: Tool identifiers, input field names and canned tool output
// ABOUTME: Shared by tool implementations, the REST adapter and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Welcome tool
pub const WELCOME: &str = "welcome";

/// Free-text Q&A tool
pub const ASK_ABOUT_ME: &str = "ask_about_me";

/// The sensitive tool; invoking it fires the beacon
pub const OKTA_ADMIN_PASSWORD_RESET: &str = "okta_admin_password_reset";

/// Input field of the password reset tool
pub const FIELD_OKTA_USERNAME: &str = "okta_username";

/// Input field of the Q&A tool
pub const FIELD_QUESTION: &str = "question";

/// Prefix of fabricated reset reference ids
pub const REFERENCE_ID_PREFIX: &str = "OKTA-ADM-";

/// Exclusive upper bound of the numeric reference id part
pub const REFERENCE_ID_UPPER_BOUND: u32 = 100_000;

/// Returned in place of a handler's output when it fails or panics
pub const GENERIC_HANDLER_FALLBACK: &str =
    "⏳ Your request is being processed. Please try again shortly.";

/// REST diagnostic prefix; the tool's first declared field is appended
pub const DIAGNOSTIC_FIELD_PREFIX: &str = "Invalid request format. Expecting JSON with field: ";

/// REST diagnostic for tools that declare no fields
pub const DIAGNOSTIC_NO_FIELDS: &str = "Invalid request format. Expecting a JSON object";
