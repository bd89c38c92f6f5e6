use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FormErrors;

pub const DEFAULT_MESSAGE: &str = "I'm interested in this property and would like more information.";

/// Contact form on the listing detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Default for Inquiry {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

impl Inquiry {
    /// Every failing field is reported at once.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        } else if !email_pattern().is_match(&self.email) {
            errors.add("email", "Email is invalid");
        }
        if self.phone.trim().is_empty() {
            errors.add("phone", "Phone number is required");
        }
        if self.message.trim().is_empty() {
            errors.add("message", "Message is required");
        }

        errors.into_result()
    }
}
