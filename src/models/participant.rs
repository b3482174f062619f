use std::fmt;

/// A person who gives one gift and receives one gift
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    name: String,
    email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email, used as the participant's identifier
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}
