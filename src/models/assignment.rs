use super::Participant;

/// One giver paired with the person they buy a gift for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub giver: Participant,
    pub receiver: Participant,
}

impl Assignment {
    pub fn is_self_assigned(&self) -> bool {
        self.giver.email() == self.receiver.email()
    }
}

/// Giver -> receiver pairs in giving order
///
/// Keyed by giver email. Duplicate emails in the roster are kept as separate
/// entries; `get` returns the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentMap {
    entries: Vec<Assignment>,
}

impl AssignmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, giver: Participant, receiver: Participant) {
        self.entries.push(Assignment { giver, receiver });
    }

    /// Receiver assigned to the giver with this email
    pub fn get(&self, giver_email: &str) -> Option<&Participant> {
        self.entries
            .iter()
            .find(|a| a.giver.email() == giver_email)
            .map(|a| &a.receiver)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssignmentMap {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
