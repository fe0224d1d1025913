pub const ALL_SENTINEL: &str = "All";

/// A filter choice along one dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Unrestricted,
    Specific(Vec<String>),
}

impl Selection {
    pub fn single(value: &str) -> Self {
        Self::from_values(vec![value.to_string()])
    }

    /// Any literal `All` member lifts the restriction.
    pub fn from_values(values: Vec<String>) -> Self {
        if values.iter().any(|v| v == ALL_SENTINEL) {
            Selection::Unrestricted
        } else {
            Selection::Specific(values)
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::Unrestricted => true,
            Selection::Specific(values) => values.iter().any(|v| v == value),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Selection::Unrestricted)
    }
}
