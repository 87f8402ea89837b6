/// False if any country is unset (empty) or any two are equal.
pub fn all_three_different(c1: &str, c2: &str, c3: &str) -> bool {
    if c1.is_empty() || c2.is_empty() || c3.is_empty() {
        return false;
    }
    c1 != c2 && c1 != c3 && c2 != c3
}

/// The two most recent countries seen on accepted purchases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryHistory {
    pub last: String,
    pub second_last: String,
}

impl CountryHistory {
    /// Whether `incoming` would make three consecutive distinct countries.
    pub fn completes_distinct_triple(&self, incoming: &str) -> bool {
        all_three_different(&self.last, &self.second_last, incoming)
    }

    pub fn record(&mut self, country: &str) {
        self.second_last = std::mem::replace(&mut self.last, country.to_string());
    }
}
