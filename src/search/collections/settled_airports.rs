use ahash::{HashSet, HashSetExt};

/// Airports whose cheapest cost from the origin is final.
pub struct SettledAirports<'g> {
    settled: HashSet<&'g str>,
}

impl<'g> SettledAirports<'g> {
    pub fn new() -> Self {
        SettledAirports {
            settled: HashSet::new(),
        }
    }

    /// Marks `airport` as settled and reports whether it already was.
    pub fn settle(&mut self, airport: &'g str) -> bool {
        !self.settled.insert(airport)
    }

    pub fn len(&self) -> usize {
        self.settled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }
}

impl Default for SettledAirports<'_> {
    fn default() -> Self {
        Self::new()
    }
}
