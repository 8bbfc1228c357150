use crate::graphs::flight::Flight;

struct TrailStep<'g> {
    flight: &'g Flight,
    parent: Option<usize>,
}

/// Flight sequences of all labels of one search, stored as a tree of
/// predecessor links. Extending a path is O(1); a label only keeps the index
/// of its last step.
#[derive(Default)]
pub struct LabelTrail<'g> {
    steps: Vec<TrailStep<'g>>,
}

impl<'g> LabelTrail<'g> {
    pub fn new() -> Self {
        LabelTrail { steps: Vec::new() }
    }

    /// Appends `flight` to the path ending at `parent` and returns the index
    /// of the extended path.
    pub fn extend(&mut self, parent: Option<usize>, flight: &'g Flight) -> usize {
        self.steps.push(TrailStep { flight, parent });
        self.steps.len() - 1
    }

    /// Flights of the path ending at `last`, from origin to destination.
    pub fn flights(&self, last: Option<usize>) -> Vec<&'g Flight> {
        let mut flights = Vec::new();

        // Trace back from the last step.
        let mut current = last;
        while let Some(index) = current {
            let step = &self.steps[index];
            flights.push(step.flight);
            current = step.parent;
        }

        flights.reverse();
        flights
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
