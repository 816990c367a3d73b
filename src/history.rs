use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub move_: Move,
    pub state: String,
}

/// Serialized states reached by applying moves one at a time. Index 0 is
/// the state before the first move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLog {
    initial: String,
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new(cube: &Cube) -> StepLog {
        StepLog {
            initial: cube.to_facelet_string(),
            steps: Vec::new(),
        }
    }

    pub fn record(cube: &mut Cube, moves: impl IntoIterator<Item = Move>) -> StepLog {
        let mut history = StepLog::new(cube);
        for move_ in moves {
            cube.rotate(move_);
            history.push(move_, cube);
        }
        history
    }

    pub fn push(&mut self, move_: Move, after: &Cube) {
        self.steps.push(Step {
            move_,
            state: after.to_facelet_string(),
        });
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn state_at(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.initial),
            i => self.steps.get(i - 1).map(|s| s.state.as_str()),
        }
    }

    pub fn last_state(&self) -> &str {
        self.state_at(self.len()).unwrap_or(&self.initial)
    }
}
