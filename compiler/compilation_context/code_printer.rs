use crate::Instruction;

/// Append-only instruction buffer for the function being compiled.
#[derive(Default)]
pub struct CodePrinter {
    instructions: Vec<Instruction>,
}

impl CodePrinter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.instructions
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
