use compiler__diagnostics::Warning;
use compiler__source::Span;

mod code_printer;
mod headers_manager;
mod instruction;
mod symbol_table;

pub use code_printer::CodePrinter;
pub use headers_manager::HeadersManager;
pub use instruction::Instruction;
pub use symbol_table::{Ownership, RuntimeType, StorageClass, SymbolTable, Variable};

/// Per-function state mutated while compiling calls.
#[derive(Default)]
pub struct CompilationContext {
    pub symbol_table: SymbolTable,
    pub code_printer: CodePrinter,
    pub headers_manager: HeadersManager,
    pub warnings: Vec<Warning>,
}

impl CompilationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a heap-boxed temporary and initializes it, so the returned
    /// variable always holds a valid boxed container.
    pub fn temp_variable_for_write(&mut self) -> Variable {
        let variable = self
            .symbol_table
            .allocate_temp_variable(StorageClass::TempBoxed);
        self.code_printer.output(Instruction::InitVariable {
            variable: variable.name.clone(),
        });
        variable
    }

    /// Allocates a stack-local boxed container. It is passed by address and
    /// never owns the data stored into it.
    pub fn temp_local_variable_for_write(&mut self) -> Variable {
        self.symbol_table
            .allocate_temp_variable(StorageClass::TempStackLocal)
    }

    pub fn warn(&mut self, message: impl Into<String>, tag: &'static str, span: Span) {
        self.warnings.push(Warning::new(message, tag, span));
    }
}
