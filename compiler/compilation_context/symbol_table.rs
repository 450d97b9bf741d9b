use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use compiler__diagnostics::CompilationError;
use compiler__source::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeType {
    Int,
    Uint,
    Long,
    Ulong,
    Double,
    Bool,
    Char,
    String,
    Array,
    /// Generic boxed value.
    Variable,
}

impl RuntimeType {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RuntimeType::Int => "int",
            RuntimeType::Uint => "uint",
            RuntimeType::Long => "long",
            RuntimeType::Ulong => "ulong",
            RuntimeType::Double => "double",
            RuntimeType::Bool => "bool",
            RuntimeType::Char => "char",
            RuntimeType::String => "string",
            RuntimeType::Array => "array",
            RuntimeType::Variable => "variable",
        }
    }

    #[must_use]
    pub fn c_type(self) -> &'static str {
        match self {
            RuntimeType::Int => "int",
            RuntimeType::Uint => "unsigned int",
            RuntimeType::Long => "long",
            RuntimeType::Ulong => "unsigned long",
            RuntimeType::Double => "double",
            RuntimeType::Bool => "zend_bool",
            RuntimeType::Char => "char",
            RuntimeType::String => "zephir_str",
            RuntimeType::Array | RuntimeType::Variable => "zval",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageClass {
    TempBoxed,
    TempStackLocal,
    Named,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    Owned,
    Borrowed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub storage: StorageClass,
    pub runtime_type: RuntimeType,
    pub ownership: Ownership,
}

impl Variable {
    /// How generated code refers to the boxed container: pointers by name,
    /// stack-local containers by address.
    #[must_use]
    pub fn handle(&self) -> String {
        match self.storage {
            StorageClass::TempStackLocal => format!("&{}", self.name),
            StorageClass::TempBoxed | StorageClass::Named => self.name.clone(),
        }
    }

    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.storage != StorageClass::Named
    }
}

#[derive(Default)]
pub struct SymbolTable {
    variables: Vec<Variable>,
    index_by_name: HashMap<String, usize>,
    next_temp_index: usize,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_variable(&mut self, name: &str, runtime_type: RuntimeType) -> &Variable {
        let variable = Variable {
            name: name.to_string(),
            storage: StorageClass::Named,
            runtime_type,
            ownership: Ownership::Owned,
        };
        self.insert(variable)
    }

    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.index_by_name.contains_key(name)
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.index_by_name
            .get(name)
            .map(|index| &self.variables[*index])
    }

    pub fn variable_for_read(&self, name: &str, span: &Span) -> Result<&Variable, CompilationError> {
        self.variable(name)
            .ok_or_else(|| CompilationError::undeclared_variable(name, span.clone()))
    }

    /// Variables in allocation order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[must_use]
    pub fn temp_variable_count(&self) -> usize {
        self.variables
            .iter()
            .filter(|variable| variable.is_temporary())
            .count()
    }

    pub(crate) fn allocate_temp_variable(&mut self, storage: StorageClass) -> Variable {
        let mut name = format!("_{}", self.next_temp_index);
        self.next_temp_index += 1;
        while self.index_by_name.contains_key(&name) {
            name = format!("_{}", self.next_temp_index);
            self.next_temp_index += 1;
        }
        let ownership = match storage {
            StorageClass::TempStackLocal => Ownership::Borrowed,
            StorageClass::TempBoxed | StorageClass::Named => Ownership::Owned,
        };
        let variable = Variable {
            name,
            storage,
            runtime_type: RuntimeType::Variable,
            ownership,
        };
        self.insert(variable).clone()
    }

    fn insert(&mut self, variable: Variable) -> &Variable {
        let index = if let Some(index) = self.index_by_name.get(&variable.name).copied() {
            self.variables[index] = variable;
            index
        } else {
            let index = self.variables.len();
            self.index_by_name.insert(variable.name.clone(), index);
            self.variables.push(variable);
            index
        };
        &self.variables[index]
    }
}
