use std::fmt;

use compiler__runtime_interface::call_function_primitive_name;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// First initialization of a heap-boxed variable.
    InitVariable { variable: String },
    /// Re-initialization of a variable that may already hold a value.
    ReinitVariable { variable: String },
    StoreNull {
        target: String,
    },
    StoreLong {
        target: String,
        value: String,
    },
    StoreDouble {
        target: String,
        value: String,
    },
    StoreBool {
        target: String,
        value: String,
    },
    StoreString {
        target: String,
        literal: String,
        duplicate: bool,
    },
    StoreStringWithLength {
        target: String,
        source: String,
        duplicate: bool,
    },
    CopyOnWrite {
        destination: String,
        source: String,
    },
    CallFunction {
        function_name: String,
        destination: Option<String>,
        arguments: Vec<String>,
    },
    KernelCall {
        symbol_name: String,
        arguments: Vec<String>,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::InitVariable { variable } => {
                write!(formatter, "ZEPHIR_INIT_VAR({variable});")
            }
            Instruction::ReinitVariable { variable } => {
                write!(formatter, "ZEPHIR_INIT_NVAR({variable});")
            }
            Instruction::StoreNull { target } => write!(formatter, "ZVAL_NULL({target});"),
            Instruction::StoreLong { target, value } => {
                write!(formatter, "ZVAL_LONG({target}, {value});")
            }
            Instruction::StoreDouble { target, value } => {
                write!(formatter, "ZVAL_DOUBLE({target}, {value});")
            }
            Instruction::StoreBool { target, value } => {
                write!(formatter, "ZVAL_BOOL({target}, {value});")
            }
            Instruction::StoreString {
                target,
                literal,
                duplicate,
            } => write!(
                formatter,
                "ZVAL_STRING({target}, \"{literal}\", {});",
                copy_flag(*duplicate)
            ),
            Instruction::StoreStringWithLength {
                target,
                source,
                duplicate,
            } => write!(
                formatter,
                "ZVAL_STRINGL({target}, {source}->str, {source}->len, {});",
                copy_flag(*duplicate)
            ),
            Instruction::CopyOnWrite {
                destination,
                source,
            } => write!(formatter, "ZEPHIR_CPY_WRT({destination}, {source});"),
            Instruction::CallFunction {
                function_name,
                destination,
                arguments,
            } => {
                let primitive_name =
                    call_function_primitive_name(arguments.len(), destination.is_some());
                let mut call_arguments = Vec::with_capacity(arguments.len() + 2);
                if let Some(destination) = destination {
                    call_arguments.push(destination.clone());
                }
                call_arguments.push(format!("\"{function_name}\""));
                call_arguments.extend(arguments.iter().cloned());
                write!(formatter, "{primitive_name}({});", call_arguments.join(", "))
            }
            Instruction::KernelCall {
                symbol_name,
                arguments,
            } => write!(formatter, "{symbol_name}({});", arguments.join(", ")),
        }
    }
}

fn copy_flag(duplicate: bool) -> u8 {
    u8::from(duplicate)
}
