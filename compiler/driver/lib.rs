use serde::Deserialize;

use compiler__call_compilation::{
    CompiledExpression, CompiledKind, FunctionCallCompiler, reads_variable,
};
use compiler__call_syntax::{CallExpression, ExpectedReturn};
use compiler__compilation_context::{
    CompilationContext, Instruction, RuntimeType, StorageClass, Variable,
};
use compiler__diagnostics::{CompilationError, Warning};

/// One function body made only of free-function calls.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CallUnit {
    pub function_name: String,
    #[serde(default)]
    pub variables: Vec<VariableDeclaration>,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub runtime_type: RuntimeType,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    /// Call whose result is discarded.
    Call { call: CallExpression },
    /// Call whose result is stored into `variable`.
    Assign {
        variable: String,
        call: CallExpression,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledUnit {
    pub function_name: String,
    pub code: String,
    pub headers: Vec<String>,
    pub warnings: Vec<Warning>,
}

pub fn parse_call_unit(source: &str) -> Result<CallUnit, serde_json::Error> {
    serde_json::from_str(source)
}

/// Compiles every statement of `unit` in order into one C function. The
/// first fatal error aborts the unit.
pub fn compile_call_unit(
    unit: &CallUnit,
    compiler: &mut FunctionCallCompiler,
) -> Result<CompiledUnit, CompilationError> {
    let mut context = CompilationContext::new();
    for declaration in &unit.variables {
        context
            .symbol_table
            .declare_variable(&declaration.name, declaration.runtime_type);
    }

    for statement in &unit.statements {
        match statement {
            Statement::Call { call } => {
                compiler.compile(call, &ExpectedReturn::NotExpected, &mut context)?;
            }
            Statement::Assign { variable, call } => {
                compile_assignment(variable, call, compiler, &mut context)?;
            }
        }
    }

    tracing::debug!(
        function_name = %unit.function_name,
        instruction_count = context.code_printer.len(),
        temp_variable_count = context.symbol_table.temp_variable_count(),
        "compiled call unit"
    );

    Ok(CompiledUnit {
        function_name: unit.function_name.clone(),
        code: render_function(&unit.function_name, &context),
        headers: context
            .headers_manager
            .headers()
            .map(str::to_string)
            .collect(),
        warnings: context.warnings,
    })
}

fn compile_assignment(
    variable_name: &str,
    call: &CallExpression,
    compiler: &mut FunctionCallCompiler,
    context: &mut CompilationContext,
) -> Result<(), CompilationError> {
    let compiled_expression =
        compiler.compile(call, &ExpectedReturn::in_variable(variable_name), context)?;

    // A hazard temp hides the destination from the emitter's boxed check.
    let destination = context
        .symbol_table
        .variable_for_read(variable_name, &call.span)?;
    if destination.runtime_type != RuntimeType::Variable {
        return Err(CompilationError::non_boxed_return_destination(
            call.span.clone(),
        ));
    }
    let target = destination.handle();

    if compiled_expression.kind == CompiledKind::Variable {
        if compiled_expression.code != target {
            context.code_printer.output(Instruction::CopyOnWrite {
                destination: target,
                source: compiled_expression.code,
            });
        }
        return Ok(());
    }

    // Unboxed optimizer results are boxed here. When the expression reads the
    // destination, it is evaluated into a temp before the destination is
    // touched.
    if reads_variable(&call.arguments, variable_name) {
        let temporary = context.temp_variable_for_write();
        context
            .code_printer
            .output(store_scalar(temporary.handle(), &compiled_expression));
        context.code_printer.output(Instruction::CopyOnWrite {
            destination: target,
            source: temporary.name,
        });
    } else {
        context.code_printer.output(Instruction::ReinitVariable {
            variable: target.clone(),
        });
        context
            .code_printer
            .output(store_scalar(target, &compiled_expression));
    }
    Ok(())
}

fn store_scalar(target: String, compiled_expression: &CompiledExpression) -> Instruction {
    let value = compiled_expression.code.clone();
    match compiled_expression.kind {
        CompiledKind::Int | CompiledKind::Uint | CompiledKind::Long | CompiledKind::Ulong => {
            Instruction::StoreLong { target, value }
        }
        CompiledKind::Double => Instruction::StoreDouble { target, value },
        CompiledKind::Bool => Instruction::StoreBool {
            target,
            value: compiled_expression.boolean_code().to_string(),
        },
        CompiledKind::String => Instruction::StoreString {
            target,
            literal: value,
            duplicate: true,
        },
        CompiledKind::Null | CompiledKind::Variable => Instruction::StoreNull { target },
    }
}

fn render_function(function_name: &str, context: &CompilationContext) -> String {
    let mut code = format!("void {function_name}(void) {{\n");
    for variable in context.symbol_table.variables() {
        code.push('\t');
        code.push_str(&render_declaration(variable));
        code.push('\n');
    }
    if !context.symbol_table.variables().is_empty() && !context.code_printer.is_empty() {
        code.push('\n');
    }
    for line in context.code_printer.lines() {
        code.push('\t');
        code.push_str(&line);
        code.push('\n');
    }
    code.push_str("}\n");
    code
}

fn render_declaration(variable: &Variable) -> String {
    match (variable.storage, variable.runtime_type) {
        (StorageClass::TempStackLocal, _) => format!("zval {};", variable.name),
        (_, RuntimeType::Variable | RuntimeType::Array) => format!("zval *{};", variable.name),
        (_, runtime_type) => format!("{} {};", runtime_type.c_type(), variable.name),
    }
}
