mod boolean_helper;
mod boxed_helper;

pub use boolean_helper::BooleanHelperOptimizer;
pub use boxed_helper::BoxedHelperOptimizer;
