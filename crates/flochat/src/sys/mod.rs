pub mod launch;
pub mod runtime;
