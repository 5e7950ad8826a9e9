pub mod pipeline;
pub mod scout_orchestrator;
