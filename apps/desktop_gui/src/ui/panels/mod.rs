//! One panel per tab. Panels render from the store and hand mutations back as commands.

pub mod beds;
pub mod inventory;
pub mod queue;
