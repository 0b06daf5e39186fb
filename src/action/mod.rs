mod dispatcher;
mod handler;
mod types;

pub use dispatcher::ActionDispatcher;
pub use handler::ActionHandler;
pub use types::Action;
