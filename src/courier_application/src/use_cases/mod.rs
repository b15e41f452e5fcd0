pub mod dispatcher;
pub mod payload_builder;
pub mod response_interpreter;
pub mod side_effect_router;

pub use dispatcher::{DispatchConfig, Dispatcher, MAX_ATTACHMENT_SIZE};
pub use payload_builder::PayloadBuilder;
pub use response_interpreter::interpret;
pub use side_effect_router::SideEffectRouter;
