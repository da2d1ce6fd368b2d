use std::any::Any;

/// A piece of application state stored in a [`crate::StateCtx`].
///
/// States are plain structs owned by the context and looked up by type.
/// The `as_any` pair is the downcast seam; implementors just return `self`.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
