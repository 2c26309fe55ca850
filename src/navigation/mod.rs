pub mod animation;
pub mod stack;
pub mod transition;

pub use animation::{with_animation, Animation};
pub use stack::{DetailPage, DetailView, PageAction, StackNavigation};
pub use transition::{AnimationDescriptor, Edge, TransitionKind};
