// Transition policy for the stack navigation container

use super::animation::Animation;
use eframe::egui;

/// Which of the two views a descriptor is resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Root,
    Detail,
}

/// Screen edge a view moves from or towards.
///
/// `Leading` is the left edge and `Trailing` the right edge; egui lays out
/// left-to-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Leading,
    Trailing,
    Top,
    Bottom,
}

/// Where a view is drawn relative to its resting rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub offset: egui::Vec2,
    pub opacity: f32,
}

impl Placement {
    pub const RESTING: Placement = Placement {
        offset: egui::Vec2::ZERO,
        opacity: 1.0,
    };
}

/// A single enter or exit movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// No animated transform; the view is either fully shown or gone.
    Identity,
    /// Slide in from / out towards an edge of the container.
    Move(Edge),
    /// Fade in / out in place.
    Opacity,
}

impl Motion {
    /// Placement for a view that is `hidden` of the way off screen.
    ///
    /// `hidden` is 0.0 when the view is at rest and 1.0 when it is fully
    /// removed. Spring curves may push it slightly outside `[0, 1]`.
    pub fn placement(&self, hidden: f32, size: egui::Vec2) -> Placement {
        match self {
            Motion::Identity if hidden < 1.0 => Placement::RESTING,
            Motion::Identity => Placement {
                offset: egui::Vec2::ZERO,
                opacity: 0.0,
            },
            Motion::Move(edge) => {
                let offset = match edge {
                    Edge::Leading => egui::vec2(-size.x * hidden, 0.0),
                    Edge::Trailing => egui::vec2(size.x * hidden, 0.0),
                    Edge::Top => egui::vec2(0.0, -size.y * hidden),
                    Edge::Bottom => egui::vec2(0.0, size.y * hidden),
                };
                Placement {
                    offset,
                    opacity: 1.0,
                }
            }
            Motion::Opacity => Placement {
                offset: egui::Vec2::ZERO,
                opacity: (1.0 - hidden).clamp(0.0, 1.0),
            },
        }
    }
}

/// Enter and exit motion applied to one rendered view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationDescriptor {
    pub insertion: Motion,
    pub removal: Motion,
    /// Timing used when the change happens outside an animated transaction.
    pub animation: Option<Animation>,
}

impl AnimationDescriptor {
    pub const IDENTITY: AnimationDescriptor = AnimationDescriptor::symmetric(Motion::Identity);

    pub const fn symmetric(motion: Motion) -> Self {
        Self::asymmetric(motion, motion)
    }

    pub const fn asymmetric(insertion: Motion, removal: Motion) -> Self {
        Self {
            insertion,
            removal,
            animation: None,
        }
    }

    /// Attach a timing of its own, so the motion animates even when the
    /// state change is not wrapped in a transaction.
    pub fn animated(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub const fn move_edge(edge: Edge) -> Self {
        Self::symmetric(Motion::Move(edge))
    }

    pub const fn opacity() -> Self {
        Self::symmetric(Motion::Opacity)
    }
}

/// How the container animates between its root and detail views.
///
/// Equality is structural: two `Custom` kinds are equal only when their
/// descriptors are.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TransitionKind {
    None,
    /// Detail slides over the root from the trailing edge while the root
    /// slides out towards the leading edge.
    #[default]
    Default,
    Custom(AnimationDescriptor),
}

impl TransitionKind {
    pub fn is_default(&self) -> bool {
        matches!(self, TransitionKind::Default)
    }

    /// Resolve the animation for the view rendered in `role`.
    pub fn descriptor(&self, role: Role) -> AnimationDescriptor {
        match (self, role) {
            (TransitionKind::None, _) => AnimationDescriptor::IDENTITY,
            (TransitionKind::Custom(custom), _) => *custom,
            (TransitionKind::Default, Role::Detail) => AnimationDescriptor::move_edge(Edge::Trailing),
            (TransitionKind::Default, Role::Root) => AnimationDescriptor::move_edge(Edge::Leading),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [Role; 2] = [Role::Root, Role::Detail];

    #[test]
    fn test_none_is_identity_for_both_roles() {
        for role in ROLES {
            assert_eq!(
                TransitionKind::None.descriptor(role),
                AnimationDescriptor::IDENTITY
            );
        }
    }

    #[test]
    fn test_default_is_asymmetric() {
        let detail = TransitionKind::Default.descriptor(Role::Detail);
        let root = TransitionKind::Default.descriptor(Role::Root);

        assert_eq!(detail.insertion, Motion::Move(Edge::Trailing));
        assert_eq!(detail.removal, Motion::Move(Edge::Trailing));
        assert_eq!(root.insertion, Motion::Move(Edge::Leading));
        assert_eq!(root.removal, Motion::Move(Edge::Leading));
        assert_ne!(detail, root);
    }

    #[test]
    fn test_custom_is_verbatim_for_both_roles() {
        let custom = AnimationDescriptor::asymmetric(Motion::Opacity, Motion::Move(Edge::Bottom));
        for role in ROLES {
            assert_eq!(TransitionKind::Custom(custom).descriptor(role), custom);
        }
    }

    #[test]
    fn test_custom_equality_compares_descriptors() {
        let fade = TransitionKind::Custom(AnimationDescriptor::opacity());
        let rise = TransitionKind::Custom(AnimationDescriptor::move_edge(Edge::Bottom));

        assert_eq!(fade, TransitionKind::Custom(AnimationDescriptor::opacity()));
        assert_ne!(fade, rise);
        assert_ne!(
            fade,
            TransitionKind::Custom(AnimationDescriptor::opacity().animated(Animation::linear(0.2)))
        );
        assert!(!fade.is_default());
        assert!(TransitionKind::Default.is_default());
    }

    #[test]
    fn test_move_placement_follows_edge() {
        let size = egui::vec2(400.0, 300.0);

        let trailing = Motion::Move(Edge::Trailing).placement(0.5, size);
        assert_eq!(trailing.offset, egui::vec2(200.0, 0.0));

        let leading = Motion::Move(Edge::Leading).placement(1.0, size);
        assert_eq!(leading.offset, egui::vec2(-400.0, 0.0));

        let bottom = Motion::Move(Edge::Bottom).placement(0.0, size);
        assert_eq!(bottom, Placement::RESTING);
    }

    #[test]
    fn test_identity_and_opacity_placement() {
        let size = egui::vec2(100.0, 100.0);

        assert_eq!(Motion::Identity.placement(0.7, size).opacity, 1.0);
        assert_eq!(Motion::Identity.placement(1.0, size).opacity, 0.0);
        assert_eq!(Motion::Opacity.placement(0.25, size).opacity, 0.75);
        assert_eq!(Motion::Opacity.placement(1.2, size).opacity, 0.0);
    }
}
