// Single-level stack navigation: one root view, one injected detail view

use super::animation::{self, Animation, TransitionTracker};
use super::transition::{AnimationDescriptor, Role, TransitionKind};
use eframe::egui;
use std::fmt;
use std::hash::Hash;

pub const BACK_LABEL: &str = "Back";
pub const BACK_GLYPH: &str = "⏴";

const TOOLBAR_HEIGHT: f32 = 28.0;

/// What a detail page asks of its host after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageAction {
    #[default]
    None,
    /// The page wants to be closed, same as pressing Back.
    Dismiss,
}

/// Content that can be pushed as the detail view.
pub trait DetailPage {
    fn title(&self) -> &str;

    fn ui(&mut self, ui: &mut egui::Ui) -> PageAction;
}

/// Opaque detail payload. Empty renders nothing.
#[derive(Default)]
pub struct DetailView(Option<Box<dyn DetailPage>>);

impl DetailView {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn new(page: impl DetailPage + 'static) -> Self {
        Self(Some(Box::new(page)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn title(&self) -> Option<&str> {
        self.0.as_deref().map(|page| page.title())
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> PageAction {
        match self.0.as_deref_mut() {
            Some(page) => page.ui(ui),
            None => PageAction::None,
        }
    }
}

impl fmt::Debug for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title() {
            Some(title) => f.debug_tuple("DetailView").field(&title).finish(),
            None => f.write_str("DetailView(empty)"),
        }
    }
}

/// Paint order of a rendered role; `Front` is drawn over `Back`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZIndex {
    Back,
    Front,
}

impl From<Role> for ZIndex {
    fn from(role: Role) -> Self {
        match role {
            Role::Root => ZIndex::Back,
            Role::Detail => ZIndex::Front,
        }
    }
}

/// The back button injected into the detail view's toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackControl {
    pub label: &'static str,
    pub glyph: &'static str,
}

impl BackControl {
    pub const STANDARD: BackControl = BackControl {
        label: BACK_LABEL,
        glyph: BACK_GLYPH,
    };

    pub fn text(&self) -> String {
        format!("{} {}", self.glyph, self.label)
    }
}

/// Render decision for the live visibility flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composition {
    pub role: Role,
    pub z_index: ZIndex,
    pub transition: AnimationDescriptor,
    pub back_control: Option<BackControl>,
}

impl Composition {
    pub fn resolve(showing_detail: bool, transition: &TransitionKind) -> Self {
        let role = if showing_detail { Role::Detail } else { Role::Root };
        Self {
            role,
            z_index: role.into(),
            transition: transition.descriptor(role),
            back_control: showing_detail.then_some(BackControl::STANDARD),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StackResponse {
    pub composition: Composition,
    /// The injected back control was pressed this frame.
    pub back_activated: bool,
    /// The detail page returned [`PageAction::Dismiss`]. The caller decides
    /// whether to answer it with [`StackNavigation::navigate_back`].
    pub dismiss_requested: bool,
}

/// Container toggling between a root view and a caller-owned detail view.
///
/// Built every frame from the caller's live state:
///
/// ```rust,ignore
/// StackNavigation::new(&mut self.showing_detail, &mut self.detail, self.transition)
///     .show(ui, |ui| self.library.ui(ui));
/// ```
///
/// The container writes back through the bindings only from its back action.
/// Forward navigation is the caller's write; under
/// [`TransitionKind::Default`] the caller wraps it in
/// [`animation::with_animation`] with [`Animation::spring`].
pub struct StackNavigation<'a> {
    id_salt: egui::Id,
    showing_detail: &'a mut bool,
    detail: &'a mut DetailView,
    transition: TransitionKind,
}

impl<'a> StackNavigation<'a> {
    pub fn new(
        showing_detail: &'a mut bool,
        detail: &'a mut DetailView,
        transition: TransitionKind,
    ) -> Self {
        Self {
            id_salt: egui::Id::new("stack_navigation"),
            showing_detail,
            detail,
            transition,
        }
    }

    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id_salt = egui::Id::new(salt);
        self
    }

    pub fn composition(&self) -> Composition {
        Composition::resolve(*self.showing_detail, &self.transition)
    }

    /// Pop the detail view: clear the payload, then lower the flag.
    ///
    /// Under the default transition both writes happen inside one spring
    /// transaction. Calling this while the root is showing rewrites the
    /// same values.
    pub fn navigate_back(&mut self, ctx: &egui::Context) {
        tracing::debug!(page = ?self.detail, "navigating back");
        let showing_detail = &mut *self.showing_detail;
        let detail = &mut *self.detail;
        let mut reset = move || {
            *detail = DetailView::empty();
            *showing_detail = false;
        };
        if self.transition.is_default() {
            animation::with_animation(ctx, Animation::spring(), reset);
        } else {
            reset();
        }
    }

    pub fn show(mut self, ui: &mut egui::Ui, root: impl FnOnce(&mut egui::Ui)) -> StackResponse {
        let id = ui.make_persistent_id(self.id_salt);
        let now = ui.input(|i| i.time);
        let showing = *self.showing_detail;

        let mut tracker = ui
            .data(|d| d.get_temp::<TransitionTracker>(id))
            .unwrap_or_else(|| TransitionTracker::new(showing));
        if tracker.target() != showing {
            let role = if showing { Role::Detail } else { Role::Root };
            let transaction = animation::take_transaction(ui.ctx())
                .or(self.transition.descriptor(role).animation);
            tracker.retarget(showing, now, transaction);
        }
        let progress = tracker.progress(now);
        if tracker.is_animating(now) {
            ui.ctx().request_repaint();
        }
        ui.data_mut(|d| d.insert_temp(id, tracker));

        let composition = self.composition();
        let rect = ui.available_rect_before_wrap();
        let clip = rect.intersect(ui.clip_rect());

        let mut layers = Vec::with_capacity(2);
        if !showing || progress < 1.0 {
            layers.push(Role::Root);
        }
        if showing || progress > 0.0 {
            layers.push(Role::Detail);
        }
        layers.sort_by_key(|role| ZIndex::from(*role));

        let mut root = Some(root);
        let mut back_activated = false;
        let mut dismiss_requested = false;

        for role in layers {
            let descriptor = self.transition.descriptor(role);
            let (hidden, motion) = match role {
                Role::Root if showing => (progress, descriptor.removal),
                Role::Root => (progress, descriptor.insertion),
                Role::Detail if showing => (1.0 - progress, descriptor.insertion),
                Role::Detail => (1.0 - progress, descriptor.removal),
            };
            let placement = motion.placement(hidden, rect.size());
            if placement.opacity <= 0.0 {
                continue;
            }

            let mut layer = ui.new_child(
                egui::UiBuilder::new()
                    .id_salt((self.id_salt, role))
                    .max_rect(rect.translate(placement.offset))
                    .layout(*ui.layout()),
            );
            layer.set_clip_rect(clip);
            layer.set_opacity(placement.opacity);

            match role {
                Role::Root => {
                    if let Some(root) = root.take() {
                        root(&mut layer);
                    }
                }
                Role::Detail => {
                    let fill = layer.visuals().panel_fill;
                    layer.painter().rect_filled(layer.max_rect(), 0.0, fill);
                    if role == composition.role {
                        if let Some(control) = composition.back_control {
                            back_activated |= back_toolbar(&mut layer, control);
                        }
                    }
                    if self.detail.ui(&mut layer) == PageAction::Dismiss {
                        dismiss_requested = true;
                    }
                }
            }
        }

        ui.allocate_rect(rect, egui::Sense::hover());

        if back_activated {
            self.navigate_back(ui.ctx());
        }

        StackResponse {
            composition,
            back_activated,
            dismiss_requested,
        }
    }
}

fn back_toolbar(ui: &mut egui::Ui, control: BackControl) -> bool {
    let clicked = ui
        .allocate_ui_with_layout(
            egui::vec2(ui.available_width(), TOOLBAR_HEIGHT),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| ui.button(control.text()).clicked(),
        )
        .inner;
    ui.separator();
    clicked
}
