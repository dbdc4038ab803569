//! Cosmetic toast notifications with frame-driven auto-dismiss.

/// Toasts outlive their usefulness after five seconds.
const TOAST_LIFETIME_SECONDS: f32 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Icon name for the host's icon font.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "info-circle",
            ToastKind::Success => "check-circle",
            ToastKind::Warning => "exclamation-triangle",
            ToastKind::Error => "exclamation-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    age: f32,
}

/// Active toasts, advanced once per frame.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            age: 0.0,
        });
        id
    }

    /// Manual dismissal (the toast's close button).
    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Age all toasts by `dt` seconds and drop the expired ones.
    pub fn tick(&mut self, dt: f32) {
        for t in &mut self.toasts {
            t.age += dt.max(0.0);
        }
        self.toasts.retain(|t| t.age < TOAST_LIFETIME_SECONDS);
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_five_seconds() {
        let mut q = ToastQueue::new();
        q.push("Data filtered for 7d", ToastKind::Success);
        q.tick(4.9);
        assert_eq!(q.active().len(), 1);
        q.tick(0.2);
        assert!(q.active().is_empty());
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut q = ToastQueue::new();
        let first = q.push("one", ToastKind::Info);
        q.push("two", ToastKind::Error);
        q.dismiss(first);
        assert_eq!(q.active().len(), 1);
        assert_eq!(q.active()[0].message, "two");
    }

    #[test]
    fn kinds_map_to_icons() {
        assert_eq!(ToastKind::Success.icon(), "check-circle");
        assert_eq!(ToastKind::Error.icon(), "exclamation-circle");
    }
}
