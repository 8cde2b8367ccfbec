//! Event listeners whose removal is tracked by a [`Disposer`].

use crate::constants::{EVENT_CHANGE, EVENT_RESIZE, EVENT_SCROLL};
use crate::dispose::Disposer;

/// Something listeners can be attached to and detached from.
pub trait EventSource: Clone + 'static {
    /// Kept alive while attached and handed back on removal.
    type Listener: 'static;

    /// `None` when the target refused the listener.
    fn add_listener(
        &self,
        event_type: &'static str,
        passive: bool,
        handler: Box<dyn FnMut()>,
    ) -> Option<Self::Listener>;

    fn remove_listener(&self, event_type: &'static str, listener: Self::Listener);
}

/// Attach `handler` and register its removal on `disposer`. Returns false,
/// registering nothing, when the target refused it.
pub fn listen<T: EventSource>(
    disposer: &mut Disposer,
    target: &T,
    event_type: &'static str,
    passive: bool,
    handler: impl FnMut() + 'static,
) -> bool {
    let Some(listener) = target.add_listener(event_type, passive, Box::new(handler)) else {
        return false;
    };
    let target = target.clone();
    disposer.add(move || target.remove_listener(event_type, listener));
    true
}

pub struct PageHandlers {
    pub on_scroll: Box<dyn FnMut()>,
    pub on_resize: Box<dyn FnMut()>,
    pub on_motion_change: Box<dyn FnMut()>,
}

/// Passive `scroll` and `resize` on the window, `change` on the
/// reduced-motion query. Absent targets are skipped. Returns how many
/// listeners were attached.
pub fn wire_page_events<W, M>(
    disposer: &mut Disposer,
    window: Option<&W>,
    motion_query: Option<&M>,
    handlers: PageHandlers,
) -> usize
where
    W: EventSource,
    M: EventSource,
{
    let PageHandlers {
        on_scroll,
        on_resize,
        on_motion_change,
    } = handlers;
    let mut attached = 0;
    if let Some(window) = window {
        attached += usize::from(listen(disposer, window, EVENT_SCROLL, true, on_scroll));
        attached += usize::from(listen(disposer, window, EVENT_RESIZE, false, on_resize));
    }
    if let Some(query) = motion_query {
        attached += usize::from(listen(
            disposer,
            query,
            EVENT_CHANGE,
            false,
            on_motion_change,
        ));
    }
    attached
}
