//! Header lifecycle: event subscriptions and the owned menu state.
//!
//! A [`Host`] exposes two event sources, window `resize` and router
//! `routeChangeStart`. [`Header::mount`] subscribes to both and returns a
//! [`MountedHeader`] that owns the [`Subscription`] guards; dropping it (or
//! calling [`MountedHeader::unmount`]) releases them on every exit path,
//! unwinding included.
//!
//! Everything here is single-threaded: state lives in `Rc<Cell<_>>` and
//! listeners are snapshotted before dispatch so a handler may subscribe or
//! unsubscribe without a live borrow.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::Header;
use super::menu::{Activation, MenuState};
use crate::config::DEFAULT_MENU_BREAKPOINT;
use crate::core::UrlPath;
use crate::debug;

// ============================================================================
// Events
// ============================================================================

/// Window resize, carrying the new viewport width in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    pub width: u32,
}

/// Start of a client-side navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    pub url: UrlPath,
}

// ============================================================================
// Event hub
// ============================================================================

type Listener<E> = Rc<dyn Fn(&E)>;

struct HubInner<E> {
    name: &'static str,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener<E>)>>,
}

/// A named event source with scoped subscriptions.
pub struct EventHub<E> {
    inner: Rc<HubInner<E>>,
}

impl<E: 'static> EventHub<E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            inner: Rc::new(HubInner {
                name,
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Register a listener. It stays registered until the guard is dropped.
    #[must_use = "dropping the subscription immediately removes the listener"]
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let hub: Weak<HubInner<E>> = Rc::downgrade(&self.inner);
        Subscription {
            source: self.inner.name,
            release: Some(Box::new(move || {
                if let Some(hub) = hub.upgrade() {
                    hub.listeners.borrow_mut().retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    /// Deliver `event` to every current listener.
    ///
    /// Returns how many listeners were invoked.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: Vec<Listener<E>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl<E> fmt::Debug for EventHub<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("name", &self.inner.name)
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Guard for one registered listener; releases it on drop.
pub struct Subscription {
    source: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    #[inline]
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Remove the listener now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("source", &self.source)
            .field("active", &self.release.is_some())
            .finish()
    }
}

// ============================================================================
// Host
// ============================================================================

/// Event sources offered to mounted components.
#[derive(Debug)]
pub struct Host {
    pub resize: EventHub<ResizeEvent>,
    pub route_change_start: EventHub<RouteChangeEvent>,
}

impl Host {
    pub fn new() -> Self {
        Self {
            resize: EventHub::new("resize"),
            route_change_start: EventHub::new("routeChangeStart"),
        }
    }

    /// Emit a resize to `width`.
    pub fn resize_to(&self, width: u32) -> usize {
        self.resize.emit(&ResizeEvent { width })
    }

    /// Emit the start of a navigation to `url`.
    pub fn navigate(&self, url: &str) -> usize {
        self.route_change_start.emit(&RouteChangeEvent {
            url: UrlPath::from(url),
        })
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Toggle visibility
// ============================================================================

/// Answers whether the stylesheet currently shows the menu toggle.
pub trait ToggleProbe {
    fn is_toggle_visible(&self, width: u32) -> bool;
}

/// Width breakpoint mirroring the stylesheet's media query: the toggle is
/// shown below `breakpoint` and hidden from it upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub breakpoint: u32,
}

impl Viewport {
    pub const fn new(breakpoint: u32) -> Self {
        Self { breakpoint }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_BREAKPOINT)
    }
}

impl ToggleProbe for Viewport {
    #[inline]
    fn is_toggle_visible(&self, width: u32) -> bool {
        width < self.breakpoint
    }
}

// ============================================================================
// Mounting
// ============================================================================

/// Read-only view of a mounted header's menu state.
///
/// Stays readable after unmount.
#[derive(Debug, Clone)]
pub struct MenuHandle(Rc<Cell<MenuState>>);

impl MenuHandle {
    #[inline]
    pub fn get(&self) -> MenuState {
        self.0.get()
    }
}

/// A header attached to a host. Dropping it detaches both listeners.
#[derive(Debug)]
pub struct MountedHeader {
    state: Rc<Cell<MenuState>>,
    has_toggle: bool,
    resize: Subscription,
    route_change: Subscription,
}

impl Header<'_> {
    /// Attach to `host`: listen for resize and route-change-start.
    pub fn mount(&self, host: &Host, probe: impl ToggleProbe + 'static) -> MountedHeader {
        let state = Rc::new(Cell::new(MenuState::CLOSED));
        // Without a navigation block there is no toggle element to measure.
        let has_toggle = self.config.header.shows_navigation();

        let resize = {
            let state = Rc::clone(&state);
            host.resize.subscribe(move |event: &ResizeEvent| {
                let visible = has_toggle.then(|| probe.is_toggle_visible(event.width));
                let mut menu = state.get();
                menu.on_resize(visible);
                state.set(menu);
            })
        };

        let route_change = {
            let state = Rc::clone(&state);
            host.route_change_start
                .subscribe(move |_: &RouteChangeEvent| {
                    let mut menu = state.get();
                    menu.on_route_change_start();
                    state.set(menu);
                })
        };

        debug!("header"; "mounted ({} + {} listeners)", resize.source(), route_change.source());

        MountedHeader {
            state,
            has_toggle,
            resize,
            route_change,
        }
    }
}

impl MountedHeader {
    #[inline]
    pub fn menu(&self) -> MenuState {
        self.state.get()
    }

    pub fn handle(&self) -> MenuHandle {
        MenuHandle(Rc::clone(&self.state))
    }

    #[inline]
    pub fn has_toggle(&self) -> bool {
        self.has_toggle
    }

    /// Activate the menu toggle control.
    ///
    /// A header without a navigation block renders no toggle, so the
    /// activation is left untouched.
    pub fn activate_toggle(&self) -> Activation {
        let mut activation = Activation::new();
        if self.has_toggle {
            let mut menu = self.state.get();
            menu.toggle(&mut activation);
            self.state.set(menu);
        }
        activation
    }

    /// Detach from the host.
    pub fn unmount(self) {
        let Self {
            resize,
            route_change,
            ..
        } = self;
        resize.unsubscribe();
        route_change.unsubscribe();
        debug!("header"; "unmounted");
    }
}
