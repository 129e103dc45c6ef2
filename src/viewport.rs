//! Viewport width, injected so narrow-screen behavior can be exercised
//! without a browser.

use leptos::ev;
use leptos::prelude::*;

pub trait Viewport {
    /// Current width in CSS pixels.
    fn width(&self) -> f64;

    fn is_narrow(&self, breakpoint: f64) -> bool {
        self.width() < breakpoint
    }
}

/// Reads `window.innerWidth`. Treated as infinitely wide if the window has no width.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn width(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::INFINITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub f64);

impl Viewport for FixedViewport {
    fn width(&self) -> f64 {
        self.0
    }
}

/// Reactive viewport width shared through context.
#[derive(Clone, Copy)]
pub struct ViewportContext {
    pub width: ReadSignal<f64>,
}

impl ViewportContext {
    /// Tracked variant of [`Viewport::is_narrow`] for use in views.
    pub fn narrow(&self, breakpoint: f64) -> bool {
        self.width.get() < breakpoint
    }
}

impl Viewport for ViewportContext {
    fn width(&self) -> f64 {
        self.width.get_untracked()
    }
}

/// Provide a [`ViewportContext`] seeded from `source` and refreshed on
/// every window resize. The listener lives as long as the page.
pub fn provide_viewport<V>(source: V) -> ViewportContext
where
    V: Viewport + Send + Sync + 'static,
{
    let (width, set_width) = signal(source.width());
    let _ = window_event_listener(ev::resize, move |_| {
        set_width.set(source.width());
    });

    let ctx = ViewportContext { width };
    provide_context(ctx);
    ctx
}
