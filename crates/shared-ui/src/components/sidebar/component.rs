use dioxus::prelude::*;

// ─── State ─────────────────────────────────────────────────────────────

/// Open/closed state of a shell's sidebar.
///
/// Two independent axes: `expanded` is the desktop collapse, `mobile_open`
/// is the mobile drawer. Only one of them is meaningful at a time, picked by
/// the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub expanded: bool,
    pub mobile_open: bool,
    pub viewport_width: u32,
    pub breakpoint: u32,
}

impl SidebarState {
    /// Desktop-sized start: expanded, drawer closed.
    pub fn new(breakpoint: u32) -> Self {
        Self::with_viewport(breakpoint, breakpoint.saturating_add(1))
    }

    pub fn with_viewport(breakpoint: u32, viewport_width: u32) -> Self {
        let mobile = viewport_width <= breakpoint;
        Self {
            expanded: !mobile,
            mobile_open: false,
            viewport_width,
            breakpoint,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= self.breakpoint
    }

    /// Handle a click on the trigger or rail.
    pub fn toggle(&mut self) {
        if self.is_mobile() {
            self.mobile_open = !self.mobile_open;
            self.expanded = false;
        } else {
            self.expanded = !self.expanded;
            self.mobile_open = false;
        }
    }

    /// Track a new viewport width. Crossing the breakpoint resets the axis
    /// that stops applying.
    pub fn resize(&mut self, viewport_width: u32) {
        let was_mobile = self.is_mobile();
        self.viewport_width = viewport_width;
        match (was_mobile, self.is_mobile()) {
            (false, true) => {
                self.expanded = false;
                self.mobile_open = false;
            }
            (true, false) => {
                self.mobile_open = false;
                self.expanded = true;
            }
            _ => {}
        }
    }

    /// Close the drawer after a navigation on mobile. No-op on desktop.
    pub fn close_drawer(&mut self) {
        if self.is_mobile() {
            self.mobile_open = false;
        }
    }
}

/// Reports the viewport width now and on every resize. Only one listener is
/// kept on `window`: a remount replaces the previous shell's handler.
const VIEWPORT_LISTENER_JS: &str = r#"
    if (window.__campusSyncResize) {
        window.removeEventListener('resize', window.__campusSyncResize);
    }
    window.__campusSyncResize = () => dioxus.send(window.innerWidth);
    window.addEventListener('resize', window.__campusSyncResize);
    dioxus.send(window.innerWidth);
"#;

/// Provides sidebar state to children and keeps `viewport_width` current.
#[component]
pub fn SidebarProvider(breakpoint: u32, children: Element) -> Element {
    let mut state = use_signal(|| SidebarState::new(breakpoint));
    use_context_provider(|| state);

    use_future(move || async move {
        let mut widths = document::eval(VIEWPORT_LISTENER_JS);
        while let Ok(width) = widths.recv::<u32>().await {
            if state.peek().viewport_width != width {
                state.write().resize(width);
            }
        }
    });

    let current = state();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-expanded": if current.expanded { "true" } else { "false" },
            "data-mobile": if current.is_mobile() { "true" } else { "false" },
            {children}
        }
    }
}

/// Hook to access sidebar state.
pub fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// The sidebar container. Shows a backdrop while the mobile drawer is open.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let current = state();
    let data_state = if current.is_mobile() {
        if current.mobile_open { "open" } else { "closed" }
    } else if current.expanded {
        "expanded"
    } else {
        "collapsed"
    };

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", data_state, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if current.is_mobile() && current.mobile_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.write().close_drawer(),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Nav entry. On mobile, clicking closes the drawer.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            onclick: move |_| state.write().close_drawer(),
            ..merged,
            {children}
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Button that toggles the sidebar along whichever axis the viewport selects.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();
    let current = state();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            "aria-expanded": if current.expanded || current.mobile_open { "true" } else { "false" },
            onclick: move |_| state.write().toggle(),
            {children}
        }
    }
}

/// Main content area next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
