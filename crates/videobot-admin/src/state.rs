//! Panel state
//!
//! `PanelState` is plain data: the controller's events are applied to it and
//! the pages read from it. `AdminState` wraps it in a signal and is what the
//! components get from context.

use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use leptos::*;
use tracing::{debug, warn};

use crate::api::HttpApi;
use crate::charts::{ChartSlot, ChartSpec};
use crate::config::PanelConfig;
use crate::controller::{Action, AdminPanel, PanelEvent, Section};
use crate::types::*;

// ============================================================================
// Toasts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Info => "toast-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "x-circle",
            Self::Info => "info",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    /// Exit animation running; removed once it finishes.
    Hiding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            phase: ToastPhase::Shown,
        });
        id
    }

    /// Start hiding a toast. Returns false if it is gone or already hiding.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == ToastPhase::Shown => {
                toast.phase = ToastPhase::Hiding;
                true
            }
            _ => false,
        }
    }

    /// Drop a toast whose exit animation has finished.
    pub fn finish_hide(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| !(t.id == id && t.phase == ToastPhase::Hiding));
        self.toasts.len() != before
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn phase(&self, id: u64) -> Option<ToastPhase> {
        self.toasts.iter().find(|t| t.id == id).map(|t| t.phase)
    }
}

// ============================================================================
// Charts
// ============================================================================

#[derive(Debug, Clone)]
struct LiveChart {
    spec: ChartSpec,
    generation: u64,
}

/// At most one live chart per slot.
///
/// Each render bumps the slot's generation; the view redraws when it sees
/// a new generation and tears down the widget it drew before.
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    live: BTreeMap<ChartSlot, LiveChart>,
    destroyed: u64,
}

impl ChartRegistry {
    pub fn render(&mut self, spec: ChartSpec) -> u64 {
        let slot = spec.slot;
        let generation = match self.live.remove(&slot) {
            Some(previous) => {
                self.destroyed += 1;
                previous.generation + 1
            }
            None => 1,
        };
        self.live.insert(slot, LiveChart { spec, generation });
        generation
    }

    pub fn spec(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.live.get(&slot).map(|c| &c.spec)
    }

    pub fn generation(&self, slot: ChartSlot) -> u64 {
        self.live.get(&slot).map(|c| c.generation).unwrap_or(0)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn destroyed(&self) -> u64 {
        self.destroyed
    }
}

// ============================================================================
// Panel
// ============================================================================

#[derive(Debug, Clone)]
pub struct PanelState {
    pub current: Section,
    pub counters: StatCounters,
    pub activity: Vec<ActivityEntry>,
    pub charts: ChartRegistry,
    /// `None` until the first successful load.
    pub products: Option<Vec<Product>>,
    pub product_form: ProductForm,
    pub add_product_open: bool,
    pub sales: Option<SalesSummary>,
    pub sales_period_days: u32,
    pub delivery: Option<DeliveryReport>,
    pub users: Option<Vec<UserRow>>,
    pub user_query: String,
    pub settings: SettingsForm,
    pub toasts: ToastQueue,
}

impl PanelState {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            current: Section::Dashboard,
            counters: StatCounters::default(),
            activity: Vec::new(),
            charts: ChartRegistry::default(),
            products: None,
            product_form: ProductForm::default(),
            add_product_open: false,
            sales: None,
            sales_period_days: config.default_sales_period_days,
            delivery: None,
            users: None,
            user_query: String::new(),
            settings: config.default_settings(),
            toasts: ToastQueue::default(),
        }
    }

    /// Switch to the section called `name` and return its loader.
    ///
    /// Unknown names change nothing.
    pub fn show_section(&mut self, name: &str) -> Option<Action> {
        let section = Section::from_name(name)?;
        self.current = section;
        Some(self.loader(section))
    }

    pub fn loader(&self, section: Section) -> Action {
        match section {
            Section::Dashboard => Action::LoadDashboard,
            Section::Products => Action::LoadProducts,
            Section::Sales => Action::LoadSales {
                period_days: self.sales_period_days,
            },
            Section::Downloads => Action::LoadDownloads,
            Section::Users => Action::LoadUsers,
            Section::Settings => Action::LoadSettings,
        }
    }

    /// Apply one event. Returns the id of a toast it raised, if any.
    pub fn apply(&mut self, event: PanelEvent) -> Option<u64> {
        match event {
            PanelEvent::StatsLoaded(counters) => self.counters = counters,
            PanelEvent::ChartRendered(spec) => {
                self.charts.render(spec);
            }
            PanelEvent::ActivityLoaded(entries) => self.activity = entries,
            PanelEvent::ProductsLoaded(products) => self.products = Some(products),
            PanelEvent::ProductAdded => {
                self.add_product_open = false;
                self.product_form = ProductForm::default();
            }
            PanelEvent::SalesLoaded(summary) => {
                self.sales_period_days = summary.period_days;
                self.sales = Some(summary);
            }
            PanelEvent::DeliveryLoaded(report) => self.delivery = Some(report),
            PanelEvent::UsersLoaded(users) => self.users = Some(users),
            PanelEvent::UserFilterChanged(query) => self.user_query = query,
            PanelEvent::SettingsLoaded(form) | PanelEvent::SettingsSaved(form) => {
                self.settings = form
            }
            PanelEvent::Notify(kind, message) => return Some(self.toasts.push(kind, message)),
        }
        None
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = PanelEvent>) -> Vec<u64> {
        events.into_iter().filter_map(|e| self.apply(e)).collect()
    }

    /// User rows matching the current search.
    pub fn filtered_users(&self) -> Vec<UserRow> {
        self.users
            .iter()
            .flatten()
            .filter(|u| u.matches(&self.user_query))
            .cloned()
            .collect()
    }
}

// ============================================================================
// Reactive shell
// ============================================================================

/// Context handed to every component.
#[derive(Clone)]
pub struct AdminState {
    pub panel: RwSignal<PanelState>,
    controller: Rc<AdminPanel<HttpApi>>,
}

impl AdminState {
    pub fn new(config: PanelConfig) -> Self {
        let panel = RwSignal::new(PanelState::new(&config));
        let api = HttpApi::new(config.api_base.clone());
        Self {
            panel,
            controller: Rc::new(AdminPanel::new(api, config)),
        }
    }

    pub fn config(&self) -> &PanelConfig {
        self.controller.config()
    }

    /// Nav click handler.
    pub fn navigate(&self, name: &str) {
        match self.panel.try_update(|p| p.show_section(name)).flatten() {
            Some(action) => self.run(action),
            None => warn!(section = name, "unknown section"),
        }
    }

    /// Run an action in the background and fold its events into the panel.
    pub fn run(&self, action: Action) {
        let state = self.clone();
        spawn_local(async move {
            let events = state.controller.dispatch(action).await;
            let raised = state
                .panel
                .try_update(|p| p.apply_all(events))
                .unwrap_or_default();
            for id in raised {
                state.schedule_dismiss(id);
            }
        });
    }

    /// Toast raised by the view itself, e.g. a form left incomplete.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        if let Some(id) = self.panel.try_update(|p| p.toasts.push(kind, message)) {
            self.schedule_dismiss(id);
        }
    }

    /// Close button handler; the auto-dismiss timer goes through here too.
    pub fn dismiss_toast(&self, id: u64) {
        let started = self.panel.try_update(|p| p.toasts.dismiss(id)).unwrap_or(false);
        if !started {
            return;
        }
        let panel = self.panel;
        set_timeout(
            move || {
                panel.update(|p| {
                    p.toasts.finish_hide(id);
                });
                debug!(toast = id, "toast removed");
            },
            Duration::from_millis(self.config().toast_exit_ms),
        );
    }

    fn schedule_dismiss(&self, id: u64) {
        let state = self.clone();
        set_timeout(
            move || state.dismiss_toast(id),
            Duration::from_millis(self.config().toast_duration_ms),
        );
    }
}

pub fn provide_admin_state(config: PanelConfig) -> AdminState {
    let state = AdminState::new(config);
    provide_context(state.clone());
    state
}

pub fn use_admin_state() -> AdminState {
    expect_context::<AdminState>()
}
