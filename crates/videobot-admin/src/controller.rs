//! Admin panel controller
//!
//! Turns an [`Action`] into the [`PanelEvent`]s that describe what changed.
//! Every failure is caught here, logged, and reported as an error toast;
//! nothing is retried and nothing propagates to the caller.

use chrono::{Duration, Utc};
use tracing::{error, info};

use crate::api::{AdminApi, ProductUpload};
use crate::charts::ChartSpec;
use crate::config::PanelConfig;
use crate::error::{ApiClientError, ApiResult};
use crate::state::ToastKind;
use crate::types::*;

/// One named view of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Products,
    Sales,
    Downloads,
    Users,
    Settings,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Dashboard,
        Self::Products,
        Self::Sales,
        Self::Downloads,
        Self::Users,
        Self::Settings,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::Sales => "sales",
            Self::Downloads => "downloads",
            Self::Users => "users",
            Self::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Sales => "Sales",
            Self::Downloads => "Downloads",
            Self::Users => "Users",
            Self::Settings => "Settings",
        }
    }
}

/// Something the user asked for.
#[derive(Debug, Clone)]
pub enum Action {
    LoadDashboard,
    LoadProducts,
    LoadSales { period_days: u32 },
    LoadDownloads,
    LoadUsers,
    LoadSettings,
    RefreshDashboard,
    AddProduct(ProductUpload),
    ToggleProduct { id: i64, active: bool },
    DeleteProduct(i64),
    CleanupExpiredDownloads,
    SendExpiryWarnings,
    SaveSettings(SettingsForm),
    SearchUsers(String),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadDashboard => "load_dashboard",
            Self::LoadProducts => "load_products",
            Self::LoadSales { .. } => "load_sales",
            Self::LoadDownloads => "load_downloads",
            Self::LoadUsers => "load_users",
            Self::LoadSettings => "load_settings",
            Self::RefreshDashboard => "refresh_dashboard",
            Self::AddProduct(_) => "add_product",
            Self::ToggleProduct { .. } => "toggle_product",
            Self::DeleteProduct(_) => "delete_product",
            Self::CleanupExpiredDownloads => "cleanup_expired_downloads",
            Self::SendExpiryWarnings => "send_expiry_warnings",
            Self::SaveSettings(_) => "save_settings",
            Self::SearchUsers(_) => "search_users",
        }
    }
}

/// A change to apply to the panel state.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    StatsLoaded(StatCounters),
    ChartRendered(ChartSpec),
    ActivityLoaded(Vec<ActivityEntry>),
    ProductsLoaded(Vec<Product>),
    ProductAdded,
    SalesLoaded(SalesSummary),
    DeliveryLoaded(DeliveryReport),
    UsersLoaded(Vec<UserRow>),
    UserFilterChanged(String),
    SettingsLoaded(SettingsForm),
    SettingsSaved(SettingsForm),
    Notify(ToastKind, String),
}

/// Owns the API client and runs actions against it.
pub struct AdminPanel<A> {
    api: A,
    config: PanelConfig,
}

impl<A: AdminApi> AdminPanel<A> {
    pub fn new(api: A, config: PanelConfig) -> Self {
        Self { api, config }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub async fn dispatch(&self, action: Action) -> Vec<PanelEvent> {
        info!(action = action.name(), "dispatch");
        let mut events = Vec::new();
        match action {
            Action::LoadDashboard => self.load_dashboard(&mut events).await,
            Action::LoadProducts => self.load_products(&mut events).await,
            Action::LoadSales { period_days } => self.load_sales(period_days, &mut events),
            Action::LoadDownloads => self.load_downloads(&mut events).await,
            Action::LoadUsers => self.load_users(&mut events),
            Action::LoadSettings => {
                events.push(PanelEvent::SettingsLoaded(self.config.default_settings()))
            }
            Action::RefreshDashboard => {
                self.load_dashboard(&mut events).await;
                notify(&mut events, ToastKind::Success, "Dashboard updated!");
            }
            Action::AddProduct(upload) => self.add_product(&upload, &mut events).await,
            Action::ToggleProduct { id, active } => {
                let result = self.api.update_product(id, &ProductPatch::active(active)).await;
                self.after_product_change("toggle_product", result, "Failed to update product", &mut events)
                    .await
            }
            Action::DeleteProduct(id) => {
                let result = self.api.delete_product(id).await;
                self.after_product_change("delete_product", result, "Failed to delete product", &mut events)
                    .await
            }
            Action::CleanupExpiredDownloads => self.cleanup_expired(&mut events).await,
            Action::SendExpiryWarnings => match accept(self.api.send_expiry_warnings().await) {
                Ok(env) => {
                    let message = env.user_message().unwrap_or("Expiry warnings sent").to_string();
                    notify(&mut events, ToastKind::Success, message);
                }
                Err(err) => fail(&mut events, "send_expiry_warnings", &err, "Failed to send warnings"),
            },
            Action::SaveSettings(form) => save_settings(form, &mut events),
            Action::SearchUsers(query) => {
                info!(query = %query, "searching users");
                events.push(PanelEvent::UserFilterChanged(query));
            }
        }
        events
    }

    async fn load_dashboard(&self, events: &mut Vec<PanelEvent>) {
        match self.api.stats().await {
            Ok(env) if env.is_success() => {
                events.push(PanelEvent::StatsLoaded(StatCounters::from(&env.body.stats)));
            }
            Ok(env) => {
                // Counters keep their previous values; charts still render.
                let err = ApiClientError::Rejected(env.user_message().unwrap_or_default().to_string());
                fail(events, "load_dashboard", &err, "Failed to load dashboard data");
            }
            Err(err) => {
                fail(events, "load_dashboard", &err, "Failed to load dashboard data");
                return;
            }
        }

        events.push(PanelEvent::ChartRendered(ChartSpec::weekly_sales()));
        events.push(PanelEvent::ChartRendered(ChartSpec::product_share()));
        events.push(PanelEvent::ActivityLoaded(recent_activity()));
    }

    async fn load_products(&self, events: &mut Vec<PanelEvent>) {
        match accept(self.api.products().await) {
            Ok(env) => events.push(PanelEvent::ProductsLoaded(env.body.products)),
            Err(err) => fail(events, "load_products", &err, "Failed to load products"),
        }
    }

    fn load_sales(&self, period_days: u32, events: &mut Vec<PanelEvent>) {
        // Placeholder figures until the backend exposes sales by period.
        let (sales, revenue) = (15, 750);
        events.push(PanelEvent::SalesLoaded(SalesSummary {
            period_days,
            sales,
            revenue,
            average: revenue / sales,
            transactions: Vec::new(),
        }));
    }

    async fn load_downloads(&self, events: &mut Vec<PanelEvent>) {
        match accept(self.api.delivery_stats(self.config.delivery_report_days).await) {
            Ok(env) => events.push(PanelEvent::DeliveryLoaded(env.body.data)),
            Err(err) => fail(events, "load_downloads", &err, "Failed to load downloads"),
        }
    }

    fn load_users(&self, events: &mut Vec<PanelEvent>) {
        // No users endpoint yet.
        events.push(PanelEvent::UsersLoaded(Vec::new()));
    }

    async fn add_product(&self, upload: &ProductUpload, events: &mut Vec<PanelEvent>) {
        match accept(self.api.create_product(upload).await) {
            Ok(_) => {
                notify(events, ToastKind::Success, "Product added successfully!");
                events.push(PanelEvent::ProductAdded);
                self.load_products(events).await;
            }
            Err(err) => fail(events, "add_product", &err, "Failed to add product"),
        }
    }

    async fn after_product_change(
        &self,
        action: &'static str,
        result: ApiResult<Envelope<Ack>>,
        fallback: &str,
        events: &mut Vec<PanelEvent>,
    ) {
        match accept(result) {
            Ok(env) => {
                let message = env.user_message().unwrap_or("Product updated").to_string();
                notify(events, ToastKind::Success, message);
                self.load_products(events).await;
            }
            Err(err) => fail(events, action, &err, fallback),
        }
    }

    async fn cleanup_expired(&self, events: &mut Vec<PanelEvent>) {
        match accept(self.api.cleanup_expired().await) {
            Ok(env) => {
                let message = env.user_message().unwrap_or("Expired downloads removed").to_string();
                notify(events, ToastKind::Success, message);
                self.load_downloads(events).await;
            }
            Err(err) => {
                error!(action = "cleanup_expired_downloads", error = %err, "action failed");
                notify(events, ToastKind::Error, "Cleanup failed");
            }
        }
    }
}

/// Treat a non-success envelope as an error.
fn accept<T>(result: ApiResult<Envelope<T>>) -> ApiResult<Envelope<T>> {
    let env = result?;
    if env.is_success() {
        Ok(env)
    } else {
        Err(ApiClientError::Rejected(
            env.user_message().unwrap_or_default().to_string(),
        ))
    }
}

fn notify(events: &mut Vec<PanelEvent>, kind: ToastKind, message: impl Into<String>) {
    events.push(PanelEvent::Notify(kind, message.into()));
}

fn fail(events: &mut Vec<PanelEvent>, action: &'static str, err: &ApiClientError, fallback: &str) {
    error!(action, error = %err, "action failed");
    let message = err.server_message().unwrap_or(fallback);
    notify(events, ToastKind::Error, message);
}

fn save_settings(form: SettingsForm, events: &mut Vec<PanelEvent>) {
    let positive = |raw: &str| raw.trim().parse::<u32>().map(|n| n > 0).unwrap_or(false);
    let problem = if !positive(&form.download_expiry) {
        Some("Download expiry must be a positive number of hours")
    } else if !positive(&form.max_downloads) {
        Some("Max downloads must be a positive number")
    } else {
        None
    };

    match problem {
        Some(message) => {
            let err = ApiClientError::Invalid(message.to_string());
            fail(events, "save_settings", &err, "Failed to save settings");
        }
        None => {
            // Nothing is persisted yet; the form simply becomes the current settings.
            events.push(PanelEvent::SettingsSaved(form));
            notify(events, ToastKind::Success, "Settings saved successfully!");
        }
    }
}

/// Placeholder feed until the backend reports events.
fn recent_activity() -> Vec<ActivityEntry> {
    let now = Utc::now();
    vec![
        ActivityEntry {
            kind: ActivityKind::Sale,
            message: "New sale: Product A for 50 Stars".to_string(),
            at: now - Duration::minutes(2),
        },
        ActivityEntry {
            kind: ActivityKind::Download,
            message: "Download completed: Product B".to_string(),
            at: now - Duration::minutes(5),
        },
        ActivityEntry {
            kind: ActivityKind::User,
            message: "New user registered: @usuario123".to_string(),
            at: now - Duration::minutes(10),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    fn ok<T>(body: T) -> ApiResult<Envelope<T>> {
        Ok(Envelope {
            status: Some("success".into()),
            message: None,
            error: None,
            body,
        })
    }

    fn ok_msg(message: &str) -> ApiResult<Envelope<Ack>> {
        Ok(Envelope {
            status: Some("success".into()),
            message: Some(message.into()),
            error: None,
            body: Ack::default(),
        })
    }

    fn rejected<T: Default>(error: &str) -> ApiResult<Envelope<T>> {
        Ok(Envelope {
            status: None,
            message: None,
            error: Some(error.into()),
            body: T::default(),
        })
    }

    fn offline<T>() -> ApiResult<Envelope<T>> {
        Err(ApiClientError::Network("failed to fetch".into()))
    }

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.into(),
            description: None,
            price_stars: 50,
            is_active: true,
            thumbnail_path: None,
            file_size: None,
            duration_seconds: None,
            created_at: None,
        }
    }

    struct MockApi {
        calls: RefCell<Vec<&'static str>>,
        stats: ApiResult<Envelope<StatsBody>>,
        products: ApiResult<Envelope<ProductsBody>>,
        create: ApiResult<Envelope<Ack>>,
        change: ApiResult<Envelope<Ack>>,
        delivery: ApiResult<Envelope<DeliveryBody>>,
        cleanup: ApiResult<Envelope<Ack>>,
        uploaded: RefCell<Option<ProductForm>>,
        patched: RefCell<Option<(i64, ProductPatch)>>,
        report_days: RefCell<Option<u32>>,
    }

    impl Default for MockApi {
        fn default() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                stats: ok(StatsBody::default()),
                products: ok(ProductsBody::default()),
                create: ok_msg("Produto criado com sucesso"),
                change: ok_msg("Produto atualizado com sucesso"),
                delivery: ok(DeliveryBody::default()),
                cleanup: ok_msg("3 downloads expirados removidos"),
                uploaded: RefCell::new(None),
                patched: RefCell::new(None),
                report_days: RefCell::new(None),
            }
        }
    }

    impl MockApi {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }

        fn record(&self, endpoint: &'static str) {
            self.calls.borrow_mut().push(endpoint);
        }
    }

    #[async_trait(?Send)]
    impl AdminApi for MockApi {
        async fn stats(&self) -> ApiResult<Envelope<StatsBody>> {
            self.record("GET /stats");
            self.stats.clone()
        }

        async fn products(&self) -> ApiResult<Envelope<ProductsBody>> {
            self.record("GET /products");
            self.products.clone()
        }

        async fn create_product(&self, upload: &ProductUpload) -> ApiResult<Envelope<Ack>> {
            self.record("POST /products");
            *self.uploaded.borrow_mut() = Some(upload.form.clone());
            self.create.clone()
        }

        async fn update_product(&self, id: i64, patch: &ProductPatch) -> ApiResult<Envelope<Ack>> {
            self.record("PUT /products/{id}");
            *self.patched.borrow_mut() = Some((id, patch.clone()));
            self.change.clone()
        }

        async fn delete_product(&self, _id: i64) -> ApiResult<Envelope<Ack>> {
            self.record("DELETE /products/{id}");
            self.change.clone()
        }

        async fn delivery_stats(&self, days: u32) -> ApiResult<Envelope<DeliveryBody>> {
            self.record("GET /delivery/stats");
            *self.report_days.borrow_mut() = Some(days);
            self.delivery.clone()
        }

        async fn cleanup_expired(&self) -> ApiResult<Envelope<Ack>> {
            self.record("POST /delivery/cleanup");
            self.cleanup.clone()
        }

        async fn send_expiry_warnings(&self) -> ApiResult<Envelope<Ack>> {
            self.record("POST /delivery/warnings");
            ok_msg("2 avisos enviados")
        }
    }

    fn panel(api: MockApi) -> AdminPanel<MockApi> {
        AdminPanel::new(api, PanelConfig::default())
    }

    fn toasts(events: &[PanelEvent]) -> Vec<(ToastKind, String)> {
        events
            .iter()
            .filter_map(|e| match e {
                PanelEvent::Notify(kind, message) => Some((*kind, message.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn section_names_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.name()), Some(section));
        }
        assert_eq!(Section::from_name("reports"), None);
        assert_eq!(Section::from_name("Dashboard"), None);
    }

    #[tokio::test]
    async fn dashboard_success_fills_counters_and_charts() {
        let api = MockApi {
            stats: ok(StatsBody {
                stats: Stats {
                    total_products: Some(3),
                    total_sales: Some(12),
                    total_revenue: None,
                    total_users: Some(40),
                },
            }),
            ..MockApi::default()
        };
        let panel = panel(api);
        let events = panel.dispatch(Action::LoadDashboard).await;

        assert_eq!(
            events[0],
            PanelEvent::StatsLoaded(StatCounters { products: 3, sales: 12, revenue: 0.0, users: 40 })
        );
        let charts: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                PanelEvent::ChartRendered(spec) => Some(spec.slot.name()),
                _ => None,
            })
            .collect();
        assert_eq!(charts, vec!["sales", "products"]);
        assert!(matches!(events.last(), Some(PanelEvent::ActivityLoaded(a)) if a.len() == 3));
        assert!(toasts(&events).is_empty());
        assert_eq!(panel.api.calls(), vec!["GET /stats"]);
    }

    #[tokio::test]
    async fn dashboard_network_failure_only_reports() {
        let panel = panel(MockApi { stats: offline(), ..MockApi::default() });
        let events = panel.dispatch(Action::LoadDashboard).await;
        assert_eq!(
            events,
            vec![PanelEvent::Notify(ToastKind::Error, "Failed to load dashboard data".into())]
        );
    }

    #[tokio::test]
    async fn dashboard_rejection_keeps_counters_but_draws_charts() {
        let panel = panel(MockApi { stats: rejected("Internal server error"), ..MockApi::default() });
        let events = panel.dispatch(Action::LoadDashboard).await;
        assert!(!events.iter().any(|e| matches!(e, PanelEvent::StatsLoaded(_))));
        assert!(events.iter().any(|e| matches!(e, PanelEvent::ChartRendered(_))));
        assert_eq!(
            toasts(&events),
            vec![(ToastKind::Error, "Internal server error".to_string())]
        );
    }

    #[tokio::test]
    async fn refresh_reloads_and_confirms() {
        let panel = panel(MockApi::default());
        let events = panel.dispatch(Action::RefreshDashboard).await;
        assert_eq!(panel.api.calls(), vec!["GET /stats"]);
        assert_eq!(toasts(&events), vec![(ToastKind::Success, "Dashboard updated!".to_string())]);
    }

    #[tokio::test]
    async fn products_loaded_or_reported() {
        let panel = panel(MockApi {
            products: ok(ProductsBody { products: vec![product(1, "Intro"), product(2, "Outro")] }),
            ..MockApi::default()
        });
        let events = panel.dispatch(Action::LoadProducts).await;
        assert!(matches!(&events[..], [PanelEvent::ProductsLoaded(p)] if p.len() == 2));

        let panel = super::AdminPanel::new(
            MockApi { products: offline(), ..MockApi::default() },
            PanelConfig::default(),
        );
        let events = panel.dispatch(Action::LoadProducts).await;
        assert_eq!(toasts(&events), vec![(ToastKind::Error, "Failed to load products".to_string())]);
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn products_rejection_shows_server_message() {
        let panel = panel(MockApi { products: rejected("database is locked"), ..MockApi::default() });
        let events = panel.dispatch(Action::LoadProducts).await;
        assert_eq!(
            events,
            vec![PanelEvent::Notify(ToastKind::Error, "database is locked".into())]
        );
    }

    #[tokio::test]
    async fn simulated_sections_make_no_requests() {
        let panel = panel(MockApi::default());

        let events = panel.dispatch(Action::LoadSales { period_days: 30 }).await;
        match &events[..] {
            [PanelEvent::SalesLoaded(summary)] => {
                assert_eq!(summary.period_days, 30);
                assert_eq!((summary.sales, summary.revenue, summary.average), (15, 750, 50));
                assert!(summary.transactions.is_empty());
            }
            other => panic!("unexpected events: {other:?}"),
        }

        let events = panel.dispatch(Action::LoadUsers).await;
        assert_eq!(events, vec![PanelEvent::UsersLoaded(Vec::new())]);

        let events = panel.dispatch(Action::LoadSettings).await;
        match &events[..] {
            [PanelEvent::SettingsLoaded(form)] => {
                assert_eq!(form.download_expiry, "24");
                assert_eq!(form.max_downloads, "3");
            }
            other => panic!("unexpected events: {other:?}"),
        }

        assert!(panel.api.calls().is_empty());
    }

    #[tokio::test]
    async fn downloads_use_configured_report_window() {
        let config = PanelConfig { delivery_report_days: 30, ..PanelConfig::default() };
        let panel = AdminPanel::new(MockApi::default(), config);
        let events = panel.dispatch(Action::LoadDownloads).await;
        assert!(matches!(&events[..], [PanelEvent::DeliveryLoaded(_)]));
        assert_eq!(*panel.api.report_days.borrow(), Some(30));
    }

    #[tokio::test]
    async fn downloads_failure_reports_and_keeps_report() {
        let mut state = crate::state::PanelState::new(&PanelConfig::default());
        let report = DeliveryReport { period_days: Some(7), ..DeliveryReport::default() };
        state.apply(PanelEvent::DeliveryLoaded(report.clone()));

        for (api, expected) in [
            (MockApi { delivery: offline(), ..MockApi::default() }, "Failed to load downloads"),
            (MockApi { delivery: rejected("Internal server error"), ..MockApi::default() }, "Internal server error"),
        ] {
            let panel = panel(api);
            let events = panel.dispatch(Action::LoadDownloads).await;
            assert!(!events.iter().any(|e| matches!(e, PanelEvent::DeliveryLoaded(_))));
            assert_eq!(toasts(&events), vec![(ToastKind::Error, expected.to_string())]);
            assert_eq!(events.len(), 1);

            state.apply_all(events);
            assert_eq!(state.delivery.as_ref(), Some(&report));
        }
    }

    #[tokio::test]
    async fn add_product_success_clears_and_reloads() {
        let panel = panel(MockApi::default());
        let form = ProductForm {
            name: "Intro".into(),
            price_stars: "50".into(),
            description: "First video".into(),
        };
        let events = panel.dispatch(Action::AddProduct(ProductUpload::new(form.clone()))).await;

        assert_eq!(panel.api.calls(), vec!["POST /products", "GET /products"]);
        assert_eq!(panel.api.uploaded.borrow().as_ref(), Some(&form));
        assert_eq!(events[0], PanelEvent::Notify(ToastKind::Success, "Product added successfully!".into()));
        assert_eq!(events[1], PanelEvent::ProductAdded);
        assert!(matches!(events[2], PanelEvent::ProductsLoaded(_)));
    }

    #[tokio::test]
    async fn add_product_failure_shows_server_message() {
        let panel = panel(MockApi {
            create: rejected("Arquivo de vídeo é obrigatório"),
            ..MockApi::default()
        });
        let events = panel
            .dispatch(Action::AddProduct(ProductUpload::new(ProductForm::default())))
            .await;
        assert_eq!(
            events,
            vec![PanelEvent::Notify(ToastKind::Error, "Arquivo de vídeo é obrigatório".into())]
        );
        assert_eq!(panel.api.calls(), vec!["POST /products"]);
    }

    #[tokio::test]
    async fn add_product_exception_uses_fallback() {
        let panel = panel(MockApi { create: offline(), ..MockApi::default() });
        let events = panel
            .dispatch(Action::AddProduct(ProductUpload::new(ProductForm::default())))
            .await;
        assert_eq!(toasts(&events), vec![(ToastKind::Error, "Failed to add product".to_string())]);
    }

    #[tokio::test]
    async fn cleanup_reports_server_message_then_reloads() {
        let panel = panel(MockApi::default());
        let events = panel.dispatch(Action::CleanupExpiredDownloads).await;
        assert_eq!(panel.api.calls(), vec!["POST /delivery/cleanup", "GET /delivery/stats"]);
        assert_eq!(
            toasts(&events),
            vec![(ToastKind::Success, "3 downloads expirados removidos".to_string())]
        );

        let panel = super::AdminPanel::new(
            MockApi { cleanup: rejected("Internal server error"), ..MockApi::default() },
            PanelConfig::default(),
        );
        let events = panel.dispatch(Action::CleanupExpiredDownloads).await;
        assert_eq!(events, vec![PanelEvent::Notify(ToastKind::Error, "Cleanup failed".into())]);
        assert_eq!(panel.api.calls(), vec!["POST /delivery/cleanup"]);
    }

    #[tokio::test]
    async fn cleanup_success_then_failed_reload_shows_both_toasts() {
        let panel = panel(MockApi { delivery: offline(), ..MockApi::default() });
        let events = panel.dispatch(Action::CleanupExpiredDownloads).await;
        assert_eq!(panel.api.calls(), vec!["POST /delivery/cleanup", "GET /delivery/stats"]);
        assert_eq!(
            toasts(&events),
            vec![
                (ToastKind::Success, "3 downloads expirados removidos".to_string()),
                (ToastKind::Error, "Failed to load downloads".to_string()),
            ]
        );
        assert!(!events.iter().any(|e| matches!(e, PanelEvent::DeliveryLoaded(_))));
    }

    #[tokio::test]
    async fn toggle_product_sends_patch_and_reloads() {
        let panel = panel(MockApi::default());
        let events = panel.dispatch(Action::ToggleProduct { id: 7, active: false }).await;
        assert_eq!(*panel.api.patched.borrow(), Some((7, ProductPatch::active(false))));
        assert_eq!(panel.api.calls(), vec!["PUT /products/{id}", "GET /products"]);
        assert_eq!(
            toasts(&events),
            vec![(ToastKind::Success, "Produto atualizado com sucesso".to_string())]
        );
    }

    #[tokio::test]
    async fn delete_missing_product_reports_not_found() {
        let panel = panel(MockApi { change: rejected("Produto não encontrado"), ..MockApi::default() });
        let events = panel.dispatch(Action::DeleteProduct(99)).await;
        assert_eq!(events, vec![PanelEvent::Notify(ToastKind::Error, "Produto não encontrado".into())]);
    }

    #[tokio::test]
    async fn expiry_warnings_report_count() {
        let panel = panel(MockApi::default());
        let events = panel.dispatch(Action::SendExpiryWarnings).await;
        assert_eq!(toasts(&events), vec![(ToastKind::Success, "2 avisos enviados".to_string())]);
    }

    #[tokio::test]
    async fn settings_are_validated_not_persisted() {
        let panel = panel(MockApi::default());
        let good = SettingsForm {
            download_expiry: "48".into(),
            max_downloads: "5".into(),
            bot_token: "123:abc".into(),
            webhook_url: "https://shop.example".into(),
        };
        let events = panel.dispatch(Action::SaveSettings(good.clone())).await;
        assert_eq!(events[0], PanelEvent::SettingsSaved(good.clone()));
        assert_eq!(toasts(&events), vec![(ToastKind::Success, "Settings saved successfully!".to_string())]);

        let bad = SettingsForm { max_downloads: "0".into(), ..good };
        let events = panel.dispatch(Action::SaveSettings(bad)).await;
        assert_eq!(
            events,
            vec![PanelEvent::Notify(ToastKind::Error, "Max downloads must be a positive number".into())]
        );
        assert!(panel.api.calls().is_empty());
    }

    #[tokio::test]
    async fn search_only_filters() {
        let panel = panel(MockApi::default());
        let events = panel.dispatch(Action::SearchUsers("ana".into())).await;
        assert_eq!(events, vec![PanelEvent::UserFilterChanged("ana".into())]);
    }
}
