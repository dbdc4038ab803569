//! brio_dashboard
//!
//! Admin dashboard shell built on `brio_charts`: mock data feeds, KPI
//! cards, toast notifications, section navigation, and a registry of
//! chart instances the host drives from its per-frame callback.
//!
//! Everything is explicit state owned by [`Dashboard`]; there are no
//! process-wide singletons and no timers. The host calls `tick(dt)` once
//! per frame and drains each chart's recorded paint commands.

pub mod data;
pub mod error;
pub mod kpi;
pub mod registry;
pub mod section;
pub mod toast;

pub use error::DashboardError;
pub use kpi::KpiCard;
pub use registry::{ChartKey, ChartRegistry};
pub use section::{Navigator, Section};
pub use toast::{Toast, ToastId, ToastKind, ToastQueue};

use brio_charts::format::format_currency;
use brio_charts::{ChartKind, ChartSpec, DataPoint};

use crate::data::{Analytics, Customer, Order, Product};

/// Chart names used by [`Dashboard::init`].
pub const SALES_TREND_CHART: &str = "sales-trend";
pub const CATEGORY_SALES_CHART: &str = "category-sales";
pub const REVENUE_SHARE_CHART: &str = "revenue-share";

/// Duration of a data-refresh transition, in seconds.
const DATA_TRANSITION_SECONDS: f32 = 1.0;

/// The whole dashboard state: fixtures, KPI counters, toasts, navigation
/// and chart surfaces.
pub struct Dashboard {
    pub navigator: Navigator,
    pub toasts: ToastQueue,
    pub kpis: Vec<KpiCard>,
    pub charts: ChartRegistry,
    orders: Vec<Order>,
    products: Vec<Product>,
    customers: Vec<Customer>,
    analytics: Analytics,
}

impl Dashboard {
    /// Load the mock feeds and register the three standard charts, each
    /// painted once so the first frame is never blank.
    pub fn init() -> anyhow::Result<Self> {
        let analytics = data::analytics();
        let mut charts = ChartRegistry::new();

        charts.insert(
            SALES_TREND_CHART,
            ChartSpec::new(ChartKind::Line, 600.0, 300.0, 40.0),
            data::weekly_sales(),
        )?;
        charts.insert(
            CATEGORY_SALES_CHART,
            ChartSpec::new(ChartKind::Bar, 400.0, 300.0, 40.0),
            data::category_sales(),
        )?;
        charts.insert(
            REVENUE_SHARE_CHART,
            ChartSpec::new(ChartKind::Donut, 300.0, 300.0, 0.0)
                .with_center_label(format_currency(analytics.revenue), "Revenue"),
            data::revenue_by_category(),
        )?;

        tracing::info!(charts = charts.len(), "dashboard initialized");

        Ok(Self {
            navigator: Navigator::new(),
            toasts: ToastQueue::new(),
            kpis: kpi::cards_for(&analytics),
            charts,
            orders: data::orders(),
            products: data::products(),
            customers: data::customers(),
            analytics,
        })
    }

    /// Per-frame advance for every animated piece of state.
    pub fn tick(&mut self, dt_seconds: f32) {
        for card in &mut self.kpis {
            card.tick(dt_seconds);
        }
        self.toasts.tick(dt_seconds);
        self.charts.tick(dt_seconds);
    }

    /// Switch sections by slug. An unknown slug surfaces as an error
    /// toast and leaves the current section unchanged.
    pub fn navigate(&mut self, slug: &str) -> Section {
        match Section::from_slug(slug) {
            Ok(section) => self.navigator.navigate(section),
            Err(err) => {
                tracing::warn!(slug, "navigation rejected");
                self.toasts.push(err.to_string(), ToastKind::Error);
            }
        }
        self.navigator.current()
    }

    /// Push refreshed sales data to the trend chart, animated over one
    /// second. Validation failures surface as error toasts.
    pub fn refresh_sales(&mut self, new_data: Vec<DataPoint>) {
        match self
            .charts
            .update_data(SALES_TREND_CHART, new_data, DATA_TRANSITION_SECONDS)
        {
            Ok(_) => {}
            Err(err) => {
                self.toasts.push(err.to_string(), ToastKind::Error);
            }
        }
    }

    /// Quick action: acknowledge a date-range filter.
    pub fn filter_by_range(&mut self, range: &str) {
        self.toasts
            .push(format!("Data filtered for {range}"), ToastKind::Success);
    }

    /// Quick action: open an order's detail view.
    pub fn view_order(&mut self, order_id: &str) -> Option<Order> {
        let order = self.orders.iter().find(|o| o.id == order_id).cloned();
        match &order {
            Some(o) => {
                self.toasts
                    .push(format!("Viewing order: {}", o.id), ToastKind::Info);
            }
            None => {
                self.toasts
                    .push(format!("Order not found: {order_id}"), ToastKind::Warning);
            }
        }
        order
    }

    /// Viewport resize: synchronously repaint every chart at its new
    /// measured size.
    pub fn resize(&mut self, measure: impl FnMut(&str) -> Option<(f32, f32)>) {
        self.charts.resize_all(measure);
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }
}
