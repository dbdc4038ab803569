//! KPI cards with animated counters.

use brio_charts::format::format_number;
use brio_charts::CounterAnimation;

use crate::data::Analytics;

#[derive(Clone, Debug)]
pub struct KpiCard {
    pub label: &'static str,
    target: f32,
    counter: CounterAnimation,
}

impl KpiCard {
    pub fn new(label: &'static str, target: f32, duration_seconds: f32) -> Self {
        Self {
            label,
            target,
            counter: CounterAnimation::new(0.0, target, duration_seconds),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.counter.step(dt);
    }

    /// The abbreviated display value at the current animation progress.
    pub fn display(&self) -> String {
        format_number(self.counter.value())
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.counter.is_finished()
    }
}

/// The four dashboard cards, each with its own count-up duration.
pub fn cards_for(analytics: &Analytics) -> Vec<KpiCard> {
    vec![
        KpiCard::new("Total Revenue", analytics.revenue, 1.0),
        KpiCard::new("Orders", analytics.orders, 0.8),
        KpiCard::new("Customers", analytics.customers, 1.2),
        KpiCard::new("Products", analytics.products, 0.6),
    ]
}
