//! Headless dashboard walkthrough.
//!
//! Initializes the dashboard, simulates a 60 fps frame loop, pushes a
//! data refresh mid-run, and prints the recorded paint command counts.
//!
//! Run with `cargo run -p brio_dashboard --example dashboard`.

use brio_charts::DataPoint;
use brio_dashboard::{data, Dashboard, SALES_TREND_CHART};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut dash = Dashboard::init()?;

    for name in [
        SALES_TREND_CHART,
        brio_dashboard::CATEGORY_SALES_CHART,
        brio_dashboard::REVENUE_SHARE_CHART,
    ] {
        let commands = dash.charts.take_commands(name).unwrap_or_default();
        println!("{name}: {} paint commands on first frame", commands.len());
    }

    dash.navigate("analytics");
    dash.filter_by_range("30d");

    // Refresh the trend with a bumped series and let the transition run.
    let bumped: Vec<DataPoint> = data::weekly_sales()
        .into_iter()
        .map(|d| DataPoint::new(d.label, d.value * 1.15))
        .collect();
    dash.refresh_sales(bumped);

    let dt = 1.0 / 60.0;
    let mut frames = 0u32;
    while dash.charts.is_animating(SALES_TREND_CHART) || !dash.kpis.iter().all(|k| k.is_settled())
    {
        dash.tick(dt);
        frames += 1;
    }
    println!("settled after {frames} frames");

    for card in &dash.kpis {
        println!("{}: {}", card.label, card.display());
    }
    for toast in dash.toasts.active() {
        println!("[{}] {}", toast.kind.icon(), toast.message);
    }

    Ok(())
}
