//! Hard-coded mock data standing in for a real feed.
//!
//! Each loader returns its fixture synchronously; the latency constants
//! describe the delay a real feed would introduce, for hosts that want to
//! stage the loads.

use brio_charts::DataPoint;

/// Simulated feed latencies in milliseconds.
pub const ORDERS_LATENCY_MS: u64 = 500;
pub const PRODUCTS_LATENCY_MS: u64 = 300;
pub const CUSTOMERS_LATENCY_MS: u64 = 200;
pub const ANALYTICS_LATENCY_MS: u64 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
    Pending,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Pending => "pending",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub product: &'static str,
    pub amount: f32,
    pub status: OrderStatus,
    pub date: &'static str,
}

#[derive(Clone, Debug)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f32,
    pub stock: u32,
    pub sold: u32,
    pub category: &'static str,
}

#[derive(Clone, Debug)]
pub struct Customer {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub orders: u32,
}

/// One analytics snapshot: the four KPI totals.
#[derive(Clone, Debug)]
pub struct Analytics {
    pub revenue: f32,
    pub orders: f32,
    pub customers: f32,
    pub products: f32,
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001",
            customer: "John Doe",
            product: "Wireless Headphones",
            amount: 299.99,
            status: OrderStatus::Completed,
            date: "2024-01-15",
        },
        Order {
            id: "ORD-002",
            customer: "Jane Smith",
            product: "Smart Watch",
            amount: 399.99,
            status: OrderStatus::Pending,
            date: "2024-01-14",
        },
        Order {
            id: "ORD-003",
            customer: "Mike Johnson",
            product: "Laptop Stand",
            amount: 79.99,
            status: OrderStatus::Completed,
            date: "2024-01-13",
        },
        Order {
            id: "ORD-004",
            customer: "Sarah Wilson",
            product: "Wireless Mouse",
            amount: 49.99,
            status: OrderStatus::Cancelled,
            date: "2024-01-12",
        },
        Order {
            id: "ORD-005",
            customer: "David Brown",
            product: "USB-C Hub",
            amount: 89.99,
            status: OrderStatus::Pending,
            date: "2024-01-11",
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "PROD-001",
            name: "Wireless Headphones",
            price: 299.99,
            stock: 45,
            sold: 156,
            category: "Electronics",
        },
        Product {
            id: "PROD-002",
            name: "Smart Watch",
            price: 399.99,
            stock: 23,
            sold: 124,
            category: "Wearables",
        },
        Product {
            id: "PROD-003",
            name: "Laptop Stand",
            price: 79.99,
            stock: 67,
            sold: 89,
            category: "Accessories",
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "CUST-001",
            name: "John Doe",
            email: "john@example.com",
            orders: 5,
        },
        Customer {
            id: "CUST-002",
            name: "Jane Smith",
            email: "jane@example.com",
            orders: 3,
        },
        Customer {
            id: "CUST-003",
            name: "Mike Johnson",
            email: "mike@example.com",
            orders: 7,
        },
    ]
}

pub fn analytics() -> Analytics {
    Analytics {
        revenue: 124_567.0,
        orders: 1_234.0,
        customers: 5_678.0,
        products: 2_456.0,
    }
}

/// Daily sales for the trend line chart.
pub fn weekly_sales() -> Vec<DataPoint> {
    [
        ("Mon", 12_000.0),
        ("Tue", 15_000.0),
        ("Wed", 18_000.0),
        ("Thu", 14_000.0),
        ("Fri", 22_000.0),
        ("Sat", 19_000.0),
        ("Sun", 25_000.0),
    ]
    .into_iter()
    .map(|(label, value)| DataPoint::new(label, value))
    .collect()
}

/// Units sold per category, for the comparison bar chart.
pub fn category_sales() -> Vec<DataPoint> {
    products()
        .into_iter()
        .map(|p| DataPoint::new(p.category, p.sold as f32))
        .collect()
}

/// Revenue share per category, for the donut chart.
pub fn revenue_by_category() -> Vec<DataPoint> {
    products()
        .into_iter()
        .map(|p| DataPoint::new(p.category, p.price * p.sold as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_non_empty() {
        assert_eq!(orders().len(), 5);
        assert_eq!(products().len(), 3);
        assert_eq!(customers().len(), 3);
        assert_eq!(weekly_sales().len(), 7);
    }

    #[test]
    fn category_series_align_with_products() {
        let bars = category_sales();
        let slices = revenue_by_category();
        assert_eq!(bars.len(), slices.len());
        assert_eq!(bars[0].label, "Electronics");
        assert!(slices.iter().all(|d| d.value > 0.0));
    }
}
