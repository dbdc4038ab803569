//! Client-side section navigation with explicit history.

use crate::error::DashboardError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Dashboard,
    Orders,
    Products,
    Customers,
    Analytics,
    Settings,
}

impl Section {
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Orders => "orders",
            Section::Products => "products",
            Section::Customers => "customers",
            Section::Analytics => "analytics",
            Section::Settings => "settings",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, DashboardError> {
        match slug {
            "dashboard" => Ok(Section::Dashboard),
            "orders" => Ok(Section::Orders),
            "products" => Ok(Section::Products),
            "customers" => Ok(Section::Customers),
            "analytics" => Ok(Section::Analytics),
            "settings" => Ok(Section::Settings),
            other => Err(DashboardError::UnknownSection(other.to_string())),
        }
    }
}

/// Explicit navigation state owned by the host.
///
/// `navigate` pushes the previous section onto the history stack (the
/// hash-history pattern); `replace` swaps the current entry without
/// recording it; `back` pops.
#[derive(Debug, Default)]
pub struct Navigator {
    current: Section,
    history: Vec<Section>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn navigate(&mut self, section: Section) {
        if section == self.current {
            return;
        }
        self.history.push(self.current);
        self.current = section;
    }

    pub fn replace(&mut self, section: Section) {
        self.current = section;
    }

    pub fn back(&mut self) -> Option<Section> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trips() {
        for s in [
            Section::Dashboard,
            Section::Orders,
            Section::Products,
            Section::Customers,
            Section::Analytics,
            Section::Settings,
        ] {
            assert_eq!(Section::from_slug(s.slug()).unwrap(), s);
        }
        assert!(Section::from_slug("inventory").is_err());
    }

    #[test]
    fn navigate_then_back_restores_previous() {
        let mut nav = Navigator::new();
        nav.navigate(Section::Orders);
        nav.navigate(Section::Analytics);
        assert_eq!(nav.current(), Section::Analytics);
        assert_eq!(nav.back(), Some(Section::Orders));
        assert_eq!(nav.back(), Some(Section::Dashboard));
        assert_eq!(nav.back(), None);
    }

    #[test]
    fn navigating_to_the_current_section_records_nothing() {
        let mut nav = Navigator::new();
        nav.navigate(Section::Dashboard);
        assert_eq!(nav.back(), None);
    }

    #[test]
    fn replace_does_not_grow_history() {
        let mut nav = Navigator::new();
        nav.replace(Section::Settings);
        assert_eq!(nav.current(), Section::Settings);
        assert_eq!(nav.back(), None);
    }
}
