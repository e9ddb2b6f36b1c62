use contracts::domain::a001_merchant::MerchantId;
use contracts::domain::common::AggregateId;

/// Pages of the console, one per path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Dashboard,
    Merchants,
    MerchantDetails(MerchantId),
}

impl AppRoute {
    /// Unknown paths fall back to the dashboard
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::Login;
        }

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["dashboard"] => Self::Dashboard,
            ["merchants"] => Self::Merchants,
            ["merchants", id] => MerchantId::from_string(id)
                .map(Self::MerchantDetails)
                .unwrap_or(Self::Merchants),
            _ => Self::Dashboard,
        }
    }

    /// Route whose canonical path should replace `path` in the address
    /// bar, `None` when `path` already is canonical
    pub fn redirect_for(path: &str) -> Option<Self> {
        let route = Self::from_path(path);
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        (normalized != route.path()).then_some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Merchants => "/merchants".to_string(),
            Self::MerchantDetails(id) => format!("/merchants/{}", id),
        }
    }

    /// Everything except the login page needs a session
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Detail opens as a modal over the list
    pub fn shows_merchant_list(&self) -> bool {
        matches!(self, Self::Merchants | Self::MerchantDetails(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path(""), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/merchants/"), AppRoute::Merchants);
        assert_eq!(
            AppRoute::from_path("/merchants/m_1001"),
            AppRoute::MerchantDetails(MerchantId::new("m_1001"))
        );
    }

    #[test]
    fn test_unknown_paths_go_to_dashboard() {
        assert_eq!(AppRoute::from_path("/settings"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/merchants/a/b"), AppRoute::Dashboard);
    }

    #[test]
    fn test_redirect_only_for_unknown_paths() {
        assert_eq!(AppRoute::redirect_for("/settings"), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::redirect_for("/merchants/a/b"), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::redirect_for("/"), None);
        assert_eq!(AppRoute::redirect_for("/dashboard"), None);
        assert_eq!(AppRoute::redirect_for("/merchants/"), None);
        assert_eq!(AppRoute::redirect_for("/merchants/m_1001"), None);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            AppRoute::Login,
            AppRoute::Dashboard,
            AppRoute::Merchants,
            AppRoute::MerchantDetails(MerchantId::new("m_7")),
        ] {
            assert_eq!(AppRoute::from_path(&route.path()), route);
        }
        assert!(!AppRoute::Login.is_protected());
        assert!(AppRoute::MerchantDetails(MerchantId::new("x")).shows_merchant_list());
    }
}
