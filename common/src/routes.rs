//! 画面パスとサイドバー項目

/// 画面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    UnderReview,
    Evaluation,
    Approved,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::UnderReview => "/under-review",
            Route::Evaluation => "/evaluation",
            Route::Approved => "/approved",
        }
    }

    /// パスから画面を解決（クエリ・フラグメント・末尾スラッシュは無視、未知は Home）
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        match path {
            "/under-review" => Route::UnderReview,
            "/evaluation" => Route::Evaluation,
            "/approved" => Route::Approved,
            _ => Route::Home,
        }
    }
}

/// サイドバーの1項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

pub const SIDEBAR_ITEMS: [NavItem; 3] = [
    NavItem { label: "Home", icon: "👥", route: Route::Home },
    NavItem { label: "Under Review", icon: "📄", route: Route::UnderReview },
    NavItem { label: "Approved", icon: "✅", route: Route::Approved },
];
