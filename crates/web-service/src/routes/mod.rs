//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出控制台的所有页面路由。
//!
//! 路由只有两种结果（参考 [`Route`]）：
//! - 已注册的路径：显示对应的页面
//! - 其他任何路径（包括 `/`）：重定向到默认页面 [`DEFAULT_VIEW_PATH`]

use crate::AppState;
use api_client::BackendApi;
use axum::http::Uri;
use axum::response::Redirect;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tracing::debug;

pub mod codes;
pub mod members;
pub mod projects;

/// 默认页面：项目列表
pub const DEFAULT_VIEW_PATH: &str = "/project/list";

/// 控制台页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewName {
    ProjectList,
    MemberList,
    CommonCodeList,
}

impl ViewName {
    /// 所有已注册的页面
    pub const ALL: [ViewName; 3] = [ViewName::ProjectList, ViewName::MemberList, ViewName::CommonCodeList];

    pub fn path(self) -> &'static str {
        match self {
            ViewName::ProjectList => "/project/list",
            ViewName::MemberList => "/member/list",
            ViewName::CommonCodeList => "/common/codes",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewName::ProjectList => "ProjectList",
            ViewName::MemberList => "MemberList",
            ViewName::CommonCodeList => "CommonCodeList",
        }
    }
}

/// 路径匹配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    View(ViewName),
    Redirect(&'static str),
}

impl Route {
    /// 根据路径匹配页面，结尾的 `/` 会被忽略
    pub fn resolve(path: &str) -> Route {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        ViewName::ALL
            .into_iter()
            .find(|view| view.path() == path)
            .map(Route::View)
            .unwrap_or(Route::Redirect(DEFAULT_VIEW_PATH))
    }
}

fn view_route<A: BackendApi>(view: ViewName) -> MethodRouter<AppState<A>> {
    match view {
        ViewName::ProjectList => get(projects::project_list::<A>),
        ViewName::MemberList => get(members::member_list::<A>),
        ViewName::CommonCodeList => get(codes::common_code_list::<A>),
    }
}

/// 未注册路径的处理：重定向到匹配的页面，匹配不到时回到默认页面
///
/// 匹配到页面时保留查询参数，回到默认页面时丢弃查询参数。
async fn redirect_fallback(uri: Uri) -> Redirect {
    let target = match (Route::resolve(uri.path()), uri.query()) {
        (Route::View(view), Some(query)) => format!("{}?{}", view.path(), query),
        (Route::View(view), None) => view.path().to_string(),
        (Route::Redirect(target), _) => target.to_string(),
    };
    debug!("↪️ 重定向 {} -> {}", uri, target);
    Redirect::to(&target)
}

/// 创建控制台的路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。
pub fn create_app_router<A: BackendApi>(state: AppState<A>) -> Router {
    ViewName::ALL
        .into_iter()
        .fold(Router::new(), |router, view| router.route(view.path(), view_route::<A>(view)))
        .fallback(redirect_fallback)
        .with_state(state)
}
